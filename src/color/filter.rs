//! Per-channel range filters defining bucket membership

use std::fmt;

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::constants::{CHANNEL_MAX, CHANNEL_MIN};
use crate::{AnalysisError, Result};

/// Color bucket a pixel can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Red,
    Green,
    Blue,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Red, Bucket::Green, Bucket::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Bucket::Red => "red",
            Bucket::Green => "green",
            Bucket::Blue => "blue",
        }
    }

    /// Position of the bucket's own channel in an RGB triple
    pub fn channel_index(self) -> usize {
        match self {
            Bucket::Red => 0,
            Bucket::Green => 1,
            Bucket::Blue => 2,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive `[min, max]` range over one 8-bit channel.
///
/// `min <= max` always holds; deserializing an inverted range fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawChannelRange", into = "RawChannelRange")]
pub struct ChannelRange {
    min: u8,
    max: u8,
}

#[derive(Serialize, Deserialize)]
struct RawChannelRange {
    min: u8,
    max: u8,
}

impl TryFrom<RawChannelRange> for ChannelRange {
    type Error = AnalysisError;

    fn try_from(raw: RawChannelRange) -> Result<Self> {
        ChannelRange::new(raw.min, raw.max)
    }
}

impl From<ChannelRange> for RawChannelRange {
    fn from(range: ChannelRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}

impl ChannelRange {
    /// The whole channel domain
    pub const FULL: ChannelRange = ChannelRange {
        min: CHANNEL_MIN,
        max: CHANNEL_MAX,
    };

    pub fn new(min: u8, max: u8) -> Result<Self> {
        if min > max {
            return Err(AnalysisError::InvalidRange { lower: min, upper: max });
        }
        Ok(Self { min, max })
    }

    /// `[min, 255]`
    pub const fn at_least(min: u8) -> Self {
        Self { min, max: CHANNEL_MAX }
    }

    /// `[0, max]`
    pub const fn at_most(max: u8) -> Self {
        Self { min: CHANNEL_MIN, max }
    }

    pub fn min(self) -> u8 {
        self.min
    }

    pub fn max(self) -> u8 {
        self.max
    }

    #[inline]
    pub fn contains(self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }
}

/// One range per channel; a pixel matches when every channel is in range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFilter {
    pub red: ChannelRange,
    pub green: ChannelRange,
    pub blue: ChannelRange,
}

impl ColorFilter {
    pub fn new(red: ChannelRange, green: ChannelRange, blue: ChannelRange) -> Self {
        Self { red, green, blue }
    }

    /// Filter for `bucket` where its own channel is `>= split` and the two
    /// others are `<= split`.
    pub fn dominant(bucket: Bucket, split: u8) -> Self {
        let mut ranges = [ChannelRange::at_most(split); 3];
        ranges[bucket.channel_index()] = ChannelRange::at_least(split);
        Self::new(ranges[0], ranges[1], ranges[2])
    }

    #[inline]
    pub fn matches(&self, pixel: &Rgb<u8>) -> bool {
        let [r, g, b] = pixel.0;
        self.red.contains(r) && self.green.contains(g) && self.blue.contains(b)
    }
}

/// A color filter labelled with the bucket it feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketFilter {
    pub bucket: Bucket,
    pub filter: ColorFilter,
}

impl BucketFilter {
    pub fn new(bucket: Bucket, filter: ColorFilter) -> Self {
        Self { bucket, filter }
    }
}
