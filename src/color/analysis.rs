//! Bucket counting and percentage computation
//!
//! Scans every pixel of a decoded image once, classifies it and reports the
//! share of each bucket over the total pixel count. Unclassified pixels
//! (near-black, white, mixed hues) count toward the total only, so the three
//! percentages usually sum to less than 100.
//!
//! Large images are split into rows scanned by rayon workers. Row counts are
//! combined by integer addition, so the parallel result is identical to the
//! sequential one.

use image::RgbImage;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::classifier::PixelClassifier;
use super::filter::Bucket;
use crate::config::AnalysisConfig;
use crate::{AnalysisError, Result};

/// Share of each bucket in an image, in percent (0.0-100.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPercentages {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl ColorPercentages {
    /// Sum of the three buckets
    pub fn classified(&self) -> f32 {
        self.red + self.green + self.blue
    }
}

/// Raw pixel counts per bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub red: u64,
    pub green: u64,
    pub blue: u64,
    /// Every pixel scanned, classified or not
    pub total: u64,
}

impl BucketCounts {
    #[inline]
    fn record(&mut self, bucket: Option<Bucket>) {
        match bucket {
            Some(Bucket::Red) => self.red += 1,
            Some(Bucket::Green) => self.green += 1,
            Some(Bucket::Blue) => self.blue += 1,
            None => {}
        }
        self.total += 1;
    }

    fn merge(self, other: Self) -> Self {
        Self {
            red: self.red + other.red,
            green: self.green + other.green,
            blue: self.blue + other.blue,
            total: self.total + other.total,
        }
    }

    /// Pixels that matched no filter
    pub fn unclassified(&self) -> u64 {
        self.total - self.red - self.green - self.blue
    }

    /// Convert to percentages of `total`; all zero when nothing was counted
    pub fn percentages(&self) -> ColorPercentages {
        let share = |count: u64| {
            if self.total == 0 {
                0.0
            } else {
                (count as f64 / self.total as f64 * 100.0) as f32
            }
        };

        ColorPercentages {
            red: share(self.red),
            green: share(self.green),
            blue: share(self.blue),
        }
    }
}

/// Color analyzer counting pixels per bucket
#[derive(Debug, Clone)]
pub struct ColorAnalyzer {
    classifier: PixelClassifier,
    parallel_threshold: usize,
}

impl Default for ColorAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAnalyzer {
    /// Create a new color analyzer with the default thresholds
    pub fn new() -> Self {
        Self::with_config(&AnalysisConfig::default())
    }

    /// Create a color analyzer from a configuration
    pub fn with_config(config: &AnalysisConfig) -> Self {
        Self {
            classifier: PixelClassifier::new(config.filters.clone()),
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Get the classifier used for every pixel
    pub fn classifier(&self) -> &PixelClassifier {
        &self.classifier
    }

    /// Compute the share of each bucket in `image`
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptyImage` if the image has zero width or height.
    pub fn analyze(&self, image: &RgbImage) -> Result<ColorPercentages> {
        let counts = self.count(image)?;
        let percentages = counts.percentages();

        debug!(
            "Bucket shares: red {:.2}%, green {:.2}%, blue {:.2}% ({} unclassified)",
            percentages.red,
            percentages.green,
            percentages.blue,
            counts.unclassified()
        );

        Ok(percentages)
    }

    /// Count pixels per bucket in `image`
    pub fn count(&self, image: &RgbImage) -> Result<BucketCounts> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(AnalysisError::EmptyImage { width, height });
        }

        let pixel_count = width as usize * height as usize;
        let counts = if pixel_count >= self.parallel_threshold {
            debug!("Scanning {}x{} image in parallel", width, height);
            self.count_parallel(image)
        } else {
            debug!("Scanning {}x{} image sequentially", width, height);
            self.count_sequential(image)
        };

        Ok(counts)
    }

    fn count_sequential(&self, image: &RgbImage) -> BucketCounts {
        image.pixels().fold(BucketCounts::default(), |mut counts, pixel| {
            counts.record(self.classifier.classify(pixel));
            counts
        })
    }

    fn count_parallel(&self, image: &RgbImage) -> BucketCounts {
        let row_len = image.width() as usize * 3;
        // The backing buffer may be longer than the image itself
        let pixels = &image.as_raw()[..row_len * image.height() as usize];

        pixels
            .par_chunks(row_len)
            .map(|row| {
                row.chunks_exact(3).fold(BucketCounts::default(), |mut counts, rgb| {
                    counts.record(self.classifier.classify(&image::Rgb([rgb[0], rgb[1], rgb[2]])));
                    counts
                })
            })
            .reduce(BucketCounts::default, BucketCounts::merge)
    }
}
