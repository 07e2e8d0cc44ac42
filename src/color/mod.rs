//! Pixel classification and color share analysis
//!
//! This module holds the per-channel filters, the first-match pixel
//! classifier and the analyzer computing bucket percentages over an image.

pub mod filter;
pub mod classifier;
pub mod analysis;

pub use filter::{Bucket, BucketFilter, ChannelRange, ColorFilter};
pub use classifier::{classify, PixelClassifier};
pub use analysis::{BucketCounts, ColorAnalyzer, ColorPercentages};
