//! # Color Share
//!
//! A Rust crate for measuring how much of an image is red, green or blue.
//!
//! This library provides:
//! - Per-pixel classification against configurable per-channel ranges
//! - Bucket percentages over the full pixel count, near-black pixels excluded
//! - A small command registry and pipeline delivering typed results to a sink
//!
//! ## Example
//!
//! ```rust,no_run
//! use color_share::{analyze_image, AnalysisConfig};
//! use std::path::Path;
//!
//! let shares = analyze_image(Path::new("photo.png"), &AnalysisConfig::default())?;
//! println!("Red: {:.2}%, Green: {:.2}%, Blue: {:.2}%", shares.red, shares.green, shares.blue);
//! # Ok::<(), color_share::AnalysisError>(())
//! ```
//!
//! Driving the same analysis through the command pipeline:
//!
//! ```rust,no_run
//! use color_share::{AnalysisConfig, CommandPipeline, RecordingSink};
//!
//! let mut pipeline = CommandPipeline::with_defaults(&AnalysisConfig::default(), RecordingSink::default())?;
//! let result = pipeline.execute("analyze", &["photo.png".to_string()])?;
//! assert_eq!(result.command, "analyze");
//! # Ok::<(), color_share::AnalysisError>(())
//! ```

use std::path::Path;

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod command;
pub mod image_loader;

pub use color::{Bucket, BucketCounts, BucketFilter, ChannelRange, ColorAnalyzer, ColorFilter, ColorPercentages, PixelClassifier};
pub use command::{
    CommandOutput, CommandPipeline, CommandRegistry, CommandResult, InstructionsProvider, RecordingSink, ResultSink,
};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, ErrorKind, Result};

/// Decode the image at `image_path` and compute its bucket percentages
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - Image cannot be opened or decoded
/// - Image has zero width or height
pub fn analyze_image(image_path: &Path, config: &AnalysisConfig) -> Result<ColorPercentages> {
    let image = image_loader::load_image(image_path)?;
    ColorAnalyzer::with_config(config).analyze(&image)
}
