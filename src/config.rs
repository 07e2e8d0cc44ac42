//! Configuration structures for color classification.
//!
//! The analyzer's behaviour is fully described by an ordered list of bucket
//! filters plus a parallelism threshold.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use color_share::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use one of the built-in threshold sets
//! let config = AnalysisConfig::default();
//! let config = AnalysisConfig::permissive();
//! # Ok::<(), color_share::AnalysisError>(())
//! ```
//!
//! # Threshold sets
//!
//! Two threshold sets have been used historically: a shared split point of
//! 100 for every bucket (the default), and 150/80/150 for red/green/blue.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::filter::{Bucket, BucketFilter, ColorFilter};
use crate::constants::{performance, thresholds};
use crate::{AnalysisError, Result};

/// Complete analyzer configuration.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Bucket filters, tried in order; the first match classifies a pixel
    pub filters: Vec<BucketFilter>,

    /// Images with at least this many pixels are scanned in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    performance::PARALLEL_THRESHOLD
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::from_split_points(
            thresholds::DEFAULT_SPLIT,
            thresholds::DEFAULT_SPLIT,
            thresholds::DEFAULT_SPLIT,
        )
    }
}

impl AnalysisConfig {
    /// Build red, green and blue filters (in that order) from one split point
    /// per bucket.
    pub fn from_split_points(red: u8, green: u8, blue: u8) -> Self {
        Self {
            filters: vec![
                BucketFilter::new(Bucket::Red, ColorFilter::dominant(Bucket::Red, red)),
                BucketFilter::new(Bucket::Green, ColorFilter::dominant(Bucket::Green, green)),
                BucketFilter::new(Bucket::Blue, ColorFilter::dominant(Bucket::Blue, blue)),
            ],
            parallel_threshold: performance::PARALLEL_THRESHOLD,
        }
    }

    /// The 150/80/150 threshold set
    pub fn permissive() -> Self {
        Self::from_split_points(
            thresholds::PERMISSIVE_RED_SPLIT,
            thresholds::PERMISSIVE_GREEN_SPLIT,
            thresholds::PERMISSIVE_BLUE_SPLIT,
        )
    }

    /// Set the pixel count from which scans run in parallel
    pub fn with_parallel_threshold(self, parallel_threshold: usize) -> Self {
        Self {
            parallel_threshold,
            ..self
        }
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("failed to read {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
            .map_err(|e| AnalysisError::config(format!("failed to parse {}", path.display()), e))
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize configuration as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("failed to serialize configuration", e))
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("failed to write {}", path.display()), e)
        })
    }
}
