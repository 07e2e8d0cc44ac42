//! Default thresholds and tuning constants for color classification
//!
//! The split points below are the two threshold sets the analyzer has shipped
//! with. Neither is a law of nature; see [`crate::config::AnalysisConfig`].

/// Channel value domain for 8-bit images
pub const CHANNEL_MIN: u8 = 0;
pub const CHANNEL_MAX: u8 = 255;

/// Split points: a bucket's own channel must reach the split point, the other
/// two channels must stay at or below it.
pub mod thresholds {
    /// Default split point shared by all three buckets
    pub const DEFAULT_SPLIT: u8 = 100;

    /// Permissive variant: red split point
    pub const PERMISSIVE_RED_SPLIT: u8 = 150;

    /// Permissive variant: green split point
    pub const PERMISSIVE_GREEN_SPLIT: u8 = 80;

    /// Permissive variant: blue split point
    pub const PERMISSIVE_BLUE_SPLIT: u8 = 150;
}

/// Performance tuning
pub mod performance {
    /// Minimum pixel count before the scan is split across rayon workers
    pub const PARALLEL_THRESHOLD: usize = 100_000;
}

/// Name under which the color analysis command is registered
pub const ANALYZE_COMMAND: &str = "analyze";
