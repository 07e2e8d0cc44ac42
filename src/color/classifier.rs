//! Per-pixel bucket classification
//!
//! Filters are tried in order and the first match wins, so overlapping
//! filters (e.g. on the shared split point) are resolved by position.

use image::Rgb;

use super::filter::{Bucket, BucketFilter};

/// Return the bucket of the first filter matching `pixel`, if any
#[inline]
pub fn classify(pixel: &Rgb<u8>, filters: &[BucketFilter]) -> Option<Bucket> {
    filters
        .iter()
        .find(|entry| entry.filter.matches(pixel))
        .map(|entry| entry.bucket)
}

/// Ordered set of bucket filters
#[derive(Debug, Clone, PartialEq)]
pub struct PixelClassifier {
    filters: Vec<BucketFilter>,
}

impl PixelClassifier {
    pub fn new(filters: Vec<BucketFilter>) -> Self {
        Self { filters }
    }

    pub fn filters(&self) -> &[BucketFilter] {
        &self.filters
    }

    #[inline]
    pub fn classify(&self, pixel: &Rgb<u8>) -> Option<Bucket> {
        classify(pixel, &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::color::filter::{ChannelRange, ColorFilter};

    fn default_classifier() -> PixelClassifier {
        PixelClassifier::new(AnalysisConfig::default().filters)
    }

    #[test]
    fn test_primary_colors() {
        let classifier = default_classifier();
        assert_eq!(classifier.classify(&Rgb([255, 0, 0])), Some(Bucket::Red));
        assert_eq!(classifier.classify(&Rgb([0, 255, 0])), Some(Bucket::Green));
        assert_eq!(classifier.classify(&Rgb([0, 0, 255])), Some(Bucket::Blue));
    }

    #[test]
    fn test_dark_and_ambiguous_pixels_are_unclassified() {
        let classifier = default_classifier();
        assert_eq!(classifier.classify(&Rgb([0, 0, 0])), None);
        assert_eq!(classifier.classify(&Rgb([99, 99, 99])), None);
        // Bright in two channels: outside every filter
        assert_eq!(classifier.classify(&Rgb([200, 200, 0])), None);
        assert_eq!(classifier.classify(&Rgb([255, 255, 255])), None);
    }

    #[test]
    fn test_red_range_exhaustive() {
        let classifier = default_classifier();
        for r in (100..=255u8).step_by(5) {
            for g in (0..=99u8).step_by(9) {
                for b in (0..=99u8).step_by(9) {
                    assert_eq!(
                        classifier.classify(&Rgb([r, g, b])),
                        Some(Bucket::Red),
                        "pixel ({}, {}, {})",
                        r,
                        g,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_green_and_blue_ranges() {
        let classifier = default_classifier();
        for high in [100u8, 150, 255] {
            for low in [0u8, 50, 99] {
                assert_eq!(classifier.classify(&Rgb([low, high, low])), Some(Bucket::Green));
                assert_eq!(classifier.classify(&Rgb([low, low, high])), Some(Bucket::Blue));
            }
        }
    }

    #[test]
    fn test_first_matching_filter_wins() {
        // (100, 100, 0) sits on the shared boundary of red and green
        let pixel = Rgb([100, 100, 0]);
        assert_eq!(default_classifier().classify(&pixel), Some(Bucket::Red));

        let mut reordered = AnalysisConfig::default().filters;
        reordered.reverse();
        assert_eq!(classify(&pixel, &reordered), Some(Bucket::Green));
    }

    #[test]
    fn test_empty_filter_list() {
        assert_eq!(classify(&Rgb([255, 0, 0]), &[]), None);
    }

    #[test]
    fn test_custom_filter() {
        let everything = BucketFilter::new(
            Bucket::Blue,
            ColorFilter::new(ChannelRange::FULL, ChannelRange::FULL, ChannelRange::FULL),
        );
        let classifier = PixelClassifier::new(vec![everything]);
        assert_eq!(classifier.classify(&Rgb([0, 0, 0])), Some(Bucket::Blue));
        assert_eq!(classifier.filters().len(), 1);
    }
}
