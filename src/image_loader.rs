//! Image loading into RGB pixel grids
//!
//! This module provides a single entry point for decoding image files into an
//! `image::RgbImage`, regardless of the source color type (grayscale, RGBA,
//! 16-bit, ...).
//!
//! ## Supported Formats
//!
//! Formats enabled in the `image` crate:
//! - JPEG, PNG, GIF, WebP, TIFF, BMP, ICO, TGA, PNM, QOI, HDR
//!
//! ## Design
//!
//! The format is sniffed from file contents, so a mislabelled extension still
//! decodes. Decoding is exposed through the [`ImageSource`] trait so commands can be
//! driven by in-memory images.

use crate::error::{AnalysisError, Result};
use image::{ImageReader, RgbImage};
use log::debug;
use std::path::Path;

/// Something able to turn a path into an RGB pixel grid
pub trait ImageSource: Send + Sync {
    fn decode(&self, path: &Path) -> Result<RgbImage>;
}

/// Decodes image files from disk with the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageSource;

impl ImageSource for FileImageSource {
    fn decode(&self, path: &Path) -> Result<RgbImage> {
        load_image(path)
    }
}

/// Load an image from disk and convert it to 8-bit RGB
///
/// # Errors
///
/// Returns `AnalysisError::DecodeError` if:
/// - File cannot be opened
/// - Format cannot be determined or is not supported
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use color_share::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.png"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), color_share::AnalysisError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| AnalysisError::decode(path, "failed to open image file", e))?
        .with_guessed_format()
        .map_err(|e| AnalysisError::decode(path, "failed to read image header", e))?;

    debug!("Decoding {} as {:?}", path.display(), reader.format());

    let image = reader
        .decode()
        .map_err(|e| AnalysisError::decode(path, e.to_string(), e))?;

    Ok(image.to_rgb8())
}
