//! Image loading boundary
//!
//! Decodes an image file into the flat RGB8 pixel buffer the extraction
//! pipeline consumes. Format detection and decoding are delegated to the
//! `image` crate (JPEG, PNG, GIF, WebP, TIFF, BMP, and the rest of its
//! supported set). Alpha channels are discarded: palette extraction is
//! defined over opaque RGB data only.

use crate::{ExtractionError, Result};
use std::path::Path;

/// A decoded image as a flat RGB8 buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Row-major RGB8 data, three bytes per pixel
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Number of pixels in the buffer
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 3
    }
}

/// Load an image file as an RGB8 pixel buffer
///
/// # Errors
///
/// Returns `ImageLoadError` if the file cannot be opened or decoded
pub fn load_rgb_pixels(path: &Path) -> Result<PixelBuffer> {
    let decoded = image::open(path)
        .map_err(|e| ExtractionError::image_load(path.display().to_string(), e))?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(PixelBuffer {
        width,
        height,
        data: rgb.into_raw(),
    })
}
