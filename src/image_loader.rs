//! Image loading and decoding
//!
//! This module provides the entry points for turning uploaded bytes or a
//! file on disk into an RGB pixel grid for hue extraction.
//!
//! ## Supported Formats
//!
//! PNG, JPEG, GIF (first frame), and BMP via the `image` crate. Extension
//! checks apply to path-based loading; byte buffers are decoded by content.
//!
//! ## Design
//!
//! Very large images are downscaled before analysis so that a
//! classification call stays cheap and bounded. The hue histogram is
//! insensitive to resolution.

use crate::constants::performance;
use crate::error::{ClassificationError, Result};
use image::RgbImage;
use std::path::Path;
use tracing::debug;

/// Supported image formats for uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
    /// GIF image (first frame only)
    Gif,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "gif" => Some(ImageFormat::Gif),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["png", "jpg", "jpeg", "gif", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

/// Decode image bytes into an RGB pixel grid
///
/// # Errors
///
/// Returns `ImageLoad` if the buffer is empty or cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(ClassificationError::image_load_message(
            "empty image data provided",
        ));
    }

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ClassificationError::image_load("failed to decode image data", e))?;

    let (width, height) = (decoded.width(), decoded.height());
    debug!(width, height, bytes = bytes.len(), "decoded image");

    let pixel_count = width.saturating_mul(height);
    if pixel_count > performance::MAX_PROCESSING_PIXELS {
        let scale =
            (performance::DOWNSCALE_TARGET_PIXELS as f64 / pixel_count as f64).sqrt();
        let target_width = ((width as f64 * scale) as u32).max(1);
        let target_height = ((height as f64 * scale) as u32).max(1);
        debug!(target_width, target_height, "downscaling large image");
        return Ok(decoded.thumbnail(target_width, target_height).to_rgb8());
    }

    Ok(decoded.to_rgb8())
}

/// Load an image file from disk and decode it
///
/// The extension must be one of the supported upload formats.
///
/// # Errors
///
/// Returns `ImageLoad` if the extension is unsupported, the file cannot be
/// read, or decoding fails.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(ClassificationError::image_load_message(format!(
            "unsupported image format for file: {} (allowed: {})",
            path.display(),
            supported_extensions().join(", ")
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        ClassificationError::image_load(format!("failed to read file: {}", path.display()), e)
    })?;

    decode_image(&bytes)
}
