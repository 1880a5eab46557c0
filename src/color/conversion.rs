//! Color parsing and HSV conversion utilities
//!
//! Provides the color plumbing for classification:
//! - Hex string validation and parsing
//! - RGB to HSV conversion
//! - Hue normalization into [0, 360)
//! - Hex color representation

use crate::{ClassificationError, Result};
use palette::{FromColor, Hsv, Srgb};

/// Parse a hexadecimal color string into an sRGB color
///
/// Accepts exactly six hex digits with an optional leading `#`, case
/// insensitive (`#FFD700`, `ffd700`).
///
/// # Errors
///
/// Returns `InvalidColorFormat` for any other shape of input.
pub fn parse_hex(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 {
        return Err(ClassificationError::invalid_color(format!(
            "expected 6 hex digits, got {}",
            digits.len()
        )));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ClassificationError::invalid_color(format!(
            "'{}' contains non-hex characters",
            digits
        )));
    }

    let r = u8::from_str_radix(&digits[0..2], 16)
        .map_err(|e| ClassificationError::invalid_color(format!("invalid red value: {}", e)))?;
    let g = u8::from_str_radix(&digits[2..4], 16)
        .map_err(|e| ClassificationError::invalid_color(format!("invalid green value: {}", e)))?;
    let b = u8::from_str_radix(&digits[4..6], 16)
        .map_err(|e| ClassificationError::invalid_color(format!("invalid blue value: {}", e)))?;

    Ok(Srgb::new(r, g, b))
}

/// Convert RGB (0-255) to HSV
///
/// # Arguments
///
/// * `r`, `g`, `b` - RGB values in range [0, 255]
///
/// # Returns
///
/// HSV color with saturation and value in [0, 1]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    Hsv::from_color(srgb)
}

/// Extract the hue of an RGB color in degrees, in [0, 360)
pub fn hue_degrees(r: u8, g: u8, b: u8) -> f32 {
    rgb_to_hsv(r, g, b).hue.into_positive_degrees()
}

/// Normalize an arbitrary hue angle into [0, 360)
pub fn normalize_hue(hue: f32) -> f32 {
    hue.rem_euclid(360.0)
}

/// Format an RGB color as a hexadecimal string (e.g., "#FFD700")
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
