//! # ripescan
//!
//! A Rust crate for classifying banana ripeness from digital photographs
//! and color samples.
//!
//! This library maps a dominant hue to a stage on the seven-stage USDA
//! banana color scale by:
//! - Extracting the dominant hue from an image with a confidence measure
//! - Accepting explicit hex or RGB colors as user-declared ground truth
//! - Matching the hue against an ordered table of stage ranges
//! - Estimating days until peak eating quality
//!
//! ## Example
//!
//! ```rust
//! use ripescan::classify_hex;
//!
//! let result = classify_hex("#228B22")?;
//! println!("Stage {}: {}", result.stage.as_u8(), result.label);
//! # Ok::<(), ripescan::ClassificationError>(())
//! ```

use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod selection;
pub mod stage;

pub use color::{DominantHue, HueExtractor};
pub use config::{ClassifierConfig, ExtractionConfig};
pub use error::{ClassificationError, Result};
pub use selection::InputSelection;
pub use stage::{classify_hue, estimated_days_to_peak, RipenessStage, StageDescriptor, STAGE_TABLE};

use color::conversion::{hue_degrees, normalize_hue, parse_hex};

/// A single color input for classification
///
/// Exactly one form is supplied per request; the enum makes mixed input
/// unrepresentable.
#[derive(Debug, Clone, Copy)]
pub enum ColorSample<'a> {
    /// Raw bytes of an encoded image (PNG, JPEG, GIF, BMP)
    ImageBytes(&'a [u8]),
    /// Six-digit hex color, optional leading `#`
    Hex(&'a str),
    /// Explicit RGB triplet
    Rgb { r: u8, g: u8, b: u8 },
}

/// Complete ripeness classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RipenessResult {
    /// Ripeness stage on the 1-7 scale
    pub stage: RipenessStage,
    /// Short stage label
    pub label: String,
    /// One-sentence stage description
    pub description: String,
    /// Dominant or supplied hue in degrees, in [0, 360)
    pub hue: f32,
    /// Classification confidence (0.0 = low, 1.0 = high)
    pub confidence: f32,
    /// Estimated days until peak eating quality
    pub estimated_days_to_peak: f32,
    /// Handling suggestions for the stage
    pub recommendations: Vec<String>,
}

/// Classify a color sample into a ripeness result
///
/// This is the main entry point. Image bytes go through dominant-hue
/// extraction; explicit colors are converted directly and carry confidence
/// 1.0 (user-declared ground truth has no sampling uncertainty).
///
/// # Errors
///
/// Returns `ClassificationError` if:
/// - The hex string is malformed
/// - Image data cannot be decoded
/// - No pixel passes the saturation/value filter
/// - The hue falls outside every stage range
pub fn classify(sample: ColorSample<'_>) -> Result<RipenessResult> {
    classify_with_config(sample, &ClassifierConfig::default())
}

/// Classify a color sample with custom extraction parameters
pub fn classify_with_config(
    sample: ColorSample<'_>,
    config: &ClassifierConfig,
) -> Result<RipenessResult> {
    match sample {
        ColorSample::ImageBytes(bytes) => {
            let image = image_loader::decode_image(bytes)?;
            classify_pixels(&image, config)
        }
        ColorSample::Hex(hex) => {
            let srgb = parse_hex(hex)?;
            assemble_result(hue_degrees(srgb.red, srgb.green, srgb.blue), 1.0)
        }
        ColorSample::Rgb { r, g, b } => assemble_result(hue_degrees(r, g, b), 1.0),
    }
}

/// Classify the contents of an encoded image buffer
pub fn classify_image_bytes(bytes: &[u8]) -> Result<RipenessResult> {
    classify(ColorSample::ImageBytes(bytes))
}

/// Classify an image file on disk
pub fn classify_image_file(path: &Path) -> Result<RipenessResult> {
    let image = image_loader::load_image(path)?;
    classify_pixels(&image, &ClassifierConfig::default())
}

/// Classify an explicit hex color
pub fn classify_hex(hex: &str) -> Result<RipenessResult> {
    classify(ColorSample::Hex(hex))
}

/// Classify an explicit RGB triplet
pub fn classify_rgb(r: u8, g: u8, b: u8) -> Result<RipenessResult> {
    classify(ColorSample::Rgb { r, g, b })
}

fn classify_pixels(image: &RgbImage, config: &ClassifierConfig) -> Result<RipenessResult> {
    let extractor = HueExtractor::from_config(&config.extraction);
    let dominant = extractor.extract(image)?;
    assemble_result(dominant.hue, dominant.confidence)
}

/// Combine stage descriptor, hue, and confidence into the final result
fn assemble_result(hue: f32, confidence: f32) -> Result<RipenessResult> {
    let hue = normalize_hue(hue);
    let descriptor = stage::classify_hue(hue)?;
    let days = stage::estimated_days_to_peak(descriptor.stage);

    info!(
        stage = descriptor.stage.as_u8(),
        hue, confidence, "classified ripeness"
    );

    Ok(RipenessResult {
        stage: descriptor.stage,
        label: descriptor.label.to_string(),
        description: descriptor.description.to_string(),
        hue,
        confidence,
        estimated_days_to_peak: days,
        recommendations: descriptor
            .recommendations
            .iter()
            .map(|r| r.to_string())
            .collect(),
    })
}
