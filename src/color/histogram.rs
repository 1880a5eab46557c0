//! Dominant hue extraction from pixel data
//!
//! Builds a bucketed hue histogram over the pixels that carry usable color
//! (above minimum saturation and value), then reports the dominant bucket
//! with a confidence measure:
//! - Ties between buckets resolve to the lowest hue
//! - The representative hue is the mean hue within the dominant bucket
//! - Confidence is the fraction of qualifying pixels that agree with the
//!   dominant bucket or its immediate neighbors (circular over the wheel)

use crate::color::conversion::rgb_to_hsv;
use crate::config::ExtractionConfig;
use crate::constants::{histogram, thresholds};
use crate::{ClassificationError, Result};
use image::RgbImage;
use tracing::debug;

/// Dominant hue extraction result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantHue {
    /// Representative hue in degrees, in [0, 360)
    pub hue: f32,
    /// Fraction of qualifying pixels agreeing with the dominant bucket
    pub confidence: f32,
    /// Number of pixels that passed the saturation/value filter
    pub qualifying_pixels: usize,
}

/// Hue extractor implementing the filtered-histogram analysis
pub struct HueExtractor {
    min_saturation: f32,
    min_value: f32,
    bucket_width: f32,
    neighborhood: usize,
}

impl Default for HueExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HueExtractor {
    /// Create a hue extractor with default parameters
    pub fn new() -> Self {
        Self {
            min_saturation: thresholds::MIN_SATURATION,
            min_value: thresholds::MIN_VALUE,
            bucket_width: histogram::BUCKET_WIDTH_DEGREES,
            neighborhood: histogram::NEIGHBORHOOD_BUCKETS,
        }
    }

    /// Create a hue extractor with custom parameters
    pub fn with_params(
        min_saturation: f32,
        min_value: f32,
        bucket_width: f32,
        neighborhood: usize,
    ) -> Self {
        Self {
            min_saturation,
            min_value,
            bucket_width: bucket_width.max(1.0),
            neighborhood,
        }
    }

    /// Create a hue extractor from an extraction configuration
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_params(
            config.min_saturation,
            config.min_value,
            config.bucket_width_degrees,
            config.neighborhood_buckets,
        )
    }

    /// Extract the dominant hue from an RGB pixel grid
    ///
    /// # Errors
    ///
    /// Returns `NoColorDetected` if no pixel passes the saturation/value
    /// filter (all-gray, all-black, or all-white input).
    pub fn extract(&self, image: &RgbImage) -> Result<DominantHue> {
        let bucket_count = (360.0 / self.bucket_width).ceil() as usize;
        let mut counts = vec![0usize; bucket_count];
        let mut hue_sums = vec![0.0f64; bucket_count];

        for pixel in image.pixels() {
            let image::Rgb([r, g, b]) = *pixel;
            let hsv = rgb_to_hsv(r, g, b);
            if hsv.saturation < self.min_saturation || hsv.value < self.min_value {
                continue;
            }
            let hue = hsv.hue.into_positive_degrees();
            let bucket = ((hue / self.bucket_width) as usize).min(bucket_count - 1);
            counts[bucket] += 1;
            hue_sums[bucket] += hue as f64;
        }

        let total: usize = counts.iter().sum();
        if total == 0 {
            return Err(ClassificationError::NoColorDetected {
                reason: format!(
                    "no pixels above saturation {:.2} and value {:.2}",
                    self.min_saturation, self.min_value
                ),
            });
        }

        // Ascending scan with strict comparison: ties go to the lowest hue.
        let mut dominant = 0;
        for bucket in 1..bucket_count {
            if counts[bucket] > counts[dominant] {
                dominant = bucket;
            }
        }

        let hue = (hue_sums[dominant] / counts[dominant] as f64) as f32;
        let agreeing = self.neighborhood_count(&counts, dominant);
        let confidence = agreeing as f32 / total as f32;

        debug!(
            hue,
            confidence,
            qualifying = total,
            bucket = dominant,
            "extracted dominant hue"
        );

        Ok(DominantHue {
            hue,
            confidence,
            qualifying_pixels: total,
        })
    }

    /// Count pixels in the dominant bucket and its neighbors, wrapping
    /// around the hue wheel
    fn neighborhood_count(&self, counts: &[usize], dominant: usize) -> usize {
        let bucket_count = counts.len();
        let span = (2 * self.neighborhood + 1).min(bucket_count);
        let start = dominant + bucket_count - self.neighborhood.min(bucket_count / 2);
        (0..span)
            .map(|offset| counts[(start + offset) % bucket_count])
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn uniform_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(rgb))
    }

    #[test]
    fn test_uniform_green_image() {
        let extractor = HueExtractor::new();
        let result = extractor.extract(&uniform_image(8, 8, [0, 255, 0])).unwrap();

        assert!((result.hue - 120.0).abs() < 0.5);
        assert!((result.confidence - 1.0).abs() < 1e-6);
        assert_eq!(result.qualifying_pixels, 64);
    }

    #[test]
    fn test_gray_image_has_no_color() {
        let extractor = HueExtractor::new();
        let result = extractor.extract(&uniform_image(8, 8, [128, 128, 128]));

        match result.unwrap_err() {
            ClassificationError::NoColorDetected { .. } => {}
            err => panic!("Expected NoColorDetected, got: {:?}", err),
        }
    }

    #[test]
    fn test_black_and_white_pixels_are_filtered() {
        let extractor = HueExtractor::new();
        let mut image = uniform_image(4, 4, [255, 255, 255]);
        image.put_pixel(0, 0, Rgb([0, 0, 0]));
        image.put_pixel(1, 1, Rgb([255, 230, 100])); // The only colorful pixel

        let result = extractor.extract(&image).unwrap();
        assert_eq!(result.qualifying_pixels, 1);
        assert!((result.confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tie_breaks_to_lowest_hue() {
        let extractor = HueExtractor::new();
        // Equal pixel counts in a yellow-orange bucket (hue ≈ 30°) and a
        // green bucket (hue 120°); the lower bucket must win.
        let mut image = uniform_image(2, 2, [0, 255, 0]);
        image.put_pixel(0, 0, Rgb([255, 128, 0]));
        image.put_pixel(0, 1, Rgb([255, 128, 0]));

        let result = extractor.extract(&image).unwrap();
        assert!((result.hue - 30.1).abs() < 0.5);
        assert!((result.confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_majority_hue_wins() {
        let extractor = HueExtractor::new();
        let mut image = uniform_image(3, 3, [0, 255, 0]);
        image.put_pixel(0, 0, Rgb([255, 128, 0]));

        let result = extractor.extract(&image).unwrap();
        assert!((result.hue - 120.0).abs() < 0.5);
        assert!((result.confidence - 8.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_neighboring_buckets_raise_confidence() {
        let extractor = HueExtractor::new();
        // Hues 118° and 121° land in adjacent buckets; both count toward
        // the dominant neighborhood.
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([8, 255, 0])); // hue ≈ 118.1°
        image.put_pixel(1, 0, Rgb([0, 255, 4])); // hue ≈ 120.9°

        let result = extractor.extract(&image).unwrap();
        assert!((result.confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_image_has_no_color() {
        let extractor = HueExtractor::new();
        let result = extractor.extract(&RgbImage::new(0, 0));
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_thresholds_admit_dim_pixels() {
        // A dim green pixel fails the default value threshold but passes a
        // relaxed one.
        let image = uniform_image(2, 2, [0, 30, 0]);

        let strict = HueExtractor::new();
        assert!(strict.extract(&image).is_err());

        let relaxed = HueExtractor::with_params(0.15, 0.05, 5.0, 1);
        let result = relaxed.extract(&image).unwrap();
        assert!((result.hue - 120.0).abs() < 0.5);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = HueExtractor::new();
        let mut image = uniform_image(6, 6, [240, 210, 80]);
        image.put_pixel(2, 2, Rgb([90, 200, 60]));

        let first = extractor.extract(&image).unwrap();
        let second = extractor.extract(&image).unwrap();
        assert_eq!(first, second);
    }
}
