//! Constants and reference values for ripeness classification
//!
//! This module contains compile-time constants for hue extraction and
//! stage timing, based on the USDA banana color scale.

/// Pixel filtering thresholds for hue extraction
pub mod thresholds {
    /// Minimum saturation for a pixel to count as banana skin color.
    /// Near-gray pixels carry no usable hue signal.
    pub const MIN_SATURATION: f32 = 0.15;

    /// Minimum value (brightness) for a pixel to count as banana skin color.
    /// Near-black pixels carry no usable hue signal.
    pub const MIN_VALUE: f32 = 0.15;

    /// High confidence threshold for classification results
    pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.8;

    /// Low confidence threshold below which results should be flagged
    pub const LOW_CONFIDENCE_THRESHOLD: f32 = 0.5;
}

/// Hue histogram geometry
pub mod histogram {
    /// Width of one histogram bucket in degrees
    pub const BUCKET_WIDTH_DEGREES: f32 = 5.0;

    /// Number of buckets covering the full hue wheel at the default width
    pub const BUCKET_COUNT: usize = 72;

    /// Buckets on each side of the dominant bucket included in the
    /// confidence numerator (circular across the 0°/360° wrap)
    pub const NEIGHBORHOOD_BUCKETS: usize = 1;
}

/// Stage timing and hue domain
pub mod stages {
    /// Number of ripeness stages on the canonical scale
    pub const STAGE_COUNT: usize = 7;

    /// Stage at peak eating quality; days-to-peak is measured to here
    pub const PEAK_STAGE: u8 = 6;

    /// Upper bound of the classifiable hue domain in degrees.
    /// Hues above this are not banana skin colors.
    pub const MAX_CLASSIFIABLE_HUE: f32 = 120.0;

    /// Duration each stage typically lasts, as (min_days, max_days).
    /// Indexed by stage - 1.
    pub const DURATION_RANGES: [(f32, f32); STAGE_COUNT] = [
        (1.0, 4.0), // Stage 1: Green
        (1.0, 3.0), // Stage 2: Light Green
        (1.0, 3.0), // Stage 3: Yellowish
        (1.0, 3.0), // Stage 4: More Yellow
        (1.0, 3.0), // Stage 5: Yellow with Green Tips
        (1.0, 3.0), // Stage 6: Yellow
        (2.0, 5.0), // Stage 7: Yellow with Brown Flecks
    ];
}

/// Processing limits
pub mod performance {
    /// Maximum image size to process without downscaling
    pub const MAX_PROCESSING_PIXELS: u32 = 4_000_000;

    /// Downscale target for very large images
    pub const DOWNSCALE_TARGET_PIXELS: u32 = 1_000_000;
}
