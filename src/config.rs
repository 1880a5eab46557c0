//! Configuration structures for the ripescan classifier.
//!
//! This module defines the tunable parameters for hue extraction.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use ripescan::ClassifierConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ClassifierConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ClassifierConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::{histogram, thresholds};
use serde::{Deserialize, Serialize};

/// Complete classifier configuration.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClassifierConfig {
    /// Hue extraction configuration
    pub extraction: ExtractionConfig,
}

/// Hue extraction parameters.
///
/// Controls which pixels qualify for the hue histogram and how the
/// histogram is bucketed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Minimum saturation for a pixel to qualify (0.0-1.0)
    pub min_saturation: f32,

    /// Minimum value (brightness) for a pixel to qualify (0.0-1.0)
    pub min_value: f32,

    /// Histogram bucket width in degrees
    pub bucket_width_degrees: f32,

    /// Buckets on each side of the dominant bucket counted as agreeing
    pub neighborhood_buckets: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_saturation: thresholds::MIN_SATURATION,
            min_value: thresholds::MIN_VALUE,
            bucket_width_degrees: histogram::BUCKET_WIDTH_DEGREES,
            neighborhood_buckets: histogram::NEIGHBORHOOD_BUCKETS,
        }
    }
}

impl ClassifierConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = ClassifierConfig::default();
        assert_eq!(config.extraction.min_saturation, thresholds::MIN_SATURATION);
        assert_eq!(config.extraction.min_value, thresholds::MIN_VALUE);
        assert_eq!(
            config.extraction.bucket_width_degrees,
            histogram::BUCKET_WIDTH_DEGREES
        );
        assert_eq!(
            config.extraction.neighborhood_buckets,
            histogram::NEIGHBORHOOD_BUCKETS
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ClassifierConfig {
            extraction: ExtractionConfig {
                min_saturation: 0.2,
                min_value: 0.1,
                bucket_width_degrees: 2.0,
                neighborhood_buckets: 2,
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
