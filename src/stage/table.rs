//! Canonical ripeness stage scale and hue classification
//!
//! The seven-stage scale follows the USDA banana color chart. Stage ranges
//! are declared in an ordered table scanned top to bottom; the first
//! matching row determines the stage. Every bound is written inclusive, so
//! a hue on a shared boundary resolves to the earlier-declared (greener)
//! row — 60° classifies as stage 1, 50° as stage 2, and so on. Hues above
//! 120° match no row and are rejected.

use crate::color::conversion::normalize_hue;
use crate::constants::stages::PEAK_STAGE;
use crate::{ClassificationError, Result};
use serde::{Deserialize, Serialize};

/// Banana ripeness stage on the seven-stage scale
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum RipenessStage {
    /// Stage 1: entirely green
    Green = 1,
    /// Stage 2: breaking toward yellow
    LightGreen = 2,
    /// Stage 3: minimal green
    Yellowish = 3,
    /// Stage 4: mostly yellow
    MoreYellow = 4,
    /// Stage 5: yellow with green tips
    GreenTipped = 5,
    /// Stage 6: fully yellow, peak eating quality
    Yellow = 6,
    /// Stage 7: yellow with brown flecks, overripe
    BrownFlecked = 7,
}

impl RipenessStage {
    /// Stage number on the 1-7 scale
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this stage is at or past peak eating quality
    pub fn is_peak(self) -> bool {
        self as u8 >= PEAK_STAGE
    }

    /// Immutable descriptor for this stage
    pub fn descriptor(self) -> &'static StageDescriptor {
        &STAGE_TABLE[self as usize - 1]
    }
}

impl From<RipenessStage> for u8 {
    fn from(stage: RipenessStage) -> Self {
        stage as u8
    }
}

impl TryFrom<u8> for RipenessStage {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Green),
            2 => Ok(Self::LightGreen),
            3 => Ok(Self::Yellowish),
            4 => Ok(Self::MoreYellow),
            5 => Ok(Self::GreenTipped),
            6 => Ok(Self::Yellow),
            7 => Ok(Self::BrownFlecked),
            other => Err(format!("ripeness stage must be in 1-7, got {}", other)),
        }
    }
}

/// Immutable per-stage descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct StageDescriptor {
    /// The stage this descriptor belongs to
    pub stage: RipenessStage,
    /// Short display label
    pub label: &'static str,
    /// One-sentence description of the stage
    pub description: &'static str,
    /// Hue range in degrees, both ends inclusive; shared boundaries
    /// resolve to the earlier table row
    pub hue_range: (f32, f32),
    /// Handling and consumption suggestions for this stage
    pub recommendations: &'static [&'static str],
}

impl StageDescriptor {
    /// Whether a normalized hue falls in this descriptor's range
    pub fn contains(&self, hue: f32) -> bool {
        hue >= self.hue_range.0 && hue <= self.hue_range.1
    }
}

/// Ordered stage table: scanned top to bottom, first match wins
pub static STAGE_TABLE: [StageDescriptor; 7] = [
    StageDescriptor {
        stage: RipenessStage::Green,
        label: "Green",
        description: "Entirely green, firm and starchy. High in resistant starch.",
        hue_range: (60.0, 120.0),
        recommendations: &[
            "Wait 3-4 days for optimal ripeness",
            "Store at room temperature",
            "Perfect for cooking if you prefer less sweet",
        ],
    },
    StageDescriptor {
        stage: RipenessStage::LightGreen,
        label: "Light Green",
        description: "Breaking toward yellow. Still firm and less sweet.",
        hue_range: (50.0, 60.0),
        recommendations: &[
            "Wait 2-3 days for better sweetness",
            "Store at room temperature",
        ],
    },
    StageDescriptor {
        stage: RipenessStage::Yellowish,
        label: "Yellowish",
        description: "Minimal green. Begins to develop sweetness.",
        hue_range: (40.0, 50.0),
        recommendations: &[
            "Wait 1-2 days for peak ripeness",
            "Good for eating now if you prefer less sweet",
        ],
    },
    StageDescriptor {
        stage: RipenessStage::MoreYellow,
        label: "More Yellow",
        description: "Mostly yellow with some green. Starches converting to sugars.",
        hue_range: (30.0, 40.0),
        recommendations: &["Wait 1 day for optimal sweetness", "Great for smoothies"],
    },
    StageDescriptor {
        stage: RipenessStage::GreenTipped,
        label: "Yellow with Green Tips",
        description: "Ideal for retail. Peak for purchase.",
        hue_range: (25.0, 30.0),
        recommendations: &["Perfect for eating", "Peak retail stage"],
    },
    StageDescriptor {
        stage: RipenessStage::Yellow,
        label: "Yellow",
        description: "Peak eating quality. Aromatic and sweet.",
        hue_range: (20.0, 25.0),
        recommendations: &["Peak eating quality!", "Consume within 1-2 days"],
    },
    StageDescriptor {
        stage: RipenessStage::BrownFlecked,
        label: "Yellow with Brown Flecks",
        description: "Overripe. Best for baking or smoothies.",
        hue_range: (0.0, 20.0),
        recommendations: &[
            "Best for baking or smoothies",
            "Overripe for fresh eating",
        ],
    },
];

/// Classify a hue angle into a ripeness stage
///
/// The hue is normalized into [0, 360) first, matching how camera and
/// picker inputs wrap around the wheel.
///
/// # Errors
///
/// Returns `HueOutOfClassifiableRange` for normalized hues above 120°;
/// blues and purples are not banana skin colors.
pub fn classify_hue(hue: f32) -> Result<&'static StageDescriptor> {
    let hue = normalize_hue(hue);
    STAGE_TABLE
        .iter()
        .find(|descriptor| descriptor.contains(hue))
        .ok_or(ClassificationError::HueOutOfClassifiableRange { hue })
}
