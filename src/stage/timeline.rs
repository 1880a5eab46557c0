//! Days-until-peak estimation
//!
//! Sums the mean duration of every stage between the current one and the
//! peak stage (stage 6). The estimate is a per-stage constant; nothing but
//! the stage affects it.

use crate::constants::stages::{DURATION_RANGES, PEAK_STAGE};
use crate::stage::RipenessStage;

/// Estimate days until the banana reaches peak eating quality
///
/// Stages at or past the peak (6 and 7) return 0.
pub fn estimated_days_to_peak(stage: RipenessStage) -> f32 {
    let current = stage.as_u8();
    if current >= PEAK_STAGE {
        return 0.0;
    }

    (current..PEAK_STAGE)
        .map(|number| {
            let (min_days, max_days) = DURATION_RANGES[number as usize - 1];
            (min_days + max_days) / 2.0
        })
        .sum()
}
