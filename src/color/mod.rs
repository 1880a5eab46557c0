//! Color parsing and hue analysis module
//!
//! This module handles color input parsing, RGB to HSV conversion, and
//! dominant-hue extraction from pixel data.

pub mod conversion;
pub mod histogram;

pub use histogram::{DominantHue, HueExtractor};
