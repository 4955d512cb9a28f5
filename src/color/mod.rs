//! Color conversion and accessibility analysis
//!
//! This module handles conversions between RGB, HSL, CMYK and hex
//! representations, and WCAG contrast assessment of a picked color.

pub mod contrast;
pub mod conversion;

pub use contrast::{ContrastAnalyzer, ContrastReport, Foreground, WcagRating};
pub use conversion::{Cmyk, ColorConverter, Hsl};
