//! Reference values for conversion, contrast and sampling
//!
//! This module contains compile-time constants for the reference picking
//! policy and the WCAG 2.x relative luminance formula.

/// WCAG relative luminance and contrast parameters
///
/// Source: WCAG 2.0, definition of relative luminance and contrast ratio.
pub mod wcag {
    /// sRGB channel value below which linearization is a plain division
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Divisor of the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset and scale of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_SCALE: f64 = 1.055;

    /// Exponent of the power segment
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Luminance weights for red, green and blue
    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;

    /// Flare term added to both luminances of a contrast ratio
    pub const FLARE: f64 = 0.05;

    /// Colors with relative luminance below this count as dark
    pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.5;

    /// Minimum ratio for large text at level AA
    pub const AA_LARGE_TEXT: f64 = 3.0;

    /// Minimum ratio for normal text at level AA
    pub const AA_NORMAL_TEXT: f64 = 4.5;

    /// Minimum ratio for normal text at level AAA
    pub const AAA_NORMAL_TEXT: f64 = 7.0;
}

/// Picking policy used by a fresh session
pub mod policy {
    /// Normalized sample points used for palette extraction, in order
    pub const PALETTE_SAMPLE_POINTS: [(f64, f64); 5] =
        [(0.2, 0.2), (0.5, 0.2), (0.8, 0.5), (0.3, 0.8), (0.7, 0.7)];

    /// Maximum number of entries kept in the selection history
    pub const HISTORY_CAPACITY: usize = 12;

    /// Color shown before anything has been picked (#6366f1)
    pub const DEFAULT_RGB: (u8, u8, u8) = (99, 102, 241);
}

/// Rounding applied to reported values
pub mod rounding {
    /// Contrast ratios are reported to two decimal places
    pub const CONTRAST_FACTOR: f64 = 100.0;

    /// Export snippets print normalized channels to three decimal places
    pub const EXPORT_CHANNEL_DECIMALS: usize = 3;
}
