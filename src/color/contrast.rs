//! WCAG relative luminance and contrast ratios
//!
//! Contrast is always reported against the two extremes of the display,
//! pure black (luminance 0) and pure white (luminance 1), so that a
//! preview swatch can pick its text color.

use palette::Srgb;
use serde::Serialize;

use crate::constants::{rounding, wcag};

/// Text treatment for content drawn on top of a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Foreground {
    /// Light (white) text, for dark backgrounds
    Light,
    /// Dark (black) text, for light backgrounds
    Dark,
}

/// WCAG conformance level reached by a contrast ratio for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WcagRating {
    Fail,
    /// Large text at level AA (ratio >= 3)
    AaLarge,
    /// Normal text at level AA (ratio >= 4.5)
    Aa,
    /// Normal text at level AAA (ratio >= 7)
    Aaa,
}

impl WcagRating {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= wcag::AAA_NORMAL_TEXT {
            WcagRating::Aaa
        } else if ratio >= wcag::AA_NORMAL_TEXT {
            WcagRating::Aa
        } else if ratio >= wcag::AA_LARGE_TEXT {
            WcagRating::AaLarge
        } else {
            WcagRating::Fail
        }
    }
}

/// Accessibility metrics for one color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Relative luminance in [0, 1]
    pub luminance: f64,
    /// `(L + 0.05) / 0.05`, rounded to two decimals; large for light colors
    pub ratio_vs_black: f64,
    /// `1.05 / (L + 0.05)`, rounded to two decimals; large for dark colors
    pub ratio_vs_white: f64,
    /// Relative luminance below 0.5
    pub is_dark: bool,
}

impl ContrastReport {
    /// Text color to use on a swatch of this color
    pub fn foreground(&self) -> Foreground {
        if self.is_dark {
            Foreground::Light
        } else {
            Foreground::Dark
        }
    }

    pub fn rating_vs_black(&self) -> WcagRating {
        WcagRating::from_ratio(self.ratio_vs_black)
    }

    pub fn rating_vs_white(&self) -> WcagRating {
        WcagRating::from_ratio(self.ratio_vs_white)
    }
}

/// Contrast analyzer implementing the WCAG 2.x formulas
#[derive(Debug, Clone, Copy, Default)]
pub struct ContrastAnalyzer;

impl ContrastAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Compute WCAG relative luminance
    ///
    /// Each channel is linearized with the piecewise sRGB transfer
    /// (linear below 0.03928, power 2.4 above) and the results are
    /// weighted 0.2126 / 0.7152 / 0.0722.
    pub fn relative_luminance(&self, rgb: Srgb<u8>) -> f64 {
        wcag::RED_WEIGHT * linearize(rgb.red)
            + wcag::GREEN_WEIGHT * linearize(rgb.green)
            + wcag::BLUE_WEIGHT * linearize(rgb.blue)
    }

    /// Compute contrast against black and white
    pub fn analyze(&self, rgb: Srgb<u8>) -> ContrastReport {
        let luminance = self.relative_luminance(rgb);

        ContrastReport {
            luminance,
            ratio_vs_black: round_ratio((luminance + wcag::FLARE) / wcag::FLARE),
            ratio_vs_white: round_ratio((1.0 + wcag::FLARE) / (luminance + wcag::FLARE)),
            is_dark: luminance < wcag::DARK_LUMINANCE_THRESHOLD,
        }
    }

    /// Contrast ratio between two arbitrary colors, lighter over darker
    pub fn contrast_between(&self, first: Srgb<u8>, second: Srgb<u8>) -> f64 {
        let a = self.relative_luminance(first);
        let b = self.relative_luminance(second);
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        round_ratio((lighter + wcag::FLARE) / (darker + wcag::FLARE))
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= wcag::LINEAR_THRESHOLD {
        c / wcag::LINEAR_DIVISOR
    } else {
        ((c + wcag::GAMMA_OFFSET) / wcag::GAMMA_SCALE).powf(wcag::GAMMA_EXPONENT)
    }
}

fn round_ratio(ratio: f64) -> f64 {
    (ratio * rounding::CONTRAST_FACTOR).round() / rounding::CONTRAST_FACTOR
}
