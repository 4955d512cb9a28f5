//! Color space conversion utilities
//!
//! Provides deterministic conversions between the representations shown to
//! the user:
//! - RGB (0-255) to hex, HSL and CMYK
//! - HSL back to RGB for slider-driven edits
//! - Hex parsing for palette and history swatches
//!
//! All integer outputs are rounded to nearest. Inputs are `u8` channels, so
//! the RGB domain is enforced by the type system; HSL inputs outside
//! hue [0, 360) and saturation/lightness [0, 100] give unspecified (but
//! clamped, never out-of-range) channel values.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::Serialize;

use crate::{ColorData, PickerError, Result};

/// HSL triple as displayed: hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hsl {
    /// Hue in degrees, always in [0, 360)
    pub hue: u16,
    /// Saturation percentage in [0, 100]
    pub saturation: u8,
    /// Lightness percentage in [0, 100]
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// CMYK percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cmyk {
    pub cyan: u8,
    pub magenta: u8,
    pub yellow: u8,
    pub key: u8,
}

/// Formats as `"C, M, Y, K"`, e.g. `"0, 0, 0, 100"` for black
impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.cyan, self.magenta, self.yellow, self.key)
    }
}

/// Stateless converter between RGB, HSL, CMYK and hex
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Derive the complete [`ColorData`] record for an RGB color
    ///
    /// # Arguments
    ///
    /// * `r`, `g`, `b` - RGB values in range [0, 255]
    ///
    /// # Returns
    ///
    /// A fully populated record whose hex, HSL and CMYK fields are all
    /// derived from the same channels.
    pub fn rgb_to_color_data(&self, r: u8, g: u8, b: u8) -> ColorData {
        let rgb = Srgb::new(r, g, b);
        ColorData {
            hex: self.rgb_to_hex(rgb),
            rgb,
            hsl: self.rgb_to_hsl(rgb),
            cmyk: self.rgb_to_cmyk(rgb),
        }
    }

    /// Convert RGB to a lowercase `#rrggbb` string
    pub fn rgb_to_hex(&self, rgb: Srgb<u8>) -> String {
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }

    /// Convert RGB to rounded HSL
    ///
    /// Achromatic colors (all channels equal) get hue 0 and saturation 0.
    /// A hue that rounds up to 360 wraps to 0.
    pub fn rgb_to_hsl(&self, rgb: Srgb<u8>) -> Hsl {
        let (r, g, b) = normalized(rgb);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };

            let sector = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };

            (sector / 6.0, saturation)
        };

        Hsl {
            hue: ((hue * 360.0).round() as u16) % 360,
            saturation: percent(saturation),
            lightness: percent(lightness),
        }
    }

    /// Convert RGB to rounded CMYK percentages
    ///
    /// Black has no defined ink mix and maps to `0, 0, 0, 100`.
    pub fn rgb_to_cmyk(&self, rgb: Srgb<u8>) -> Cmyk {
        let (r, g, b) = normalized(rgb);
        let key = 1.0 - r.max(g).max(b);
        let ink = |channel: f64| {
            if key >= 1.0 {
                0.0
            } else {
                (1.0 - channel - key) / (1.0 - key)
            }
        };

        Cmyk {
            cyan: percent(ink(r)),
            magenta: percent(ink(g)),
            yellow: percent(ink(b)),
            key: percent(key),
        }
    }

    /// Convert HSL back to RGB
    ///
    /// # Arguments
    ///
    /// * `hue` - degrees in [0, 360)
    /// * `saturation`, `lightness` - percentages in [0, 100]
    ///
    /// # Returns
    ///
    /// RGB channels rounded to nearest and clamped to [0, 255]
    pub fn hsl_to_rgb(&self, hue: f64, saturation: f64, lightness: f64) -> Srgb<u8> {
        let s = saturation / 100.0;
        let l = lightness / 100.0;
        let chroma = s * l.min(1.0 - l);

        let channel = |offset: f64| {
            let k = (offset + hue / 30.0).rem_euclid(12.0);
            let value = l - chroma * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (value * 255.0).round().clamp(0.0, 255.0) as u8
        };

        Srgb::new(channel(0.0), channel(8.0), channel(4.0))
    }

    /// Parse a hexadecimal color string
    ///
    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb`, in either case, with
    /// surrounding whitespace ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidHex`] if the string is not a hex color
    pub fn parse_hex(&self, hex: &str) -> Result<Srgb<u8>> {
        let trimmed = hex.trim();
        let digits = trimmed.trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PickerError::InvalidHex {
                value: hex.to_string(),
                reason: "contains non-hex characters".to_string(),
            });
        }
        if digits.len() != 6 && digits.len() != 3 {
            return Err(PickerError::InvalidHex {
                value: hex.to_string(),
                reason: format!("expected 3 or 6 hex digits, got {}", digits.len()),
            });
        }

        Srgb::<u8>::from_str(trimmed).map_err(|e| PickerError::InvalidHex {
            value: hex.to_string(),
            reason: e.to_string(),
        })
    }
}

fn normalized(rgb: Srgb<u8>) -> (f64, f64, f64) {
    (
        f64::from(rgb.red) / 255.0,
        f64::from(rgb.green) / 255.0,
        f64::from(rgb.blue) / 255.0,
    )
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: u16, b: u16) -> u16 {
        let d = a.abs_diff(b) % 360;
        d.min(360 - d)
    }

    #[test]
    fn test_known_indigo() {
        let converter = ColorConverter::new();
        let data = converter.rgb_to_color_data(99, 102, 241);

        assert_eq!(data.hex(), "#6366f1");
        assert_eq!(
            data.hsl(),
            Hsl {
                hue: 239,
                saturation: 84,
                lightness: 67
            }
        );
        assert_eq!(data.cmyk_string(), "59, 58, 0, 5");
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        let converter = ColorConverter::new();
        assert_eq!(converter.rgb_to_hex(Srgb::new(0, 10, 255)), "#000aff");
        assert_eq!(converter.rgb_to_hex(Srgb::new(171, 205, 239)), "#abcdef");
    }

    #[test]
    fn test_hex_round_trip_over_rgb_cube() {
        let converter = ColorConverter::new();
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(3) {
                for b in [0u8, 1, 15, 16, 127, 128, 254, 255] {
                    let hex = converter.rgb_to_hex(Srgb::new(r, g, b));
                    assert_eq!(hex.len(), 7);
                    assert!(hex.starts_with('#'));
                    assert!(hex[1..]
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

                    let parsed = converter.parse_hex(&hex).unwrap();
                    assert_eq!((parsed.red, parsed.green, parsed.blue), (r, g, b));
                }
            }
        }
    }

    #[test]
    fn test_primaries() {
        let converter = ColorConverter::new();

        let red = converter.rgb_to_color_data(255, 0, 0);
        assert_eq!(red.hsl_string(), "hsl(0, 100%, 50%)");
        assert_eq!(red.cmyk_string(), "0, 100, 100, 0");

        let green = converter.rgb_to_color_data(0, 255, 0);
        assert_eq!(green.hsl().hue, 120);
        assert_eq!(green.cmyk_string(), "100, 0, 100, 0");

        let blue = converter.rgb_to_color_data(0, 0, 255);
        assert_eq!(blue.hsl().hue, 240);
    }

    #[test]
    fn test_achromatic_has_no_saturation() {
        let converter = ColorConverter::new();
        let gray = converter.rgb_to_hsl(Srgb::new(128, 128, 128));
        assert_eq!(gray.saturation, 0);
        assert_eq!(gray.hue, 0);
        assert_eq!(gray.lightness, 50);
    }

    #[test]
    fn test_black_and_white_cmyk() {
        let converter = ColorConverter::new();
        assert_eq!(converter.rgb_to_cmyk(Srgb::new(0, 0, 0)).to_string(), "0, 0, 0, 100");
        assert_eq!(
            converter.rgb_to_cmyk(Srgb::new(255, 255, 255)).to_string(),
            "0, 0, 0, 0"
        );
    }

    #[test]
    fn test_hue_never_reaches_360() {
        let converter = ColorConverter::new();
        for b in 0..=255u8 {
            // Red-dominant colors with blue slightly above green sit just below 360 degrees
            let hsl = converter.rgb_to_hsl(Srgb::new(255, 0, b));
            assert!(hsl.hue < 360);
        }
        assert_eq!(converter.rgb_to_hsl(Srgb::new(255, 0, 1)).hue, 0);
    }

    #[test]
    fn test_hsl_to_rgb_reference_points() {
        let converter = ColorConverter::new();
        assert_eq!(converter.hsl_to_rgb(0.0, 100.0, 50.0), Srgb::new(255, 0, 0));
        assert_eq!(converter.hsl_to_rgb(120.0, 100.0, 50.0), Srgb::new(0, 255, 0));
        assert_eq!(converter.hsl_to_rgb(240.0, 100.0, 50.0), Srgb::new(0, 0, 255));
        assert_eq!(converter.hsl_to_rgb(0.0, 0.0, 0.0), Srgb::new(0, 0, 0));
        assert_eq!(converter.hsl_to_rgb(200.0, 50.0, 100.0), Srgb::new(255, 255, 255));
        assert_eq!(converter.hsl_to_rgb(239.0, 84.0, 67.0), Srgb::new(100, 103, 242));
    }

    #[test]
    fn test_hsl_round_trip_within_one() {
        let converter = ColorConverter::new();
        for hue in 0..360u16 {
            for saturation in (40..=100u8).step_by(3) {
                for lightness in (25..=75u8).step_by(2) {
                    let rgb = converter.hsl_to_rgb(
                        f64::from(hue),
                        f64::from(saturation),
                        f64::from(lightness),
                    );
                    let back = converter.rgb_to_hsl(rgb);

                    assert!(
                        hue_distance(back.hue, hue) <= 1,
                        "hue drift for hsl({hue}, {saturation}, {lightness}): {back}"
                    );
                    assert!(back.saturation.abs_diff(saturation) <= 1);
                    assert!(back.lightness.abs_diff(lightness) <= 1);
                }
            }
        }
    }

    #[test]
    fn test_parse_hex_forms() {
        let converter = ColorConverter::new();
        assert_eq!(converter.parse_hex("#6366F1").unwrap(), Srgb::new(99, 102, 241));
        assert_eq!(converter.parse_hex("6366f1").unwrap(), Srgb::new(99, 102, 241));
        assert_eq!(converter.parse_hex(" #fff ").unwrap(), Srgb::new(255, 255, 255));
    }

    #[test]
    fn test_parse_hex_invalid() {
        let converter = ColorConverter::new();
        assert!(converter.parse_hex("#ff").is_err());
        assert!(converter.parse_hex("#gggggg").is_err());
        assert!(converter.parse_hex("").is_err());
        assert!(converter.parse_hex("#éa").is_err());
        assert!(matches!(
            converter.parse_hex("aéaaa"),
            Err(PickerError::InvalidHex { .. })
        ));
        assert!(matches!(
            converter.parse_hex("#12345"),
            Err(PickerError::InvalidHex { .. })
        ));
    }
}
