//! # Pick Colors
//!
//! A Rust crate for picking colors out of raster images.
//!
//! This library provides the colorimetry engine behind an interactive
//! color picker:
//! - Converting a pixel's RGB value to hex, HSL and CMYK
//! - Assessing WCAG contrast against black and white
//! - Extracting a fixed-point palette when an image is loaded
//! - Keeping a bounded, deduplicated history of picked colors
//!
//! ## Example
//!
//! ```rust,no_run
//! use pick_colors::{sampling::Coordinate, Session};
//! use std::path::Path;
//!
//! let session = Session::new().load_file(Path::new("photo.png"))?;
//! let session = session.pick(Coordinate::new(10.0, 20.0))?;
//! println!("Hex: {}, HSL: {}", session.color().hex(), session.color().hsl_string());
//! println!("Palette: {:?}", session.palette().colors());
//! # Ok::<(), pick_colors::PickerError>(())
//! ```

use palette::Srgb;
use serde::Serialize;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod history;
pub mod image_loader;
pub mod sampling;
pub mod session;

pub use color::{Cmyk, ColorConverter, ContrastAnalyzer, ContrastReport, Hsl};
pub use config::PickerConfig;
pub use error::{PickerError, Result};
pub use history::SelectionHistory;
pub use sampling::{Coordinate, Palette, PaletteExtractor, PixelBuffer, PixelSampler};
pub use session::Session;

/// Every representation of one picked color
///
/// Produced only by [`ColorConverter::rgb_to_color_data`], so the hex,
/// RGB, HSL and CMYK fields always describe the same color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorData {
    pub(crate) hex: String,
    pub(crate) rgb: Srgb<u8>,
    pub(crate) hsl: Hsl,
    pub(crate) cmyk: Cmyk,
}

impl ColorData {
    /// Convert RGB channels into a complete record
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorConverter::new().rgb_to_color_data(r, g, b)
    }

    /// Parse a hex string into a complete record
    pub fn from_hex(hex: &str) -> Result<Self> {
        let converter = ColorConverter::new();
        let rgb = converter.parse_hex(hex)?;
        Ok(converter.rgb_to_color_data(rgb.red, rgb.green, rgb.blue))
    }

    /// Lowercase `#rrggbb`
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// `rgb(r, g, b)`
    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.rgb.red, self.rgb.green, self.rgb.blue)
    }

    /// `hsl(h, s%, l%)`
    pub fn hsl_string(&self) -> String {
        self.hsl.to_string()
    }

    /// `C, M, Y, K`
    pub fn cmyk_string(&self) -> String {
        self.cmyk.to_string()
    }
}

impl Default for ColorData {
    fn default() -> Self {
        let (r, g, b) = constants::policy::DEFAULT_RGB;
        Self::from_rgb(r, g, b)
    }
}
