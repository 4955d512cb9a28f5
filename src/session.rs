//! Interactive picking session
//!
//! A [`Session`] holds everything a picker UI shows: the loaded image, the
//! current color with its contrast report, the palette and the history.
//! Every operation takes `&self` and returns a new session, so a caller
//! only ever observes the old value or the new one. Failed operations
//! return an error and leave the caller's session untouched.

use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;
use palette::Srgb;
use tracing::{debug, info};

use crate::color::{ColorConverter, ContrastAnalyzer, ContrastReport};
use crate::config::PickerConfig;
use crate::history::SelectionHistory;
use crate::image_loader;
use crate::sampling::{Coordinate, Palette, PaletteExtractor, PixelBuffer, PixelSampler};
use crate::{ColorData, PickerError, Result};

/// Session state, updated by whole-value replacement
#[derive(Debug, Clone)]
pub struct Session {
    config: PickerConfig,
    image: Option<Arc<RgbaImage>>,
    color: ColorData,
    contrast: ContrastReport,
    palette: Palette,
    history: SelectionHistory,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session with the reference policy
    pub fn new() -> Self {
        Self::from_valid_config(PickerConfig::default())
    }

    /// Fresh session with a custom policy
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidParameter`] if the configuration fails validation
    pub fn with_config(config: PickerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: PickerConfig) -> Self {
        let default = config.default_color;
        let rgb = Srgb::new(default.r, default.g, default.b);
        let history = SelectionHistory::with_capacity(config.history.capacity);

        Self {
            image: None,
            color: ColorConverter::new().rgb_to_color_data(rgb.red, rgb.green, rgb.blue),
            contrast: ContrastAnalyzer::new().analyze(rgb),
            palette: Palette::default(),
            history,
            config,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Currently loaded image, at native resolution
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_deref()
    }

    /// Currently selected color
    pub fn color(&self) -> &ColorData {
        &self.color
    }

    pub fn contrast(&self) -> &ContrastReport {
        &self.contrast
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    /// Start over with a decoded image
    ///
    /// Extracts the palette once and clears the history. The current color
    /// is kept until the first pick.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::EmptyImage`] if the image has no pixels
    pub fn load_image(&self, image: RgbaImage) -> Result<Session> {
        let extractor = PaletteExtractor::with_points(self.config.palette.sample_points.clone());
        let palette = extractor.extract(&image)?;
        let (width, height) = image.native_size();

        info!(width, height, palette_len = palette.len(), "Started session on new image");

        Ok(Session {
            config: self.config.clone(),
            image: Some(Arc::new(image)),
            color: self.color.clone(),
            contrast: self.contrast,
            palette,
            history: self.history.cleared(),
        })
    }

    /// Decode an image file and start over with it
    pub fn load_file(&self, path: &Path) -> Result<Session> {
        self.load_image(image_loader::load_image(path)?)
    }

    /// Decode a pasted or dropped payload and start over with it
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::UnsupportedPayload`] for non-image payloads;
    /// callers drop those silently and keep the current session
    pub fn load_payload(&self, bytes: &[u8], mime: &str) -> Result<Session> {
        self.load_image(image_loader::load_from_bytes(bytes, mime)?)
    }

    /// Pick the pixel at a native-space coordinate
    ///
    /// The picked color becomes current and its hex is recorded in the history.
    ///
    /// # Errors
    ///
    /// - [`PickerError::NoImageLoaded`] before any image was loaded
    /// - [`PickerError::CoordinateOutOfBounds`] outside the image
    pub fn pick(&self, at: Coordinate) -> Result<Session> {
        let image = self.image.as_deref().ok_or(PickerError::NoImageLoaded)?;
        let rgb = PixelSampler::new().checked_sample(image, at)?;

        let mut next = self.with_color(rgb);
        next.history = self.history.record(next.color.hex());

        debug!(x = at.x, y = at.y, hex = next.color.hex(), "Picked color");
        Ok(next)
    }

    /// Pick the pixel under a pointer on the rendered image
    ///
    /// # Arguments
    ///
    /// * `display_x`, `display_y` - pointer position relative to the rendered image
    /// * `display_size` - rendered `(width, height)`
    ///
    /// # Errors
    ///
    /// - [`PickerError::InvalidParameter`] if either display dimension is
    ///   zero, negative or not finite
    /// - otherwise as [`pick`](Self::pick)
    pub fn pick_display(
        &self,
        display_x: f64,
        display_y: f64,
        display_size: (f64, f64),
    ) -> Result<Session> {
        let image = self.image.as_deref().ok_or(PickerError::NoImageLoaded)?;
        let (display_width, display_height) = display_size;
        if !(display_width.is_finite() && display_width > 0.0) {
            return Err(PickerError::invalid_parameter("display_width", display_width));
        }
        if !(display_height.is_finite() && display_height > 0.0) {
            return Err(PickerError::invalid_parameter("display_height", display_height));
        }

        let at = Coordinate::from_display(display_x, display_y, display_size, image.native_size());
        self.pick(at)
    }

    /// Replace the current color from HSL sliders
    ///
    /// Slider edits are not recorded in the history.
    #[must_use]
    pub fn adjust_hsl(&self, hue: u16, saturation: u8, lightness: u8) -> Session {
        let rgb = ColorConverter::new().hsl_to_rgb(
            f64::from(hue % 360),
            f64::from(saturation.min(100)),
            f64::from(lightness.min(100)),
        );
        debug!(hue, saturation, lightness, "Adjusted color from sliders");
        self.with_color(rgb)
    }

    /// Make a palette or history swatch the current color
    ///
    /// Choosing an existing swatch is not recorded again.
    pub fn select_hex(&self, hex: &str) -> Result<Session> {
        let rgb = ColorConverter::new().parse_hex(hex)?;
        Ok(self.with_color(rgb))
    }

    /// Start a new empty session with the same configuration
    #[must_use]
    pub fn reset(&self) -> Session {
        info!("Reset session");
        Self::from_valid_config(self.config.clone())
    }

    fn with_color(&self, rgb: Srgb<u8>) -> Session {
        Session {
            config: self.config.clone(),
            image: self.image.clone(),
            color: ColorConverter::new().rgb_to_color_data(rgb.red, rgb.green, rgb.blue),
            contrast: ContrastAnalyzer::new().analyze(rgb),
            palette: self.palette.clone(),
            history: self.history.clone(),
        }
    }
}
