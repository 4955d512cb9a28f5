//! Pixel sampling in native image space
//!
//! The image is usually rendered at a scaled size while picks must read
//! the original pixel data. [`Coordinate::from_display`] performs that
//! mapping; [`PixelSampler`] then reads a single pixel's RGB channels.
//! Alpha is ignored throughout.

pub mod extractor;

pub use extractor::{Palette, PaletteExtractor, SamplePoint};

use image::{DynamicImage, GenericImageView, RgbImage, RgbaImage};
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{PickerError, Result};

/// Read-only access to a decoded 2D pixel grid
///
/// Implementors address pixels by integer coordinates in native image
/// space. Reading a pixel never mutates the buffer, so concurrent reads
/// are safe wherever the implementor is `Sync`.
pub trait PixelBuffer {
    /// Native `(width, height)` in pixels
    fn native_size(&self) -> (u32, u32);

    /// RGB channels of the pixel at `(x, y)`
    ///
    /// Implementations may panic when the pixel lies outside
    /// [`native_size`](PixelBuffer::native_size).
    fn rgb_at(&self, x: u32, y: u32) -> Srgb<u8>;
}

impl PixelBuffer for RgbaImage {
    fn native_size(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn rgb_at(&self, x: u32, y: u32) -> Srgb<u8> {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        Srgb::new(r, g, b)
    }
}

impl PixelBuffer for RgbImage {
    fn native_size(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn rgb_at(&self, x: u32, y: u32) -> Srgb<u8> {
        let [r, g, b] = self.get_pixel(x, y).0;
        Srgb::new(r, g, b)
    }
}

impl PixelBuffer for DynamicImage {
    fn native_size(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> Srgb<u8> {
        let [r, g, b, _] = GenericImageView::get_pixel(self, x, y).0;
        Srgb::new(r, g, b)
    }
}

/// Position within an image's native pixel grid
///
/// Components are non-negative and may be fractional; they are floored to
/// the containing pixel when sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Map a pointer position on the rendered image to native pixel space
    ///
    /// `native = display / display_size * native_size`, per axis.
    ///
    /// # Arguments
    ///
    /// * `display_x`, `display_y` - pointer position relative to the rendered image
    /// * `display_size` - rendered `(width, height)`, must be non-zero
    /// * `native_size` - decoded `(width, height)` in pixels
    pub fn from_display(
        display_x: f64,
        display_y: f64,
        display_size: (f64, f64),
        native_size: (u32, u32),
    ) -> Self {
        Self {
            x: display_x / display_size.0 * f64::from(native_size.0),
            y: display_y / display_size.1 * f64::from(native_size.1),
        }
    }

    /// Scale a normalized `[0, 1]` position by the native size
    pub fn from_normalized(nx: f64, ny: f64, native_size: (u32, u32)) -> Self {
        Self {
            x: nx * f64::from(native_size.0),
            y: ny * f64::from(native_size.1),
        }
    }

    /// Integer pixel containing this coordinate
    ///
    /// Negative and NaN components saturate to 0.
    pub fn to_pixel(self) -> (u32, u32) {
        (self.x.floor() as u32, self.y.floor() as u32)
    }
}

/// Reads single pixels from a [`PixelBuffer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelSampler;

impl PixelSampler {
    pub fn new() -> Self {
        Self
    }

    /// Read the RGB value at a native-space coordinate
    ///
    /// # Panics
    ///
    /// Out-of-bounds coordinates are a caller error. The standard buffers
    /// panic on them; use [`checked_sample`](Self::checked_sample) when the
    /// coordinate comes from untrusted input.
    pub fn sample<B: PixelBuffer + ?Sized>(&self, buffer: &B, at: Coordinate) -> Srgb<u8> {
        let (x, y) = at.to_pixel();
        buffer.rgb_at(x, y)
    }

    /// Read the RGB value at a native-space coordinate, checking bounds
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::CoordinateOutOfBounds`] if the coordinate is
    /// negative or lies outside the buffer
    pub fn checked_sample<B: PixelBuffer + ?Sized>(
        &self,
        buffer: &B,
        at: Coordinate,
    ) -> Result<Srgb<u8>> {
        let (width, height) = buffer.native_size();
        let (x, y) = at.to_pixel();
        let negative = at.x < 0.0 || at.y < 0.0 || at.x.is_nan() || at.y.is_nan();

        if negative || x >= width || y >= height {
            return Err(PickerError::CoordinateOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        Ok(buffer.rgb_at(x, y))
    }
}
