//! Fixed-point palette extraction
//!
//! The palette is read from a hand-chosen set of normalized sample points,
//! one color per point, in point order. No clustering and no
//! deduplication: two points over identical pixels give identical entries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Coordinate, PixelBuffer, PixelSampler};
use crate::color::ColorConverter;
use crate::constants::policy;
use crate::{PickerError, Result};

/// Normalized sample position, both components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The reference five-point policy
    pub fn reference() -> Vec<SamplePoint> {
        policy::PALETTE_SAMPLE_POINTS
            .iter()
            .map(|&(x, y)| SamplePoint::new(x, y))
            .collect()
    }
}

/// Ordered hex colors derived from one image
///
/// Regenerated wholesale on each image load, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }
}

/// Palette extractor sampling a fixed list of points
#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    sample_points: Vec<SamplePoint>,
    sampler: PixelSampler,
    converter: ColorConverter,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteExtractor {
    /// Create an extractor using the reference sample points
    pub fn new() -> Self {
        Self::with_points(SamplePoint::reference())
    }

    /// Create an extractor with custom sample points
    pub fn with_points(sample_points: Vec<SamplePoint>) -> Self {
        Self {
            sample_points,
            sampler: PixelSampler::new(),
            converter: ColorConverter::new(),
        }
    }

    pub fn sample_points(&self) -> &[SamplePoint] {
        &self.sample_points
    }

    /// Derive the palette of an image
    ///
    /// Each point is scaled by the native size and floored to a pixel. A
    /// point at exactly 1.0 reads the last row or column.
    ///
    /// # Returns
    ///
    /// One hex entry per sample point, in sample-point order
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::EmptyImage`] if the buffer has no pixels
    pub fn extract<B: PixelBuffer + ?Sized>(&self, buffer: &B) -> Result<Palette> {
        let (width, height) = buffer.native_size();
        if width == 0 || height == 0 {
            return Err(PickerError::EmptyImage { width, height });
        }

        let colors: Vec<String> = self
            .sample_points
            .iter()
            .map(|point| {
                let (x, y) =
                    Coordinate::from_normalized(point.x, point.y, (width, height)).to_pixel();
                let at = Coordinate::new(f64::from(x.min(width - 1)), f64::from(y.min(height - 1)));
                self.converter.rgb_to_hex(self.sampler.sample(buffer, at))
            })
            .collect();

        debug!(
            width,
            height,
            points = self.sample_points.len(),
            palette = ?colors,
            "Extracted palette"
        );

        Ok(Palette { colors })
    }
}
