//! Configuration for a picking session.
//!
//! All tunable policy values (palette sample points, history capacity and
//! the color shown before the first pick) live here, grouped by the
//! component that consumes them.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use pick_colors::PickerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PickerConfig::from_json_file(Path::new("picker.json"))?;
//!
//! // Or use the reference policy
//! let config = PickerConfig::default();
//! # Ok::<(), pick_colors::PickerError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::policy;
use crate::sampling::SamplePoint;
use crate::{PickerError, Result};

/// Complete session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Palette extraction configuration
    pub palette: PaletteConfig,

    /// Selection history configuration
    pub history: HistoryConfig,

    /// Color shown before any pick
    #[serde(default = "RgbColor::reference_default")]
    pub default_color: RgbColor,
}

/// Palette extraction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Normalized points sampled on image load, in output order
    pub sample_points: Vec<SamplePoint>,
}

/// Selection history parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of remembered colors
    pub capacity: usize,
}

/// RGB triple for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    fn reference_default() -> Self {
        let (r, g, b) = policy::DEFAULT_RGB;
        Self { r, g, b }
    }
}

impl Default for PickerConfig {
    /// The reference policy: five fixed sample points, twelve history slots, #6366f1
    fn default() -> Self {
        Self {
            palette: PaletteConfig {
                sample_points: SamplePoint::reference(),
            },
            history: HistoryConfig {
                capacity: policy::HISTORY_CAPACITY,
            },
            default_color: RgbColor::reference_default(),
        }
    }
}

impl PickerConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidParameter`] for an empty sample point
    /// list, a sample point outside [0, 1], or a zero history capacity
    pub fn validate(&self) -> Result<()> {
        if self.palette.sample_points.is_empty() {
            return Err(PickerError::invalid_parameter("palette.sample_points", "[]"));
        }

        for (index, point) in self.palette.sample_points.iter().enumerate() {
            let in_range = |v: f64| (0.0..=1.0).contains(&v);
            if !in_range(point.x) || !in_range(point.y) {
                return Err(PickerError::invalid_parameter(
                    format!("palette.sample_points[{}]", index),
                    format!("({}, {})", point.x, point.y),
                ));
            }
        }

        if self.history.capacity == 0 {
            return Err(PickerError::invalid_parameter("history.capacity", 0));
        }

        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PickerError::config(format!("Failed to read {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| PickerError::config("Failed to parse configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PickerError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            PickerError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}
