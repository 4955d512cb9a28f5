//! Export snippets for a picked color
//!
//! Formatters take only the hex value and render it into a snippet for a
//! target platform. The result is plain text, ready for the clipboard.

use serde::{Deserialize, Serialize};

use crate::color::ColorConverter;
use crate::constants::rounding;
use crate::Result;

/// Target snippet format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    /// `--name: #rrggbb;`
    CssVariable,
    /// `'name': '#rrggbb',`
    TailwindConfig,
    /// `Color(red: 0.388, green: 0.400, blue: 0.945)`
    SwiftUi,
    /// `#rrggbb`
    Hex,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::CssVariable,
        ExportFormat::TailwindConfig,
        ExportFormat::SwiftUi,
        ExportFormat::Hex,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::CssVariable => "CSS",
            ExportFormat::TailwindConfig => "Tailwind",
            ExportFormat::SwiftUi => "SwiftUI",
            ExportFormat::Hex => "Hex",
        }
    }
}

/// Render a hex color as a snippet
///
/// The hex input is normalized to lowercase `#rrggbb` first, so shorthand
/// and uppercase input produce the same snippet. `name` is ignored by
/// formats that have no identifier.
///
/// # Errors
///
/// Returns [`PickerError::InvalidHex`](crate::PickerError::InvalidHex) if
/// `hex` is not a hex color
pub fn snippet(hex: &str, name: &str, format: ExportFormat) -> Result<String> {
    let converter = ColorConverter::new();
    let rgb = converter.parse_hex(hex)?;
    let hex = converter.rgb_to_hex(rgb);

    let text = match format {
        ExportFormat::CssVariable => format!("--{}: {};", name, hex),
        ExportFormat::TailwindConfig => format!("'{}': '{}',", name, hex),
        ExportFormat::SwiftUi => {
            let precision = rounding::EXPORT_CHANNEL_DECIMALS;
            format!(
                "Color(red: {:.p$}, green: {:.p$}, blue: {:.p$})",
                f64::from(rgb.red) / 255.0,
                f64::from(rgb.green) / 255.0,
                f64::from(rgb.blue) / 255.0,
                p = precision
            )
        }
        ExportFormat::Hex => hex,
    };

    Ok(text)
}
