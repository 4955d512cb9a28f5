//! Error types for the pick_colors library

use thiserror::Error;

/// Result type alias for pick_colors operations
pub type Result<T> = std::result::Result<T, PickerError>;

/// Errors raised at the fallible edges of the engine
///
/// Conversion, contrast and history operations are total and never
/// produce these. They come from image acquisition, checked sampling,
/// hex parsing and configuration.
#[derive(Error, Debug)]
pub enum PickerError {
    /// Image file or payload could not be read or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A non-image payload reached the acquisition layer
    #[error("Unsupported payload type: {mime}")]
    UnsupportedPayload { mime: String },

    /// File extension does not name a supported image format
    #[error("Unknown image format for file: {path}")]
    UnknownFormat { path: String },

    /// Decoded image has no pixels to sample
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A pick was attempted before any image was loaded
    #[error("No image loaded")]
    NoImageLoaded,

    /// Sampling coordinate outside the native pixel grid
    #[error("Coordinate ({x}, {y}) outside image bounds {width}x{height}")]
    CoordinateOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Hex color string could not be parsed
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidHex { value: String, reason: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PickerError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if the session can simply carry on in its prior state
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PickerError::UnsupportedPayload { .. }
                | PickerError::CoordinateOutOfBounds { .. }
                | PickerError::InvalidHex { .. }
                | PickerError::ImageLoadError { .. }
                | PickerError::UnknownFormat { .. }
                | PickerError::EmptyImage { .. }
                | PickerError::NoImageLoaded
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PickerError::ImageLoadError { .. } | PickerError::UnknownFormat { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            PickerError::UnsupportedPayload { .. } => {
                "Only images can be dropped or pasted here.".to_string()
            }
            PickerError::EmptyImage { .. } => "The image contains no pixels.".to_string(),
            PickerError::NoImageLoaded => {
                "Load, drop or paste an image to start picking colors.".to_string()
            }
            PickerError::CoordinateOutOfBounds { .. } => {
                "Pick a point inside the image.".to_string()
            }
            PickerError::InvalidHex { value, .. } => {
                format!("'{}' is not a valid hex color. Use the form #rrggbb.", value)
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}
