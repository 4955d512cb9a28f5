//! Image acquisition: decoding files and pasted/dropped payloads
//!
//! This module provides the entry points that turn a file or an in-memory
//! payload into a native-resolution RGBA buffer ready for sampling.
//!
//! ## Supported Formats
//!
//! Via the `image` crate:
//! - JPEG, PNG, GIF (first frame), WebP, TIFF, BMP, ICO, TGA, PNM, QOI
//!
//! ## Design
//!
//! Payloads are accepted only when their MIME type is `image/*`; anything
//! else is rejected with [`PickerError::UnsupportedPayload`] before any
//! decoding happens. A failed decode returns an error and hands nothing to
//! the sampler, so callers keep their previous image.

use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::{info, warn};

use crate::error::{PickerError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// ICO image
    Ico,
    /// TGA image
    Tga,
    /// PNM image (PBM, PGM, PPM)
    Pnm,
    /// QOI image
    Qoi,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "ico" => Some(ImageFormat::Ico),
            "tga" => Some(ImageFormat::Tga),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
            "qoi" => Some(ImageFormat::Qoi),
            _ => None,
        }
    }

    /// Detect format from a MIME type such as `image/png`
    ///
    /// Parameters after `;` and letter case are ignored.
    pub fn from_mime_type(mime: &str) -> Option<ImageFormat> {
        match essence(mime).as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageFormat::Jpeg),
            "image/png" | "image/apng" => Some(ImageFormat::Png),
            "image/gif" => Some(ImageFormat::Gif),
            "image/webp" => Some(ImageFormat::WebP),
            "image/tiff" => Some(ImageFormat::Tiff),
            "image/bmp" | "image/x-bmp" => Some(ImageFormat::Bmp),
            "image/x-icon" | "image/vnd.microsoft.icon" => Some(ImageFormat::Ico),
            "image/x-tga" | "image/x-targa" => Some(ImageFormat::Tga),
            "image/x-portable-anymap" | "image/x-portable-bitmap" | "image/x-portable-graymap"
            | "image/x-portable-pixmap" => Some(ImageFormat::Pnm),
            "image/qoi" | "image/x-qoi" => Some(ImageFormat::Qoi),
            _ => None,
        }
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Tiff => image::ImageFormat::Tiff,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
            ImageFormat::Ico => image::ImageFormat::Ico,
            ImageFormat::Tga => image::ImageFormat::Tga,
            ImageFormat::Pnm => image::ImageFormat::Pnm,
            ImageFormat::Qoi => image::ImageFormat::Qoi,
        }
    }
}

/// Check whether a payload MIME type denotes an image
pub fn is_image_mime(mime: &str) -> bool {
    essence(mime).starts_with("image/")
}

fn essence(mime: &str) -> String {
    mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase()
}

/// Load an image from disk as an RGBA buffer at native resolution
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not a supported format
/// - The file cannot be opened
/// - Decoding fails or yields an image without pixels
///
/// # Example
///
/// ```rust,no_run
/// use pick_colors::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.png"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), pick_colors::PickerError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let format = ImageFormat::from_extension(path).ok_or_else(|| PickerError::UnknownFormat {
        path: path.display().to_string(),
    })?;

    let mut reader = ImageReader::open(path).map_err(|e| {
        PickerError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    reader.set_format(format.to_image_format());

    let decoded = reader.decode().map_err(|e| {
        PickerError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let rgba = ensure_non_empty(decoded.to_rgba8())?;
    info!(
        path = %path.display(),
        width = rgba.width(),
        height = rgba.height(),
        "Loaded image"
    );
    Ok(rgba)
}

/// Decode a pasted or dropped payload
///
/// The MIME type selects the decoder when it names a known format;
/// other `image/*` types fall back to content sniffing.
///
/// # Errors
///
/// - [`PickerError::UnsupportedPayload`] for non-image MIME types
/// - [`PickerError::ImageLoadError`] when decoding fails
/// - [`PickerError::EmptyImage`] when the decoded image has no pixels
pub fn load_from_bytes(bytes: &[u8], mime: &str) -> Result<RgbaImage> {
    if !is_image_mime(mime) {
        warn!(mime, "Ignoring non-image payload");
        return Err(PickerError::UnsupportedPayload {
            mime: mime.to_string(),
        });
    }

    let decoded = match ImageFormat::from_mime_type(mime) {
        Some(format) => image::load_from_memory_with_format(bytes, format.to_image_format()),
        None => image::load_from_memory(bytes),
    }
    .map_err(|e| PickerError::image_load(format!("Failed to decode {} payload", mime), e))?;

    let rgba = ensure_non_empty(decoded.to_rgba8())?;
    info!(
        mime,
        bytes = bytes.len(),
        width = rgba.width(),
        height = rgba.height(),
        "Decoded image payload"
    );
    Ok(rgba)
}

fn ensure_non_empty(image: RgbaImage) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PickerError::EmptyImage { width, height });
    }
    Ok(image)
}
