//! Image encoding for saving.
//!
//! JPEG goes through the `image` crate's `JpegEncoder` so the quality setting
//! is honoured; the lossless formats use `write_buffer_with_format`.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{EncodeError, ImageFormat};
use crate::{Channels, ImageBuffer};

/// Encode a buffer to the given format.
///
/// # Arguments
///
/// * `image` - Buffer to encode (gray or RGB)
/// * `format` - Output container format
/// * `quality` - JPEG quality (1-100); ignored by the lossless formats
///
/// # Returns
///
/// The encoded file bytes.
pub fn encode(image: &ImageBuffer, format: ImageFormat, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    let pixels = image.pixels();

    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = image.pixel_count() * image.channels().count();
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let color = match image.channels() {
        Channels::Gray => ExtendedColorType::L8,
        Channels::Rgb => ExtendedColorType::Rgb8,
    };

    let mut buffer = Cursor::new(Vec::new());
    let failed = |e: image::ImageError| EncodeError::EncodingFailed {
        format,
        message: e.to_string(),
    };

    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
            encoder
                .write_image(pixels, width, height, color)
                .map_err(failed)?;
        }
        other => {
            image::write_buffer_with_format(
                &mut buffer,
                pixels,
                width,
                height,
                color,
                other.to_image_format(),
            )
            .map_err(failed)?;
        }
    }

    Ok(buffer.into_inner())
}
