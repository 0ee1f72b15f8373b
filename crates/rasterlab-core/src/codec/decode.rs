//! Image decoding from in-memory file bytes.

use std::io::Cursor;

use image::{ImageError, ImageReader};

use super::DecodeError;
use crate::ImageBuffer;

/// Decode an encoded image file into an [`ImageBuffer`].
///
/// The format is sniffed from the leading bytes. 8-bit grayscale images
/// decode to a single-channel buffer; everything else decodes to RGB.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// format, and `DecodeError::CorruptedFile` if decoding fails part way.
pub fn decode(bytes: &[u8]) -> Result<ImageBuffer, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    ImageBuffer::from_dynamic_image(img).map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, ImageFormat};
    use crate::Channels;

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode(&[]), Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_garbage() {
        let garbage = b"definitely not an image file";
        assert!(decode(garbage).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let img = ImageBuffer::rgb(8, 8, vec![200; 8 * 8 * 3]).unwrap();
        let png = encode(&img, ImageFormat::Png, 90).unwrap();
        let truncated = &png[..png.len() / 2];
        assert!(matches!(
            decode(truncated),
            Err(DecodeError::CorruptedFile(_))
        ));
    }

    #[test]
    fn test_decode_png_rgb() {
        let pixels: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let img = ImageBuffer::rgb(4, 3, pixels).unwrap();
        let png = encode(&img, ImageFormat::Png, 90).unwrap();

        let decoded = decode(&png).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_decode_png_gray_stays_gray() {
        let img = ImageBuffer::gray(3, 2, vec![0, 50, 100, 150, 200, 250]).unwrap();
        let png = encode(&img, ImageFormat::Png, 90).unwrap();

        let decoded = decode(&png).unwrap();
        assert_eq!(decoded.channels(), Channels::Gray);
        assert_eq!(decoded.pixels(), img.pixels());
    }

    #[test]
    fn test_decode_jpeg_dimensions() {
        let img = ImageBuffer::rgb(16, 8, vec![128; 16 * 8 * 3]).unwrap();
        let jpeg = encode(&img, ImageFormat::Jpeg, 90).unwrap();

        let decoded = decode(&jpeg).unwrap();
        assert_eq!(decoded.dimensions(), (16, 8));
        assert_eq!(decoded.channels(), Channels::Rgb);
    }
}
