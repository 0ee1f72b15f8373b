//! Rectangular cropping in pixel coordinates.

use crate::error::{Error, Result};
use crate::ImageBuffer;

/// Crop an image to the rectangle `[left, right) x [upper, lower)`.
///
/// # Arguments
///
/// * `image` - Source image
/// * `left` - First column kept
/// * `upper` - First row kept
/// * `right` - One past the last column kept
/// * `lower` - One past the last row kept
///
/// # Errors
///
/// Returns [`Error::InvalidRegion`] unless `left < right <= width` and
/// `upper < lower <= height`.
///
/// # Example
///
/// ```ignore
/// let img = ImageBuffer::gray(4, 2, vec![10, 20, 30, 40, 50, 60, 70, 80])?;
/// let cropped = crop(&img, 1, 0, 3, 2)?;
/// assert_eq!(cropped.pixels(), &[20, 30, 60, 70]);
/// ```
pub fn crop(image: &ImageBuffer, left: u32, upper: u32, right: u32, lower: u32) -> Result<ImageBuffer> {
    let (width, height) = image.dimensions();
    if left >= right || upper >= lower || right > width || lower > height {
        return Err(Error::InvalidRegion {
            left,
            upper,
            right,
            lower,
            width,
            height,
        });
    }

    let n = image.channels().count();
    let out_width = right - left;
    let out_height = lower - upper;
    let row_bytes = out_width as usize * n;
    let src_stride = width as usize * n;
    let src = image.pixels();

    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for y in upper..lower {
        let start = y as usize * src_stride + left as usize * n;
        output.extend_from_slice(&src[start..start + row_bytes]);
    }

    Ok(ImageBuffer::from_parts(out_width, out_height, image.channels(), output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Channels;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> ImageBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        ImageBuffer::rgb(width, height, pixels).unwrap()
    }

    #[test]
    fn test_crop_gray_scenario() {
        let img = ImageBuffer::gray(4, 2, vec![10, 20, 30, 40, 50, 60, 70, 80]).unwrap();
        let result = crop(&img, 1, 0, 3, 2).unwrap();

        assert_eq!(result.dimensions(), (2, 2));
        assert_eq!(result.pixels(), &[20, 30, 60, 70]);
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(10, 10);
        let result = crop(&img, 0, 0, 10, 10).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_crop_pixel_values_preserved() {
        let img = test_image(10, 10);
        let result = crop(&img, 3, 3, 7, 7).unwrap();

        assert_eq!(result.dimensions(), (4, 4));
        assert_eq!(result.channels(), Channels::Rgb);
        // First pixel comes from (3, 3): 3 * 10 + 3 = 33
        assert_eq!(result.get_pixel(0, 0).unwrap(), &[33, 33, 33]);
        // Last pixel comes from (6, 6): 66
        assert_eq!(result.get_pixel(3, 3).unwrap(), &[66, 66, 66]);
    }

    #[test]
    fn test_crop_single_pixel() {
        let img = test_image(5, 5);
        let result = crop(&img, 4, 4, 5, 5).unwrap();
        assert_eq!(result.dimensions(), (1, 1));
        assert_eq!(result.pixels(), &[24, 24, 24]);
    }

    #[test]
    fn test_crop_rejects_empty_region() {
        let img = test_image(10, 10);
        assert!(matches!(crop(&img, 5, 0, 5, 10), Err(Error::InvalidRegion { .. })));
        assert!(matches!(crop(&img, 0, 5, 10, 5), Err(Error::InvalidRegion { .. })));
    }

    #[test]
    fn test_crop_rejects_inverted_region() {
        let img = test_image(10, 10);
        assert!(crop(&img, 6, 0, 2, 10).is_err());
        assert!(crop(&img, 0, 6, 10, 2).is_err());
    }

    #[test]
    fn test_crop_rejects_out_of_bounds() {
        let img = test_image(10, 10);
        assert!(crop(&img, 0, 0, 11, 10).is_err());
        assert!(crop(&img, 0, 0, 10, 11).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
