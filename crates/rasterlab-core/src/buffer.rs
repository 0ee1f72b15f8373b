//! The pixel buffer every operation consumes and produces.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::luminance::calculate_luminance_u8;

/// Number of interleaved samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Channels {
    /// Single 8-bit luminance sample.
    Gray = 1,
    /// 8-bit red, green, blue.
    Rgb = 3,
}

impl Channels {
    /// Samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        self as usize
    }
}

/// An owned 8-bit raster image.
///
/// Pixels are stored row-major with channels interleaved. The length of
/// `pixels` is always `width * height * channels`, and both dimensions are
/// non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a buffer from raw pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if a dimension is zero or the
    /// pixel data length doesn't match.
    pub fn new(width: u32, height: u32, channels: Channels, pixels: Vec<u8>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * channels.count();
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(Error::InvalidDimensions {
                width,
                height,
                channels: channels.count(),
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Create a buffer with every sample set to `value`.
    pub fn filled(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let len = (width as usize) * (height as usize) * channels.count();
        Self::new(width, height, channels, vec![value; len])
    }

    /// Create a single-channel buffer.
    pub fn gray(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        Self::new(width, height, Channels::Gray, pixels)
    }

    /// Create an RGB buffer.
    pub fn rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        Self::new(width, height, Channels::Rgb, pixels)
    }

    /// Build an output buffer whose size the caller has already computed.
    pub(crate) fn from_parts(width: u32, height: u32, channels: Channels, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * channels.count(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            channels,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Raw interleaved pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let n = self.channels.count();
        Ok(((y as usize) * (self.width as usize) + x as usize) * n)
    }

    /// Samples of the pixel at `(x, y)`; one byte for gray, three for RGB.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<&[u8]> {
        let idx = self.offset(x, y)?;
        Ok(&self.pixels[idx..idx + self.channels.count()])
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the image and
    /// [`Error::InvalidParameter`] if `value` has the wrong number of samples.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: &[u8]) -> Result<()> {
        let n = self.channels.count();
        if value.len() != n {
            return Err(Error::InvalidParameter(format!(
                "expected {} sample(s) per pixel, got {}",
                n,
                value.len()
            )));
        }
        let idx = self.offset(x, y)?;
        self.pixels[idx..idx + n].copy_from_slice(value);
        Ok(())
    }

    /// Convert to a single-channel luminance buffer.
    ///
    /// Gray buffers are returned as a copy. RGB uses the BT.601 weights from
    /// [`crate::luminance`].
    pub fn to_grayscale(&self) -> ImageBuffer {
        match self.channels {
            Channels::Gray => self.clone(),
            Channels::Rgb => {
                let pixels = self
                    .pixels
                    .chunks_exact(3)
                    .map(|c| calculate_luminance_u8(c[0], c[1], c[2]))
                    .collect();
                Self::from_parts(self.width, self.height, Channels::Gray, pixels)
            }
        }
    }

    /// Convert to RGB, replicating the gray sample into all three channels.
    pub fn to_rgb(&self) -> ImageBuffer {
        match self.channels {
            Channels::Rgb => self.clone(),
            Channels::Gray => {
                let pixels = self.pixels.iter().flat_map(|&v| [v, v, v]).collect();
                Self::from_parts(self.width, self.height, Channels::Rgb, pixels)
            }
        }
    }

    /// Convert to the image crate's dynamic image type.
    pub fn to_dynamic_image(&self) -> Result<image::DynamicImage> {
        let pixels = self.pixels.clone();
        let dynamic = match self.channels {
            Channels::Gray => image::GrayImage::from_raw(self.width, self.height, pixels)
                .map(image::DynamicImage::ImageLuma8),
            Channels::Rgb => image::RgbImage::from_raw(self.width, self.height, pixels)
                .map(image::DynamicImage::ImageRgb8),
        };
        dynamic.ok_or(Error::InvalidDimensions {
            width: self.width,
            height: self.height,
            channels: self.channels.count(),
            len: self.pixels.len(),
        })
    }

    /// Create from an image crate gray image.
    pub fn from_gray_image(img: image::GrayImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::gray(width, height, img.into_raw())
    }

    /// Create from an image crate RGB image.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::rgb(width, height, img.into_raw())
    }

    /// Create from any dynamic image.
    ///
    /// 8-bit gray (with or without alpha) stays single-channel; every other
    /// color type is converted to RGB and alpha is dropped.
    pub fn from_dynamic_image(img: image::DynamicImage) -> Result<Self> {
        match img {
            image::DynamicImage::ImageLuma8(gray) => Self::from_gray_image(gray),
            luma_alpha @ image::DynamicImage::ImageLumaA8(_) => Self::from_gray_image(luma_alpha.into_luma8()),
            other => Self::from_rgb_image(other.into_rgb8()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        assert!(ImageBuffer::gray(2, 2, vec![0; 4]).is_ok());
        assert!(matches!(
            ImageBuffer::gray(2, 2, vec![0; 3]),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            ImageBuffer::rgb(2, 2, vec![0; 4]),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(ImageBuffer::gray(0, 5, vec![]).is_err());
        assert!(ImageBuffer::rgb(5, 0, vec![]).is_err());
    }

    #[test]
    fn test_get_pixel() {
        let img = ImageBuffer::rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.get_pixel(0, 0).unwrap(), &[1, 2, 3]);
        assert_eq!(img.get_pixel(1, 0).unwrap(), &[4, 5, 6]);
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let img = ImageBuffer::gray(2, 2, vec![0; 4]).unwrap();
        assert!(matches!(img.get_pixel(2, 0), Err(Error::OutOfBounds { .. })));
        assert!(matches!(img.get_pixel(0, 2), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_set_pixel() {
        let mut img = ImageBuffer::gray(2, 2, vec![0; 4]).unwrap();
        img.set_pixel(1, 1, &[200]).unwrap();
        assert_eq!(img.pixels(), &[0, 0, 0, 200]);
    }

    #[test]
    fn test_set_pixel_errors() {
        let mut img = ImageBuffer::rgb(1, 1, vec![0; 3]).unwrap();
        assert!(matches!(
            img.set_pixel(1, 0, &[1, 2, 3]),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            img.set_pixel(0, 0, &[1]),
            Err(Error::InvalidParameter(_))
        ));
        // Failed writes leave the buffer untouched
        assert_eq!(img.pixels(), &[0, 0, 0]);
    }

    #[test]
    fn test_to_grayscale_rgb() {
        let img = ImageBuffer::rgb(3, 1, vec![255, 0, 0, 0, 255, 0, 128, 128, 128]).unwrap();
        let gray = img.to_grayscale();
        assert_eq!(gray.channels(), Channels::Gray);
        assert_eq!(gray.pixels(), &[76, 150, 128]);
    }

    #[test]
    fn test_to_grayscale_gray_is_copy() {
        let img = ImageBuffer::gray(2, 1, vec![7, 9]).unwrap();
        assert_eq!(img.to_grayscale(), img);
    }

    #[test]
    fn test_to_rgb_replicates() {
        let img = ImageBuffer::gray(2, 1, vec![7, 9]).unwrap();
        let rgb = img.to_rgb();
        assert_eq!(rgb.pixels(), &[7, 7, 7, 9, 9, 9]);
        assert_eq!(rgb.to_grayscale(), img);
    }

    #[test]
    fn test_dynamic_image_conversion() {
        let img = ImageBuffer::rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let dynamic = img.to_dynamic_image().unwrap();
        assert_eq!(dynamic.width(), 2);
        assert_eq!(ImageBuffer::from_dynamic_image(dynamic).unwrap(), img);

        let gray = ImageBuffer::gray(1, 2, vec![10, 20]).unwrap();
        let back = ImageBuffer::from_dynamic_image(gray.to_dynamic_image().unwrap()).unwrap();
        assert_eq!(back, gray);
    }

    #[test]
    fn test_dynamic_rgba_drops_alpha() {
        let rgba = image::RgbaImage::from_raw(1, 1, vec![10, 20, 30, 40]).unwrap();
        let img = ImageBuffer::from_dynamic_image(image::DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(img.channels(), Channels::Rgb);
        assert_eq!(img.pixels(), &[10, 20, 30]);
    }
}
