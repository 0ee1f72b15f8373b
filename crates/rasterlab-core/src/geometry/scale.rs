//! Resampled resizing by a uniform scale factor.
//!
//! Uses the `image` crate's separable resampling filters. The default filter
//! is Lanczos3; exact output pixel values depend on the filter chosen.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{Channels, ImageBuffer};

/// Filter type for resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Largest buffer a resize may allocate, in bytes.
///
/// Matches the `max_alloc` default the decoder applies through `image::Limits`.
pub const MAX_RESIZE_BYTES: u64 = 512 * 1024 * 1024;

/// Output dimensions for a scale factor: `floor(w * factor) x floor(h * factor)`.
///
/// # Errors
///
/// Returns [`Error::InvalidScale`] if the factor is not a positive finite
/// number or either resulting dimension would be zero.
pub fn scaled_dimensions(width: u32, height: u32, factor: f64) -> Result<(u32, u32)> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidScale(factor));
    }

    let new_w = (width as f64 * factor).floor();
    let new_h = (height as f64 * factor).floor();
    if new_w < 1.0 || new_h < 1.0 || new_w > u32::MAX as f64 || new_h > u32::MAX as f64 {
        return Err(Error::InvalidScale(factor));
    }

    Ok((new_w as u32, new_h as u32))
}

/// Resize an image by `factor` using the given filter.
///
/// # Arguments
///
/// * `image` - The source image
/// * `factor` - Uniform scale factor (> 0)
/// * `filter` - Interpolation filter to use
///
/// # Returns
///
/// A new buffer with the same channel layout as the input.
///
/// # Errors
///
/// Returns [`Error::InvalidScale`] for the cases of [`scaled_dimensions`], and
/// when resizing would allocate more than [`MAX_RESIZE_BYTES`].
pub fn scale(image: &ImageBuffer, factor: f64, filter: FilterType) -> Result<ImageBuffer> {
    let (new_w, new_h) = scaled_dimensions(image.width(), image.height(), factor)?;

    // Fast path: if dimensions match, just clone
    if (new_w, new_h) == image.dimensions() {
        return Ok(image.clone());
    }

    let (width, height) = image.dimensions();
    match resize_allocation(width, new_w, new_h, image.channels(), filter) {
        Some(bytes) if bytes <= MAX_RESIZE_BYTES => {}
        _ => return Err(Error::InvalidScale(factor)),
    }

    let filter = filter.to_image_filter();
    let pixels = image.pixels().to_vec();
    let mismatch = || Error::InvalidDimensions {
        width,
        height,
        channels: image.channels().count(),
        len: image.pixels().len(),
    };

    match image.channels() {
        Channels::Gray => {
            let src = image::GrayImage::from_raw(width, height, pixels).ok_or_else(mismatch)?;
            let resized = image::imageops::resize(&src, new_w, new_h, filter);
            ImageBuffer::from_gray_image(resized)
        }
        Channels::Rgb => {
            let src = image::RgbImage::from_raw(width, height, pixels).ok_or_else(mismatch)?;
            let resized = image::imageops::resize(&src, new_w, new_h, filter);
            ImageBuffer::from_rgb_image(resized)
        }
    }
}

/// Largest single buffer `imageops::resize` allocates, or `None` on overflow.
///
/// Separable filters first resample columns into an `f32` RGBA image of
/// `width x new_h` (16 bytes per pixel); nearest writes the output directly.
fn resize_allocation(
    width: u32,
    new_w: u32,
    new_h: u32,
    channels: Channels,
    filter: FilterType,
) -> Option<u64> {
    let output = (new_w as u64)
        .checked_mul(new_h as u64)?
        .checked_mul(channels.count() as u64)?;
    match filter {
        FilterType::Nearest => Some(output),
        FilterType::Bilinear | FilterType::Lanczos3 => {
            let intermediate = (width as u64).checked_mul(new_h as u64)?.checked_mul(16)?;
            Some(output.max(intermediate))
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Scaling up by f then back by 1/f returns to within one pixel
        /// of the original size.
        #[test]
        fn prop_scale_round_trip_dimensions(
            (w, h) in (8u32..=64, 8u32..=64),
            factor in 1.0f64..=3.0,
        ) {
            let img = ImageBuffer::gray(w, h, vec![100; (w * h) as usize]).unwrap();
            let up = scale(&img, factor, FilterType::Bilinear).unwrap();
            let back = scale(&up, 1.0 / factor, FilterType::Bilinear).unwrap();

            prop_assert!((back.width() as i64 - w as i64).abs() <= 1,
                "width {} -> {} -> {}", w, up.width(), back.width());
            prop_assert!((back.height() as i64 - h as i64).abs() <= 1,
                "height {} -> {} -> {}", h, up.height(), back.height());
        }
    }
}
