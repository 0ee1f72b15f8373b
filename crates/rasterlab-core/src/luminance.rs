//! Luminance calculation using ITU-R BT.601 coefficients.
//!
//! Every grayscale conversion in the crate goes through
//! [`calculate_luminance_u8`], so histogram, intensity mapping and
//! convolution all agree on the same gray value for a given RGB sample.
//!
//! The weights are applied in 16.16 fixed point:
//!
//! ```text
//! L = (19595 * R + 38470 * G + 7471 * B + 32768) >> 16
//! ```
//!
//! which is `0.299 R + 0.587 G + 0.114 B` rounded to the nearest integer.
//! The fixed-point weights sum to exactly 65536.

const FIXED_R: u32 = 19595;
const FIXED_G: u32 = 38470;
const FIXED_B: u32 = 7471;
const FIXED_HALF: u32 = 1 << 15;

/// Calculate luminance from u8 RGB values (0 to 255).
///
/// # Arguments
/// * `r` - Red channel value (0-255)
/// * `g` - Green channel value (0-255)
/// * `b` - Blue channel value (0-255)
///
/// # Returns
/// Luminance value (0-255)
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = FIXED_R * r as u32 + FIXED_G * g as u32 + FIXED_B * b as u32 + FIXED_HALF;
    // Max is 255 * 65536 + 32768, which shifts down to 255.
    (lum >> 16) as u8
}
