//! Histogram equalization.
//!
//! The remap is built from the cumulative histogram. With `h` the
//! luminance histogram and `last` the count in the highest non-empty bin:
//!
//! ```text
//! step = (sum(h) - last) / 256          (integer division)
//! n    = step / 2
//! for i in 0..256:
//!     lut[i] = min(n / step, 255)
//!     n     += h[i]
//! ```
//!
//! Images with a single distinct level, or too few pixels for `step` to be
//! non-zero, come back unchanged (after grayscale conversion).

use super::{compute_histogram, Histogram, IntensityLut};
use crate::ImageBuffer;

/// Build the equalization LUT for a histogram.
pub fn equalization_lut(hist: &Histogram) -> IntensityLut {
    let occupied: Vec<u32> = hist.bins.iter().copied().filter(|&c| c > 0).collect();
    let last = match occupied.as_slice() {
        [] | [_] => return IntensityLut::identity(),
        [.., last] => *last,
    };

    let step = (hist.total() - last as u64) / 256;
    if step == 0 {
        return IntensityLut::identity();
    }

    let mut lut = [0u8; 256];
    let mut n = step / 2;
    for (i, lut_value) in lut.iter_mut().enumerate() {
        *lut_value = (n / step).min(255) as u8;
        n += hist.bins[i] as u64;
    }
    IntensityLut { lut }
}

/// Equalize the luminance histogram of an image.
///
/// Returns a single-channel buffer.
pub fn equalize_histogram(image: &ImageBuffer) -> ImageBuffer {
    let hist = compute_histogram(image);
    equalization_lut(&hist).apply(image)
}
