//! 2D kernel filtering on the luminance channel.
//!
//! # Algorithm
//!
//! The kernel is applied as a cross-correlation (it is not flipped), with its
//! anchor at the centre cell `(cols / 2, rows / 2)`:
//!
//! ```text
//! dst(x, y) = sum over (i, j) of k(i, j) * src(x + j - ax, y + i - ay)
//! ```
//!
//! Samples that fall outside the image are resolved by a [`BorderMode`].
//! The sum is accumulated in `f64`, rounded half-to-even and saturated to
//! `[0, 255]`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{Channels, ImageBuffer};

/// How samples outside the image are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Outside samples read as a fixed value.
    Constant(u8),
    /// Clamp to the nearest edge pixel: `aaa|abcd|ddd`.
    Replicate,
    /// Mirror around the edge pixel without repeating it: `dcb|abcd|cba`.
    Reflect,
}

impl Default for BorderMode {
    fn default() -> Self {
        BorderMode::Constant(0)
    }
}

impl BorderMode {
    /// Map a possibly out-of-range coordinate to an in-range one.
    ///
    /// Returns `None` when the sample should take the constant border value.
    #[inline]
    fn resolve(self, pos: i64, len: i64) -> Option<usize> {
        if (0..len).contains(&pos) {
            return Some(pos as usize);
        }
        match self {
            BorderMode::Constant(_) => None,
            BorderMode::Replicate => Some(pos.clamp(0, len - 1) as usize),
            BorderMode::Reflect => {
                if len == 1 {
                    return Some(0);
                }
                let period = 2 * (len - 1);
                let p = pos.rem_euclid(period);
                let mirrored = if p >= len { period - p } else { p };
                Some(mirrored as usize)
            }
        }
    }
}

/// A rectangular filter kernel stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawKernel")]
pub struct Kernel {
    rows: usize,
    cols: usize,
    weights: Vec<f64>,
}

/// Unvalidated kernel as it arrives from a deserializer.
#[derive(Deserialize)]
struct RawKernel {
    rows: usize,
    cols: usize,
    weights: Vec<f64>,
}

impl TryFrom<RawKernel> for Kernel {
    type Error = Error;

    fn try_from(raw: RawKernel) -> Result<Self> {
        Kernel::new(raw.rows, raw.cols, raw.weights)
    }
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKernel`] if a dimension is zero or
    /// `weights.len() != rows * cols`, and [`Error::InvalidParameter`] if a
    /// weight is not finite.
    pub fn new(rows: usize, cols: usize, weights: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 || Some(weights.len()) != rows.checked_mul(cols) {
            return Err(Error::InvalidKernel {
                rows,
                cols,
                len: weights.len(),
            });
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "kernel weights must be finite, got {w}"
            )));
        }
        Ok(Self {
            rows,
            cols,
            weights,
        })
    }

    /// Averaging kernel of `size x size` with every weight `1 / size^2`.
    pub fn box_blur(size: usize) -> Result<Self> {
        let n = square_cells(size)?;
        Self::new(size, size, vec![1.0 / n as f64; n])
    }

    /// Kernel that reproduces its input: 1 at the anchor, 0 elsewhere.
    pub fn identity(size: usize) -> Result<Self> {
        let mut weights = vec![0.0; square_cells(size)?];
        if let Some(centre) = weights.get_mut((size / 2) * size + size / 2) {
            *centre = 1.0;
        }
        Self::new(size, size, weights)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Anchor cell as `(x, y)`.
    #[inline]
    pub fn anchor(&self) -> (usize, usize) {
        (self.cols / 2, self.rows / 2)
    }
}

/// Cell count of a `size x size` kernel.
fn square_cells(size: usize) -> Result<usize> {
    size.checked_mul(size).ok_or(Error::InvalidKernel {
        rows: size,
        cols: size,
        len: 0,
    })
}

/// Filter the grayscale conversion of `image` with `kernel`.
///
/// Output has the same dimensions as the input and a single channel.
pub fn convolve(image: &ImageBuffer, kernel: &Kernel, border: BorderMode) -> ImageBuffer {
    let gray = image.to_grayscale();
    let (w, h) = (gray.width() as i64, gray.height() as i64);
    let src = gray.pixels();
    let (ax, ay) = kernel.anchor();
    let (ax, ay) = (ax as i64, ay as i64);
    let constant = match border {
        BorderMode::Constant(v) => v as f64,
        _ => 0.0,
    };

    let mut output = Vec::with_capacity(src.len());

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f64;
            for (ky, row) in kernel.weights.chunks_exact(kernel.cols).enumerate() {
                let sy = border.resolve(y + ky as i64 - ay, h);
                for (kx, &weight) in row.iter().enumerate() {
                    if weight == 0.0 {
                        continue;
                    }
                    let sx = border.resolve(x + kx as i64 - ax, w);
                    let sample = match (sx, sy) {
                        (Some(sx), Some(sy)) => src[sy * w as usize + sx] as f64,
                        _ => constant,
                    };
                    sum += weight * sample;
                }
            }
            output.push(saturate_u8(sum));
        }
    }

    ImageBuffer::from_parts(gray.width(), gray.height(), Channels::Gray, output)
}

/// Round half-to-even and clamp into a byte.
#[inline]
fn saturate_u8(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Output dimensions always match the input.
        #[test]
        fn prop_output_same_size(
            (w, h) in (1u32..=16, 1u32..=16),
            (rows, cols) in (1usize..=5, 1usize..=5),
        ) {
            let img = ImageBuffer::gray(w, h, vec![50; (w * h) as usize]).unwrap();
            let kernel = Kernel::new(rows, cols, vec![0.1; rows * cols]).unwrap();
            let result = convolve(&img, &kernel, BorderMode::Reflect);
            prop_assert_eq!(result.dimensions(), (w, h));
        }

        /// Property: A normalized kernel never leaves a flat image under replication.
        #[test]
        fn prop_normalized_kernel_preserves_flat(
            value in any::<u8>(),
            size in 1usize..=5,
        ) {
            let img = ImageBuffer::gray(7, 5, vec![value; 35]).unwrap();
            let result = convolve(&img, &Kernel::box_blur(size).unwrap(), BorderMode::Replicate);
            for &v in result.pixels() {
                prop_assert!((v as i32 - value as i32).abs() <= 1);
            }
        }
    }
}
