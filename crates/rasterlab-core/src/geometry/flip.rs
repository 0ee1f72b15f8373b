//! Mirror an image across its vertical or horizontal axis.

use serde::{Deserialize, Serialize};

use crate::ImageBuffer;

/// Which way to mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipAxis {
    /// Left-right mirror; column `x` moves to `width - 1 - x`.
    Horizontal,
    /// Top-bottom mirror; row `y` moves to `height - 1 - y`.
    Vertical,
}

/// Mirror an image. Dimensions are unchanged.
pub fn flip(image: &ImageBuffer, axis: FlipAxis) -> ImageBuffer {
    let n = image.channels().count();
    let stride = image.width() as usize * n;
    let src = image.pixels();
    let mut output = Vec::with_capacity(src.len());

    match axis {
        FlipAxis::Horizontal => {
            for row in src.chunks_exact(stride) {
                for pixel in row.chunks_exact(n).rev() {
                    output.extend_from_slice(pixel);
                }
            }
        }
        FlipAxis::Vertical => {
            for row in src.chunks_exact(stride).rev() {
                output.extend_from_slice(row);
            }
        }
    }

    ImageBuffer::from_parts(image.width(), image.height(), image.channels(), output)
}
