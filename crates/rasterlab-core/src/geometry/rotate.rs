//! Lossless quarter-turn rotations.
//!
//! These are pure index remappings; no interpolation is involved, so four
//! clockwise quarter turns reproduce the input exactly.
//!
//! For a `W x H` input rotated 90° clockwise the output is `H x W` and
//!
//! ```text
//! input (x, y)  ->  output (H - 1 - y, x)
//! ```

use crate::ImageBuffer;

/// Rotate 90 degrees clockwise.
pub fn rotate90(image: &ImageBuffer) -> ImageBuffer {
    let (w, h) = (image.width() as usize, image.height() as usize);
    remap(image, image.height(), image.width(), |x, y| (h - 1 - y, x), w)
}

/// Rotate 180 degrees.
pub fn rotate180(image: &ImageBuffer) -> ImageBuffer {
    let (w, h) = (image.width() as usize, image.height() as usize);
    remap(image, image.width(), image.height(), |x, y| (w - 1 - x, h - 1 - y), w)
}

/// Rotate 270 degrees clockwise (90 counter-clockwise).
pub fn rotate270(image: &ImageBuffer) -> ImageBuffer {
    let w = image.width() as usize;
    remap(image, image.height(), image.width(), |x, y| (y, w - 1 - x), w)
}

/// Scatter every source pixel to the destination position given by `map`.
///
/// `map` receives source `(x, y)` and returns destination `(x, y)`;
/// `dst_w`/`dst_h` are the output dimensions.
#[inline]
fn remap<F>(image: &ImageBuffer, dst_w: u32, dst_h: u32, map: F, src_w: usize) -> ImageBuffer
where
    F: Fn(usize, usize) -> (usize, usize),
{
    let n = image.channels().count();
    let dst_stride = dst_w as usize;
    let mut output = vec![0u8; image.pixels().len()];

    for (i, pixel) in image.pixels().chunks_exact(n).enumerate() {
        let (x, y) = (i % src_w, i / src_w);
        let (dx, dy) = map(x, y);
        let dst_idx = (dy * dst_stride + dx) * n;
        output[dst_idx..dst_idx + n].copy_from_slice(pixel);
    }

    ImageBuffer::from_parts(dst_w, dst_h, image.channels(), output)
}
