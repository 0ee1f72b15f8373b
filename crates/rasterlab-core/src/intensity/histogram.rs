//! Luminance histogram computation.
//!
//! The histogram is derived on demand from the grayscale conversion of an
//! image and never cached.

use crate::ImageBuffer;

/// 256-bin luminance histogram; `bins[v]` counts pixels with intensity `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    pub bins: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { bins: [0; 256] }
    }
}

impl Histogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of counted pixels.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// Largest bin count, for normalizing a display.
    pub fn max_value(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Check for highlight clipping (values at 255)
    pub fn has_highlight_clipping(&self) -> bool {
        self.bins[255] > 0
    }

    /// Check for shadow clipping (values at 0)
    pub fn has_shadow_clipping(&self) -> bool {
        self.bins[0] > 0
    }

    /// Bin heights scaled so the tallest bin equals `height`.
    ///
    /// An empty histogram yields all zeros.
    pub fn normalized(&self, height: f32) -> Vec<f32> {
        let max = self.max_value();
        if max == 0 {
            return vec![0.0; self.bins.len()];
        }
        self.bins
            .iter()
            .map(|&c| c as f32 / max as f32 * height)
            .collect()
    }
}

/// Compute the luminance histogram of an image.
///
/// RGB input is converted with the BT.601 weights first.
///
/// # Performance
/// Single pass, O(n) in the number of pixels.
pub fn compute_histogram(image: &ImageBuffer) -> Histogram {
    let mut hist = Histogram::new();
    let gray = image.to_grayscale();
    for &v in gray.pixels() {
        hist.bins[v as usize] += 1;
    }
    hist
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Bins always sum to the pixel count.
        #[test]
        fn prop_histogram_sums_to_pixel_count(
            (w, h) in (1u32..=32, 1u32..=32),
            seed in any::<u8>(),
        ) {
            let len = (w * h * 3) as usize;
            let pixels = (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect();
            let img = ImageBuffer::rgb(w, h, pixels).unwrap();
            let hist = compute_histogram(&img);
            prop_assert_eq!(hist.total(), (w * h) as u64);
        }
    }
}
