//! Histogram WASM bindings.
//!
//! This module provides JavaScript bindings for the luminance histogram,
//! either of a standalone image or of a session's current image.

use rasterlab_core::{compute_histogram as compute_histogram_core, Histogram};
use wasm_bindgen::prelude::*;

use crate::types::JsImageBuffer;

/// Histogram result accessible from JavaScript.
///
/// Contains the 256-bin luminance histogram plus helper methods for
/// clipping detection and normalization.
#[wasm_bindgen]
pub struct JsHistogram {
    inner: Histogram,
}

#[wasm_bindgen]
impl JsHistogram {
    /// Get luminance histogram (256 bins).
    pub fn bins(&self) -> Vec<u32> {
        self.inner.bins.to_vec()
    }

    /// Get maximum bin value.
    ///
    /// Useful for normalizing histogram display.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.inner.max_value()
    }

    /// Total number of pixels counted.
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> f64 {
        self.inner.total() as f64
    }

    /// Check if any pixel has luminance 255 (highlight clipping).
    #[wasm_bindgen(getter)]
    pub fn has_highlight_clipping(&self) -> bool {
        self.inner.has_highlight_clipping()
    }

    /// Check if any pixel has luminance 0 (shadow clipping).
    #[wasm_bindgen(getter)]
    pub fn has_shadow_clipping(&self) -> bool {
        self.inner.has_shadow_clipping()
    }

    /// Bin heights scaled so the tallest bin equals `height` (e.g. pixels of a bar chart).
    pub fn normalized(&self, height: f32) -> Vec<f32> {
        self.inner.normalized(height)
    }
}

impl From<Histogram> for JsHistogram {
    fn from(inner: Histogram) -> Self {
        Self { inner }
    }
}

/// Compute the luminance histogram of an image.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(image);
/// const bars = hist.normalized(100);   // Float32Array[256]
/// const clipped = hist.has_highlight_clipping;
///
/// // Don't forget to free!
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsImageBuffer) -> JsHistogram {
    compute_histogram_core(image.as_core()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(channels: u8, pixels: Vec<u8>) -> JsImageBuffer {
        let len = pixels.len() as u32 / channels as u32;
        JsImageBuffer::try_new(len, 1, channels, pixels).unwrap()
    }

    #[test]
    fn test_js_histogram_creation() {
        let hist = compute_histogram(&image(3, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]));

        assert_eq!(hist.bins().len(), 256);
        assert_eq!(hist.total(), 3.0);
        assert_eq!(hist.bins()[76], 1);
        assert_eq!(hist.bins()[150], 1);
        assert_eq!(hist.bins()[29], 1);
        assert!(!hist.has_highlight_clipping());
        assert!(!hist.has_shadow_clipping());
    }

    #[test]
    fn test_js_histogram_max_value() {
        let hist = compute_histogram(&image(1, vec![128, 128, 128, 200]));

        assert_eq!(hist.max_value(), 3); // 3 pixels at value 128
        assert_eq!(hist.bins()[200], 1);
    }

    #[test]
    fn test_js_histogram_clipping() {
        let hist = compute_histogram(&image(1, vec![0, 255]));

        assert!(hist.has_highlight_clipping());
        assert!(hist.has_shadow_clipping());
    }

    #[test]
    fn test_js_histogram_normalized() {
        let hist = compute_histogram(&image(1, vec![10, 10, 20, 20]));
        let bars = hist.normalized(50.0);

        assert_eq!(bars.len(), 256);
        assert!((bars[10] - 50.0).abs() < 1e-4);
        assert!((bars[20] - 50.0).abs() < 1e-4);
        assert_eq!(bars[0], 0.0);
    }
}
