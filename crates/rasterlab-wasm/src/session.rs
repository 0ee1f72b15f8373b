//! Editing session WASM bindings.
//!
//! A `JsImageSession` owns one core `ImageSession`. Every editing method
//! replaces the current image on success; on failure it throws and the image
//! is left as it was.
//!
//! # Example
//!
//! ```typescript
//! import { JsImageSession } from '@rasterlab/wasm';
//!
//! const session = new JsImageSession();
//! session.load(new Uint8Array(await file.arrayBuffer()));
//! session.rotate();
//! session.power_law_map(0.8);
//! const png = session.export('png');
//! ```

use rasterlab_core::{
    EditorSettings, Error, FlipAxis, ImageFormat, ImageSession, Kernel, Operation,
};
use wasm_bindgen::prelude::*;

use crate::histogram::JsHistogram;
use crate::types::JsImageBuffer;

fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse a format name or file extension such as `"png"` or `"jpg"`.
pub(crate) fn format_from_str(name: &str) -> rasterlab_core::Result<ImageFormat> {
    ImageFormat::from_extension(name.trim_start_matches('.'))
        .ok_or_else(|| Error::InvalidParameter(format!("unsupported image format: {name}")))
}

/// Single-image editing session for JavaScript.
#[wasm_bindgen]
pub struct JsImageSession {
    inner: ImageSession,
}

impl Default for JsImageSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsImageSession {
    /// Create an empty session with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ImageSession::new(),
        }
    }

    /// Whether an image is loaded.
    #[wasm_bindgen(getter)]
    pub fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    /// Decode an encoded image (JPEG, PNG, BMP, TIFF) and make it current.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.load(bytes).map(|_| ()).map_err(to_js)
    }

    /// Make a copy of `image` the current image.
    pub fn set_image(&mut self, image: &JsImageBuffer) {
        self.inner.set_image(image.as_core().clone());
    }

    /// Copy of the current image, or `undefined` when empty.
    pub fn current(&self) -> Option<JsImageBuffer> {
        self.inner.current().cloned().map(JsImageBuffer::from_core)
    }

    /// Apply an operation given as a plain object, e.g.
    /// `{ crop: { left: 0, upper: 0, right: 10, lower: 10 } }` or `"rotate90"`.
    pub fn apply(&mut self, op: JsValue) -> Result<(), JsValue> {
        let op: Operation = serde_wasm_bindgen::from_value(op)
            .map_err(|e| JsValue::from_str(&format!("Invalid operation: {}", e)))?;
        self.run(op)
    }

    pub fn crop(&mut self, left: u32, upper: u32, right: u32, lower: u32) -> Result<(), JsValue> {
        self.run(Operation::Crop {
            left,
            upper,
            right,
            lower,
        })
    }

    pub fn flip_horizontal(&mut self) -> Result<(), JsValue> {
        self.run(Operation::Flip(FlipAxis::Horizontal))
    }

    pub fn flip_vertical(&mut self) -> Result<(), JsValue> {
        self.run(Operation::Flip(FlipAxis::Vertical))
    }

    /// Rotate 90 degrees clockwise.
    pub fn rotate(&mut self) -> Result<(), JsValue> {
        self.run(Operation::Rotate90)
    }

    /// Rotate 90 degrees counter-clockwise.
    pub fn rotate_counter_clockwise(&mut self) -> Result<(), JsValue> {
        self.run(Operation::Rotate270)
    }

    pub fn rotate_half_turn(&mut self) -> Result<(), JsValue> {
        self.run(Operation::Rotate180)
    }

    pub fn scale(&mut self, factor: f64) -> Result<(), JsValue> {
        self.run(Operation::Scale { factor })
    }

    pub fn linear_map(&mut self, slope: f64, intercept: f64) -> Result<(), JsValue> {
        self.run(Operation::LinearMap { slope, intercept })
    }

    /// Gamma mapping; `c` defaults to 1.
    pub fn power_law_map(&mut self, gamma: f64, c: Option<f64>) -> Result<(), JsValue> {
        self.run(Operation::PowerLaw {
            gamma,
            c: c.unwrap_or(1.0),
        })
    }

    pub fn equalize_histogram(&mut self) -> Result<(), JsValue> {
        self.run(Operation::EqualizeHistogram)
    }

    /// Filter with a `rows x cols` kernel given in row-major order.
    pub fn convolve(&mut self, weights: Vec<f64>, rows: usize, cols: usize) -> Result<(), JsValue> {
        let kernel = Kernel::new(rows, cols, weights).map_err(to_js)?;
        self.run(Operation::Convolve(kernel))
    }

    /// Luminance histogram of the current image.
    pub fn histogram(&self) -> Result<JsHistogram, JsValue> {
        self.inner.histogram().map(JsHistogram::from).map_err(to_js)
    }

    /// Discard the current image.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Encode the current image as `"jpeg"`, `"png"`, `"bmp"` or `"tiff"`.
    pub fn export(&self, format: &str) -> Result<Vec<u8>, JsValue> {
        let format = format_from_str(format).map_err(to_js)?;
        self.inner.export(format).map_err(to_js)
    }

    /// Current settings as a plain object.
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.settings()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the settings. Missing fields take their defaults.
    pub fn set_settings(&mut self, settings: JsValue) -> Result<(), JsValue> {
        let settings: EditorSettings = serde_wasm_bindgen::from_value(settings)
            .map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))?;
        *self.inner.settings_mut() = settings;
        Ok(())
    }
}

impl JsImageSession {
    fn run(&mut self, op: Operation) -> Result<(), JsValue> {
        self.inner.apply(op).map(|_| ()).map_err(to_js)
    }
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` errors and can
/// only run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn loaded() -> JsImageSession {
        let mut session = JsImageSession::new();
        session.set_image(&JsImageBuffer::try_new(4, 2, 1, vec![10, 20, 30, 40, 50, 60, 70, 80]).unwrap());
        session
    }

    #[wasm_bindgen_test]
    fn test_empty_session_errors() {
        let mut session = JsImageSession::new();
        assert!(session.rotate().is_err());
        assert!(session.histogram().is_err());
        assert!(session.export("png").is_err());
    }

    #[wasm_bindgen_test]
    fn test_malformed_load_keeps_image() {
        let mut session = loaded();
        assert!(session.load(&[1, 2, 3, 4]).is_err());
        assert_eq!(session.current().unwrap().pixels(), vec![10, 20, 30, 40, 50, 60, 70, 80]);
    }

    #[wasm_bindgen_test]
    fn test_invalid_parameters() {
        let mut session = loaded();
        assert!(session.crop(3, 0, 2, 2).is_err());
        assert!(session.scale(0.0).is_err());
        assert!(session.power_law_map(-1.0, None).is_err());
        assert!(session.convolve(vec![1.0; 5], 2, 2).is_err());
        assert!(session.export("gif").is_err());
        assert_eq!(session.current().unwrap().width(), 4);
    }

    #[wasm_bindgen_test]
    fn test_apply_from_object() {
        let mut session = loaded();
        let op = serde_wasm_bindgen::to_value(&Operation::Crop {
            left: 1,
            upper: 0,
            right: 3,
            lower: 2,
        })
        .unwrap();
        session.apply(op).unwrap();
        assert_eq!(session.current().unwrap().pixels(), vec![20, 30, 60, 70]);

        assert!(session.apply(JsValue::from_str("spin")).is_err());
    }

    #[wasm_bindgen_test]
    fn test_settings_round_trip() {
        let mut session = loaded();
        let settings = EditorSettings {
            jpeg_quality: 40,
            ..Default::default()
        };
        session
            .set_settings(serde_wasm_bindgen::to_value(&settings).unwrap())
            .unwrap();
        let back: EditorSettings = serde_wasm_bindgen::from_value(session.settings().unwrap()).unwrap();
        assert_eq!(back, settings);

        assert!(session.set_settings(JsValue::from_f64(3.0)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_partial_settings_use_defaults() {
        let mut session = loaded();
        let partial = js_sys::Object::new();
        js_sys::Reflect::set(&partial, &"jpeg_quality".into(), &JsValue::from_f64(90.0)).unwrap();
        session.set_settings(partial.into()).unwrap();

        let back: EditorSettings = serde_wasm_bindgen::from_value(session.settings().unwrap()).unwrap();
        assert_eq!(back.jpeg_quality, 90);
        assert_eq!(back.border, rasterlab_core::BorderMode::Constant(0));
    }
}
