//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Rasterlab
//! types, handling the conversion between Rust and JavaScript data representations.

use rasterlab_core::{Channels, ImageBuffer};
use wasm_bindgen::prelude::*;

/// An image buffer wrapper for JavaScript.
///
/// Pixels are row-major and interleaved: 1 byte per pixel for grayscale
/// images and 3 bytes per pixel for RGB images.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()` or
/// `to_rgba()`, a copy is made to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsImageBuffer {
    inner: ImageBuffer,
}

#[wasm_bindgen]
impl JsImageBuffer {
    /// Create a new JsImageBuffer from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - 1 for grayscale, 3 for RGB
    /// * `pixels` - Pixel data (`width * height * channels` bytes, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<JsImageBuffer, JsValue> {
        Self::try_new(width, height, channels, pixels).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes per pixel (1 or 3)
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channels().count() as u8
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns the pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Returns RGBA pixel data ready for `new ImageData(...)`.
    ///
    /// Grayscale values are replicated into R, G and B. Alpha is always 255.
    pub fn to_rgba(&self) -> Vec<u8> {
        let rgb = self.inner.to_rgb();
        let mut rgba = Vec::with_capacity(self.inner.pixel_count() * 4);
        for px in rgb.pixels().chunks_exact(3) {
            rgba.extend_from_slice(px);
            rgba.push(255);
        }
        rgba
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    /// Call this if you want to immediately release memory for a large image.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImageBuffer {
    /// Validating constructor that reports core errors.
    pub(crate) fn try_new(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> rasterlab_core::Result<Self> {
        let channels = channels_from_u8(channels)?;
        Ok(Self {
            inner: ImageBuffer::new(width, height, channels, pixels)?,
        })
    }

    pub(crate) fn from_core(inner: ImageBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn as_core(&self) -> &ImageBuffer {
        &self.inner
    }
}

/// Convert a channel count to the core Channels enum.
///
/// Values:
/// - 1 = Gray
/// - 3 = Rgb
pub(crate) fn channels_from_u8(value: u8) -> rasterlab_core::Result<Channels> {
    match value {
        1 => Ok(Channels::Gray),
        3 => Ok(Channels::Rgb),
        other => Err(rasterlab_core::Error::InvalidParameter(format!(
            "channels must be 1 or 3, got {other}"
        ))),
    }
}
