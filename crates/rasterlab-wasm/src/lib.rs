//! Rasterlab WASM - WebAssembly bindings for Rasterlab
//!
//! This crate provides WASM bindings to expose the rasterlab-core editing
//! session to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `session` - The editing session (load, transform, export)
//! - `types` - WASM-compatible wrapper types for image data
//! - `histogram` - Luminance histogram bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImageSession } from '@rasterlab/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsImageSession();
//! session.load(new Uint8Array(await file.arrayBuffer()));
//! session.equalize_histogram();
//! const image = session.current();
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(image.to_rgba()), image.width), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod histogram;
mod session;
mod types;

// Re-export public types
pub use histogram::{compute_histogram, JsHistogram};
pub use session::JsImageSession;
pub use types::JsImageBuffer;

/// Initialize the WASM module (called automatically on load)
///
/// Routes panics and `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
