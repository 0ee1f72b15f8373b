//! Rasterlab Core - Image editing library
//!
//! This crate provides the pixel-transform core of Rasterlab: an in-memory
//! image buffer, geometric and intensity operations, 2D convolution, image
//! file decoding and encoding, and a single-image editing session.
//!
//! Every operation takes a buffer by reference and returns a new one, so a
//! failed operation never leaves a half-edited image behind.

pub mod buffer;
pub mod codec;
pub mod convolution;
pub mod error;
pub mod geometry;
pub mod intensity;
pub mod luminance;
pub mod session;
pub mod settings;

pub use buffer::{Channels, ImageBuffer};
pub use codec::{decode, encode, DecodeError, EncodeError, ImageFormat};
pub use convolution::{convolve, BorderMode, Kernel};
pub use error::{Error, Result};
pub use geometry::{crop, flip, rotate180, rotate270, rotate90, scale, FilterType, FlipAxis};
pub use intensity::{compute_histogram, equalize_histogram, linear_map, power_law_map, Histogram};
pub use session::{ImageSession, Operation};
pub use settings::EditorSettings;
