//! Codec glue between encoded image files and [`ImageBuffer`].
//!
//! This module provides functionality for:
//! - Decoding any format the `image` crate is built with (JPEG, PNG, BMP, TIFF)
//! - Encoding a buffer to one of those formats
//! - Picking an output format from a file extension
//!
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use rasterlab_core::codec::{decode, encode, ImageFormat};
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode(&bytes).unwrap();
//! let jpeg = encode(&image, ImageFormat::Jpeg, 90).unwrap();
//! ```
//!
//! [`ImageBuffer`]: crate::ImageBuffer

mod decode;
mod encode;
mod types;

pub use decode::decode;
pub use encode::encode;
pub use types::{DecodeError, EncodeError, ImageFormat};
