//! Error type shared by every editing operation.
//!
//! Every operation either fully succeeds or returns one of these variants
//! without having touched its input. Codec failures keep their own types
//! (see [`crate::codec`]) and are wrapped here.

use thiserror::Error;

use crate::codec::{DecodeError, EncodeError};

/// Rasterlab error type
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel data does not match the declared dimensions, or a dimension is zero.
    #[error("invalid image dimensions: {width}x{height} with {channels} channel(s) and {len} bytes")]
    InvalidDimensions {
        width: u32,
        height: u32,
        channels: usize,
        len: usize,
    },

    /// Pixel coordinate outside the buffer.
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Crop rectangle is empty or exceeds the image.
    #[error("invalid crop region ({left}, {upper}, {right}, {lower}) for {width}x{height} image")]
    InvalidRegion {
        left: u32,
        upper: u32,
        right: u32,
        lower: u32,
        width: u32,
        height: u32,
    },

    /// Scale factor is not positive or collapses a dimension to zero.
    #[error("invalid scale factor {0}")]
    InvalidScale(f64),

    /// A numeric parameter is outside its domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Kernel weights don't match the kernel dimensions.
    #[error("invalid kernel: {rows}x{cols} kernel with {len} weights")]
    InvalidKernel { rows: usize, cols: usize, len: usize },

    /// Operation requires a loaded image.
    #[error("no image loaded")]
    NoImageLoaded,

    /// Save requested without a path and none was remembered.
    #[error("no save path set")]
    NoSavePath,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
