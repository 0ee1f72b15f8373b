//! Intensity operations on the luminance channel.
//!
//! Every operation here first converts its input to grayscale (see
//! [`crate::luminance`]) and returns a single-channel buffer.
//!
//! - [`linear_map`]: `clip(slope * v + intercept, 0, 255)`
//! - [`power_law_map`]: `clip(c * (v / 255)^gamma * 255, 0, 255)`
//! - [`compute_histogram`]: 256-bin luminance histogram
//! - [`equalize_histogram`]: CDF-based contrast redistribution
//!
//! The point mappings are evaluated once per input level into an
//! [`IntensityLut`] and then applied per pixel.

mod equalize;
mod histogram;
mod mapping;

pub use equalize::{equalization_lut, equalize_histogram};
pub use histogram::{compute_histogram, Histogram};
pub use mapping::{linear_map, power_law_map, IntensityLut};
