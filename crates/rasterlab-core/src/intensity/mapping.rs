//! Point intensity mappings evaluated through a 256-entry lookup table.
//!
//! Arithmetic is done in `f32` and the clamped result is truncated toward
//! zero, so `v = 254.9` maps to 254.

use crate::error::{Error, Result};
use crate::{Channels, ImageBuffer};

// ============================================================================
// LUT Type
// ============================================================================

/// Pre-computed 256-entry lookup table: `lut[input] = output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityLut {
    pub lut: [u8; 256],
}

impl IntensityLut {
    /// Build a LUT by evaluating `f` at every input level.
    ///
    /// The result of `f` is clamped to `[0, 255]` and truncated.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32,
    {
        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            *lut_value = f(i as f32).clamp(0.0, 255.0) as u8;
        }
        Self { lut }
    }

    /// Create identity LUT (no change).
    pub fn identity() -> Self {
        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            *lut_value = i as u8;
        }
        Self { lut }
    }

    /// Check if this LUT is identity.
    pub fn is_identity(&self) -> bool {
        self.lut.iter().enumerate().all(|(i, &v)| v == i as u8)
    }

    /// Apply the LUT to the grayscale conversion of `image`.
    pub fn apply(&self, image: &ImageBuffer) -> ImageBuffer {
        let gray = image.to_grayscale();
        if self.is_identity() {
            return gray;
        }
        let pixels = gray.pixels().iter().map(|&v| self.lut[v as usize]).collect();
        ImageBuffer::from_parts(gray.width(), gray.height(), Channels::Gray, pixels)
    }
}

impl Default for IntensityLut {
    fn default() -> Self {
        Self::identity()
    }
}

fn require_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!("{name} must be finite, got {value}")))
    }
}

/// Linear intensity mapping: `clip(slope * v + intercept, 0, 255)`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `slope` or `intercept` is NaN or infinite.
pub fn linear_map(image: &ImageBuffer, slope: f64, intercept: f64) -> Result<ImageBuffer> {
    require_finite("slope", slope)?;
    require_finite("intercept", intercept)?;

    let (slope, intercept) = (slope as f32, intercept as f32);
    let lut = IntensityLut::from_fn(|v| slope * v + intercept);
    Ok(lut.apply(image))
}

/// Power-law (gamma) mapping: `clip(c * (v / 255)^gamma * 255, 0, 255)`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `gamma <= 0` or either parameter
/// is not finite.
pub fn power_law_map(image: &ImageBuffer, gamma: f64, c: f64) -> Result<ImageBuffer> {
    require_finite("gamma", gamma)?;
    require_finite("c", c)?;
    if gamma <= 0.0 {
        return Err(Error::InvalidParameter(format!("gamma must be positive, got {gamma}")));
    }

    let (gamma, c) = (gamma as f32, c as f32);
    let lut = IntensityLut::from_fn(|v| c * (v / 255.0).powf(gamma) * 255.0);
    Ok(lut.apply(image))
}
