//! Editor settings held by an [`crate::ImageSession`].
//!
//! Serializable so the UI layer can read and write them as a plain object.
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::codec::ImageFormat;
use crate::convolution::BorderMode;
use crate::geometry::FilterType;

/// Default JPEG quality used when saving.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Tunables applied by the session when running operations and saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// JPEG quality (1 to 100)
    pub jpeg_quality: u8,
    /// Resampling filter used by scale
    pub scale_filter: FilterType,
    /// Border handling used by convolution
    pub border: BorderMode,
    /// Format used when a save path has no recognised extension
    pub default_format: ImageFormat,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            scale_filter: FilterType::default(),
            border: BorderMode::default(),
            default_format: ImageFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EditorSettings::default();
        assert_eq!(settings.jpeg_quality, 75);
        assert_eq!(settings.scale_filter, FilterType::Lanczos3);
        assert_eq!(settings.border, BorderMode::Constant(0));
        assert_eq!(settings.default_format, ImageFormat::Jpeg);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let settings = EditorSettings {
            border: BorderMode::Reflect,
            ..Default::default()
        };
        assert_eq!(settings.border, BorderMode::Reflect);
        assert_eq!(settings.jpeg_quality, DEFAULT_JPEG_QUALITY);
        assert_ne!(settings, EditorSettings::default());
    }
}
