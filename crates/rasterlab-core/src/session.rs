//! Editing session: one current image plus where it was last saved.
//!
//! The session is either empty or holds a buffer. Every [`Operation`] runs on
//! the current buffer and replaces it on success. Failed operations leave the
//! session exactly as it was.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::codec::{decode, encode, ImageFormat};
use crate::convolution::{convolve, Kernel};
use crate::error::{Error, Result};
use crate::geometry::{crop, flip, rotate180, rotate270, rotate90, scale, FlipAxis};
use crate::intensity::{compute_histogram, equalize_histogram, linear_map, power_law_map, Histogram};
use crate::settings::EditorSettings;
use crate::ImageBuffer;

/// A transform the session can apply to its current image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Crop {
        left: u32,
        upper: u32,
        right: u32,
        lower: u32,
    },
    Flip(FlipAxis),
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Quarter turn counter-clockwise.
    Rotate270,
    Scale {
        factor: f64,
    },
    LinearMap {
        slope: f64,
        intercept: f64,
    },
    PowerLaw {
        gamma: f64,
        c: f64,
    },
    EqualizeHistogram,
    Convolve(Kernel),
}

impl Operation {
    /// Gamma mapping with `c = 1`.
    pub fn power_law(gamma: f64) -> Self {
        Operation::PowerLaw { gamma, c: 1.0 }
    }

    /// Short name used in log records.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Crop { .. } => "crop",
            Operation::Flip(_) => "flip",
            Operation::Rotate90 => "rotate90",
            Operation::Rotate180 => "rotate180",
            Operation::Rotate270 => "rotate270",
            Operation::Scale { .. } => "scale",
            Operation::LinearMap { .. } => "linear_map",
            Operation::PowerLaw { .. } => "power_law",
            Operation::EqualizeHistogram => "equalize_histogram",
            Operation::Convolve(_) => "convolve",
        }
    }

    /// Run the operation on `image`, producing a new buffer.
    pub fn run(&self, image: &ImageBuffer, settings: &EditorSettings) -> Result<ImageBuffer> {
        match *self {
            Operation::Crop {
                left,
                upper,
                right,
                lower,
            } => crop(image, left, upper, right, lower),
            Operation::Flip(axis) => Ok(flip(image, axis)),
            Operation::Rotate90 => Ok(rotate90(image)),
            Operation::Rotate180 => Ok(rotate180(image)),
            Operation::Rotate270 => Ok(rotate270(image)),
            Operation::Scale { factor } => scale(image, factor, settings.scale_filter),
            Operation::LinearMap { slope, intercept } => linear_map(image, slope, intercept),
            Operation::PowerLaw { gamma, c } => power_law_map(image, gamma, c),
            Operation::EqualizeHistogram => Ok(equalize_histogram(image)),
            Operation::Convolve(ref kernel) => Ok(convolve(image, kernel, settings.border)),
        }
    }
}

/// Single-image editing session.
#[derive(Debug, Default)]
pub struct ImageSession {
    current: Option<ImageBuffer>,
    save_path: Option<PathBuf>,
    settings: EditorSettings,
}

impl ImageSession {
    /// Create an empty session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with the given settings.
    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        &mut self.settings
    }

    /// The current image, if one is loaded.
    pub fn current(&self) -> Option<&ImageBuffer> {
        self.current.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Path the next argument-less [`save`](Self::save) writes to.
    pub fn save_path(&self) -> Option<&Path> {
        self.save_path.as_deref()
    }

    /// Decode encoded image bytes and make them the current image.
    ///
    /// On failure the previous image, if any, is kept.
    pub fn load(&mut self, bytes: &[u8]) -> Result<&ImageBuffer> {
        let image = decode(bytes).map_err(|e| {
            warn!("load rejected: {}", e);
            e
        })?;
        info!(
            "loaded {}x{} {:?} image",
            image.width(),
            image.height(),
            image.channels()
        );
        Ok(&*self.current.insert(image))
    }

    /// Read and decode an image file.
    ///
    /// Does not change the save path.
    pub fn load_file(&mut self, path: &Path) -> Result<&ImageBuffer> {
        let bytes = std::fs::read(path)?;
        info!("read {} bytes from {}", bytes.len(), path.display());
        self.load(&bytes)
    }

    /// Install an already-built buffer as the current image.
    pub fn set_image(&mut self, image: ImageBuffer) -> &ImageBuffer {
        self.current.insert(image)
    }

    /// Apply an operation to the current image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageLoaded`] on an empty session, or the
    /// operation's own error. In both cases the current image is unchanged.
    pub fn apply(&mut self, op: Operation) -> Result<&ImageBuffer> {
        let current = self.current.as_ref().ok_or(Error::NoImageLoaded)?;
        let result = op.run(current, &self.settings).map_err(|e| {
            warn!("{} rejected: {}", op.name(), e);
            e
        })?;
        debug!(
            "{}: {}x{} -> {}x{}",
            op.name(),
            current.width(),
            current.height(),
            result.width(),
            result.height()
        );
        Ok(&*self.current.insert(result))
    }

    /// Luminance histogram of the current image.
    pub fn histogram(&self) -> Result<Histogram> {
        self.current
            .as_ref()
            .map(compute_histogram)
            .ok_or(Error::NoImageLoaded)
    }

    /// Discard the current image and the remembered save path.
    pub fn clear(&mut self) {
        self.current = None;
        self.save_path = None;
    }

    /// Encode the current image without writing it anywhere.
    pub fn export(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let current = self.current.as_ref().ok_or(Error::NoImageLoaded)?;
        Ok(encode(current, format, self.settings.jpeg_quality)?)
    }

    /// Write the current image to disk.
    ///
    /// With `Some(path)` the image is written there and `path` becomes the
    /// save path. With `None` the remembered save path is used. The format
    /// follows the file extension, falling back to
    /// [`EditorSettings::default_format`]. Returns the path written.
    ///
    /// # Errors
    ///
    /// [`Error::NoImageLoaded`] on an empty session, [`Error::NoSavePath`]
    /// when `path` is `None` and nothing was saved before, plus encode and
    /// I/O failures.
    pub fn save(&mut self, path: Option<&Path>) -> Result<PathBuf> {
        let current = self.current.as_ref().ok_or(Error::NoImageLoaded)?;
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => self.save_path.clone().ok_or(Error::NoSavePath)?,
        };

        let format = ImageFormat::from_path(&path).unwrap_or(self.settings.default_format);
        let bytes = encode(current, format, self.settings.jpeg_quality)?;
        std::fs::write(&path, &bytes)?;
        info!("saved {} bytes as {:?} to {}", bytes.len(), format, path.display());

        self.save_path = Some(path.clone());
        Ok(path)
    }
}
