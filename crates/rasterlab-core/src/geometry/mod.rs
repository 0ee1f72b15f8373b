//! Geometric transforms: crop, flip, quarter-turn rotation and scaling.
//!
//! Every function takes a borrowed buffer and returns a new one. The channel
//! layout of the input is preserved.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Crop bounds are pixel edges: `left`/`upper` inclusive, `right`/`lower` exclusive
//! - Rotation is clockwise

mod crop;
mod flip;
mod rotate;
mod scale;

pub use crop::crop;
pub use flip::{flip, FlipAxis};
pub use rotate::{rotate180, rotate270, rotate90};
pub use scale::{scale, scaled_dimensions, FilterType};
