//! glyphnet-transform - Geometric transformations for glyphnet
//!
//! Tiles arrive at arbitrary sizes and are resampled to the fixed network
//! resolution with nearest-neighbor sampling:
//!
//! - [`scale_to_size`]: sample to an exact width and height
//! - [`scale_by_sampling`]: sample by horizontal and vertical factors

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{scale_by_sampling, scale_to_size};
