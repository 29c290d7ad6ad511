//! glyphnet - Recognize single printed characters in small tile images
//!
//! # Overview
//!
//! A tile image (a letter cut from a game board, a label cell) goes
//! through a fixed pipeline:
//!
//! - Binarization against a black/white palette
//! - Cropping to the bounding box of the ink
//! - Nearest-neighbor resampling to 12x12
//! - A feed-forward network whose outputs spell the character code in binary
//!
//! # Example
//!
//! ```
//! use glyphnet::recog::{Network, NetworkOptions, Tile};
//! use glyphnet::{Pix, PixelDepth};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut pm = Pix::new(20, 28, PixelDepth::Bit1).unwrap().to_mut();
//! for y in 0..28 {
//!     pm.set_pixel(0, y, 1).unwrap();
//! }
//! for x in 0..20 {
//!     pm.set_pixel(x, 27, 1).unwrap();
//! }
//! let image: Pix = pm.into();
//!
//! let tile = Tile::new(Some('L'), &image).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut net = Network::with_rng(&NetworkOptions::default(), &mut rng).unwrap();
//! for _ in 0..500 {
//!     net.train_tile(&tile).unwrap();
//! }
//! assert_eq!(net.recognize_tile(&tile).unwrap(), 'L');
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphnet_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphnet_recog as recog;
pub use glyphnet_transform as transform;
