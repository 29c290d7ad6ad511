//! glyphnet-recog - Single-character recognition from glyph tiles
//!
//! This crate turns a tile image into a fixed-size binary vector and runs
//! it through a small feed-forward network:
//!
//! - **Tile normalization**: binarize, crop to the ink, resample to 12x12
//! - **Network**: one hidden layer, sigmoid units, trained by backpropagation
//! - **Output code**: the output units spell the character's code point in
//!   binary, most significant bit first
//! - **Snapshots**: save and restore trained weights as text
//!
//! # Quick Start
//!
//! ```no_run
//! use glyphnet_core::Pix;
//! use glyphnet_recog::{Network, NetworkOptions, Tile};
//!
//! # fn tile_image() -> Pix { Pix::new(30, 40, glyphnet_core::PixelDepth::Bit8).unwrap() }
//! let image = tile_image();
//! let tile = Tile::new(Some('A'), &image).unwrap();
//!
//! let mut net = Network::new(&NetworkOptions::default()).unwrap();
//! for _ in 0..500 {
//!     net.train_tile(&tile).unwrap();
//! }
//! println!("recognized: {}", net.recognize_tile(&tile).unwrap());
//! ```
//!
//! # Modules
//!
//! - [`tile`]: Tile normalization
//! - [`vector`]: Network input vectors
//! - [`network`]: Forward pass, training and recognition
//! - [`codec`]: Character to output bit conversion

pub mod codec;
mod error;
pub mod network;
mod serial;
pub mod tile;
pub mod vector;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use network::{Activations, NUM_OUTPUTS, Network, NetworkOptions, sigmoid};
pub use tile::{MIN_BOUNDING_BOX_FRACTION, TILE_TARGET_HEIGHT, TILE_TARGET_WIDTH, Tile, TileOptions};
pub use vector::PixelVector;

// Re-export core for convenience
pub use glyphnet_core;
