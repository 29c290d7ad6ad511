//! glyphnet-test - Regression test framework for glyphnet
//!
//! Regression tests record a sequence of indexed comparisons and report
//! every failure at the end instead of stopping at the first one:
//!
//! ```ignore
//! use glyphnet_test::RegParams;
//!
//! let mut rp = RegParams::new("bbox");
//! rp.compare_values(12.0, bbox.w as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! The crate also builds synthetic tiles, since no image fixtures are
//! shipped with the workspace.
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{bar_tile, font_letters, letter_tile, pix_from_ascii};
pub use params::{RegParams, RegTestMode};
