//! glyphnet-core - Basic image containers for tile recognition
//!
//! This crate provides the data structures shared by the rest of the
//! glyphnet workspace:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`Box`] - Rectangle regions
//! - [`PixelSource`] - The narrow "color at (x, y) within bounds" capability
//!   that every tile image must provide
//! - [`color::Rgba`] - 8-bit RGBA color values and the black/white palette
//!
//! Binarization and foreground bounding boxes live on [`Pix`] (see
//! [`Pix::binarize`] and [`Pix::bounding_box`]).

pub mod box_;
pub mod error;
pub mod pix;
pub mod source;

pub use box_::Box;
pub use color::Rgba;
pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixelDepth, ScanDirection};
pub use source::PixelSource;

/// Color values and helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Non-premultiplied 8-bit RGBA color.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Rgba {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }

    impl Rgba {
        /// Opaque black.
        pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
        /// Opaque white.
        pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
        /// Fully transparent; returned for lookups outside an image.
        pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

        /// Create a color from its four channels.
        pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
            Self { r, g, b, a }
        }

        /// Create an opaque gray.
        pub const fn gray(v: u8) -> Self {
            Self::new(v, v, v, 255)
        }

        /// Unpack a `0xRRGGBBAA` pixel.
        #[inline]
        pub fn from_pixel(pixel: u32) -> Self {
            Self {
                r: ((pixel >> RED_SHIFT) & 0xff) as u8,
                g: ((pixel >> GREEN_SHIFT) & 0xff) as u8,
                b: ((pixel >> BLUE_SHIFT) & 0xff) as u8,
                a: ((pixel >> ALPHA_SHIFT) & 0xff) as u8,
            }
        }

        /// Pack into a `0xRRGGBBAA` pixel.
        #[inline]
        pub fn to_pixel(self) -> u32 {
            ((self.r as u32) << RED_SHIFT)
                | ((self.g as u32) << GREEN_SHIFT)
                | ((self.b as u32) << BLUE_SHIFT)
                | ((self.a as u32) << ALPHA_SHIFT)
        }

        /// Color channels scaled by alpha, in the range 0..=255.
        pub fn premultiplied(self) -> [u32; 4] {
            let a = self.a as u32;
            [
                self.r as u32 * a / 255,
                self.g as u32 * a / 255,
                self.b as u32 * a / 255,
                a,
            ]
        }

        /// Exactly opaque black.
        #[inline]
        pub fn is_black(self) -> bool {
            self == Self::BLACK
        }
    }

    /// The two-entry palette used for binarization. Ties resolve to the
    /// first entry.
    pub const BLACK_WHITE_PALETTE: [Rgba; 2] = [Rgba::BLACK, Rgba::WHITE];

    /// Squared distance between two colors in premultiplied space.
    pub fn sq_distance(c1: Rgba, c2: Rgba) -> u32 {
        let p1 = c1.premultiplied();
        let p2 = c2.premultiplied();
        p1.iter()
            .zip(p2.iter())
            .map(|(&a, &b)| {
                let d = a.abs_diff(b);
                d * d
            })
            .sum()
    }

    /// Index of the palette entry nearest to `c`.
    pub fn nearest_index(palette: &[Rgba], c: Rgba) -> usize {
        let mut best = 0;
        let mut best_dist = u32::MAX;
        for (i, &p) in palette.iter().enumerate() {
            let d = sq_distance(c, p);
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }
        best
    }

}
