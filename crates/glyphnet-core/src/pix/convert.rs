//! Black/white conversion
//!
//! Any pixel source is quantized to a 1 bpp image by nearest-color match
//! against the two-entry [`BLACK_WHITE_PALETTE`](crate::color::BLACK_WHITE_PALETTE).

use super::{Pix, PixelDepth};
use crate::color::{self, BLACK_WHITE_PALETTE};
use crate::error::{Error, Result};
use crate::source::PixelSource;

impl Pix {
    /// Quantize a pixel source to a 1 bpp black/white image.
    ///
    /// Each pixel becomes whichever of black and white is nearer in
    /// premultiplied RGBA space; black wins ties. The result is rooted at
    /// the origin regardless of the source bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the source bounds are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphnet_core::{Pix, PixelDepth, Rgba, PixelSource};
    ///
    /// let mut pm = Pix::new(2, 1, PixelDepth::Bit8).unwrap().to_mut();
    /// pm.set_pixel(1, 0, 230).unwrap();
    /// let gray: Pix = pm.into();
    ///
    /// let bw = Pix::binarize(&gray).unwrap();
    /// assert_eq!(bw.depth(), PixelDepth::Bit1);
    /// assert_eq!(bw.color_at(0, 0), Rgba::BLACK);
    /// assert_eq!(bw.color_at(1, 0), Rgba::WHITE);
    /// ```
    pub fn binarize(src: &impl PixelSource) -> Result<Pix> {
        let b = src.bounds();
        if b.is_empty() {
            return Err(Error::InvalidDimension {
                width: b.w.max(0) as u32,
                height: b.h.max(0) as u32,
            });
        }

        let mut pm = Pix::new(b.w as u32, b.h as u32, PixelDepth::Bit1)?.to_mut();
        for y in 0..b.h {
            for x in 0..b.w {
                let c = src.color_at(b.x + x, b.y + y);
                if color::nearest_index(&BLACK_WHITE_PALETTE, c) == 0 {
                    pm.set_pixel_unchecked(x as u32, y as u32, 1);
                }
            }
        }
        Ok(pm.into())
    }

    /// Render the image as text, one line per row: `.` for black pixels,
    /// `O` for everything else.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width() + 1) * self.height()) as usize);
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                out.push(if self.color_at(x, y).is_black() { '.' } else { 'O' });
            }
            out.push('\n');
        }
        out
    }
}
