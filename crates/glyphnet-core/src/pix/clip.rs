//! Foreground detection and rectangle clipping
//!
//! The glyph in a binarized tile is the set of black (1) pixels. Its
//! bounding box is found by scanning inward from each of the four edges
//! independently; the box is then used to clip the glyph out of the tile.

use super::{Pix, PixelDepth};
use crate::Box;
use crate::error::{Error, Result};

/// Direction for scanning an image to find the foreground edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Scan from left edge toward right
    FromLeft,
    /// Scan from right edge toward left
    FromRight,
    /// Scan from top edge toward bottom
    FromTop,
    /// Scan from bottom edge toward top
    FromBot,
}

impl Pix {
    /// Find the first column (or row) holding a foreground pixel.
    ///
    /// Returns the x coordinate for horizontal scans and the y coordinate
    /// for vertical scans, or `None` if the image has no foreground.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] unless the image is 1 bpp.
    pub fn scan_for_foreground(&self, direction: ScanDirection) -> Result<Option<u32>> {
        if self.depth() != PixelDepth::Bit1 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }

        let w = self.width();
        let h = self.height();
        let column_has_fg = |x: u32| (0..h).any(|y| self.get_pixel_unchecked(x, y) != 0);
        // whole words can be tested at once for rows; pad bits are never set
        let row_has_fg = |y: u32| self.row_data(y).iter().any(|&word| word != 0);

        let found = match direction {
            ScanDirection::FromLeft => (0..w).find(|&x| column_has_fg(x)),
            ScanDirection::FromRight => (0..w).rev().find(|&x| column_has_fg(x)),
            ScanDirection::FromTop => (0..h).find(|&y| row_has_fg(y)),
            ScanDirection::FromBot => (0..h).rev().find(|&y| row_has_fg(y)),
        };
        Ok(found)
    }

    /// Bounding box of the foreground, expanded by `border` pixels.
    ///
    /// Each edge is located by its own inward scan. A found right or
    /// bottom edge is the last foreground column/row plus one, so a lone
    /// pixel gives a `1 x 1` box when `border` is 0. An edge whose scan
    /// finds nothing falls back to the matching edge of the image, so an
    /// empty image yields the full image bounds. The result is clipped to
    /// the image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] unless the image is 1 bpp.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphnet_core::{Box, Pix, PixelDepth};
    ///
    /// let mut pm = Pix::new(10, 10, PixelDepth::Bit1).unwrap().to_mut();
    /// pm.set_pixel(4, 6, 1).unwrap();
    /// let pix: Pix = pm.into();
    /// assert_eq!(pix.bounding_box(0).unwrap(), Box::new_unchecked(4, 6, 1, 1));
    /// ```
    pub fn bounding_box(&self, border: u32) -> Result<Box> {
        let w = self.width() as i32;
        let h = self.height() as i32;
        let border = border as i32;

        let left = self
            .scan_for_foreground(ScanDirection::FromLeft)?
            .map_or(0, |x| x as i32 - border);
        let right = self
            .scan_for_foreground(ScanDirection::FromRight)?
            .map_or(w, |x| x as i32 + border + 1);
        let top = self
            .scan_for_foreground(ScanDirection::FromTop)?
            .map_or(0, |y| y as i32 - border);
        let bottom = self
            .scan_for_foreground(ScanDirection::FromBot)?
            .map_or(h, |y| y as i32 + border + 1);

        let bbox = Box::from_edges(left, top, right, bottom);
        Ok(bbox.clip(w, h).unwrap_or_else(|| self.bounds()))
    }

    /// Extract a rectangular sub-region from the image.
    ///
    /// The region is clipped to the image bounds first.
    ///
    /// # Errors
    ///
    /// Returns an error if the region does not intersect the image.
    pub fn clip_rectangle(&self, region: &Box) -> Result<Pix> {
        let clipped = region
            .clip(self.width() as i32, self.height() as i32)
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "clip region {:?} is outside image bounds ({}x{})",
                    region,
                    self.width(),
                    self.height()
                ))
            })?;

        let (x, y) = (clipped.x as u32, clipped.y as u32);
        let (cw, ch) = (clipped.w as u32, clipped.h as u32);
        let mut pm = Pix::new(cw, ch, self.depth())?.to_mut();
        for dy in 0..ch {
            for dx in 0..cw {
                let val = self.get_pixel_unchecked(x + dx, y + dy);
                pm.set_pixel_unchecked(dx, dy, val);
            }
        }
        Ok(pm.into())
    }
}
