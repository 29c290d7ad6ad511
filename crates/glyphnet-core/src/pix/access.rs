//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//!
//! # Pixel packing
//!
//! Pixels are packed MSB-to-LSB within each 32-bit word. For example,
//! in a 1-bit image, pixel 0 occupies bit 31 (MSB) of the first word.

use super::{Pix, PixMut, PixelDepth};
use crate::error::{Error, Result};

/// Get a 1-bit pixel value.
#[inline]
pub fn get_data_bit(line: &[u32], x: u32) -> u32 {
    (line[(x >> 5) as usize] >> (31 - (x & 31))) & 1
}

/// Set a 1-bit pixel value. Any non-zero `val` sets the bit.
#[inline]
pub fn set_data_bit(line: &mut [u32], x: u32, val: u32) {
    let word = &mut line[(x >> 5) as usize];
    let mask = 0x8000_0000u32 >> (x & 31);
    if val != 0 {
        *word |= mask;
    } else {
        *word &= !mask;
    }
}

/// Get an 8-bit pixel value.
#[inline]
pub fn get_data_byte(line: &[u32], x: u32) -> u32 {
    (line[(x >> 2) as usize] >> (8 * (3 - (x & 3)))) & 0xff
}

/// Set an 8-bit pixel value.
#[inline]
pub fn set_data_byte(line: &mut [u32], x: u32, val: u32) {
    let word = &mut line[(x >> 2) as usize];
    let shift = 8 * (3 - (x & 3));
    *word = (*word & !(0xff << shift)) | ((val & 0xff) << shift);
}

fn read(line: &[u32], depth: PixelDepth, x: u32) -> u32 {
    match depth {
        PixelDepth::Bit1 => get_data_bit(line, x),
        PixelDepth::Bit8 => get_data_byte(line, x),
        PixelDepth::Bit32 => line[x as usize],
    }
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` lies past the end of the row data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read(self.row_data(y), self.depth(), x)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let wpl = self.inner.wpl as usize;
        let start = y as usize * wpl;
        Some(read(&self.inner.data[start..start + wpl], self.depth(), x))
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// Values wider than the pixel depth are masked.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` lies past the end of the row data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let depth = self.depth();
        let line = self.row_data_mut(y);
        match depth {
            PixelDepth::Bit1 => set_data_bit(line, x, val & 1),
            PixelDepth::Bit8 => set_data_byte(line, x, val),
            PixelDepth::Bit32 => line[x as usize] = val,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_bit() {
        let mut line = [0u32; 2];
        set_data_bit(&mut line, 0, 1);
        set_data_bit(&mut line, 33, 1);
        assert_eq!(line[0], 0x8000_0000);
        assert_eq!(line[1], 0x4000_0000);
        assert_eq!(get_data_bit(&line, 0), 1);
        assert_eq!(get_data_bit(&line, 1), 0);
        assert_eq!(get_data_bit(&line, 33), 1);
        set_data_bit(&mut line, 0, 0);
        assert_eq!(line[0], 0);
    }

    #[test]
    fn test_data_byte() {
        let mut line = [0u32; 1];
        set_data_byte(&mut line, 0, 0xab);
        set_data_byte(&mut line, 3, 0x12);
        assert_eq!(line[0], 0xab00_0012);
        assert_eq!(get_data_byte(&line, 0), 0xab);
        assert_eq!(get_data_byte(&line, 1), 0);
        assert_eq!(get_data_byte(&line, 3), 0x12);
    }

    #[test]
    fn test_get_set_pixel_all_depths() {
        for depth in [PixelDepth::Bit1, PixelDepth::Bit8, PixelDepth::Bit32] {
            let mut pm = Pix::new(40, 3, depth).unwrap().to_mut();
            let val = depth.max_value();
            pm.set_pixel(37, 2, val).unwrap();
            assert_eq!(pm.get_pixel(37, 2), Some(val));
            let pix: Pix = pm.into();
            assert_eq!(pix.get_pixel(37, 2), Some(val));
            assert_eq!(pix.get_pixel(36, 2), Some(0));
            assert_eq!(pix.get_pixel(40, 0), None);
        }
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut pm = Pix::new(4, 4, PixelDepth::Bit1).unwrap().to_mut();
        assert!(pm.set_pixel(4, 0, 1).is_err());
        assert!(pm.set_pixel(0, 4, 1).is_err());
    }
}
