//! PIX - The image container
//!
//! `Pix` holds every intermediate image of the tile pipeline: the copied
//! source tile (32 bpp), its black/white version (1 bpp), the crop, and the
//! reduced fixed-size tile.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//! - For 32-bit images, color order is RGBA (red in MSB)
//! - In 1 bpp images a set bit is black (ink), a clear bit is white
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod clip;
mod convert;
mod interop;

pub use access::{get_data_bit, get_data_byte, set_data_bit, set_data_byte};
pub use clip::ScanDirection;

use crate::Box;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::source::PixelSource;
use std::sync::Arc;

/// Pixel depth (bits per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 1-bit binary image (1 = black)
    Bit1 = 1,
    /// 8-bit grayscale
    Bit8 = 8,
    /// 32-bit RGBA
    Bit32 = 32,
}

impl PixelDepth {
    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum pixel value representable at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Bit32 => u32::MAX,
            _ => (1u32 << self.bits()) - 1,
        }
    }
}

/// Internal PIX data
#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// 32-bit words per line
    wpl: u32,
    /// The image data (packed 32-bit words)
    data: Vec<u32>,
}

/// PIX - Image container
///
/// # Examples
///
/// ```
/// use glyphnet_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(12, 12, PixelDepth::Bit1).unwrap();
/// assert_eq!(pix.width(), 12);
/// assert_eq!(pix.height(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions and depth.
    ///
    /// The image data is initialized to zero, which is white for 1 bpp
    /// images and black for 8 bpp images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let wpl = Self::compute_wpl(width, depth)?;
        let data = vec![0u32; (wpl as usize) * (height as usize)];

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                depth,
                wpl,
                data,
            }),
        })
    }

    /// Copy any pixel source into a 32 bpp image rooted at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the source bounds are empty.
    pub fn from_source(src: &impl PixelSource) -> Result<Self> {
        let b = src.bounds();
        if b.is_empty() {
            return Err(Error::InvalidDimension {
                width: b.w.max(0) as u32,
                height: b.h.max(0) as u32,
            });
        }

        let mut pm = Pix::new(b.w as u32, b.h as u32, PixelDepth::Bit32)?.to_mut();
        for y in 0..b.h {
            for x in 0..b.w {
                let c = src.color_at(b.x + x, b.y + y);
                pm.set_pixel_unchecked(x as u32, y as u32, c.to_pixel());
            }
        }
        Ok(pm.into())
    }

    fn compute_wpl(width: u32, depth: PixelDepth) -> Result<u32> {
        let bits_per_line = u64::from(width) * u64::from(depth.bits());
        u32::try_from(bits_per_line.div_ceil(32))
            .map_err(|_| Error::InvalidParameter(format!("image row too large: width={width}")))
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get the raw image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get one row of raw image data.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let wpl = self.inner.wpl as usize;
        let start = y as usize * wpl;
        &self.inner.data[start..start + wpl]
    }

    /// The full image rectangle.
    #[inline]
    pub fn bounds(&self) -> Box {
        Box::new_unchecked(0, 0, self.width() as i32, self.height() as i32)
    }

    /// Check whether two images have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Color of an in-bounds pixel.
    fn color_unchecked(&self, x: u32, y: u32) -> Rgba {
        let val = self.get_pixel_unchecked(x, y);
        match self.depth() {
            PixelDepth::Bit1 => {
                if val == 1 {
                    Rgba::BLACK
                } else {
                    Rgba::WHITE
                }
            }
            PixelDepth::Bit8 => Rgba::gray(val as u8),
            PixelDepth::Bit32 => Rgba::from_pixel(val),
        }
    }

    /// Try to get exclusive access to the pixel data without copying.
    ///
    /// Fails (returning `self`) if the data is shared with another `Pix`.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(PixMut { inner }),
            Err(inner) => Err(Pix { inner }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }
}

impl PixelSource for Pix {
    fn bounds(&self) -> Box {
        Pix::bounds(self)
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba {
        if Pix::bounds(self).contains_point(x, y) {
            self.color_unchecked(x as u32, y as u32)
        } else {
            Rgba::TRANSPARENT
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get mutable access to one row of raw image data.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let wpl = self.inner.wpl as usize;
        let start = y as usize * wpl;
        &mut self.inner.data[start..start + wpl]
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            inner: Arc::new(pm.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_size() {
        assert!(Pix::new(0, 5, PixelDepth::Bit1).is_err());
        assert!(Pix::new(5, 0, PixelDepth::Bit8).is_err());
    }

    #[test]
    fn test_wpl() {
        assert_eq!(Pix::new(32, 1, PixelDepth::Bit1).unwrap().wpl(), 1);
        assert_eq!(Pix::new(33, 1, PixelDepth::Bit1).unwrap().wpl(), 2);
        assert_eq!(Pix::new(5, 1, PixelDepth::Bit8).unwrap().wpl(), 2);
        assert_eq!(Pix::new(5, 1, PixelDepth::Bit32).unwrap().wpl(), 5);
    }

    #[test]
    fn test_depth_max_value() {
        assert_eq!(PixelDepth::Bit1.max_value(), 1);
        assert_eq!(PixelDepth::Bit8.max_value(), 255);
    }

    #[test]
    fn test_try_into_mut_shared() {
        let pix = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        let shared = pix.clone();
        let pix = pix.try_into_mut().unwrap_err();
        drop(shared);
        assert!(pix.try_into_mut().is_ok());
    }

    #[test]
    fn test_color_at_1bpp() {
        let mut pm = Pix::new(3, 3, PixelDepth::Bit1).unwrap().to_mut();
        pm.set_pixel(1, 2, 1).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.color_at(1, 2), Rgba::BLACK);
        assert_eq!(pix.color_at(0, 0), Rgba::WHITE);
        assert_eq!(pix.color_at(3, 0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_from_source_offset_origin() {
        struct Shifted;
        impl PixelSource for Shifted {
            fn bounds(&self) -> Box {
                Box::new_unchecked(10, 20, 2, 2)
            }
            fn color_at(&self, x: i32, y: i32) -> Rgba {
                if (x, y) == (11, 21) {
                    Rgba::BLACK
                } else {
                    Rgba::WHITE
                }
            }
        }

        let pix = Pix::from_source(&Shifted).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit32);
        assert_eq!(pix.bounds(), Box::new_unchecked(0, 0, 2, 2));
        assert_eq!(pix.color_at(1, 1), Rgba::BLACK);
        assert_eq!(pix.color_at(0, 0), Rgba::WHITE);
    }
}
