//! Image scaling by nearest-neighbor sampling
//!
//! Each destination pixel `(x, y)` copies the source pixel at
//! `(floor(x * src_w / dst_w), floor(y * src_h / dst_h))`, i.e. the
//! destination coordinate is mapped back into source space by linear
//! scaling and floored. The quotient is computed on integers, so scaling
//! an image to its own size is exactly the identity.
//!
//! Sampling copies raw pixel values and therefore works at every depth;
//! a 1 bpp tile stays 1 bpp.

use crate::{TransformError, TransformResult};
use glyphnet_core::Pix;

/// Source coordinate sampled by destination coordinate `d`.
#[inline]
fn sample_coord(d: u32, src_len: u32, dst_len: u32) -> u32 {
    (u64::from(d) * u64::from(src_len) / u64::from(dst_len)) as u32
}

/// Scale an image to exactly `width x height` using nearest-neighbor
/// sampling.
///
/// # Errors
///
/// Returns [`TransformError::InvalidTargetSize`] if either dimension is 0.
///
/// # Examples
///
/// ```
/// use glyphnet_core::{Pix, PixelDepth};
/// use glyphnet_transform::scale_to_size;
///
/// let pix = Pix::new(40, 30, PixelDepth::Bit1).unwrap();
/// let scaled = scale_to_size(&pix, 12, 12).unwrap();
/// assert_eq!((scaled.width(), scaled.height()), (12, 12));
/// ```
pub fn scale_to_size(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidTargetSize { width, height });
    }

    let (sw, sh) = (pix.width(), pix.height());
    let src_xs: Vec<u32> = (0..width).map(|x| sample_coord(x, sw, width)).collect();

    let mut pm = Pix::new(width, height, pix.depth())?.to_mut();
    for y in 0..height {
        let sy = sample_coord(y, sh, height);
        for (x, &sx) in src_xs.iter().enumerate() {
            pm.set_pixel_unchecked(x as u32, y, pix.get_pixel_unchecked(sx, sy));
        }
    }
    Ok(pm.into())
}

/// Scale an image by the given factors using nearest-neighbor sampling.
///
/// The target size is the rounded product of each dimension and its
/// factor, and never less than one pixel.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if a factor is not a
/// positive finite number.
pub fn scale_by_sampling(pix: &Pix, scale_x: f32, scale_y: f32) -> TransformResult<Pix> {
    for (name, s) in [("scale_x", scale_x), ("scale_y", scale_y)] {
        if !s.is_finite() || s <= 0.0 {
            return Err(TransformError::InvalidScaleFactor(format!(
                "{name} must be positive and finite, got {s}"
            )));
        }
    }

    let w = ((pix.width() as f32 * scale_x).round() as u32).max(1);
    let h = ((pix.height() as f32 * scale_y).round() as u32).max(1);
    scale_to_size(pix, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphnet_core::PixelDepth;

    fn checker(w: u32, h: u32, depth: PixelDepth) -> Pix {
        let mut pm = Pix::new(w, h, depth).unwrap().to_mut();
        for y in 0..h {
            for x in 0..w {
                if (x + y) % 2 == 0 {
                    pm.set_pixel_unchecked(x, y, depth.max_value());
                }
            }
        }
        pm.into()
    }

    #[test]
    fn test_sample_coord() {
        assert_eq!(sample_coord(0, 40, 12), 0);
        assert_eq!(sample_coord(1, 40, 12), 3);
        assert_eq!(sample_coord(11, 40, 12), 36);
        assert_eq!(sample_coord(5, 3, 12), 1);
        for n in 1..200 {
            for d in 0..n {
                assert_eq!(sample_coord(d, n, n), d);
            }
        }
    }

    #[test]
    fn test_identity() {
        for depth in [PixelDepth::Bit1, PixelDepth::Bit8, PixelDepth::Bit32] {
            let pix = checker(13, 13, depth);
            let scaled = scale_to_size(&pix, 13, 13).unwrap();
            assert_eq!(scaled.data(), pix.data());
        }
    }

    #[test]
    fn test_upscale_doubles_pixels() {
        let pix = checker(2, 2, PixelDepth::Bit1);
        let scaled = scale_to_size(&pix, 4, 4).unwrap();
        assert_eq!(scaled.get_pixel(0, 0), Some(1));
        assert_eq!(scaled.get_pixel(1, 1), Some(1));
        assert_eq!(scaled.get_pixel(2, 0), Some(0));
        assert_eq!(scaled.get_pixel(3, 3), Some(1));
    }

    #[test]
    fn test_zero_target_rejected() {
        let pix = checker(4, 4, PixelDepth::Bit1);
        assert!(scale_to_size(&pix, 0, 4).is_err());
    }

    #[test]
    fn test_scale_by_sampling() {
        let pix = checker(10, 6, PixelDepth::Bit8);
        let scaled = scale_by_sampling(&pix, 0.5, 2.0).unwrap();
        assert_eq!((scaled.width(), scaled.height()), (5, 12));
        let tiny = scale_by_sampling(&pix, 0.01, 0.01).unwrap();
        assert_eq!((tiny.width(), tiny.height()), (1, 1));
        assert!(scale_by_sampling(&pix, 0.0, 1.0).is_err());
        assert!(scale_by_sampling(&pix, 1.0, f32::NAN).is_err());
    }
}
