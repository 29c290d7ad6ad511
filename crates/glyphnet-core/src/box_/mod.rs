//! Box - Rectangle regions
//!
//! Boxes describe image bounds, foreground bounding boxes and clip
//! regions. Coordinates are signed so that a border margin can push a box
//! past the image origin before it is clipped back.

use crate::error::{Error, Result};

/// A rectangle region with origin at its top-left corner.
///
/// `x + w` and `y + h` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a box from its four edges. `right` and `bottom` are exclusive.
    ///
    /// Reversed edges are swapped, so the result always has non-negative
    /// dimensions.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let (x, w) = if left <= right {
            (left, right - left)
        } else {
            (right, left - right)
        };
        let (y, h) = if top <= bottom {
            (top, bottom - top)
        } else {
            (bottom, top - bottom)
        };
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection of two boxes
    pub fn intersect(&self, other: &Box) -> Option<Box> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Box {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }

    /// Clip the box to the `width x height` image rooted at the origin.
    pub fn clip(&self, width: i32, height: i32) -> Option<Box> {
        self.intersect(&Box::new_unchecked(0, 0, width, height))
    }

    /// Whether both dimensions reach `fraction` of the reference box's
    /// dimensions, each threshold truncated to a whole pixel.
    pub fn covers_fraction_of(&self, reference: &Box, fraction: f64) -> bool {
        let min_w = (fraction * reference.w as f64) as i32;
        let min_h = (fraction * reference.h as f64) as i32;
        self.w >= min_w && self.h >= min_h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(Box::new(0, 0, -1, 5).is_err());
        assert!(Box::new(0, 0, 5, -1).is_err());
        assert!(Box::new(-3, -3, 0, 0).is_ok());
    }

    #[test]
    fn test_from_edges() {
        let b = Box::from_edges(2, 3, 7, 10);
        assert_eq!(b, Box::new_unchecked(2, 3, 5, 7));
        assert_eq!(Box::from_edges(7, 10, 2, 3), b);
    }

    #[test]
    fn test_intersect_and_clip() {
        let b = Box::new_unchecked(-2, -2, 6, 6);
        assert_eq!(b.clip(10, 10), Some(Box::new_unchecked(0, 0, 4, 4)));
        assert_eq!(Box::new_unchecked(20, 20, 5, 5).clip(10, 10), None);

        let a = Box::new_unchecked(0, 0, 10, 10);
        let c = Box::new_unchecked(5, 5, 10, 10);
        assert_eq!(a.intersect(&c), Some(Box::new_unchecked(5, 5, 5, 5)));
    }

    #[test]
    fn test_covers_fraction_of() {
        let tile = Box::new_unchecked(0, 0, 20, 20);
        // 0.25 * 20 = 5
        assert!(!Box::new_unchecked(0, 0, 4, 20).covers_fraction_of(&tile, 0.25));
        assert!(Box::new_unchecked(0, 0, 5, 20).covers_fraction_of(&tile, 0.25));
        assert!(!Box::new_unchecked(0, 0, 20, 4).covers_fraction_of(&tile, 0.25));

        // threshold truncates: 0.25 * 10 = 2.5 -> 2
        let small = Box::new_unchecked(0, 0, 10, 10);
        assert!(Box::new_unchecked(0, 0, 2, 2).covers_fraction_of(&small, 0.25));
    }
}
