//! Network input vectors

use crate::{RecogError, RecogResult};
use glyphnet_core::PixelSource;

/// Flattened binary tile: one element per pixel in row-major order,
/// `0` for a black pixel and `1` for any other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelVector(Vec<u8>);

impl PixelVector {
    /// Flatten every pixel within the source bounds.
    pub fn from_source(src: &impl PixelSource) -> Self {
        let b = src.bounds();
        let mut bits = Vec::with_capacity(b.area().max(0) as usize);
        for y in b.y..b.bottom() {
            for x in b.x..b.right() {
                bits.push(if src.color_at(x, y).is_black() { 0 } else { 1 });
            }
        }
        Self(bits)
    }

    /// Wrap raw bits.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if any element is not 0 or 1.
    pub fn from_bits(bits: Vec<u8>) -> RecogResult<Self> {
        if let Some((i, &b)) = bits.iter().enumerate().find(|&(_, &b)| b > 1) {
            return Err(RecogError::InvalidParameter(format!(
                "pixel vector element {i} is {b}, expected 0 or 1"
            )));
        }
        Ok(Self(bits))
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for PixelVector {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
