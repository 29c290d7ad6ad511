//! Pixel sources
//!
//! A tile image only has to answer two questions: what rectangle does it
//! cover, and what color is the pixel at a given coordinate. Anything that
//! can do that can be normalized and fed to the network.
//!
//! Implementations are provided for [`Pix`](crate::Pix) and for the image
//! buffers of the `image` crate, so decoded PNG/JPEG tiles can be used
//! directly.

use crate::Box;
use crate::color::Rgba;
use image::{DynamicImage, GenericImageView, GrayImage, RgbaImage};

/// Read-only, pixel-addressable image with a rectangular extent.
pub trait PixelSource {
    /// The rectangle covered by the image. The origin need not be `(0, 0)`.
    fn bounds(&self) -> Box;

    /// Color at `(x, y)`.
    ///
    /// Coordinates outside [`bounds`](Self::bounds) yield
    /// [`Rgba::TRANSPARENT`].
    fn color_at(&self, x: i32, y: i32) -> Rgba;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn bounds(&self) -> Box {
        (**self).bounds()
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba {
        (**self).color_at(x, y)
    }
}

fn image_coords(b: &Box, x: i32, y: i32) -> Option<(u32, u32)> {
    if b.contains_point(x, y) {
        Some(((x - b.x) as u32, (y - b.y) as u32))
    } else {
        None
    }
}

impl PixelSource for RgbaImage {
    fn bounds(&self) -> Box {
        Box::new_unchecked(0, 0, self.width() as i32, self.height() as i32)
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba {
        match image_coords(&PixelSource::bounds(self), x, y) {
            Some((ix, iy)) => {
                let [r, g, b, a] = self.get_pixel(ix, iy).0;
                Rgba::new(r, g, b, a)
            }
            None => Rgba::TRANSPARENT,
        }
    }
}

impl PixelSource for GrayImage {
    fn bounds(&self) -> Box {
        Box::new_unchecked(0, 0, self.width() as i32, self.height() as i32)
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba {
        match image_coords(&PixelSource::bounds(self), x, y) {
            Some((ix, iy)) => Rgba::gray(self.get_pixel(ix, iy).0[0]),
            None => Rgba::TRANSPARENT,
        }
    }
}

impl PixelSource for DynamicImage {
    fn bounds(&self) -> Box {
        let (w, h) = self.dimensions();
        Box::new_unchecked(0, 0, w as i32, h as i32)
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba {
        match image_coords(&PixelSource::bounds(self), x, y) {
            Some((ix, iy)) => {
                let [r, g, b, a] = self.get_pixel(ix, iy).0;
                Rgba::new(r, g, b, a)
            }
            None => Rgba::TRANSPARENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgba as ImageRgba};

    #[test]
    fn test_rgba_image_source() {
        let mut img = RgbaImage::from_pixel(3, 2, ImageRgba([255, 255, 255, 255]));
        img.put_pixel(1, 1, ImageRgba([10, 20, 30, 255]));

        assert_eq!(PixelSource::bounds(&img), Box::new_unchecked(0, 0, 3, 2));
        assert_eq!(img.color_at(0, 0), Rgba::WHITE);
        assert_eq!(img.color_at(1, 1), Rgba::new(10, 20, 30, 255));
        assert_eq!(img.color_at(3, 0), Rgba::TRANSPARENT);
        assert_eq!(img.color_at(-1, 0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_gray_image_source() {
        let img = GrayImage::from_pixel(2, 2, Luma([0]));
        assert_eq!(img.color_at(1, 1), Rgba::BLACK);
        assert_eq!(img.color_at(2, 2), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_dynamic_image_source() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 5, Luma([255])));
        assert_eq!(PixelSource::bounds(&img), Box::new_unchecked(0, 0, 4, 5));
        assert_eq!(img.color_at(3, 4), Rgba::WHITE);
    }
}
