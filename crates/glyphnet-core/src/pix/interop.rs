//! Conversion to `image` crate buffers

use super::Pix;
use crate::source::PixelSource;
use image::{Rgba as ImageRgba, RgbaImage};

impl Pix {
    /// Render the image into an 8-bit RGBA buffer, at any depth.
    ///
    /// 1 bpp images come out as opaque black and white, 8 bpp images as
    /// opaque gray.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let c = self.color_at(x as i32, y as i32);
            ImageRgba([c.r, c.g, c.b, c.a])
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Pix, PixelDepth, PixelSource, Rgba};

    #[test]
    fn test_to_rgba_image_1bpp() {
        let mut pm = Pix::new(2, 2, PixelDepth::Bit1).unwrap().to_mut();
        pm.set_pixel(1, 0, 1).unwrap();
        let pix: Pix = pm.into();

        let img = pix.to_rgba_image();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_rgba_image_roundtrip() {
        let mut pm = Pix::new(3, 2, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_pixel(2, 1, Rgba::new(1, 2, 3, 4).to_pixel()).unwrap();
        let pix: Pix = pm.into();

        let back = Pix::from_source(&pix.to_rgba_image()).unwrap();
        assert_eq!(back.data(), pix.data());
        assert_eq!(back.color_at(2, 1), Rgba::new(1, 2, 3, 4));
    }
}
