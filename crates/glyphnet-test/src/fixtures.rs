//! Synthetic tile fixtures
//!
//! Tiles are built in code rather than loaded from image files: either from
//! ASCII art, or by rendering a glyph of a small built-in 5x7 font onto a
//! white tile.

use crate::error::{TestError, TestResult};
use glyphnet_core::{Box, Pix, PixelDepth, Rgba};

/// 5x7 bitmaps for the letters used by the tests. `#` is ink.
const FONT: &[(char, [&str; 7])] = &[
    ('A', [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    ('B', ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."]),
    ('C', [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."]),
    ('E', ["#####", "#....", "#....", "####.", "#....", "#....", "#####"]),
    ('I', ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "#####"]),
    ('L', ["#....", "#....", "#....", "#....", "#....", "#....", "#####"]),
    ('O', [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    ('T', ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."]),
    ('X', ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"]),
];

/// Letters available to [`letter_tile`].
pub fn font_letters() -> impl Iterator<Item = char> {
    FONT.iter().map(|(c, _)| *c)
}

/// Build a 32 bpp tile from ASCII art.
///
/// `#` is opaque black, `.` is opaque white, and `+` is a mid gray
/// (which binarizes to white). All rows must have the same length.
pub fn pix_from_ascii(rows: &[&str]) -> TestResult<Pix> {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.chars().count());
    if h == 0 || w == 0 {
        return Err(TestError::InvalidFixture("empty fixture".into()));
    }

    let mut pm = Pix::new(w as u32, h as u32, PixelDepth::Bit32)?.to_mut();
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != w {
            return Err(TestError::InvalidFixture(format!(
                "row {y} has {} columns, expected {w}",
                row.chars().count()
            )));
        }
        for (x, ch) in row.chars().enumerate() {
            let c = match ch {
                '#' => Rgba::BLACK,
                '.' => Rgba::WHITE,
                '+' => Rgba::gray(160),
                other => {
                    return Err(TestError::InvalidFixture(format!(
                        "unexpected character {other:?} at ({x}, {y})"
                    )));
                }
            };
            pm.set_pixel_unchecked(x as u32, y as u32, c.to_pixel());
        }
    }
    Ok(pm.into())
}

/// A white `w x h` tile with a black filled rectangle.
pub fn bar_tile(w: u32, h: u32, bar: Box) -> TestResult<Pix> {
    let mut pm = Pix::new(w, h, PixelDepth::Bit32)?.to_mut();
    for y in 0..h {
        for x in 0..w {
            let c = if bar.contains_point(x as i32, y as i32) {
                Rgba::BLACK
            } else {
                Rgba::WHITE
            };
            pm.set_pixel_unchecked(x, y, c.to_pixel());
        }
    }
    Ok(pm.into())
}

/// Render `letter` from the built-in font, each font pixel drawn as a
/// `scale x scale` block, surrounded by `margin` white pixels.
pub fn letter_tile(letter: char, scale: u32, margin: u32) -> TestResult<Pix> {
    let glyph = FONT
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, g)| g)
        .ok_or_else(|| TestError::InvalidFixture(format!("no glyph for {letter:?}")))?;
    if scale == 0 {
        return Err(TestError::InvalidFixture("scale must be positive".into()));
    }

    let w = 5 * scale + 2 * margin;
    let h = 7 * scale + 2 * margin;
    let mut pm = Pix::new(w, h, PixelDepth::Bit32)?.to_mut();
    for y in 0..h {
        for x in 0..w {
            let inside = x >= margin
                && y >= margin
                && x < margin + 5 * scale
                && y < margin + 7 * scale;
            let ink = inside && {
                let row = glyph[((y - margin) / scale) as usize].as_bytes();
                let col = ((x - margin) / scale) as usize;
                row[col] == b'#'
            };
            let c = if ink { Rgba::BLACK } else { Rgba::WHITE };
            pm.set_pixel_unchecked(x, y, c.to_pixel());
        }
    }
    Ok(pm.into())
}
