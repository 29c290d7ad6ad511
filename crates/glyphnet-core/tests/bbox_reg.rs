//! Bounding box regression test
//!
//! Binarizes synthetic tiles and checks the foreground bounding box,
//! including the empty-image fallback and border expansion.

use glyphnet_core::{Box, Pix, PixelSource, Rgba};
use glyphnet_test::{RegParams, bar_tile, letter_tile, pix_from_ascii};

fn compare_box(rp: &mut RegParams, expected: Box, actual: Box) {
    rp.compare_values(expected.x as f64, actual.x as f64, 0.0);
    rp.compare_values(expected.y as f64, actual.y as f64, 0.0);
    rp.compare_values(expected.w as f64, actual.w as f64, 0.0);
    rp.compare_values(expected.h as f64, actual.h as f64, 0.0);
}

#[test]
fn bbox_reg() {
    let mut rp = RegParams::new("bbox");

    // --- Test 1: all-white tile falls back to the full bounds ---
    let blank = bar_tile(20, 16, Box::new_unchecked(0, 0, 0, 0)).expect("blank");
    let bw = Pix::binarize(&blank).expect("binarize blank");
    compare_box(&mut rp, Box::new_unchecked(0, 0, 20, 16), bw.bounding_box(0).unwrap());
    compare_box(&mut rp, Box::new_unchecked(0, 0, 20, 16), bw.bounding_box(2).unwrap());

    // --- Test 2: one black pixel gives a 1x1 box ---
    for (x, y) in [(0, 0), (7, 3), (19, 15)] {
        let dot = bar_tile(20, 16, Box::new_unchecked(x, y, 1, 1)).expect("dot");
        let bw = Pix::binarize(&dot).expect("binarize dot");
        compare_box(&mut rp, Box::new_unchecked(x, y, 1, 1), bw.bounding_box(0).unwrap());
    }

    // --- Test 3: border expands and is clipped to the tile ---
    let bar = bar_tile(20, 16, Box::new_unchecked(2, 5, 6, 4)).expect("bar");
    let bw = Pix::binarize(&bar).expect("binarize bar");
    compare_box(&mut rp, Box::new_unchecked(2, 5, 6, 4), bw.bounding_box(0).unwrap());
    compare_box(&mut rp, Box::new_unchecked(0, 2, 11, 10), bw.bounding_box(3).unwrap());

    // --- Test 4: rendered letter is boxed to the glyph ---
    let tile = letter_tile('T', 3, 4).expect("letter T");
    let bw = Pix::binarize(&tile).expect("binarize T");
    compare_box(&mut rp, Box::new_unchecked(4, 4, 15, 21), bw.bounding_box(0).unwrap());

    // --- Test 5: gray pixels binarize to white and are ignored ---
    let gray = pix_from_ascii(&[
        "++++++", //
        "+.##.+", //
        "+.##.+", //
        "++++++",
    ])
    .expect("gray fixture");
    let bw = Pix::binarize(&gray).expect("binarize gray");
    compare_box(&mut rp, Box::new_unchecked(2, 1, 2, 2), bw.bounding_box(0).unwrap());
    rp.compare_strings("OOOOOO\nOO..OO\nOO..OO\nOOOOOO\n", &bw.to_ascii());

    // --- Test 6: cropping to the box keeps only the glyph ---
    let bbox = bw.bounding_box(0).unwrap();
    let crop = bw.clip_rectangle(&bbox).expect("clip");
    rp.compare_values(1.0, if crop.color_at(0, 0) == Rgba::BLACK { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if crop.color_at(1, 1) == Rgba::BLACK { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "bbox regression test failed");
}
