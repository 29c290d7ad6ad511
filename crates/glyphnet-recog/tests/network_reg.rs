//! Network regression test
//!
//! Trains seeded networks on rendered glyph tiles, then checks recognition,
//! snapshot restore, and the decode failure path.

use glyphnet_recog::{Network, NetworkOptions, PixelVector, RecogError, Tile};
use glyphnet_test::{RegParams, letter_tile};
use rand::{SeedableRng, rngs::StdRng};

fn seeded(options: &NetworkOptions, seed: u64) -> Network {
    Network::with_rng(options, &mut StdRng::seed_from_u64(seed)).expect("network")
}

#[test]
fn network_reg() {
    let mut rp = RegParams::new("network");

    let src = letter_tile('A', 4, 3).expect("letter A");
    let tile = Tile::new(Some('A'), &src).expect("normalize A");

    // --- Test 1: repeated training on one tile learns its letter ---
    let mut net = seeded(&NetworkOptions::default(), 7);
    for _ in 0..500 {
        net.train_tile(&tile).expect("train");
    }
    let got = net.recognize_tile(&tile).expect("recognize");
    rp.compare_strings("A", &got.to_string());
    let act = net.forward(&tile.pixels()).expect("forward");
    rp.compare_strings("01000001", &net.bitstring(&act));
    if rp.display() {
        eprintln!("{net}\noutputs = {:?}", act.output());
    }

    // --- Test 2: a restored snapshot computes the same outputs ---
    let bytes = net.write_to_bytes().expect("write");
    let restored = Network::read_from_bytes(&bytes).expect("read");
    let restored_act = restored.forward(&tile.pixels()).expect("forward restored");
    rp.compare_slices(act.output(), restored_act.output(), 1e-9);
    rp.compare_slices(act.hidden(), restored_act.hidden(), 1e-9);
    rp.compare_values(
        f64::from(restored.tile_width()),
        f64::from(net.tile_width()),
        0.0,
    );
    rp.compare_strings(
        "A",
        &restored.recognize_tile(&tile).expect("recognize restored").to_string(),
    );

    // --- Test 3: training continues from a restored snapshot ---
    let mut a = net.clone();
    let mut b = restored;
    let other = Tile::new(Some('T'), &letter_tile('T', 4, 3).expect("T")).expect("normalize T");
    a.train_tile(&other).expect("train a");
    b.train_tile(&other).expect("train b");
    let out_a = a.forward(&other.pixels()).expect("forward a");
    let out_b = b.forward(&other.pixels()).expect("forward b");
    rp.compare_slices(out_a.output(), out_b.output(), 0.0);

    // --- Test 4: output bits that name no character are an error ---
    let options = NetworkOptions::new()
        .with_tile_size(2, 2)
        .with_hidden_count(3)
        .with_num_outputs(21);
    let small = seeded(&options, 1);
    let text = String::from_utf8(small.write_to_bytes().expect("write small")).expect("utf8");
    let saturated = (0..21).map(|_| "50").collect::<Vec<_>>().join(" ");
    let mut in_output = false;
    let edited: Vec<String> = text
        .lines()
        .map(|line| {
            if line.starts_with("Output weights") {
                in_output = true;
                return line.to_string();
            }
            match line.trim().split_once(']') {
                Some((label, _)) if in_output => format!("  {label}] = {saturated}"),
                _ => line.to_string(),
            }
        })
        .collect();
    let broken = Network::read_from_bytes(edited.join("\n").as_bytes()).expect("read edited");
    let input = PixelVector::from_bits(vec![1, 0, 0, 1]).expect("input bits");
    let act = broken.forward(&input).expect("forward edited");
    rp.compare_strings(&"1".repeat(21), &broken.bitstring(&act));
    let decoded = broken.recognize(&input);
    rp.compare_values(
        1.0,
        if matches!(decoded, Err(RecogError::Decode(_))) { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "network regression test failed");
}
