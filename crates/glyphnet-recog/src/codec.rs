//! Bit-width output code
//!
//! A character is represented at the network output by its code point in
//! binary, most significant bit first, zero padded to the output width.
//! `'A'` (65) at width 8 is `[0, 1, 0, 0, 0, 0, 0, 1]`. Code points that
//! need more bits than the width silently lose their high-order bits.

use crate::{RecogError, RecogResult};

/// Widest output code that can still name every `char` (U+10FFFF needs 21).
pub const MAX_CODE_BITS: usize = 21;

/// Encode the code point of `c` as `width` bits, MSB first.
pub fn char_to_bits(c: char, width: usize) -> Vec<u8> {
    let code = c as u32;
    (0..width)
        .rev()
        .map(|shift| {
            u32::try_from(shift)
                .ok()
                .and_then(|s| code.checked_shr(s))
                .map_or(0, |v| (v & 1) as u8)
        })
        .collect()
}

/// Round half away from zero, with magnitudes below one half forced to 0.
///
/// Sigmoid activations lie in `(0, 1)`, so in practice the result is 0 or 1.
#[inline]
pub fn quantize(v: f64) -> i64 {
    if v.abs() < 0.5 {
        return 0;
    }
    v.round() as i64
}

/// Quantize each activation and concatenate the digits.
pub fn bitstring(activations: &[f64]) -> String {
    activations
        .iter()
        .map(|&v| quantize(v).to_string())
        .collect()
}

/// Parse a base-2 string and reinterpret it as a code point.
///
/// # Errors
///
/// Returns [`RecogError::Decode`] if the string is not binary, does not fit
/// a `u32`, or names no valid `char`.
pub fn parse_bitstring(bits: &str) -> RecogResult<char> {
    let code = u32::from_str_radix(bits, 2)
        .map_err(|e| RecogError::Decode(format!("{bits:?} is not a binary number: {e}")))?;
    char::from_u32(code)
        .ok_or_else(|| RecogError::Decode(format!("{code:#x} is not a valid code point")))
}

/// Decode an MSB-first bit pattern into a character.
///
/// # Errors
///
/// Same as [`parse_bitstring`]; any element other than 0 or 1 fails.
pub fn bits_to_char(bits: &[u8]) -> RecogResult<char> {
    let s: String = bits.iter().map(|b| b.to_string()).collect();
    parse_bitstring(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_bits() {
        assert_eq!(char_to_bits('A', 8), vec![0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(char_to_bits('\0', 4), vec![0, 0, 0, 0]);
        assert_eq!(char_to_bits('A', 10), vec![0, 0, 0, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_char_to_bits_truncates_high_bits() {
        // U+0141 = 0b1_0100_0001, the ninth bit is dropped
        assert_eq!(char_to_bits('\u{141}', 8), char_to_bits('A', 8));
        assert!(char_to_bits('A', 0).is_empty());
    }

    #[test]
    fn test_roundtrip_every_byte() {
        for code in 0u32..=255 {
            let c = char::from_u32(code).unwrap();
            assert_eq!(bits_to_char(&char_to_bits(c, 8)).unwrap(), c);
        }
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(0.4999), 0);
        assert_eq!(quantize(0.5), 1);
        assert_eq!(quantize(0.99), 1);
        assert_eq!(quantize(1.0), 1);
        assert_eq!(quantize(-0.3), 0);
        assert_eq!(quantize(-0.5), -1);
        assert_eq!(quantize(1.5), 2);
    }

    #[test]
    fn test_bitstring() {
        assert_eq!(bitstring(&[0.1, 0.9, 0.2, 0.51]), "0101");
    }

    #[test]
    fn test_parse_bitstring_failures() {
        assert!(matches!(parse_bitstring(""), Err(RecogError::Decode(_))));
        assert!(matches!(parse_bitstring("0120"), Err(RecogError::Decode(_))));
        // 0xD800 is a surrogate
        assert!(matches!(
            parse_bitstring("1101100000000000"),
            Err(RecogError::Decode(_))
        ));
        assert!(bits_to_char(&[1, 2]).is_err());
    }
}
