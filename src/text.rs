//! Shared digit/radix helpers for [`crate::BigUint`] and [`crate::BigInt`]
//! text parsing and formatting.
//!
//! Grammar (both types): `whitespace* [+-]? digit*`, bases `2..=16`, digit
//! alphabet `0-9`, `A-F`/`a-f` on input, `0-9A-F` on output.

use crate::error::{BigIntError, Result};
use crate::uint::BigUint;

pub(crate) const DIGIT_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// Per-base count of output digits one 32-bit limb can produce, rounded up:
/// `ceil(32 * log(2) / log(base))` for `base` in `2..=16`. Used only to
/// pre-size the output `String`'s capacity; never load-bearing for
/// correctness.
pub(crate) const DIGITS_PER_LIMB: [usize; 15] = [32, 21, 16, 14, 13, 12, 11, 11, 10, 10, 9, 9, 9, 9, 8];

pub(crate) fn validate_radix(radix: u32) -> Result<()> {
    if (2..=16).contains(&radix) {
        Ok(())
    } else {
        Err(BigIntError::BadArgument("radix must be in 2..=16"))
    }
}

/// Value of an ASCII digit byte in the given base, or `None` if it isn't a
/// valid digit in that base. Accepts both cases for `A-F`.
pub(crate) fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'A'..=b'F' => (byte - b'A') as u32 + 10,
        b'a'..=b'f' => (byte - b'a') as u32 + 10,
        _ => return None,
    };
    (value < radix).then_some(value)
}

pub(crate) fn digit_char(value: u32) -> u8 {
    DIGIT_ALPHABET[value as usize]
}

pub(crate) fn is_whitespace(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

pub(crate) fn output_capacity(limb_count: usize, radix: u32) -> usize {
    limb_count * DIGITS_PER_LIMB[(radix - 2) as usize] + 2
}

pub(crate) fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_whitespace(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Drives the unsigned multiply/add parse loop:
/// `result = result * radix + digit` for each valid digit starting at `pos`,
/// stopping at the first non-digit (or end of input). Zero digits consumed
/// is success with value 0.
pub(crate) fn parse_magnitude(bytes: &[u8], mut pos: usize, radix: u32) -> (BigUint, usize) {
    let mut result = BigUint::zero();
    let base = BigUint::small(radix);
    while pos < bytes.len() {
        match digit_value(bytes[pos], radix) {
            Some(d) => {
                result = result.mul(&base).add(&BigUint::small(d));
                pos += 1;
            }
            None => break,
        }
    }
    (result, pos)
}
