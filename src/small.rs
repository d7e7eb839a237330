//! Lazily-built cache of the small constants `0..=16`. Built once per
//! process and shared by every caller; there is no teardown because there
//! is no owner to tear it down.

use std::sync::OnceLock;

use crate::int::BigInt;
use crate::uint::BigUint;

const SMALL_COUNT: usize = 17; // 0..=16, matching the original context's table.

fn small_uints() -> &'static [BigUint; SMALL_COUNT] {
    static CACHE: OnceLock<[BigUint; SMALL_COUNT]> = OnceLock::new();
    CACHE.get_or_init(|| std::array::from_fn(|i| BigUint::from(i as u32)))
}

fn small_ints() -> &'static [BigInt; SMALL_COUNT] {
    static CACHE: OnceLock<[BigInt; SMALL_COUNT]> = OnceLock::new();
    CACHE.get_or_init(|| std::array::from_fn(|i| BigInt::from(i as i64)))
}

pub(crate) fn small_uint(n: u32) -> BigUint {
    match small_uints().get(n as usize) {
        Some(v) => v.clone(),
        None => BigUint::from(n),
    }
}

pub(crate) fn small_int(n: i32) -> BigInt {
    if n >= 0 {
        if let Some(v) = small_ints().get(n as usize) {
            return v.clone();
        }
    }
    BigInt::from(n as i64)
}
