//! Little-endian limb-vector primitives shared by [`crate::BigUint`] and
//! [`crate::BigInt`].
//!
//! The word type `W` is fixed to `u32`, with `u64` as the double-width type
//! `DW` used for carry/borrow propagation (`bitwidth(DW) == 2 * bitwidth(W)`).
//! Every algorithm in this crate is written against these two widths; porting
//! to a different `(W, DW)` pair means redoing the widening casts and
//! recomputing the per-base digit-count table in [`crate::text`].

/// Number of bits in one limb.
pub(crate) const WORD_BITS: u32 = u32::BITS;

/// Drop redundant leading (most-significant) zero limbs, keeping at least one.
///
/// This is the sole guarantor of the NORMAL-U invariant: every path that
/// produces a `Vec<u32>` destined to become limb storage must pass through
/// here first.
pub(crate) fn normalize(limbs: &mut Vec<u32>) {
    while limbs.len() > 1 && *limbs.last().unwrap() == 0 {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
    limbs.shrink_to_fit();
}

/// `true` if `limbs` satisfies NORMAL-U: length 1, or length > 1 with a
/// nonzero top limb. Used only in debug assertions — `debug_assert!` still
/// type-checks its argument in release builds, so this can't be `cfg`-gated
/// away without breaking those builds.
pub(crate) fn is_normalized(limbs: &[u32]) -> bool {
    !limbs.is_empty() && (limbs.len() == 1 || *limbs.last().unwrap() != 0)
}
