//! Arbitrary-precision signed integer built on [`crate::BigUint`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{BigIntError, Result};
use crate::text::{self, validate_radix};
use crate::uint::BigUint;

/// An arbitrary-precision signed integer: a sign bit plus a [`BigUint`]
/// magnitude. Always normalized: zero magnitude implies a non-negative sign
/// (NORMAL-S — no negative zero).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    magnitude: BigUint,
}

impl BigInt {
    pub fn zero() -> Self {
        BigInt { negative: false, magnitude: BigUint::zero() }
    }

    pub fn one() -> Self {
        BigInt { negative: false, magnitude: BigUint::one() }
    }

    /// A cheap clone of a small constant in `0..=16`, falling back to a
    /// fresh allocation outside that range (including all negative `n`).
    pub fn small(n: i32) -> Self {
        crate::small::small_int(n)
    }

    /// Builds a normalized value from a sign and magnitude, clearing the
    /// sign if the magnitude is zero (no negative zero ever escapes this
    /// constructor).
    pub(crate) fn from_sign_magnitude(negative: bool, magnitude: BigUint) -> Self {
        BigInt { negative: negative && !magnitude.is_zero(), magnitude }
    }

    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    pub fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::zero()
        } else if self.negative {
            BigInt::from(-1i64)
        } else {
            BigInt::one()
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_sign_magnitude(false, self.magnitude.clone())
    }

    /// `self + rhs`, reading `rhs`'s sign as `rhs.negative ^ negate_rhs`
    /// without ever writing through `rhs` — the non-mutating replacement for
    /// the original source's transient sign-flip trick in subtract.
    fn add_with_sign(&self, rhs: &BigInt, negate_rhs: bool) -> BigInt {
        let rhs_negative = rhs.negative ^ negate_rhs;
        if self.negative == rhs_negative {
            BigInt::from_sign_magnitude(self.negative, self.magnitude.add(&rhs.magnitude))
        } else {
            match self.magnitude.cmp(&rhs.magnitude) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => {
                    BigInt::from_sign_magnitude(self.negative, self.magnitude.sub(&rhs.magnitude).unwrap())
                }
                Ordering::Less => {
                    BigInt::from_sign_magnitude(rhs_negative, rhs.magnitude.sub(&self.magnitude).unwrap())
                }
            }
        }
    }

    pub fn add(&self, rhs: &BigInt) -> BigInt {
        self.add_with_sign(rhs, false)
    }

    pub fn sub(&self, rhs: &BigInt) -> BigInt {
        self.add_with_sign(rhs, true)
    }

    pub fn mul(&self, rhs: &BigInt) -> BigInt {
        BigInt::from_sign_magnitude(self.negative ^ rhs.negative, self.magnitude.mul(&rhs.magnitude))
    }

    pub fn neg(&self) -> BigInt {
        BigInt::from_sign_magnitude(!self.negative, self.magnitude.clone())
    }

    /// Truncated (toward zero) division and remainder. `remainder`'s sign
    /// matches the dividend's (or is zero). Fails with `Arithmetic` on a
    /// zero divisor.
    pub fn div_rem_trunc(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        if rhs.is_zero() {
            return Err(BigIntError::Arithmetic("division by zero"));
        }
        let (q_mag, r_mag) = self.magnitude.div_rem(&rhs.magnitude)?;
        let quotient = BigInt::from_sign_magnitude(self.negative ^ rhs.negative, q_mag);
        let remainder = BigInt::from_sign_magnitude(self.negative, r_mag);
        Ok((quotient, remainder))
    }

    /// Floored (toward negative infinity) division and remainder.
    /// `remainder`'s sign matches the divisor's (or is zero). Fails with
    /// `Arithmetic` on a zero divisor.
    pub fn div_rem_floor(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        let (q_trunc, r_trunc) = self.div_rem_trunc(rhs)?;
        let neg_q = self.negative ^ rhs.negative;
        if neg_q && !r_trunc.is_zero() {
            let q_floor = q_trunc.sub(&BigInt::one());
            let r_floor = self.sub(&q_floor.mul(rhs));
            Ok((q_floor, r_floor))
        } else {
            Ok((q_trunc, r_trunc))
        }
    }

    /// Replace `self` with `self / rhs` (truncated) if `rhs` is nonzero,
    /// leaving `self` unchanged on failure.
    pub fn div_assign_trunc(&mut self, rhs: &BigInt) -> Result<()> {
        let (q, _) = self.div_rem_trunc(rhs)?;
        *self = q;
        Ok(())
    }

    /// Replace `self` with `self / rhs` (floored) if `rhs` is nonzero,
    /// leaving `self` unchanged on failure.
    pub fn div_assign_floor(&mut self, rhs: &BigInt) -> Result<()> {
        let (q, _) = self.div_rem_floor(rhs)?;
        *self = q;
        Ok(())
    }

    pub fn to_i32(&self) -> Result<i32> {
        const MIN_ABS: u32 = 1u32 << 31;
        let m = self.magnitude.to_u32()?;
        if self.negative {
            if m > MIN_ABS {
                return Err(BigIntError::Arithmetic("value does not fit in i32"));
            }
            if m == MIN_ABS {
                return Ok(i32::MIN);
            }
            Ok(-(m as i32))
        } else {
            if m > i32::MAX as u32 {
                return Err(BigIntError::Arithmetic("value does not fit in i32"));
            }
            Ok(m as i32)
        }
    }

    pub fn to_i64(&self) -> Result<i64> {
        const MIN_ABS: u64 = 1u64 << 63;
        let m = self.magnitude.to_u64()?;
        if self.negative {
            if m > MIN_ABS {
                return Err(BigIntError::Arithmetic("value does not fit in i64"));
            }
            if m == MIN_ABS {
                return Ok(i64::MIN);
            }
            Ok(-(m as i64))
        } else {
            if m > i64::MAX as u64 {
                return Err(BigIntError::Arithmetic("value does not fit in i64"));
            }
            Ok(m as i64)
        }
    }

    pub fn to_i128(&self) -> Result<i128> {
        const MIN_ABS: u128 = 1u128 << 127;
        let m = self.magnitude.to_u128()?;
        if self.negative {
            if m > MIN_ABS {
                return Err(BigIntError::Arithmetic("value does not fit in i128"));
            }
            if m == MIN_ABS {
                return Ok(i128::MIN);
            }
            Ok(-(m as i128))
        } else {
            if m > i128::MAX as u128 {
                return Err(BigIntError::Arithmetic("value does not fit in i128"));
            }
            Ok(m as i128)
        }
    }

    pub fn parse_prefix_radix(s: &str, radix: u32) -> Result<(BigInt, usize)> {
        validate_radix(radix)?;
        let bytes = s.as_bytes();
        let mut pos = text::skip_whitespace(bytes, 0);
        let mut negative = false;
        if let Some(&b) = bytes.get(pos) {
            if b == b'+' || b == b'-' {
                negative = b == b'-';
                pos += 1;
            }
        }
        let (magnitude, end) = text::parse_magnitude(bytes, pos, radix);
        Ok((BigInt::from_sign_magnitude(negative, magnitude), end))
    }

    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt> {
        let (value, end) = Self::parse_prefix_radix(s, radix)?;
        if end != s.len() {
            return Err(BigIntError::Parse(format!(
                "unexpected character at byte {end} in {s:?}"
            )));
        }
        Ok(value)
    }

    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        let body = self.magnitude.to_str_radix(radix)?;
        Ok(if self.negative { format!("-{body}") } else { body })
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(v: $t) -> Self {
                    let negative = v < 0;
                    BigInt::from_sign_magnitude(negative, BigUint::from(v.unsigned_abs()))
                }
            }
        )*
    };
}
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Differing signs decide directly; same sign falls back to magnitude
    /// order, reversed when both are negative.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl std::ops::Add<&BigInt> for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::add(self, rhs)
    }
}

impl std::ops::Add for BigInt {
    type Output = BigInt;
    fn add(self, rhs: BigInt) -> BigInt {
        BigInt::add(&self, &rhs)
    }
}

impl std::ops::AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::add(self, rhs);
    }
}

impl std::ops::Sub<&BigInt> for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt::sub(self, rhs)
    }
}

impl std::ops::Sub for BigInt {
    type Output = BigInt;
    fn sub(self, rhs: BigInt) -> BigInt {
        BigInt::sub(&self, &rhs)
    }
}

impl std::ops::SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::sub(self, rhs);
    }
}

impl std::ops::Mul<&BigInt> for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(self, rhs)
    }
}

impl std::ops::Mul for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: BigInt) -> BigInt {
        BigInt::mul(&self, &rhs)
    }
}

impl std::ops::MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::mul(self, rhs);
    }
}

impl std::ops::Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}

impl std::ops::Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::neg(&self)
    }
}

/// Truncating division, matching `i64: Div`. Panics on a zero divisor; use
/// [`BigInt::div_rem_trunc`] to handle that without panicking.
impl std::ops::Div for &BigInt {
    type Output = BigInt;
    fn div(self, rhs: &BigInt) -> BigInt {
        self.div_rem_trunc(rhs).expect("division by zero").0
    }
}

impl std::ops::Rem for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: &BigInt) -> BigInt {
        self.div_rem_trunc(rhs).expect("division by zero").1
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(10).expect("radix 10 is always valid"))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(16).expect("radix 16 is always valid"))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;
    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_str_radix(s, 10)
    }
}
