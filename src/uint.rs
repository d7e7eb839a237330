//! Arbitrary-precision unsigned magnitude.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{BigIntError, Result};
use crate::limbs::{self, WORD_BITS};
use crate::text::{self, digit_char, validate_radix};

/// An arbitrary-precision non-negative integer.
///
/// Stored as a little-endian `Vec<u32>` of limbs (`limbs[0]` is least
/// significant). Always normalized: `limbs.len() == 1`, or `limbs.len() > 1`
/// and the top limb is nonzero (NORMAL-U, see the crate's design notes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    pub(crate) limbs: Vec<u32>,
}

impl BigUint {
    /// The value 0.
    pub fn zero() -> Self {
        BigUint { limbs: vec![0] }
    }

    /// The value 1.
    pub fn one() -> Self {
        BigUint { limbs: vec![1] }
    }

    /// A cheap clone of a small constant `0..=16`, falling back to a fresh
    /// allocation outside that range. Backed by a process-wide cache; see
    /// [`crate::small`].
    pub fn small(n: u32) -> Self {
        crate::small::small_uint(n)
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Position of the highest set bit, counted from 0. Fails on zero.
    pub fn most_significant_bit(&self) -> Result<u32> {
        if self.is_zero() {
            return Err(BigIntError::Arithmetic("most significant bit of zero"));
        }
        let top = *self.limbs.last().unwrap();
        let bit_in_top = WORD_BITS - 1 - top.leading_zeros();
        Ok(bit_in_top + (self.limbs.len() as u32 - 1) * WORD_BITS)
    }

    pub(crate) fn bit(&self, i: u32) -> bool {
        let word = (i / WORD_BITS) as usize;
        let offset = i % WORD_BITS;
        match self.limbs.get(word) {
            Some(&limb) => (limb >> offset) & 1 == 1,
            None => false,
        }
    }

    /// `self + other`.
    pub fn add(&self, other: &BigUint) -> BigUint {
        let m = self.limbs.len().max(other.limbs.len());
        let mut result = Vec::with_capacity(m + 1);
        let mut carry: u64 = 0;
        for i in 0..m {
            let a = *self.limbs.get(i).unwrap_or(&0) as u64;
            let b = *other.limbs.get(i).unwrap_or(&0) as u64;
            let sum = a + b + carry;
            result.push(sum as u32);
            carry = sum >> WORD_BITS;
        }
        if carry != 0 {
            result.push(carry as u32);
        }
        limbs::normalize(&mut result);
        BigUint { limbs: result }
    }

    /// `self - other`. Fails with `Arithmetic` if `self < other`.
    pub fn sub(&self, other: &BigUint) -> Result<BigUint> {
        if self.cmp(other) == Ordering::Less {
            return Err(BigIntError::Arithmetic("unsigned subtraction would underflow"));
        }
        let mut result = Vec::with_capacity(self.limbs.len());
        let mut borrow: i64 = 0;
        for i in 0..self.limbs.len() {
            let a = self.limbs[i] as i64;
            let b = *other.limbs.get(i).unwrap_or(&0) as i64;
            let mut diff = a - b - borrow;
            if diff < 0 {
                diff += 1i64 << WORD_BITS;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u32);
        }
        limbs::normalize(&mut result);
        Ok(BigUint { limbs: result })
    }

    /// `self - other`, or `None` if it would underflow.
    pub fn checked_sub(&self, other: &BigUint) -> Option<BigUint> {
        self.sub(other).ok()
    }

    /// Replace `self` with `self - other` if that doesn't underflow, leaving
    /// `self` unchanged on failure.
    pub fn sub_assign_checked(&mut self, other: &BigUint) -> Result<()> {
        let result = self.sub(other)?;
        *self = result;
        Ok(())
    }

    /// Schoolbook multiply, wordwise with `u64` widening products.
    pub fn mul(&self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }
        let mut result = vec![0u32; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let mut carry: u64 = 0;
            for (j, &b) in other.limbs.iter().enumerate() {
                let idx = i + j;
                let prod = (a as u64) * (b as u64) + result[idx] as u64 + carry;
                result[idx] = prod as u32;
                carry = prod >> WORD_BITS;
            }
            let mut k = i + other.limbs.len();
            while carry != 0 {
                let sum = result[k] as u64 + carry;
                result[k] = sum as u32;
                carry = sum >> WORD_BITS;
                k += 1;
            }
        }
        limbs::normalize(&mut result);
        BigUint { limbs: result }
    }

    /// Left shift by `n` bits (`n * 2` would overflow `usize` on no real
    /// machine; `n` is taken as `u32` to match `std::ops::Shl`'s convention).
    pub fn shl(&self, n: u32) -> BigUint {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        let word_shift = (n / WORD_BITS) as usize;
        let bit_shift = n % WORD_BITS;
        let mut result = vec![0u32; word_shift];
        if bit_shift == 0 {
            result.extend_from_slice(&self.limbs);
        } else {
            let mut carry: u32 = 0;
            for &limb in &self.limbs {
                let wide = ((limb as u64) << bit_shift) | carry as u64;
                result.push(wide as u32);
                carry = (wide >> WORD_BITS) as u32;
            }
            if carry != 0 {
                result.push(carry);
            }
        }
        limbs::normalize(&mut result);
        BigUint { limbs: result }
    }

    /// Right shift by `n` bits (floor division by `2^n`). Fully shifting out
    /// a value returns 0, rather than panicking or wrapping.
    pub fn shr(&self, n: u32) -> BigUint {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        let msb = self.most_significant_bit().unwrap();
        if n > msb {
            return BigUint::zero();
        }
        let word_shift = (n / WORD_BITS) as usize;
        let bit_shift = n % WORD_BITS;
        let mut result: Vec<u32> = self.limbs[word_shift..].to_vec();
        if bit_shift > 0 {
            let mask = (1u32 << bit_shift) - 1;
            let mut carry: u32 = 0;
            for limb in result.iter_mut().rev() {
                let low_bits = *limb & mask;
                *limb = (*limb >> bit_shift) | (carry << (WORD_BITS - bit_shift));
                carry = low_bits;
            }
        }
        limbs::normalize(&mut result);
        BigUint { limbs: result }
    }

    /// Restoring bitwise long division. Fails with `Arithmetic` if `other`
    /// is zero. Postcondition: `0 <= remainder < other`, `self == quotient *
    /// other + remainder`.
    pub fn div_rem(&self, other: &BigUint) -> Result<(BigUint, BigUint)> {
        if other.is_zero() {
            return Err(BigIntError::Arithmetic("division by zero"));
        }
        if self.cmp(other) == Ordering::Less {
            return Ok((BigUint::zero(), self.clone()));
        }
        let total_bits = self.most_significant_bit()? + 1;
        let mut window = BigUint::zero();
        let mut quotient = BigUint::zero();
        for i in (0..total_bits).rev() {
            window = window.shl(1);
            if self.bit(i) {
                window = window.add(&BigUint::one());
            }
            quotient = quotient.shl(1);
            if window.cmp(other) != Ordering::Less {
                window = window.sub(other).expect("window >= other was just checked");
                quotient = quotient.add(&BigUint::one());
            }
        }
        debug_assert!(limbs::is_normalized(&quotient.limbs));
        debug_assert!(limbs::is_normalized(&window.limbs));
        Ok((quotient, window))
    }

    /// Square-and-multiply exponentiation. `pow(0) == 1`.
    pub fn pow(&self, mut exp: u64) -> BigUint {
        if exp == 0 {
            return BigUint::one();
        }
        let mut result = BigUint::one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }
        result
    }

    pub fn to_u32(&self) -> Result<u32> {
        if self.is_zero() {
            return Ok(0);
        }
        if self.most_significant_bit()? >= u32::BITS {
            return Err(BigIntError::Arithmetic("value does not fit in u32"));
        }
        Ok(self.limbs[0])
    }

    pub fn to_u64(&self) -> Result<u64> {
        if self.is_zero() {
            return Ok(0);
        }
        if self.most_significant_bit()? >= u64::BITS {
            return Err(BigIntError::Arithmetic("value does not fit in u64"));
        }
        let lo = self.limbs[0] as u64;
        let hi = *self.limbs.get(1).unwrap_or(&0) as u64;
        Ok((hi << WORD_BITS) | lo)
    }

    pub fn to_u128(&self) -> Result<u128> {
        if self.is_zero() {
            return Ok(0);
        }
        if self.most_significant_bit()? >= u128::BITS {
            return Err(BigIntError::Arithmetic("value does not fit in u128"));
        }
        let mut value: u128 = 0;
        for (i, &limb) in self.limbs.iter().enumerate().take(4) {
            value |= (limb as u128) << (WORD_BITS as usize * i);
        }
        Ok(value)
    }

    /// Parse bases `2..=16`, consuming as much of `s` as the grammar
    /// `whitespace* digit*` allows and returning the offset of the first
    /// unconsumed byte. Zero digits consumed is success with value 0.
    pub fn parse_prefix_radix(s: &str, radix: u32) -> Result<(BigUint, usize)> {
        validate_radix(radix)?;
        let bytes = s.as_bytes();
        let pos = text::skip_whitespace(bytes, 0);
        Ok(text::parse_magnitude(bytes, pos, radix))
    }

    /// Parse the entire string per `whitespace* digit*`; fails with `Parse`
    /// if any byte remains unconsumed.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigUint> {
        let (value, end) = Self::parse_prefix_radix(s, radix)?;
        if end != s.len() {
            return Err(BigIntError::Parse(format!(
                "unexpected character at byte {end} in {s:?}"
            )));
        }
        Ok(value)
    }

    /// Format in the given base. Digit alphabet `0-9A-F`. Zero formats as
    /// `"0"`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        validate_radix(radix)?;
        if self.is_zero() {
            return Ok("0".to_string());
        }
        let mut digits = Vec::with_capacity(text::output_capacity(self.limbs.len(), radix));
        let base = BigUint::small(radix);
        let mut value = self.clone();
        while !value.is_zero() {
            let (q, r) = value.div_rem(&base)?;
            digits.push(digit_char(r.to_u32().expect("remainder < radix <= 16 fits in u32")));
            value = q;
        }
        digits.reverse();
        Ok(String::from_utf8(digits).expect("digit bytes are always valid ASCII"))
    }
}

macro_rules! impl_from_narrow {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigUint {
                fn from(v: $t) -> Self {
                    BigUint::from(v as u32)
                }
            }
        )*
    };
}
impl_from_narrow!(u8, u16);

impl From<u32> for BigUint {
    fn from(v: u32) -> Self {
        BigUint { limbs: vec![v] }
    }
}

impl From<u64> for BigUint {
    fn from(v: u64) -> Self {
        let mut limbs = vec![v as u32, (v >> WORD_BITS) as u32];
        limbs::normalize(&mut limbs);
        BigUint { limbs }
    }
}

impl From<u128> for BigUint {
    fn from(v: u128) -> Self {
        let mut limbs = vec![
            v as u32,
            (v >> 32) as u32,
            (v >> 64) as u32,
            (v >> 96) as u32,
        ];
        limbs::normalize(&mut limbs);
        BigUint { limbs }
    }
}

impl From<usize> for BigUint {
    fn from(v: usize) -> Self {
        BigUint::from(v as u64)
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    /// Magnitude order: differing lengths decide (valid under NORMAL-U),
    /// otherwise compare limbs from most to least significant.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => self
                .limbs
                .iter()
                .rev()
                .cmp(other.limbs.iter().rev()),
            ordering => ordering,
        }
    }
}

impl std::ops::Add<&BigUint> for &BigUint {
    type Output = BigUint;
    fn add(self, rhs: &BigUint) -> BigUint {
        BigUint::add(self, rhs)
    }
}

impl std::ops::Add for BigUint {
    type Output = BigUint;
    fn add(self, rhs: BigUint) -> BigUint {
        BigUint::add(&self, &rhs)
    }
}

impl std::ops::AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        *self = BigUint::add(self, rhs);
    }
}

impl std::ops::Mul<&BigUint> for &BigUint {
    type Output = BigUint;
    fn mul(self, rhs: &BigUint) -> BigUint {
        BigUint::mul(self, rhs)
    }
}

impl std::ops::Mul for BigUint {
    type Output = BigUint;
    fn mul(self, rhs: BigUint) -> BigUint {
        BigUint::mul(&self, &rhs)
    }
}

impl std::ops::MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        *self = BigUint::mul(self, rhs);
    }
}

impl std::ops::Shl<u32> for &BigUint {
    type Output = BigUint;
    fn shl(self, n: u32) -> BigUint {
        BigUint::shl(self, n)
    }
}

impl std::ops::Shr<u32> for &BigUint {
    type Output = BigUint;
    fn shr(self, n: u32) -> BigUint {
        BigUint::shr(self, n)
    }
}

impl std::ops::ShlAssign<u32> for BigUint {
    fn shl_assign(&mut self, n: u32) {
        *self = BigUint::shl(self, n);
    }
}

impl std::ops::ShrAssign<u32> for BigUint {
    fn shr_assign(&mut self, n: u32) {
        *self = BigUint::shr(self, n);
    }
}

/// Panics on division by zero, matching `u32: Div`. Use [`BigUint::div_rem`]
/// to handle a zero divisor without panicking.
impl std::ops::Div for &BigUint {
    type Output = BigUint;
    fn div(self, rhs: &BigUint) -> BigUint {
        self.div_rem(rhs).expect("division by zero").0
    }
}

impl std::ops::Rem for &BigUint {
    type Output = BigUint;
    fn rem(self, rhs: &BigUint) -> BigUint {
        self.div_rem(rhs).expect("division by zero").1
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(10).expect("radix 10 is always valid"))
    }
}

impl fmt::UpperHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(16).expect("radix 16 is always valid"))
    }
}

impl fmt::Binary for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(2).expect("radix 2 is always valid"))
    }
}

impl FromStr for BigUint {
    type Err = BigIntError;
    fn from_str(s: &str) -> Result<Self> {
        BigUint::from_str_radix(s, 10)
    }
}
