//! Property-based tests using quickcheck, plus unit tests for the concrete
//! scenarios and boundary cases called out in the design notes.

use quickcheck_macros::quickcheck;

use crate::{BigInt, BigIntError, BigUint};

// ============================================================================
// Algebraic laws, checked against host i128/u128 arithmetic
// ============================================================================

#[quickcheck]
fn add_matches_host(a: i64, b: i64) -> bool {
    let expected = a as i128 + b as i128;
    (BigInt::from(a) + BigInt::from(b)).to_i128().unwrap() == expected
}

#[quickcheck]
fn sub_matches_host(a: i64, b: i64) -> bool {
    let expected = a as i128 - b as i128;
    (BigInt::from(a) - BigInt::from(b)).to_i128().unwrap() == expected
}

#[quickcheck]
fn sub_is_negated_reverse(a: i64, b: i64) -> bool {
    let x = BigInt::from(a);
    let y = BigInt::from(b);
    x.sub(&y) == -(y.sub(&x))
}

#[quickcheck]
fn mul_matches_host(a: i64, b: i64) -> bool {
    let expected = a as i128 * b as i128;
    BigInt::from(a).mul(&BigInt::from(b)).to_i128().unwrap() == expected
}

#[quickcheck]
fn div_rem_trunc_matches_host(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let (q, r) = BigInt::from(a).div_rem_trunc(&BigInt::from(b)).unwrap();
    q.to_i128().unwrap() == a as i128 / b as i128 && r.to_i128().unwrap() == a as i128 % b as i128
}

#[quickcheck]
fn div_rem_trunc_identity(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let x = BigInt::from(a);
    let y = BigInt::from(b);
    let (q, r) = x.div_rem_trunc(&y).unwrap();
    let reconstructed = q.mul(&y).add(&r);
    let r_ok = r.is_zero() || r.is_negative() == x.is_negative();
    reconstructed == x && r.magnitude().cmp(y.magnitude()) == std::cmp::Ordering::Less && r_ok
}

#[quickcheck]
fn div_rem_floor_identity(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let x = BigInt::from(a);
    let y = BigInt::from(b);
    let (q, r) = x.div_rem_floor(&y).unwrap();
    let reconstructed = q.mul(&y).add(&r);
    let sign_ok = r.is_zero() || r.is_negative() == y.is_negative();
    reconstructed == x && r.magnitude().cmp(y.magnitude()) == std::cmp::Ordering::Less && sign_ok
}

#[quickcheck]
fn shl_matches_host(v: u32, shift: u8) -> bool {
    let shift = (shift % 40) as u32;
    let expected = (v as u128) << shift;
    BigUint::from(v).shl(shift).to_u128().unwrap() == expected
}

#[quickcheck]
fn shr_matches_host(v: u64, shift: u8) -> bool {
    let shift = (shift % 70) as u32;
    let expected = if shift >= 64 { 0 } else { v >> shift };
    BigUint::from(v).shr(shift).to_u64().unwrap() == expected as u64
}

#[quickcheck]
fn shl_zero_is_identity(v: u64) -> bool {
    BigUint::from(v).shl(0) == BigUint::from(v)
}

#[quickcheck]
fn pow_zero_is_one(v: u32) -> bool {
    BigUint::from(v).pow(0) == BigUint::one()
}

#[quickcheck]
fn pow_succ(v: u16, e: u8) -> bool {
    let v = BigUint::from(v);
    let e = e as u64;
    v.pow(e + 1) == v.pow(e).mul(&v)
}

#[quickcheck]
fn round_trip_text(v: i64, radix: u8) -> bool {
    let radix = 2 + (radix as u32 % 15); // 2..=16
    let n = BigInt::from(v);
    let text = n.to_str_radix(radix).unwrap();
    BigInt::from_str_radix(&text, radix).unwrap() == n
}

#[quickcheck]
fn cmp_matches_host(a: i64, b: i64) -> bool {
    BigInt::from(a).cmp(&BigInt::from(b)) == a.cmp(&b)
}

#[quickcheck]
fn clone_is_equal_and_independent(v: i64) -> bool {
    let a = BigInt::from(v);
    let b = a.clone();
    a == b
}

// ============================================================================
// Boundary cases
// ============================================================================

#[test]
fn zero_on_every_side() {
    let zero = BigInt::zero();
    assert_eq!(&zero + &BigInt::from(5), BigInt::from(5));
    assert_eq!(&BigInt::from(5) + &zero, BigInt::from(5));
    assert_eq!(zero.mul(&BigInt::from(5)), zero);
    assert_eq!(BigInt::from(5).mul(&zero), zero);
    let (q, r) = zero.div_rem_trunc(&BigInt::from(5)).unwrap();
    assert_eq!((q, r), (BigInt::zero(), BigInt::zero()));
}

#[test]
fn int_min_and_max_round_trip() {
    assert_eq!(BigInt::from(i64::MIN).to_i64().unwrap(), i64::MIN);
    assert_eq!(BigInt::from(i64::MAX).to_i64().unwrap(), i64::MAX);
    assert_eq!(BigInt::from(i128::MIN).to_i128().unwrap(), i128::MIN);
    assert_eq!(BigInt::from(i128::MAX).to_i128().unwrap(), i128::MAX);
}

#[test]
fn divisor_of_one_is_identity() {
    let x = BigInt::from(12345);
    let (q, r) = x.div_rem_trunc(&BigInt::one()).unwrap();
    assert_eq!(q, x);
    assert_eq!(r, BigInt::zero());
}

#[test]
fn dividend_smaller_than_divisor() {
    let (q, r) = BigUint::from(3u32).div_rem(&BigUint::from(100u32)).unwrap();
    assert_eq!(q, BigUint::zero());
    assert_eq!(r, BigUint::from(3u32));
}

#[test]
fn multi_limb_crossings() {
    let near_b = BigUint::from(u32::MAX as u64) + BigUint::from(1u32);
    assert_eq!(near_b.to_u64().unwrap(), 1u64 << 32);

    let near_b2 = BigUint::from(1u128 << 64) + BigUint::one();
    assert_eq!(near_b2.to_u128().unwrap(), (1u128 << 64) + 1);

    let near_b3 = BigUint::from(1u128 << 96);
    assert_eq!(near_b3.most_significant_bit().unwrap(), 96);
}

#[test]
fn shift_crosses_word_boundary() {
    let one = BigUint::one();
    let shifted = one.shl(40);
    assert_eq!(shifted.most_significant_bit().unwrap(), 40);
    assert_eq!(shifted.shr(40), BigUint::one());
}

#[test]
fn shift_fully_shifts_out() {
    let v = BigUint::from(0xFFu32);
    assert_eq!(v.shr(100), BigUint::zero());
}

#[test]
fn subtract_exactly_to_zero() {
    let v = BigUint::from(42u32);
    assert_eq!(v.sub(&v).unwrap(), BigUint::zero());
}

#[test]
fn divide_with_zero_remainder() {
    let (q, r) = BigUint::from(100u32).div_rem(&BigUint::from(10u32)).unwrap();
    assert_eq!(q, BigUint::from(10u32));
    assert_eq!(r, BigUint::zero());
}

// ============================================================================
// Concrete end-to-end scenarios
// ============================================================================

#[test]
fn scenario_add_mixed_sign() {
    let sum = BigInt::from(12345) + BigInt::from(-6789);
    assert_eq!(sum, BigInt::from(5556));
    assert_eq!(sum.to_str_radix(10).unwrap(), "5556");
}

#[test]
fn scenario_mul_negative() {
    let product = BigInt::from(-1000).mul(&BigInt::from(1000));
    assert_eq!(product, BigInt::from(-1000000));
    assert_eq!(product.to_str_radix(16).unwrap(), "-F4240");
}

#[test]
fn scenario_trunc_vs_floor_division() {
    let x = BigInt::from(-7);
    let y = BigInt::from(3);
    assert_eq!(x.div_rem_trunc(&y).unwrap(), (BigInt::from(-2), BigInt::from(-1)));
    assert_eq!(x.div_rem_floor(&y).unwrap(), (BigInt::from(-3), BigInt::from(2)));
}

#[test]
fn scenario_parse_prefix_with_whitespace_and_sign() {
    let (value, end) = BigInt::parse_prefix_radix("  -00ff", 16).unwrap();
    assert_eq!(value, BigInt::from(-255));
    assert_eq!(end, 7);
}

#[test]
fn scenario_large_power_of_two() {
    let value = BigUint::from(2u32).pow(100);
    assert_eq!(value.to_str_radix(10).unwrap(), "1267650600228229401496703205376");
}

#[test]
fn scenario_shift_crosses_host_width() {
    let shifted = BigUint::one().shl(65);
    assert_eq!(shifted.most_significant_bit().unwrap(), 65);
    assert_eq!(shifted.to_u64(), Err(BigIntError::Arithmetic("value does not fit in u64")));
}

// ============================================================================
// Failure scenarios
// ============================================================================

#[test]
fn divide_by_zero_is_arithmetic_error() {
    assert_eq!(
        BigInt::from(5).div_rem_trunc(&BigInt::zero()),
        Err(BigIntError::Arithmetic("division by zero"))
    );
}

#[test]
fn unsigned_underflow_is_arithmetic_error() {
    assert_eq!(
        BigUint::from(3u32).sub(&BigUint::from(5u32)),
        Err(BigIntError::Arithmetic("unsigned subtraction would underflow"))
    );
}

#[test]
fn narrowing_overflow_is_arithmetic_error() {
    assert_eq!(
        BigUint::from(2u32).pow(100).to_u64(),
        Err(BigIntError::Arithmetic("value does not fit in u64"))
    );
}

#[test]
fn invalid_radix_is_bad_argument() {
    assert_eq!(
        BigInt::from_str_radix("10", 17),
        Err(BigIntError::BadArgument("radix must be in 2..=16"))
    );
    assert_eq!(
        BigInt::from_str_radix("10", 1),
        Err(BigIntError::BadArgument("radix must be in 2..=16"))
    );
}

#[test]
fn strict_parse_rejects_trailing_garbage() {
    assert!(matches!(BigInt::from_str_radix("123abc", 10), Err(BigIntError::Parse(_))));
}

#[test]
fn zero_digits_consumed_still_succeeds() {
    let (value, end) = BigUint::parse_prefix_radix("   xyz", 10).unwrap();
    assert_eq!(value, BigUint::zero());
    assert_eq!(end, 3);
}
