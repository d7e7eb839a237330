//! Arbitrary-precision integers: [`BigUint`] (non-negative magnitude) and
//! [`BigInt`] (sign + magnitude), built on a little-endian `u32`-limb vector
//! core.
//!
//! ```
//! use bigint_rs::{BigInt, BigUint};
//!
//! let a = BigInt::from(12345);
//! let b = BigInt::from(-6789);
//! assert_eq!((&a + &b).to_string(), "5556");
//!
//! assert_eq!(BigUint::from(2u32).pow(100).to_string(),
//!            "1267650600228229401496703205376");
//! ```

mod error;
mod int;
mod limbs;
mod small;
mod text;
mod uint;

#[cfg(test)]
mod tests;

pub use error::{BigIntError, Result};
pub use int::BigInt;
pub use uint::BigUint;
