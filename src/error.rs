//! Error taxonomy for fallible arithmetic, conversion, and parsing operations.

/// Everything that can go wrong in this crate short of process-level
/// allocation failure (which Rust's global allocator aborts on, the same way
/// it would for any other `Vec`-backed type).
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BigIntError {
    /// A precondition was violated by the caller: an out-of-range radix, or
    /// similar. Detected and returned at the entry of the operation that
    /// would otherwise misbehave.
    #[error("invalid argument: {0}")]
    BadArgument(&'static str),

    /// Divide by zero, unsigned subtraction that would go negative, most
    /// significant bit of zero, or a host-integer conversion that doesn't
    /// fit.
    #[error("arithmetic error: {0}")]
    Arithmetic(&'static str),

    /// Strict text parsing found bytes it could not consume as part of the
    /// `whitespace* [+-]? digit*` grammar.
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, BigIntError>;
