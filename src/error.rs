//! Error type shared by the fixed-width integer primitives
//!
//! Every fallible operation in this crate reports failures through
//! [`UintError`]. Arithmetic itself never fails: overflow wraps silently,
//! exactly like native unsigned integers. Only division by zero, radix
//! conversion and checked narrowing can produce an error.

use thiserror::Error;

/// Failure kinds of the fixed-width integer primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UintError {
    /// Division or modulus with a zero divisor.
    #[error("division or modulus by zero")]
    DivisionByZero,

    /// A radix outside the closed range `2..=36`.
    #[error("base {0} is outside the supported range 2-36")]
    InvalidBase(u32),

    /// A character that is not a digit of the requested radix.
    #[error("invalid digit {found:?} at byte offset {index}")]
    InvalidDigit { index: usize, found: char },

    /// Strict parsing of an empty string.
    #[error("cannot parse an integer from an empty string")]
    Empty,

    /// A checked narrowing conversion whose value needs more than `bits` bits.
    #[error("value does not fit in {bits} bits")]
    Overflow { bits: u32 },
}
