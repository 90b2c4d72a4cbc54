//! Native integer interop
//!
//! Fixed-width values interact with native integers only through a small,
//! closed set of conversions:
//! - promotion of any native integer into a fixed-width value
//!   ([`NativeInt::to_words`]), sign-extending negative signed inputs
//! - truncation of a fixed-width value back into a native integer
//!   ([`NativeInt::from_words`]), keeping only the low bits that fit
//!
//! Operators that accept a native right-hand side are built on top of these
//! two functions (see `macros.rs`); no arithmetic is defined directly on
//! mixed operand types.

mod native;

mod sealed {
    pub trait Sealed {}
}

/// A native integer type that can be promoted into, or truncated out of,
/// `U128` and `U256`.
///
/// This trait is sealed and implemented for `u8`..`u128`, `usize`,
/// `i8`..`i64` and `isize`.
pub trait NativeInt: Copy + sealed::Sealed {
    /// Width of the native type in bits.
    const BITS: u32;

    /// Two's complement 128-bit image of the value as `(upper, lower)`.
    ///
    /// Negative signed values are sign-extended, so the upper word is all
    /// ones for them.
    fn to_words(self) -> (u64, u64);

    /// Whether the value is a negative signed integer.
    fn is_negative(self) -> bool;

    /// Rebuilds a native value from the low bits of `(upper, lower)`,
    /// discarding whatever does not fit.
    fn from_words(upper: u64, lower: u64) -> Self;
}
