//! Width-generic algorithms
//!
//! Restoring long division and radix conversion are identical at every
//! width: they only need to compare, subtract, shift and measure the bit
//! length of a value. They are written once against [`FixedUint`] and
//! instantiated for both `U128` and `U256`.

pub(crate) mod division;
pub(crate) mod radix;

use std::ops::{Add, BitOr, Mul, Shl, Shr, Sub};

/// Minimal capability set required by the shared algorithms.
///
/// All arithmetic is expected to wrap modulo 2^N.
pub(crate) trait FixedUint:
    Copy
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Index of the highest set bit plus one, zero for zero.
    fn bits(&self) -> u32;

    fn from_u64(value: u64) -> Self;

    /// The least significant 64 bits.
    fn low_u64(&self) -> u64;
}
