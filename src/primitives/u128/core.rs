//! 128-bit unsigned integer primitive
//!
//! This module defines a fixed-size 128-bit unsigned integer type (`U128`)
//! built from two native 64-bit halves.
//!
//! It is the narrow building block of the crate: `U256` is composed of two
//! `U128` values and delegates its limb-level arithmetic to them. `U128`
//! itself never depends on the wider type.
//!
//! All arithmetic wraps modulo 2¹²⁸, matching native unsigned integers.

use crate::error::UintError;
use crate::primitives::NativeInt;
use crate::primitives::algo::{FixedUint, division, radix};

/// Fixed-size 128-bit unsigned integer.
///
/// The represented value is `upper · 2⁶⁴ + lower`. Ordering compares the
/// upper half first and falls back to the lower half on a tie, which is
/// exactly the derived lexicographic order of the fields.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U128 {
    upper: u64,
    lower: u64,
}

impl U128 {
    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(0, 1);

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// Width of the type in bits.
    pub const BITS: u32 = 128;

    /// Builds a value from its two 64-bit halves.
    pub const fn new(upper: u64, lower: u64) -> Self {
        U128 { upper, lower }
    }

    /// The most significant 64 bits.
    pub const fn upper(&self) -> u64 {
        self.upper
    }

    /// The least significant 64 bits.
    pub const fn lower(&self) -> u64 {
        self.lower
    }

    pub const fn is_zero(&self) -> bool {
        self.upper == 0 && self.lower == 0
    }

    /// Promotes any native integer.
    ///
    /// Negative signed inputs are sign-extended, so `from_native(-1i8)` is
    /// [`U128::MAX`].
    pub fn from_native<T: NativeInt>(value: T) -> Self {
        let (upper, lower) = value.to_words();

        U128 { upper, lower }
    }

    /// Truncates into a native integer, keeping only the low bits that fit.
    pub fn truncate_to<T: NativeInt>(self) -> T {
        T::from_words(self.upper, self.lower)
    }

    /// Number of significant bits: index of the highest set bit plus one,
    /// or zero for zero.
    pub const fn bits(&self) -> u32 {
        if self.upper != 0 {
            128 - self.upper.leading_zeros()
        } else {
            64 - self.lower.leading_zeros()
        }
    }

    /// Counts the number of leading zero bits, in the range `0..=128`.
    pub const fn leading_zeros(&self) -> u32 {
        Self::BITS - self.bits()
    }

    /// Counts the number of trailing zero bits, in the range `0..=128`.
    pub const fn trailing_zeros(&self) -> u32 {
        if self.lower != 0 {
            self.lower.trailing_zeros()
        } else {
            64 + self.upper.trailing_zeros()
        }
    }

    pub const fn count_ones(&self) -> u32 {
        self.upper.count_ones() + self.lower.count_ones()
    }

    /// Full 64×64 → 128-bit product of two limbs.
    pub const fn widening_mul(lhs: u64, rhs: u64) -> Self {
        let product = lhs as u128 * rhs as u128;

        U128::new((product >> 64) as u64, product as u64)
    }

    /// Addition returning the wrapped sum and whether it overflowed 128 bits.
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let lower = self.lower.wrapping_add(rhs.lower);
        let carry = (lower < self.lower) as u64;

        let (upper, overflow_a) = self.upper.overflowing_add(rhs.upper);
        let (upper, overflow_b) = upper.overflowing_add(carry);

        (U128::new(upper, lower), overflow_a || overflow_b)
    }

    /// Subtraction returning the wrapped difference and whether it borrowed
    /// past zero.
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let lower = self.lower.wrapping_sub(rhs.lower);
        let borrow = (lower > self.lower) as u64;

        let (upper, underflow_a) = self.upper.overflowing_sub(rhs.upper);
        let (upper, underflow_b) = upper.overflowing_sub(borrow);

        (U128::new(upper, lower), underflow_a || underflow_b)
    }

    /// Left shift by a bit count; counts of 128 or more yield zero.
    pub(crate) const fn shl_bits(self, shift: u32) -> Self {
        match shift {
            0 => self,
            1..=63 => U128::new(
                (self.upper << shift) | (self.lower >> (64 - shift)),
                self.lower << shift,
            ),
            64..=127 => U128::new(self.lower << (shift - 64), 0),
            _ => Self::ZERO,
        }
    }

    /// Right shift by a bit count; counts of 128 or more yield zero.
    pub(crate) const fn shr_bits(self, shift: u32) -> Self {
        match shift {
            0 => self,
            1..=63 => U128::new(
                self.upper >> shift,
                (self.upper << (64 - shift)) | (self.lower >> shift),
            ),
            64..=127 => U128::new(0, self.upper >> (shift - 64)),
            _ => Self::ZERO,
        }
    }

    /// Quotient and remainder in a single pass.
    ///
    /// # Errors
    /// [`UintError::DivisionByZero`] when `rhs` is zero.
    pub fn divmod(self, rhs: Self) -> Result<(Self, Self), UintError> {
        division::divmod(self, rhs)
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(self, rhs: Self) -> Result<Self, UintError> {
        self.divmod(rhs).map(|(quotient, _)| quotient)
    }

    /// Modulus that reports a zero divisor instead of panicking.
    pub fn checked_rem(self, rhs: Self) -> Result<Self, UintError> {
        self.divmod(rhs).map(|(_, remainder)| remainder)
    }

    /// Renders the value in `base` (2–36) with lowercase digits, left-padded
    /// with zeros to at least `min_width` characters.
    ///
    /// # Errors
    /// [`UintError::InvalidBase`] when `base` is outside `2..=36`.
    pub fn to_string_radix(&self, base: u32, min_width: usize) -> Result<String, UintError> {
        radix::render(*self, base, min_width)
    }

    /// Parses `s` as a number in `base`, rejecting any character that is
    /// not a digit of that base. Letters are accepted in either case.
    ///
    /// Inputs encoding a number of 128 bits or more wrap modulo 2¹²⁸.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, UintError> {
        radix::parse(s, base)
    }

    /// Compatibility parser: characters outside `0-9a-z` are read as the
    /// digit zero, letters keep their alphabet value even when it is not
    /// below `base` (`"1x2"` in base 10 is 432), and no error is ever
    /// reported.
    ///
    /// Callers handling untrusted input should prefer
    /// [`U128::from_str_radix`].
    pub fn from_str_radix_lossy(s: &str, base: u32) -> Self {
        radix::parse_lossy(s, base)
    }

    /// Big-endian byte image.
    pub const fn to_be_bytes(&self) -> [u8; 16] {
        let upper = self.upper.to_be_bytes();
        let lower = self.lower.to_be_bytes();

        let mut out = [0u8; 16];
        let mut i = 0;

        while i < 8 {
            out[i] = upper[i];
            out[i + 8] = lower[i];
            i += 1;
        }

        out
    }

    /// Interprets 16 bytes as a big-endian value.
    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        let mut upper = [0u8; 8];
        let mut lower = [0u8; 8];

        upper.copy_from_slice(&bytes[..8]);
        lower.copy_from_slice(&bytes[8..]);

        U128::new(u64::from_be_bytes(upper), u64::from_be_bytes(lower))
    }

    /// The 16-byte big-endian encoding as a vector.
    pub fn export_bits(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }

    /// The minimal big-endian encoding: leading zero bytes are removed, so
    /// zero encodes as an empty vector.
    pub fn export_bits_truncate(&self) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();

        bytes[skip..].to_vec()
    }
}

impl FixedUint for U128 {
    const ZERO: Self = U128::ZERO;
    const ONE: Self = U128::ONE;

    fn bits(&self) -> u32 {
        U128::bits(self)
    }

    fn from_u64(value: u64) -> Self {
        U128::new(0, value)
    }

    fn low_u64(&self) -> u64 {
        self.lower
    }
}
