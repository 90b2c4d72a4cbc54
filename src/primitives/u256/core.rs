//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! composed of two `U128` halves.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Limb-level work (carries, 64×64-bit
//! products, half shifts) is delegated to `U128`; division and radix
//! conversion reuse the same width-generic routines.

use crate::error::UintError;
use crate::primitives::algo::{FixedUint, division, radix};
use crate::primitives::{NativeInt, U128};

/// Fixed-size 256-bit unsigned integer.
///
/// The represented value is `upper · 2¹²⁸ + lower`. Both halves are owned
/// by value, so copying a `U256` copies the whole number.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256 {
    upper: U128,
    lower: U128,
}

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self::new(U128::ZERO, U128::ZERO);

    /// The value one.
    pub const ONE: Self = Self::new(U128::ZERO, U128::ONE);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self::new(U128::MAX, U128::MAX);

    /// Width of the type in bits.
    pub const BITS: u32 = 256;

    /// Builds a value from its two 128-bit halves.
    pub const fn new(upper: U128, lower: U128) -> Self {
        U256 { upper, lower }
    }

    /// The most significant 128 bits.
    pub const fn upper(&self) -> U128 {
        self.upper
    }

    /// The least significant 128 bits.
    pub const fn lower(&self) -> U128 {
        self.lower
    }

    pub const fn is_zero(&self) -> bool {
        self.upper.is_zero() && self.lower.is_zero()
    }

    /// Promotes any native integer.
    ///
    /// Negative signed inputs are sign-extended across all 256 bits.
    pub fn from_native<T: NativeInt>(value: T) -> Self {
        let upper = if value.is_negative() {
            U128::MAX
        } else {
            U128::ZERO
        };

        U256::new(upper, U128::from_native(value))
    }

    /// Truncates into a native integer, keeping only the low bits that fit.
    pub fn truncate_to<T: NativeInt>(self) -> T {
        self.lower.truncate_to()
    }

    /// The four 64-bit limbs, most significant first.
    pub const fn limbs(&self) -> [u64; 4] {
        [
            self.upper.upper(),
            self.upper.lower(),
            self.lower.upper(),
            self.lower.lower(),
        ]
    }

    /// Number of significant bits, in the range `0..=256`.
    pub const fn bits(&self) -> u32 {
        if !self.upper.is_zero() {
            128 + self.upper.bits()
        } else {
            self.lower.bits()
        }
    }

    /// Counts the number of leading zero bits, in the range `0..=256`.
    pub const fn leading_zeros(&self) -> u32 {
        Self::BITS - self.bits()
    }

    /// Counts the number of trailing zero bits, in the range `0..=256`.
    pub const fn trailing_zeros(&self) -> u32 {
        if !self.lower.is_zero() {
            self.lower.trailing_zeros()
        } else {
            128 + self.upper.trailing_zeros()
        }
    }

    pub const fn count_ones(&self) -> u32 {
        self.upper.count_ones() + self.lower.count_ones()
    }

    /// Left shift by a bit count; counts of 256 or more yield zero.
    pub(crate) const fn shl_bits(self, shift: u32) -> Self {
        match shift {
            0 => self,
            1..=127 => U256::new(
                or(
                    self.upper.shl_bits(shift),
                    self.lower.shr_bits(128 - shift),
                ),
                self.lower.shl_bits(shift),
            ),
            128 => U256::new(self.lower, U128::ZERO),
            129..=255 => U256::new(self.lower.shl_bits(shift - 128), U128::ZERO),
            _ => Self::ZERO,
        }
    }

    /// Right shift by a bit count; counts of 256 or more yield zero.
    pub(crate) const fn shr_bits(self, shift: u32) -> Self {
        match shift {
            0 => self,
            1..=127 => U256::new(
                self.upper.shr_bits(shift),
                or(
                    self.upper.shl_bits(128 - shift),
                    self.lower.shr_bits(shift),
                ),
            ),
            128 => U256::new(U128::ZERO, self.upper),
            129..=255 => U256::new(U128::ZERO, self.upper.shr_bits(shift - 128)),
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

    /// Strict parser; see [`U128::from_str_radix`].
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, UintError> {
        radix::parse(s, base)
    }

    /// Compatibility parser; see [`U128::from_str_radix_lossy`].
    pub fn from_str_radix_lossy(s: &str, base: u32) -> Self {
        radix::parse_lossy(s, base)
    }

    /// Big-endian byte image.
    pub const fn to_be_bytes(&self) -> [u8; 32] {
        let upper = self.upper.to_be_bytes();
        let lower = self.lower.to_be_bytes();

        let mut out = [0u8; 32];
        let mut i = 0;

        while i < 16 {
            out[i] = upper[i];
            out[i + 16] = lower[i];
            i += 1;
        }

        out
    }

    /// Interprets 32 bytes as a big-endian value.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut upper = [0u8; 16];
        let mut lower = [0u8; 16];

        upper.copy_from_slice(&bytes[..16]);
        lower.copy_from_slice(&bytes[16..]);

        U256::new(U128::from_be_bytes(upper), U128::from_be_bytes(lower))
    }

    /// The 32-byte big-endian encoding as a vector.
    pub fn export_bits(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }

    /// The minimal big-endian encoding, suitable for wire formats that
    /// drop leading zero bytes. Zero encodes as an empty vector.
    pub fn export_bits_truncate(&self) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();

        bytes[skip..].to_vec()
    }
}

/// `const` bitwise OR of two halves, used by the shift helpers.
const fn or(a: U128, b: U128) -> U128 {
    U128::new(a.upper() | b.upper(), a.lower() | b.lower())
}

impl FixedUint for U256 {
    const ZERO: Self = U256::ZERO;
    const ONE: Self = U256::ONE;

    fn bits(&self) -> u32 {
        U256::bits(self)
    }

    fn from_u64(value: u64) -> Self {
        U256::new(U128::ZERO, U128::new(0, value))
    }

    fn low_u64(&self) -> u64 {
        self.lower.lower()
    }
}
