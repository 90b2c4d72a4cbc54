//! Arithmetic and bitwise operations for `U128`
//!
//! Every operator wraps modulo 2¹²⁸. Addition and subtraction carry a
//! single bit between the two halves; multiplication keeps the low 128 bits
//! of the product; division and modulus go through the shared long
//! division routine and panic on a zero divisor, as native integers do.

use crate::primitives::U128;
use crate::primitives::macros::{impl_assign_ops, impl_native_ops};

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

/// Addition modulo 2¹²⁸.
impl Add for U128 {
    type Output = U128;

    fn add(self, rhs: U128) -> Self::Output {
        self.overflowing_add(rhs).0
    }
}

/// Subtraction modulo 2¹²⁸.
impl Sub for U128 {
    type Output = U128;

    fn sub(self, rhs: U128) -> Self::Output {
        self.overflowing_sub(rhs).0
    }
}

/// Multiplication modulo 2¹²⁸.
///
/// Only the low-by-low limb product needs its high half; the two cross
/// products land entirely in the upper word, and the high-by-high product
/// is shifted out of range.
impl Mul for U128 {
    type Output = U128;

    fn mul(self, rhs: U128) -> Self::Output {
        let low = U128::widening_mul(self.lower(), rhs.lower());

        let cross = self
            .upper()
            .wrapping_mul(rhs.lower())
            .wrapping_add(self.lower().wrapping_mul(rhs.upper()));

        U128::new(low.upper().wrapping_add(cross), low.lower())
    }
}

impl Div for U128 {
    type Output = U128;

    fn div(self, rhs: U128) -> Self::Output {
        match self.divmod(rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Rem for U128 {
    type Output = U128;

    fn rem(self, rhs: U128) -> Self::Output {
        match self.divmod(rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl BitAnd for U128 {
    type Output = U128;

    fn bitand(self, rhs: U128) -> Self::Output {
        U128::new(self.upper() & rhs.upper(), self.lower() & rhs.lower())
    }
}

impl BitOr for U128 {
    type Output = U128;

    fn bitor(self, rhs: U128) -> Self::Output {
        U128::new(self.upper() | rhs.upper(), self.lower() | rhs.lower())
    }
}

impl BitXor for U128 {
    type Output = U128;

    fn bitxor(self, rhs: U128) -> Self::Output {
        U128::new(self.upper() ^ rhs.upper(), self.lower() ^ rhs.lower())
    }
}

impl Not for U128 {
    type Output = U128;

    fn not(self) -> Self::Output {
        U128::new(!self.upper(), !self.lower())
    }
}

/// Logical left shift by a 128-bit amount.
///
/// Amounts of 128 or more, including any amount with a bit set in its
/// upper half, yield zero.
impl Shl for U128 {
    type Output = U128;

    fn shl(self, rhs: U128) -> Self::Output {
        if rhs.upper() != 0 || rhs.lower() >= 128 {
            return U128::ZERO;
        }

        self.shl_bits(rhs.lower() as u32)
    }
}

/// Logical right shift by a 128-bit amount.
impl Shr for U128 {
    type Output = U128;

    fn shr(self, rhs: U128) -> Self::Output {
        if rhs.upper() != 0 || rhs.lower() >= 128 {
            return U128::ZERO;
        }

        self.shr_bits(rhs.lower() as u32)
    }
}

impl_assign_ops!(U128);
impl_native_ops!(U128; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, isize);
