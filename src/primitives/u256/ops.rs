//! Arithmetic and bitwise operations for `U256`
//!
//! Operations are expressed in terms of the two `U128` halves:
//! - addition and subtraction carry a single bit between the halves
//! - multiplication is a 4×4 limb schoolbook product (see below)
//! - shifts split into the cases `0`, `1..128`, `128`, `129..256`, `>= 256`
//! - division and modulus use the shared long division routine
//!
//! All operations wrap modulo 2²⁵⁶.

use crate::primitives::macros::{impl_assign_ops, impl_native_ops};
use crate::primitives::{U128, U256};

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

/// Number of 64-bit limbs (and accumulation lanes) in a `U256`.
const LIMBS: usize = 4;

/// Addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        let (lower, carry) = self.lower().overflowing_add(rhs.lower());
        let mut upper = self.upper() + rhs.upper();

        if carry {
            upper += U128::ONE;
        }

        U256::new(upper, lower)
    }
}

/// Subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        let (lower, borrow) = self.lower().overflowing_sub(rhs.lower());
        let mut upper = self.upper() - rhs.upper();

        if borrow {
            upper -= U128::ONE;
        }

        U256::new(upper, lower)
    }
}

/// Multiplication modulo 2²⁵⁶.
///
/// Both operands are split into four 64-bit limbs. Each 64×64-bit partial
/// product is 128 bits wide: its low word is added to the lane of its own
/// limb position and its high word to the next more significant lane.
/// Lanes are indexed from the most significant (`0`) to the least
/// significant (`3`). A final pass walks the lanes upwards, carrying
/// everything above 64 bits into the next lane, so no carry is lost at any
/// lane boundary. Whatever leaves lane `0` is discarded.
impl Mul for U256 {
    type Output = U256;

    fn mul(self, rhs: U256) -> Self::Output {
        let lhs = self.limbs();
        let rhs = rhs.limbs();

        let mut lanes = [U128::ZERO; LIMBS];

        for (i, &a) in lhs.iter().enumerate() {
            for (j, &b) in rhs.iter().enumerate() {
                // Products with i + j < 3 start above 2^256.
                if i + j < LIMBS - 1 {
                    continue;
                }

                let lane = i + j - (LIMBS - 1);
                let product = U128::widening_mul(a, b);

                lanes[lane] += U128::from(product.lower());

                if lane > 0 {
                    lanes[lane - 1] += U128::from(product.upper());
                }
            }
        }

        // Each lane holds at most seven 64-bit terms, so it cannot overflow
        // 128 bits and the carry out of a lane always fits in 64 bits.
        let mut out = [0u64; LIMBS];
        let mut carry = U128::ZERO;

        for (limb, &lane) in out.iter_mut().zip(lanes.iter()).rev() {
            let total = lane + carry;

            *limb = total.lower();
            carry = U128::from(total.upper());
        }

        U256::from(out)
    }
}

impl Div for U256 {
    type Output = U256;

    fn div(self, rhs: U256) -> Self::Output {
        match self.divmod(rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Rem for U256 {
    type Output = U256;

    fn rem(self, rhs: U256) -> Self::Output {
        match self.divmod(rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl BitAnd for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        U256::new(self.upper() & rhs.upper(), self.lower() & rhs.lower())
    }
}

impl BitOr for U256 {
    type Output = U256;

    fn bitor(self, rhs: U256) -> Self::Output {
        U256::new(self.upper() | rhs.upper(), self.lower() | rhs.lower())
    }
}

impl BitXor for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        U256::new(self.upper() ^ rhs.upper(), self.lower() ^ rhs.lower())
    }
}

impl Not for U256 {
    type Output = U256;

    fn not(self) -> Self::Output {
        U256::new(!self.upper(), !self.lower())
    }
}

/// Logical left shift by a 256-bit amount.
///
/// Amounts of 256 or more, including any amount with a bit set in its
/// upper half, yield zero.
impl Shl for U256 {
    type Output = U256;

    fn shl(self, rhs: U256) -> Self::Output {
        if !rhs.upper().is_zero() || rhs.lower() >= U128::new(0, 256) {
            return U256::ZERO;
        }

        self.shl_bits(rhs.lower().lower() as u32)
    }
}

/// Logical right shift by a 256-bit amount.
impl Shr for U256 {
    type Output = U256;

    fn shr(self, rhs: U256) -> Self::Output {
        if !rhs.upper().is_zero() || rhs.lower() >= U128::new(0, 256) {
            return U256::ZERO;
        }

        self.shr_bits(rhs.lower().lower() as u32)
    }
}

impl_assign_ops!(U256);
impl_native_ops!(U256; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, isize);
