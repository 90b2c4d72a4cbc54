//! Conversions between `U256` and other representations
//!
//! - native integers promote through `From` (negative signed values are
//!   sign-extended across all 256 bits) and narrow back through a checked
//!   `TryFrom`
//! - `U128` widens losslessly and narrows only when the upper half is zero
//! - `[u64; 4]` is ordered from most to least significant limb
//! - `[u8; 32]` is big-endian

use crate::error::UintError;
use crate::primitives::macros::{impl_native_conversions, impl_radix_fmt};
use crate::primitives::{U128, U256};

impl_native_conversions!(
    U256;
    signed: i8, i16, i32, i64, isize;
    unsigned: u8, u16, u32, u64, u128, usize
);

impl_radix_fmt!(U256);

/// Places the value in the least significant half.
impl From<U128> for U256 {
    fn from(value: U128) -> Self {
        U256::new(U128::ZERO, value)
    }
}

/// Succeeds only if the upper 128 bits are zero.
impl TryFrom<U256> for U128 {
    type Error = UintError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if !value.upper().is_zero() {
            return Err(UintError::Overflow { bits: U128::BITS });
        }

        Ok(value.lower())
    }
}

impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        value.limbs()
    }
}

impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        U256::new(
            U128::new(value[0], value[1]),
            U128::new(value[2], value[3]),
        )
    }
}

impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.to_be_bytes()
    }
}

impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256::from_be_bytes(value)
    }
}

/// Parses a decimal string with the strict parser.
impl std::str::FromStr for U256 {
    type Err = UintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str_radix(s, 10)
    }
}
