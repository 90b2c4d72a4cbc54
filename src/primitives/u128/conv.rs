//! Conversions between `U128` and native representations
//!
//! - native integers promote through `From` (negative signed values are
//!   sign-extended) and narrow back through a checked `TryFrom`
//! - `[u64; 2]` is ordered `[upper, lower]`
//! - `[u8; 16]` is big-endian

use crate::primitives::U128;
use crate::primitives::macros::{impl_native_conversions, impl_radix_fmt};

impl_native_conversions!(
    U128;
    signed: i8, i16, i32, i64, isize;
    unsigned: u8, u16, u32, u64, u128, usize
);

impl_radix_fmt!(U128);

impl From<U128> for [u64; 2] {
    fn from(value: U128) -> Self {
        [value.upper(), value.lower()]
    }
}

impl From<[u64; 2]> for U128 {
    fn from(value: [u64; 2]) -> Self {
        U128::new(value[0], value[1])
    }
}

impl From<U128> for [u8; 16] {
    fn from(value: U128) -> Self {
        value.to_be_bytes()
    }
}

impl From<[u8; 16]> for U128 {
    fn from(value: [u8; 16]) -> Self {
        U128::from_be_bytes(value)
    }
}

/// Parses a decimal string with the strict parser.
impl std::str::FromStr for U128 {
    type Err = crate::error::UintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U128::from_str_radix(s, 10)
    }
}
