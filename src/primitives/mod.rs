//! Primitive types
//!
//! This module defines the fixed-width unsigned integers of the crate.
//!
//! Primitives are simple, fixed-size, allocation-free value types with the
//! semantics of native unsigned integers: every arithmetic, bitwise and
//! shift operation wraps modulo 2^N and never reports overflow.
//!
//! Current primitives include:
//! - `U128`: a 128-bit unsigned integer made of two `u64` halves
//! - `U256`: a 256-bit unsigned integer made of two `U128` halves
//!
//! Long division and radix conversion are shared between both widths
//! through the crate-private `algo` module.

pub(crate) mod algo;
mod conv;
mod macros;
mod u128;
mod u256;

#[cfg(feature = "quickcheck")]
mod arbitrary;

pub use conv::NativeInt;

/// Fixed-size unsigned integer primitives.
pub use self::u128::U128;
pub use self::u256::U256;
