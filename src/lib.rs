//! Fixed-width wide unsigned integers
//!
//! This crate provides exact 128-bit and 256-bit unsigned integers that
//! behave like native unsigned integers: arithmetic, bitwise, shift and
//! comparison operators with silent modulo-2^N wraparound, radix
//! conversion for bases 2 to 36, and big-endian byte export.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a general big-integer library.
//!
//! # Module overview
//!
//! - `primitives`
//!   The value types `U128` (two `u64` halves) and `U256` (two `U128`
//!   halves). `U256` delegates its limb-level work to `U128`; `U128` never
//!   depends on `U256`. Long division and radix conversion are written once
//!   and shared by both widths.
//!
//! - `error`
//!   The single error type, [`UintError`], returned by every fallible
//!   operation: division by zero, invalid radix, invalid digits and checked
//!   narrowing.
//!
//! # Native integers
//!
//! Native integers interoperate through explicit promotion
//! (`From`, `from_native`) and truncation (`truncate_to`). Operators accept
//! a native integer on the right-hand side and promote it first:
//!
//! ```
//! use wideuint::primitives::U256;
//!
//! let x = U256::from(u64::MAX) + 1u8;
//! assert_eq!(x, U256::from(1u128 << 64));
//! assert_eq!(x.truncate_to::<u64>(), 0);
//! ```
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic
//! - Wrapping semantics identical to native unsigned integers
//! - One implementation of each algorithm, shared across widths

pub mod error;
pub mod primitives;

pub use error::UintError;
