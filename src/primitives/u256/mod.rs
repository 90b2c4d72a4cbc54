//! 256-bit unsigned integer primitive
//!
//! `U256` is a value type made of two `U128` halves. It offers the same
//! operator surface as `U128` at twice the width.
//! Multiplication and shifts are built from `U128` limb operations; division
//! and radix conversion use the shared width-generic algorithms.

mod conv;
mod core;
mod ops;

pub use self::core::U256;
