//! 128-bit unsigned integer primitive
//!
//! `U128` is a value type made of two native 64-bit halves. It implements
//! the full operator surface of a native unsigned integer with silent
//! wraparound, plus radix conversion and big-endian byte export.

mod conv;
mod core;
mod ops;

pub use self::core::U128;
