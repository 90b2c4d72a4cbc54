//! Radix conversion between fixed-width integers and text
//!
//! Rendering repeatedly divides by the base and collects digits from the
//! least significant end. Parsing comes in two flavors:
//! - a strict parser that rejects anything that is not a digit of the base
//! - a lossy parser kept for compatibility, which reads unknown characters
//!   as the digit zero and accepts letters at or above the base

use super::FixedUint;
use super::division::divmod;
use crate::error::UintError;

use std::fmt::{self, Formatter};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Smallest and largest supported radix.
const MIN_BASE: u32 = 2;
const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<(), UintError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(UintError::InvalidBase(base))
    }
}

/// Renders `value` in `base` with lowercase digits, left-padded with zeros
/// up to `min_width` characters.
pub(crate) fn render<T: FixedUint>(
    value: T,
    base: u32,
    min_width: usize,
) -> Result<String, UintError> {
    check_base(base)?;

    let radix = T::from_u64(base as u64);
    let mut digits = Vec::with_capacity(min_width.max(8));
    let mut rest = value;

    loop {
        let (quotient, remainder) = divmod(rest, radix)?;
        digits.push(DIGITS[remainder.low_u64() as usize]);
        rest = quotient;

        if rest == T::ZERO {
            break;
        }
    }

    if digits.len() < min_width {
        digits.resize(min_width, b'0');
    }

    Ok(digits.iter().rev().map(|&d| d as char).collect())
}

/// Strict parser.
///
/// Accepts the digits of `base` in either letter case. The result wraps
/// modulo 2^N when the text encodes a larger number.
pub(crate) fn parse<T: FixedUint>(s: &str, base: u32) -> Result<T, UintError> {
    check_base(base)?;

    if s.is_empty() {
        return Err(UintError::Empty);
    }

    let radix = T::from_u64(base as u64);
    let mut value = T::ZERO;

    for (index, found) in s.char_indices() {
        let digit = found
            .to_digit(base)
            .ok_or(UintError::InvalidDigit { index, found })?;

        value = value * radix + T::from_u64(digit as u64);
    }

    Ok(value)
}

/// Lossy parser.
///
/// Walks the input from its last byte to its first, accumulating
/// `digit * base^position`. Bytes outside `0-9a-z` count as zero. Letters
/// keep their alphabet value even when it is not below `base` (`x` is 33 in
/// any base), and the base itself is not validated.
pub(crate) fn parse_lossy<T: FixedUint>(s: &str, base: u32) -> T {
    let radix = T::from_u64(base as u64);
    let mut value = T::ZERO;
    let mut power = T::ONE;
    let mut unknown = 0usize;

    for byte in s.bytes().rev() {
        let digit = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'z' => byte - b'a' + 10,
            _ => {
                unknown += 1;
                0
            }
        };

        value = value + power * T::from_u64(digit as u64);
        power = power * radix;
    }

    if unknown > 0 {
        log::warn!("lossy parse of {s:?}: {unknown} byte(s) outside 0-9a-z read as zero");
    }

    value
}

/// Shared body of the `Display`, `Octal`, `LowerHex`, `UpperHex` and
/// `Binary` implementations.
pub(crate) fn fmt_radix<T: FixedUint>(
    value: T,
    f: &mut Formatter<'_>,
    base: u32,
    prefix: &str,
    uppercase: bool,
) -> fmt::Result {
    let mut digits = render(value, base, 0).map_err(|_| fmt::Error)?;

    if uppercase {
        digits.make_ascii_uppercase();
    }

    f.pad_integral(true, prefix, &digits)
}
