//! Restoring binary long division

use super::FixedUint;
use crate::error::UintError;

/// Computes `(lhs / rhs, lhs % rhs)`.
///
/// The divisor is aligned with the most significant bit of the dividend,
/// then walked down one bit at a time. Each step subtracts the aligned
/// divisor when it fits and records the matching quotient bit. The loop
/// stops as soon as the remainder drops below the original divisor, so it
/// runs at most `lhs.bits()` times.
pub(crate) fn divmod<T: FixedUint>(lhs: T, rhs: T) -> Result<(T, T), UintError> {
    if rhs == T::ZERO {
        return Err(UintError::DivisionByZero);
    }
    if rhs == T::ONE {
        return Ok((lhs, T::ZERO));
    }
    if lhs == rhs {
        return Ok((T::ONE, T::ZERO));
    }
    if lhs == T::ZERO || lhs < rhs {
        return Ok((T::ZERO, lhs));
    }

    // lhs > rhs here, so the shift is non-negative and cannot push bits out.
    let shift = lhs.bits() - rhs.bits();
    log::trace!("long division: aligning divisor by {shift} bits");

    let mut quotient = T::ZERO;
    let mut remainder = lhs;
    let mut divisor = rhs << shift;
    let mut bit = T::ONE << shift;

    if divisor > remainder {
        divisor = divisor >> 1;
        bit = bit >> 1;
    }

    while remainder >= rhs {
        if remainder >= divisor {
            remainder = remainder - divisor;
            quotient = quotient | bit;
        }

        divisor = divisor >> 1;
        bit = bit >> 1;
    }

    Ok((quotient, remainder))
}
