//! Integer helpers shared by the `Gcd` and `Lcm` aggregates.
//!
//! All functions are total over the primitive integer types: results that
//! cannot be represented are reported as [`ArithmeticError`] instead of
//! panicking or wrapping.

use crate::error::ArithmeticError;
use num_traits::PrimInt;

/// Absolute value, failing for `T::min_value()` of signed types.
#[inline]
pub(crate) fn checked_abs<T: PrimInt>(x: T) -> Result<T, ArithmeticError> {
    if x < T::zero() {
        T::zero().checked_sub(&x).ok_or(ArithmeticError::Overflow)
    } else {
        Ok(x)
    }
}

/// Greatest common divisor via the Euclidean algorithm.
///
/// The result is always non-negative: `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`.
///
/// # Errors
/// Returns [`ArithmeticError::Overflow`] if either argument is the minimum
/// value of a signed type, whose magnitude is not representable.
pub fn gcd<T: PrimInt>(a: T, b: T) -> Result<T, ArithmeticError> {
    let mut a = checked_abs(a)?;
    let mut b = checked_abs(b)?;
    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    Ok(a)
}

/// Least common multiple, `|a| / gcd(a, b) * |b|`.
///
/// `lcm(x, 0) == 0` for any non-zero `x`.
///
/// # Errors
/// - [`ArithmeticError::DivisionByZero`] when both arguments are zero.
/// - [`ArithmeticError::Overflow`] when the result does not fit in `T`.
pub fn lcm<T: PrimInt>(a: T, b: T) -> Result<T, ArithmeticError> {
    let g = gcd(a, b)?;
    if g == T::zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    // Divide first so the intermediate never exceeds the result.
    let a = checked_abs(a)? / g;
    let b = checked_abs(b)?;
    a.checked_mul(&b).ok_or(ArithmeticError::Overflow)
}
