//! Integer division and modulo with mathematical (flooring) semantics
//!
//! Rust's `/` and `%` truncate toward zero. Grid arithmetic needs the
//! flooring variants so that negative coordinates and rotations behave the
//! same way on both sides of the origin.

use num_traits::{Euclid, PrimInt, Signed};

/// Divide rounding toward negative infinity
///
/// `floor_div(-7, 2) == -4` and `floor_div(7, -2) == -4`, where truncating
/// division would give `-3` for both.
///
/// # Panics
///
/// Panics if `denominator` is zero, exactly like the primitive `/`.
pub fn floor_div<T>(numerator: T, denominator: T) -> T
where
    T: PrimInt + Signed,
{
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    if !remainder.is_zero() && remainder.is_negative() != denominator.is_negative() {
        quotient - T::one()
    } else {
        quotient
    }
}

/// Floored quotient and whether half-up rounding lifts it by one
///
/// The half offset is compared against the floored remainder instead of
/// being added to `value`, so no intermediate sum can overflow.
fn floored_with_round_up<T>(value: T, divisor: T) -> (T, bool)
where
    T: PrimInt + Signed,
{
    let mut quotient = value / divisor;
    let mut remainder = value % divisor;
    if !remainder.is_zero() && remainder.is_negative() != divisor.is_negative() {
        quotient = quotient - T::one();
        remainder = remainder + divisor;
    }

    // remainder shares the sign of divisor here
    let threshold = divisor - floor_div(divisor, T::one() + T::one());
    let rounds_up = if divisor.is_positive() {
        remainder >= threshold
    } else {
        remainder <= threshold
    };
    (quotient, rounds_up)
}

/// Divide rounding half-way values upward
///
/// Computes `floor((value + floor(divisor / 2)) / divisor)`. For a positive
/// divisor this is round-half-up; the rounding is not symmetric around zero,
/// so `rounded_div(-1, 2) == 0` while `rounded_div(-3, 2) == -1`. Inputs at
/// the limits of `T` are fine as long as the result fits:
/// `rounded_div(i32::MAX, 2) == 1 << 30`.
///
/// # Panics
///
/// Panics if `divisor` is zero or the result does not fit in `T`, like the
/// primitive `/`. See [`checked_rounded_div`] for the non-panicking form.
pub fn rounded_div<T>(value: T, divisor: T) -> T
where
    T: PrimInt + Signed,
{
    let (quotient, rounds_up) = floored_with_round_up(value, divisor);
    if rounds_up {
        quotient + T::one()
    } else {
        quotient
    }
}

/// [`rounded_div`] returning `None` for a zero divisor or a result that
/// does not fit in `T`
///
/// Only a divisor of `-1` can overflow: `checked_rounded_div(i32::MIN, -1)`
/// and `checked_rounded_div(i32::MIN + 1, -1)` are both `None`.
pub fn checked_rounded_div<T>(value: T, divisor: T) -> Option<T>
where
    T: PrimInt + Signed,
{
    // Rejects zero and the one truncating quotient that overflows
    value.checked_div(&divisor)?;
    let (quotient, rounds_up) = floored_with_round_up(value, divisor);
    if rounds_up {
        quotient.checked_add(&T::one())
    } else {
        Some(quotient)
    }
}

/// Wrap `value` into `[0, modulus)` for a positive modulus
///
/// Unlike `%`, the result is never negative: `wrap(-90, 360) == 270`.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn wrap<T>(value: T, modulus: T) -> T
where
    T: Euclid,
{
    value.rem_euclid(&modulus)
}

/// Sum two values modulo `modulus` without overflowing the intermediate sum
///
/// Both operands are wrapped first, so even `i32::MAX` deltas stay in range.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn wrapping_sum<T>(lhs: T, rhs: T, modulus: T) -> T
where
    T: PrimInt + Signed + Euclid,
{
    let lhs = wrap(lhs, modulus);
    let rhs = wrap(rhs, modulus);
    let room_left = modulus - rhs;
    if lhs >= room_left {
        lhs - room_left
    } else {
        lhs + rhs
    }
}
