//! Portable 64-bit division helpers.
//!
//! Call sites use [`divide`] and [`divide_by_1000`] instead of the `/` operator
//! so that targets without a hardware 64-bit divide can swap in the software
//! back-end (`soft-division` feature) without touching the callers.
//!
//! # Semantics
//!
//! - **Truncation**: quotients round toward zero, exactly like native `/`
//! - **Division by zero**: panics, like native `/`; callers guard the divisor
//! - **Wrapping**: `i64::MIN / -1` wraps to `i64::MIN`, and `divide_by_1000`
//!   keeps only the low 32 bits of the quotient
//!
//! The `checked_*` variants turn each of these caller obligations into a
//! [`MathError`].
//!
//! # Software back-end
//!
//! The `soft_*` functions never issue a 64-bit divide instruction:
//! - [`soft_divide_u64`] is shift-subtract long division (at most 64 steps)
//! - [`soft_divide_by_1000`] multiplies by a fixed-point reciprocal of 125
//!   after shifting out the factor of 8
//!
//! They are always compiled so both paths can be tested and benchmarked on any
//! host.

use crate::MathError;

/// Largest dividend whose quotient by 1000 still fits in a `u32`.
///
/// `1000 * 2^32 - 1`
pub const DIVIDE_BY_1000_MAX_DIVIDEND: u64 = 1000 * (u32::MAX as u64 + 1) - 1;

/// `ceil(2^68 / 125)`; exact reciprocal for 61-bit dividends.
const RECIP_125: u128 = 0x20C4_9BA5_E353_F7CF;

/// Post-multiply shift paired with [`RECIP_125`].
const RECIP_125_SHIFT: u32 = 68;

/// Signed 64-bit division returning the truncated quotient.
///
/// Same result as `dividend / divisor` for every input native division
/// accepts. `i64::MIN / -1` wraps to `i64::MIN`.
///
/// # Panics
/// Panics when `divisor` is zero.
///
/// # Example
/// ```
/// # use platform_math_helpers::divide;
/// assert_eq!(divide(17, 5), 3);
/// assert_eq!(divide(-17, 5), -3);
/// assert_eq!(divide(i64::MIN, -1), i64::MIN);
/// ```
#[inline(always)]
pub const fn divide(
    dividend: i64,
    divisor: i64,
) -> i64 {
    #[cfg(feature = "soft-division")]
    {
        soft_divide(dividend, divisor)
    }
    #[cfg(not(feature = "soft-division"))]
    {
        dividend.wrapping_div(divisor)
    }
}

/// Divide a 64-bit unsigned value by 1000, producing a 32-bit quotient.
///
/// Exact for `dividend <= DIVIDE_BY_1000_MAX_DIVIDEND`. Larger dividends
/// yield the low 32 bits of the true quotient.
///
/// # Example
/// ```
/// # use platform_math_helpers::divide_by_1000;
/// assert_eq!(divide_by_1000(0), 0);
/// assert_eq!(divide_by_1000(999), 0);
/// assert_eq!(divide_by_1000(1000), 1);
/// assert_eq!(divide_by_1000(123_456_789), 123_456);
/// ```
#[inline(always)]
pub const fn divide_by_1000(dividend: u64) -> u32 {
    #[cfg(feature = "soft-division")]
    {
        soft_divide_by_1000(dividend)
    }
    #[cfg(not(feature = "soft-division"))]
    {
        (dividend / 1000) as u32
    }
}

/// [`divide`] with the caller obligations checked.
///
/// # Example
/// ```
/// # use platform_math_helpers::{checked_divide, MathError};
/// assert_eq!(checked_divide(-7, 2), Ok(-3));
/// assert_eq!(checked_divide(1, 0), Err(MathError::DivisionByZero));
/// ```
#[inline]
pub fn checked_divide(
    dividend: i64,
    divisor: i64,
) -> Result<i64, MathError> {
    if divisor == 0 {
        return Err(MathError::DivisionByZero);
    }
    if dividend == i64::MIN && divisor == -1 {
        return Err(MathError::Overflow { op: "divide" });
    }
    Ok(divide(dividend, divisor))
}

/// [`divide_by_1000`] that refuses dividends whose quotient would be narrowed.
///
/// # Example
/// ```
/// # use platform_math_helpers::{checked_divide_by_1000, DIVIDE_BY_1000_MAX_DIVIDEND};
/// assert_eq!(checked_divide_by_1000(DIVIDE_BY_1000_MAX_DIVIDEND), Ok(u32::MAX));
/// assert!(checked_divide_by_1000(DIVIDE_BY_1000_MAX_DIVIDEND + 1).is_err());
/// ```
#[inline]
pub fn checked_divide_by_1000(dividend: u64) -> Result<u32, MathError> {
    if dividend > DIVIDE_BY_1000_MAX_DIVIDEND {
        return Err(MathError::QuotientTooWide { dividend });
    }
    Ok(divide_by_1000(dividend))
}

/// Unsigned 64-bit division without a divide instruction.
///
/// Restoring long division: the divisor is shifted up until its top bit lines
/// up with the dividend's, then one quotient bit is produced per step.
///
/// # Panics
/// Panics when `divisor` is zero.
///
/// # Example
/// ```
/// # use platform_math_helpers::soft_divide_u64;
/// assert_eq!(soft_divide_u64(17, 5), 3);
/// assert_eq!(soft_divide_u64(u64::MAX, 1), u64::MAX);
/// assert_eq!(soft_divide_u64(4, 9), 0);
/// ```
#[inline]
pub const fn soft_divide_u64(
    dividend: u64,
    divisor: u64,
) -> u64 {
    if divisor == 0 {
        panic!("attempt to divide by zero");
    }
    if divisor > dividend {
        return 0;
    }

    // divisor <= dividend, so divisor has at least as many leading zeros
    let shift = divisor.leading_zeros() - dividend.leading_zeros();
    let mut d = divisor << shift;
    let mut r = dividend;
    let mut q: u64 = 0;
    let mut steps = shift + 1;
    while steps > 0 {
        q <<= 1;
        if r >= d {
            r -= d;
            q |= 1;
        }
        d >>= 1;
        steps -= 1;
    }
    q
}

/// Signed 64-bit division built on [`soft_divide_u64`].
///
/// Divides the magnitudes and applies the sign afterwards, which truncates
/// toward zero. `i64::MIN / -1` wraps to `i64::MIN`.
///
/// # Panics
/// Panics when `divisor` is zero.
///
/// # Example
/// ```
/// # use platform_math_helpers::soft_divide;
/// assert_eq!(soft_divide(-17, 5), -3);
/// assert_eq!(soft_divide(17, -5), -3);
/// assert_eq!(soft_divide(-17, -5), 3);
/// ```
#[inline]
pub const fn soft_divide(
    dividend: i64,
    divisor: i64,
) -> i64 {
    let negative = (dividend < 0) != (divisor < 0);
    let q = soft_divide_u64(dividend.unsigned_abs(), divisor.unsigned_abs()) as i64;
    if negative { q.wrapping_neg() } else { q }
}

/// Divide by 1000 using a reciprocal multiply instead of a divide.
///
/// `x / 1000 == (x >> 3) / 125`, and for any 61-bit value `(x >> 3) / 125`
/// equals `((x >> 3) * ceil(2^68 / 125)) >> 68`. Exact for every `u64`
/// before the narrowing to 32 bits.
///
/// # Example
/// ```
/// # use platform_math_helpers::soft_divide_by_1000;
/// assert_eq!(soft_divide_by_1000(1_999), 1);
/// assert_eq!(soft_divide_by_1000(4_294_967_295_999), u32::MAX);
/// ```
#[inline(always)]
pub const fn soft_divide_by_1000(dividend: u64) -> u32 {
    let eighths = (dividend >> 3) as u128;
    ((eighths * RECIP_125) >> RECIP_125_SHIFT) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Native reference with `i64::MIN / -1` defined as wrapping.
    fn native_div(
        x: i64,
        y: i64,
    ) -> i64 {
        x.wrapping_div(y)
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(divide(17, 5), 3);
        assert_eq!(divide(-17, 5), -3);
        assert_eq!(divide(17, -5), -3);
        assert_eq!(divide(-17, -5), 3);
        assert_eq!(divide(4, 5), 0);
        assert_eq!(divide(-4, 5), 0);
        assert_eq!(divide(0, -9), 0);
    }

    #[test]
    fn test_divide_extremes() {
        assert_eq!(divide(i64::MAX, 1), i64::MAX);
        assert_eq!(divide(i64::MAX, -1), -i64::MAX);
        assert_eq!(divide(i64::MIN, 1), i64::MIN);
        assert_eq!(divide(i64::MIN, 2), i64::MIN / 2);
        assert_eq!(divide(i64::MIN, i64::MIN), 1);
        assert_eq!(divide(i64::MAX, i64::MIN), 0);
        assert_eq!(divide(i64::MIN, -1), i64::MIN);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_divide_by_zero_panics() {
        let zero = std::hint::black_box(0);
        let _ = divide(1, zero);
    }

    #[test]
    fn test_divide_by_1000_boundaries() {
        assert_eq!(divide_by_1000(0), 0);
        assert_eq!(divide_by_1000(999), 0);
        assert_eq!(divide_by_1000(1000), 1);
        assert_eq!(divide_by_1000(1999), 1);
        assert_eq!(divide_by_1000(2000), 2);
        assert_eq!(divide_by_1000(DIVIDE_BY_1000_MAX_DIVIDEND), u32::MAX);
    }

    #[test]
    fn test_divide_by_1000_wraps_above_range() {
        // Quotient 2^32 narrows to 0
        assert_eq!(divide_by_1000(DIVIDE_BY_1000_MAX_DIVIDEND + 1), 0);
        assert_eq!(divide_by_1000(u64::MAX), (u64::MAX / 1000) as u32);
    }

    #[test]
    fn test_max_dividend_constant() {
        assert_eq!(DIVIDE_BY_1000_MAX_DIVIDEND, 4_294_967_295_999);
    }

    #[test]
    fn test_checked_divide() {
        assert_eq!(checked_divide(100, 7), Ok(14));
        assert_eq!(checked_divide(-100, 7), Ok(-14));
        assert_eq!(checked_divide(5, 0), Err(MathError::DivisionByZero));
        assert_eq!(
            checked_divide(i64::MIN, -1),
            Err(MathError::Overflow { op: "divide" })
        );
        assert_eq!(checked_divide(i64::MIN, 1), Ok(i64::MIN));
    }

    #[test]
    fn test_checked_divide_by_1000() {
        assert_eq!(checked_divide_by_1000(1_500), Ok(1));
        assert_eq!(
            checked_divide_by_1000(DIVIDE_BY_1000_MAX_DIVIDEND),
            Ok(u32::MAX)
        );
        assert_eq!(
            checked_divide_by_1000(DIVIDE_BY_1000_MAX_DIVIDEND + 1),
            Err(MathError::QuotientTooWide {
                dividend: DIVIDE_BY_1000_MAX_DIVIDEND + 1
            })
        );
    }

    #[test]
    fn test_soft_divide_u64() {
        assert_eq!(soft_divide_u64(0, 3), 0);
        assert_eq!(soft_divide_u64(17, 5), 3);
        assert_eq!(soft_divide_u64(20, 5), 4);
        assert_eq!(soft_divide_u64(5, 5), 1);
        assert_eq!(soft_divide_u64(u64::MAX, 1), u64::MAX);
        assert_eq!(soft_divide_u64(u64::MAX, u64::MAX), 1);
        assert_eq!(soft_divide_u64(u64::MAX, 2), u64::MAX / 2);
        assert_eq!(soft_divide_u64(1 << 63, 3), (1u64 << 63) / 3);
        assert_eq!(soft_divide_u64(u64::MAX - 1, u64::MAX), 0);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_soft_divide_u64_by_zero_panics() {
        let _ = soft_divide_u64(std::hint::black_box(7), std::hint::black_box(0));
    }

    #[test]
    fn test_soft_divide_signs_and_extremes() {
        assert_eq!(soft_divide(-17, 5), -3);
        assert_eq!(soft_divide(17, -5), -3);
        assert_eq!(soft_divide(-17, -5), 3);
        assert_eq!(soft_divide(i64::MIN, 1), i64::MIN);
        assert_eq!(soft_divide(i64::MIN, -1), i64::MIN);
        assert_eq!(soft_divide(i64::MIN, i64::MIN), 1);
        assert_eq!(soft_divide(i64::MIN, i64::MAX), -1);
        assert_eq!(soft_divide(i64::MAX, i64::MIN), 0);
    }

    #[test]
    fn test_soft_divide_by_1000_edges() {
        for x in [
            0u64,
            1,
            7,
            8,
            999,
            1000,
            1001,
            124_999,
            125_000,
            DIVIDE_BY_1000_MAX_DIVIDEND,
            DIVIDE_BY_1000_MAX_DIVIDEND + 1,
            u64::MAX - 1000,
            u64::MAX - 999,
            u64::MAX,
        ] {
            assert_eq!(soft_divide_by_1000(x), (x / 1000) as u32, "x = {x}");
        }
    }

    #[test]
    fn test_selected_backend_agrees_with_both_paths() {
        for &(x, y) in &[
            (17i64, 5i64),
            (-17, 5),
            (i64::MIN, -1),
            (i64::MIN, 3),
            (i64::MAX, -7),
            (1_000_000_007, 1_000),
        ] {
            assert_eq!(divide(x, y), soft_divide(x, y), "{x} / {y}");
            assert_eq!(divide(x, y), native_div(x, y), "{x} / {y}");
        }
        for x in [0u64, 999, 1000, DIVIDE_BY_1000_MAX_DIVIDEND, u64::MAX] {
            assert_eq!(divide_by_1000(x), soft_divide_by_1000(x), "x = {x}");
            assert_eq!(divide_by_1000(x), (x / 1000) as u32, "x = {x}");
        }
    }

    #[test]
    fn test_usable_in_const() {
        const Q: i64 = divide(-9, 4);
        const MS: u32 = divide_by_1000(5_000);
        assert_eq!(Q, -2);
        assert_eq!(MS, 5);
    }

    proptest! {
        #[test]
        fn divide_matches_native(x in any::<i64>(), y in any::<i64>().prop_filter("non-zero", |y| *y != 0)) {
            prop_assert_eq!(divide(x, y), native_div(x, y));
        }

        #[test]
        fn soft_divide_matches_native(x in any::<i64>(), y in any::<i64>().prop_filter("non-zero", |y| *y != 0)) {
            prop_assert_eq!(soft_divide(x, y), native_div(x, y));
        }

        #[test]
        fn soft_divide_small_divisors(x in any::<i64>(), y in -1000i64..1000) {
            prop_assume!(y != 0);
            prop_assert_eq!(soft_divide(x, y), native_div(x, y));
        }

        #[test]
        fn soft_divide_u64_matches_native(x in any::<u64>(), y in 1u64..) {
            prop_assert_eq!(soft_divide_u64(x, y), x / y);
        }

        #[test]
        fn divide_by_1000_exact_in_range(x in 0..=DIVIDE_BY_1000_MAX_DIVIDEND) {
            prop_assert_eq!(divide_by_1000(x) as u64, x / 1000);
        }

        #[test]
        fn soft_divide_by_1000_matches_native(x in any::<u64>()) {
            prop_assert_eq!(soft_divide_by_1000(x), (x / 1000) as u32);
        }
    }
}
