//! Rounding to a multiple of a granularity.
//!
//! Three flavours of the same two operations:
//!
//! - [`round_down!`](crate::round_down) / [`round_up!`](crate::round_up):
//!   expression macros, usable in `const` items with any unsigned operand type
//! - `round_down_u32` / `round_up_u64` / ...: typed `const fn`s
//! - [`RoundToMultiple`]: method form on every unsigned primitive, plus
//!   [`RoundToMultiple::checked_round_up`]
//!
//! Operands are unsigned and the granularity must be non-zero. The macros
//! evaluate to the bare expression, so overflow in `a + b - 1` behaves as it
//! does for the operand type at the call site. The functions and trait methods
//! wrap instead, matching unsigned C arithmetic.

/// Round `a` down to the nearest multiple of `b`: `(a / b) * b`.
///
/// Both operands must be unsigned integers and `b` must be non-zero.
///
/// # Example
/// ```
/// # use platform_math_helpers::round_down;
/// assert_eq!(round_down!(17u32, 5u32), 15);
/// assert_eq!(round_down!(20u32, 5u32), 20);
/// const ALIGNED: usize = round_down!(1023usize, 256usize);
/// assert_eq!(ALIGNED, 768);
/// ```
#[macro_export]
macro_rules! round_down {
    ($a:expr, $b:expr $(,)?) => {
        (($a) / ($b)) * ($b)
    };
}

/// Round `a` up to the nearest multiple of `b`: `((a + b - 1) / b) * b`.
///
/// Both operands must be unsigned integers and `b` must be non-zero.
///
/// # Example
/// ```
/// # use platform_math_helpers::round_up;
/// assert_eq!(round_up!(17u32, 5u32), 20);
/// assert_eq!(round_up!(20u32, 5u32), 20);
/// assert_eq!(round_up!(1u32, 7u32), 7);
/// ```
///
/// # Overflow
/// `a + b - 1` is evaluated with the operand type's own arithmetic, so
/// `round_up!(u32::MAX, 2u32)` panics in debug builds where
/// [`RoundToMultiple::round_up`](crate::RoundToMultiple::round_up) and
/// `round_up_u32` wrap to 0. Use
/// [`RoundToMultiple::checked_round_up`](crate::RoundToMultiple::checked_round_up)
/// near the top of the range.
#[macro_export]
macro_rules! round_up {
    ($a:expr, $b:expr $(,)?) => {
        $crate::round_down!(($a) + ($b) - 1, $b)
    };
}

/// Rounding to a multiple, implemented for every unsigned primitive.
///
/// # Example
/// ```
/// # use platform_math_helpers::RoundToMultiple;
/// assert_eq!(17u8.round_down(5), 15);
/// assert_eq!(17u64.round_up(5), 20);
/// assert_eq!(u16::MAX.checked_round_up(2), None);
/// ```
pub trait RoundToMultiple: Sized + Copy {
    /// Largest multiple of `granularity` that is `<= self`.
    ///
    /// # Panics
    /// Panics when `granularity` is zero.
    fn round_down(
        self,
        granularity: Self,
    ) -> Self;

    /// Smallest multiple of `granularity` that is `>= self`.
    ///
    /// Wraps when `self + granularity - 1` overflows.
    ///
    /// # Panics
    /// Panics when `granularity` is zero.
    fn round_up(
        self,
        granularity: Self,
    ) -> Self;

    /// [`round_up`](Self::round_up) returning `None` on overflow or zero granularity.
    fn checked_round_up(
        self,
        granularity: Self,
    ) -> Option<Self>;
}

macro_rules! impl_round_to_multiple {
    ($($t:ty),* $(,)?) => {
        $(
            impl RoundToMultiple for $t {
                #[inline(always)]
                fn round_down(
                    self,
                    granularity: Self,
                ) -> Self {
                    (self / granularity) * granularity
                }

                #[inline(always)]
                fn round_up(
                    self,
                    granularity: Self,
                ) -> Self {
                    let biased = self.wrapping_add(granularity).wrapping_sub(1);
                    (biased / granularity).wrapping_mul(granularity)
                }

                #[inline]
                fn checked_round_up(
                    self,
                    granularity: Self,
                ) -> Option<Self> {
                    if granularity == 0 {
                        return None;
                    }
                    let biased = self.checked_add(granularity - 1)?;
                    Some((biased / granularity) * granularity)
                }
            }
        )*
    };
}

impl_round_to_multiple!(u8, u16, u32, u64, u128, usize);

macro_rules! const_rounding_fns {
    ($($t:ty => $down:ident, $up:ident;)*) => {
        $(
            #[doc = concat!("Round a `", stringify!($t), "` down to a multiple of `b` (`b != 0`).")]
            #[inline(always)]
            pub const fn $down(
                a: $t,
                b: $t,
            ) -> $t {
                (a / b) * b
            }

            #[doc = concat!("Round a `", stringify!($t), "` up to a multiple of `b` (`b != 0`), wrapping on overflow.")]
            #[inline(always)]
            pub const fn $up(
                a: $t,
                b: $t,
            ) -> $t {
                (a.wrapping_add(b).wrapping_sub(1) / b).wrapping_mul(b)
            }
        )*
    };
}

const_rounding_fns! {
    u32 => round_down_u32, round_up_u32;
    u64 => round_down_u64, round_up_u64;
    usize => round_down_usize, round_up_usize;
}
