//! Clock unit conversions and clock readings built on [`divide_by_1000`].
//!
//! Timer code in the networking layer keeps time as 64-bit micro- or
//! milliseconds and hands out 32-bit milli- or seconds. Every narrowing step
//! here goes through [`divide_by_1000`], so it inherits that function's
//! contract: the result is exact while the quotient fits in 32 bits and wraps
//! after that (49.7 days of milliseconds, 136 years of seconds).
//!
//! Clock readers use `libc::clock_gettime` and are only available on Unix.

use crate::divide_by_1000;

/// Microseconds to milliseconds, truncated and narrowed to 32 bits.
///
/// # Example
/// ```
/// # use platform_math_helpers::usecs_to_msecs;
/// assert_eq!(usecs_to_msecs(1_999), 1);
/// assert_eq!(usecs_to_msecs(2_500_000), 2_500);
/// ```
#[inline(always)]
pub const fn usecs_to_msecs(usecs: u64) -> u32 {
    divide_by_1000(usecs)
}

/// Milliseconds to seconds, truncated and narrowed to 32 bits.
///
/// # Example
/// ```
/// # use platform_math_helpers::msecs_to_secs;
/// assert_eq!(msecs_to_secs(59_999), 59);
/// assert_eq!(msecs_to_secs(1_700_000_000_123), 1_700_000_000);
/// ```
#[inline(always)]
pub const fn msecs_to_secs(msecs: u64) -> u32 {
    divide_by_1000(msecs)
}

/// Convert a `timespec` to whole microseconds.
///
/// `tv_nsec` is below one second, so its divide-by-1000 always fits. A
/// negative `tv_sec` (before the epoch) wraps: the result is the two's
/// complement of the signed value, so `as i64` recovers it.
#[cfg(unix)]
#[inline(always)]
pub fn timespec_to_usecs(ts: &libc::timespec) -> u64 {
    let secs = ts.tv_sec as u64;
    let usecs = divide_by_1000(ts.tv_nsec as u64) as u64;
    secs.wrapping_mul(1_000_000).wrapping_add(usecs)
}

/// Convert a `timespec` to whole milliseconds.
///
/// Wraps like [`timespec_to_usecs`] for a negative `tv_sec`.
///
/// # Example
/// ```
/// # #[cfg(unix)] {
/// # use platform_math_helpers::timespec_to_msecs;
/// let ts = libc::timespec { tv_sec: 3, tv_nsec: 456_789_000 };
/// assert_eq!(timespec_to_msecs(&ts), 3_456);
/// # }
/// ```
#[cfg(unix)]
#[inline(always)]
pub fn timespec_to_msecs(ts: &libc::timespec) -> u64 {
    let secs = ts.tv_sec as u64;
    let usecs = divide_by_1000(ts.tv_nsec as u64) as u64;
    secs.wrapping_mul(1_000)
        .wrapping_add(divide_by_1000(usecs) as u64)
}

/// A failed `clock_gettime` leaves `ts` zeroed; only debug builds assert.
#[cfg(unix)]
#[inline(always)]
fn read_clock(clock: libc::clockid_t) -> libc::timespec {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    let rc = unsafe { libc::clock_gettime(clock, &mut ts) };
    debug_assert_eq!(rc, 0, "clock_gettime failed");
    ts
}

/// Monotonic clock in microseconds (`CLOCK_MONOTONIC`).
///
/// If `clock_gettime` fails (unsupported clock id), release builds read 0.
#[cfg(unix)]
#[inline]
pub fn monotonic_usecs() -> u64 {
    timespec_to_usecs(&read_clock(libc::CLOCK_MONOTONIC))
}

/// Monotonic clock in milliseconds (`CLOCK_MONOTONIC`).
///
/// If `clock_gettime` fails (unsupported clock id), release builds read 0.
///
/// # Example
/// ```
/// # #[cfg(unix)] {
/// # use platform_math_helpers::monotonic_msecs;
/// let a = monotonic_msecs();
/// let b = monotonic_msecs();
/// assert!(b >= a);
/// # }
/// ```
#[cfg(unix)]
#[inline]
pub fn monotonic_msecs() -> u64 {
    timespec_to_msecs(&read_clock(libc::CLOCK_MONOTONIC))
}

/// Wall-clock milliseconds since the Unix epoch (`CLOCK_REALTIME`).
///
/// If `clock_gettime` fails (unsupported clock id), release builds read 0.
#[cfg(unix)]
#[inline]
pub fn realtime_msecs() -> u64 {
    timespec_to_msecs(&read_clock(libc::CLOCK_REALTIME))
}

/// Wall-clock seconds since the Unix epoch, narrowed to 32 bits.
///
/// Reads 0 (the epoch) in release builds if `clock_gettime` fails.
#[cfg(unix)]
#[inline]
pub fn realtime_secs() -> u32 {
    msecs_to_secs(realtime_msecs())
}
