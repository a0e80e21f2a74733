//! # platform-math-helpers
//!
//! Portable integer arithmetic for platforms that may lack hardware 64-bit
//! division.
//!
//! Networking code calls these helpers instead of using `/` on 64-bit operands
//! directly, so a target without a divide instruction only has to flip the
//! `soft-division` feature. The crate provides:
//!
//! - [`divide`]: signed 64-bit truncating division
//! - [`divide_by_1000`]: unsigned 64-bit divided by 1000, narrowed to `u32`
//! - [`round_down!`] / [`round_up!`]: rounding to a multiple of a granularity
//! - clock unit conversions built on [`divide_by_1000`]
//!
//! ## Semantics
//!
//! - Pure functions, no state, safe to call from any thread
//! - Native integer behaviour: truncation toward zero, panic on a zero divisor
//! - Wrapping on overflow and narrowing; `checked_*` variants report it instead
//!
//! ## Features
//!
//! - `soft-division`: route [`divide`] and [`divide_by_1000`] through the
//!   division-free [`soft_divide`] and [`soft_divide_by_1000`]
//!
//! Run the suite both ways: `cargo test` and
//! `cargo test --features soft-division`.
//!
//! # Example
//!
//! ```rust
//! use platform_math_helpers::*;
//!
//! assert_eq!(divide(-17, 5), -3);
//! assert_eq!(divide_by_1000(1_234_567), 1_234);
//!
//! // Buffer sizing with a 16-byte granularity
//! let len = 37usize;
//! assert_eq!(round_up!(len, 16), 48);
//! assert_eq!(round_down!(len, 16), 32);
//! ```

pub mod division;
pub mod errors;
pub mod rounding;
pub mod time;

// Re-export all public items for convenience
pub use division::*;
pub use errors::*;
pub use rounding::*;
pub use time::*;
