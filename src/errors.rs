//! Error type for the checked arithmetic API.
//!
//! The primary helpers (`divide`, `divide_by_1000`, the rounding macros) follow
//! native integer semantics and never return errors. The `checked_*` variants
//! report the conditions those helpers leave to the caller.

/// Failure of a checked arithmetic helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Divisor (or rounding granularity) was zero.
    DivisionByZero,
    /// Result is not representable in the operand type.
    Overflow {
        /// Name of the operation that overflowed
        op: &'static str,
    },
    /// Quotient of a divide-by-1000 does not fit in 32 bits.
    QuotientTooWide {
        /// The offending dividend
        dividend: u64,
    },
}

impl core::fmt::Display for MathError {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "Division by zero"),
            MathError::Overflow { op } => {
                write!(f, "Arithmetic overflow in {op}")
            }
            MathError::QuotientTooWide { dividend } => {
                write!(
                    f,
                    "Quotient of {dividend} / 1000 does not fit in 32 bits"
                )
            }
        }
    }
}

impl std::error::Error for MathError {}
