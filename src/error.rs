//! Error types for the calculation engines

use thiserror::Error;

/// Result type for engine operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors surfaced by the amortization and projection engines.
///
/// Failures are all-or-nothing: an `Err` never comes with a partial ledger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Input rejected before any iteration began.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The schedule failed to close within the iteration cap, e.g. a payment
    /// that does not cover the monthly interest.
    #[error("schedule did not close within {cap} periods")]
    NonConvergent {
        /// The iteration cap that was reached.
        cap: u32,
    },
}

impl CalcError {
    /// Creates a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CalcError::invalid_input("principal must be positive");
        assert_eq!(err.to_string(), "invalid input: principal must be positive");

        let err = CalcError::NonConvergent { cap: 720 };
        assert_eq!(err.to_string(), "schedule did not close within 720 periods");
    }
}
