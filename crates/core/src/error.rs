//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable and reported back to the caller; none is fatal
/// to the process. Variants that reject an operation over money carry the
/// amounts involved so callers can build precise user-facing messages without
/// re-deriving the numbers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation amount was zero or negative.
    #[error("amount must be positive (got {amount})")]
    InvalidAmount { amount: Decimal },

    /// A withdrawal or transfer is blocked by outstanding monthly tax.
    #[error("taxes must be paid before making a transaction, amount due: {amount_due}")]
    UnpaidTax { amount_due: Decimal },

    /// The account balance cannot cover the requested amount.
    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },

    /// The loan term resolves to a non-positive month count.
    #[error("invalid loan duration")]
    InvalidLoanDuration,

    /// A payment was attempted on a loan that already covered its principal.
    #[error("loan is already fully paid")]
    LoanAlreadyPaid,

    /// A loan payment would exceed the remaining contractual obligation.
    #[error(
        "payment exceeds remaining loan balance: attempted {attempted}, \
         maximum possible {max_possible}, excess {excess}"
    )]
    Overpayment {
        attempted: Decimal,
        max_possible: Decimal,
        excess: Decimal,
    },

    /// A requested account/loan was not found (surfaced by the lookup
    /// collaborator, propagated unchanged).
    #[error("not found")]
    NotFound,

    /// A value failed validation (e.g. malformed input, bad entry shape).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A uniqueness or append constraint was violated by the store.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount { amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn overpayment_message_carries_the_numbers() {
        let err = DomainError::Overpayment {
            attempted: dec!(1500.00),
            max_possible: dec!(1000.00),
            excess: dec!(500.00),
        };
        let msg = err.to_string();
        assert!(msg.contains("1500.00"));
        assert!(msg.contains("1000.00"));
        assert!(msg.contains("500.00"));
    }

    #[test]
    fn insufficient_funds_message_names_both_amounts() {
        let err = DomainError::InsufficientFunds {
            available: dec!(20),
            requested: dec!(50),
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: available 20, requested 50"
        );
    }
}
