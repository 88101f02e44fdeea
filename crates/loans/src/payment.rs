use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corebank_core::{DomainError, DomainResult, LoanId, PaymentId};

/// One posted loan payment. Append-only, like a ledger entry: payment history
/// is never rewritten, and a loan's standing is derived by replaying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPayment {
    id: PaymentId,
    loan_id: LoanId,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl LoanPayment {
    pub fn new(loan_id: LoanId, amount: Decimal, at: DateTime<Utc>) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_amount(amount));
        }
        Ok(Self {
            id: PaymentId::new(),
            loan_id,
            amount,
            timestamp: at,
        })
    }

    pub fn id(&self) -> PaymentId {
        self.id
    }

    pub fn loan_id(&self) -> LoanId {
        self.loan_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
