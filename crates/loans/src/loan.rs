use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corebank_core::{DomainError, DomainResult, Entity, LoanId, LoanTypeId, UserId, months_inclusive};

/// A loan product: names the annual interest rate applied to loans of this
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanType {
    id: LoanTypeId,
    name: String,
    annual_rate: Decimal,
}

impl LoanType {
    pub fn new(id: LoanTypeId, name: impl Into<String>, annual_rate: Decimal) -> DomainResult<Self> {
        if annual_rate < Decimal::ZERO {
            return Err(DomainError::validation("annual rate cannot be negative"));
        }
        Ok(Self {
            id,
            name: name.into(),
            annual_rate,
        })
    }

    pub fn id_typed(&self) -> LoanTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annual_rate(&self) -> Decimal {
        self.annual_rate
    }
}

impl Entity for LoanType {
    type Id = LoanTypeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A loan account. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    id: LoanId,
    owner_id: UserId,
    loan_type_id: LoanTypeId,
    principal: Decimal,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl Loan {
    pub fn new(
        id: LoanId,
        owner_id: UserId,
        loan_type_id: LoanTypeId,
        principal: Decimal,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if principal <= Decimal::ZERO {
            return Err(DomainError::invalid_amount(principal));
        }
        if end_date <= start_date {
            return Err(DomainError::validation("end date must be after start date"));
        }
        Ok(Self {
            id,
            owner_id,
            loan_type_id,
            principal,
            start_date,
            end_date,
        })
    }

    pub fn id_typed(&self) -> LoanId {
        self.id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn loan_type_id(&self) -> LoanTypeId {
        self.loan_type_id
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Contractual term: inclusive month count from start through end.
    pub fn term_months(&self) -> i64 {
        months_inclusive(self.start_date, self.end_date)
    }
}

impl Entity for Loan {
    type Id = LoanId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
