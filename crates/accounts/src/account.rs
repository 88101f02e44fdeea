use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corebank_core::{AccountId, DomainError, DomainResult, Entity, UserId};

/// A current account.
///
/// Immutable after creation except for `monthly_tax`, which is explicitly
/// updatable. The account carries no balance: balances are derived from the
/// entry log (see [`crate::balance`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    owner_id: UserId,
    monthly_tax: Decimal,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Open an account with the given monthly tax obligation.
    pub fn new(
        id: AccountId,
        owner_id: UserId,
        monthly_tax: Decimal,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if monthly_tax < Decimal::ZERO {
            return Err(DomainError::validation("monthly tax cannot be negative"));
        }
        Ok(Self {
            id,
            owner_id,
            monthly_tax,
            created_at,
        })
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn monthly_tax(&self) -> Decimal {
        self.monthly_tax
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Update the monthly tax; past accrual is recomputed against the new
    /// rate, because owed amounts are derived, never stored.
    pub fn set_monthly_tax(&mut self, monthly_tax: Decimal) -> DomainResult<()> {
        if monthly_tax < Decimal::ZERO {
            return Err(DomainError::validation("monthly tax cannot be negative"));
        }
        self.monthly_tax = monthly_tax;
        Ok(())
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
