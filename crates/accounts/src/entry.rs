use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corebank_core::{AccountId, DomainError, DomainResult, EntryId};

/// What a ledger entry records.
///
/// "No counterparty" is a named state, not a null: a deposit's source and a
/// withdrawal's destination are external to the system by definition, and a
/// tax payment's destination is the bank itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Deposit,
    Withdrawal,
    Transfer,
    TaxPayment,
}

/// One immutable fund movement in the append-only log.
///
/// Entries are only built through the shape-safe constructors below, so the
/// kind always agrees with which account references are present:
///
/// - `Deposit`: destination only (funds enter the system)
/// - `Withdrawal`: source only (funds leave the system)
/// - `Transfer`: source and destination, distinct
/// - `TaxPayment`: source only (destination is the bank, external)
///
/// Entries are never mutated or deleted; balance and tax derivations are pure
/// folds over a log prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    id: EntryId,
    kind: EntryKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
    source: Option<AccountId>,
    dest: Option<AccountId>,
}

impl LedgerEntry {
    fn validated(
        kind: EntryKind,
        amount: Decimal,
        timestamp: DateTime<Utc>,
        source: Option<AccountId>,
        dest: Option<AccountId>,
    ) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_amount(amount));
        }
        Ok(Self {
            id: EntryId::new(),
            kind,
            amount,
            timestamp,
            source,
            dest,
        })
    }

    pub fn deposit(dest: AccountId, amount: Decimal, at: DateTime<Utc>) -> DomainResult<Self> {
        Self::validated(EntryKind::Deposit, amount, at, None, Some(dest))
    }

    pub fn withdrawal(source: AccountId, amount: Decimal, at: DateTime<Utc>) -> DomainResult<Self> {
        Self::validated(EntryKind::Withdrawal, amount, at, Some(source), None)
    }

    pub fn transfer(
        source: AccountId,
        dest: AccountId,
        amount: Decimal,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if source == dest {
            return Err(DomainError::validation(
                "transfer source and destination must differ",
            ));
        }
        Self::validated(EntryKind::Transfer, amount, at, Some(source), Some(dest))
    }

    pub fn tax_payment(source: AccountId, amount: Decimal, at: DateTime<Utc>) -> DomainResult<Self> {
        Self::validated(EntryKind::TaxPayment, amount, at, Some(source), None)
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn source(&self) -> Option<AccountId> {
        self.source
    }

    pub fn dest(&self) -> Option<AccountId> {
        self.dest
    }

    /// Whether the entry credits or debits the given account.
    pub fn involves(&self, account: AccountId) -> bool {
        self.source == Some(account) || self.dest == Some(account)
    }
}
