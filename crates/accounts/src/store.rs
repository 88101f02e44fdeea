//! Store traits the posting boundary depends on.
//!
//! The engine owns no persistence. An entry store (append-only) and an
//! account metadata lookup are injected at construction; in-process callers
//! wire in-memory implementations, remote callers put an RPC client behind
//! the same trait.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use corebank_core::{AccountId, DomainResult, EntryId};

use crate::account::Account;
use crate::entry::{EntryKind, LedgerEntry};

/// Append-only ledger entry store.
pub trait EntryStore: Send + Sync {
    /// Append a validated entry.
    ///
    /// Fails with `Conflict` on id reuse and `NotFound` when a referenced
    /// account does not exist. Never overwrites.
    fn append(&self, entry: LedgerEntry) -> DomainResult<EntryId>;

    /// Entries involving `account`, optionally restricted by kind and upper
    /// timestamp bound, ordered by timestamp ascending.
    fn query(
        &self,
        account: AccountId,
        kind: Option<EntryKind>,
        up_to: Option<DateTime<Utc>>,
    ) -> Vec<LedgerEntry>;
}

/// Account metadata lookup (read-mostly, owned by a separate component).
pub trait AccountStore: Send + Sync {
    fn get(&self, id: AccountId) -> DomainResult<Account>;

    fn insert(&self, account: Account) -> DomainResult<()>;

    /// The one mutable account attribute.
    fn set_monthly_tax(&self, id: AccountId, monthly_tax: Decimal) -> DomainResult<()>;
}
