//! In-memory append-only ledger entry store.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use corebank_accounts::{EntryKind, EntryStore, LedgerEntry};
use corebank_core::{AccountId, DomainError, DomainResult, EntryId};

use crate::accounts::InMemoryAccountStore;

/// `EntryStore` backed by a `RwLock<Vec>`. Entries are only ever pushed;
/// reads clone the matching rows out so the lock is held briefly.
///
/// When built with [`InMemoryEntryStore::with_accounts`], appends also check
/// that every account the entry references exists, mirroring a foreign key.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    rows: RwLock<Vec<LedgerEntry>>,
    ids: RwLock<HashSet<EntryId>>,
    accounts: Option<Arc<InMemoryAccountStore>>,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// An entry store that rejects entries referencing accounts missing from
    /// `accounts`.
    pub fn with_accounts(accounts: Arc<InMemoryAccountStore>) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            ids: RwLock::new(HashSet::new()),
            accounts: Some(accounts),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntryStore for InMemoryEntryStore {
    fn append(&self, entry: LedgerEntry) -> DomainResult<EntryId> {
        if let Some(accounts) = &self.accounts {
            for account in [entry.source(), entry.dest()].into_iter().flatten() {
                if !accounts.contains(account) {
                    return Err(DomainError::NotFound);
                }
            }
        }
        let id = entry.id();
        let mut ids = self.ids.write().unwrap_or_else(|e| e.into_inner());
        if !ids.insert(id) {
            return Err(DomainError::conflict(format!("entry {id} already posted")));
        }
        self.rows
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry);
        Ok(id)
    }

    fn query(
        &self,
        account: AccountId,
        kind: Option<EntryKind>,
        up_to: Option<DateTime<Utc>>,
    ) -> Vec<LedgerEntry> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let mut matching: Vec<LedgerEntry> = rows
            .iter()
            .filter(|e| e.involves(account))
            .filter(|e| kind.is_none_or(|k| e.kind() == k))
            .filter(|e| up_to.is_none_or(|t| e.timestamp() <= t))
            .cloned()
            .collect();
        matching.sort_by_key(LedgerEntry::timestamp);
        matching
    }
}
