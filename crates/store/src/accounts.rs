//! In-memory account metadata store.

use std::collections::HashMap;
use std::sync::RwLock;

use rust_decimal::Decimal;

use corebank_accounts::{Account, AccountStore};
use corebank_core::{AccountId, DomainError, DomainResult};

/// `AccountStore` backed by a `RwLock<HashMap>`. Cheap to clone rows out of,
/// shared behind an `Arc` by the posting engine and by test fixtures.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    rows: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: AccountId) -> bool {
        self.rows
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&id)
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get(&self, id: AccountId) -> DomainResult<Account> {
        self.rows
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn insert(&self, account: Account) -> DomainResult<()> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        if rows.contains_key(&account.id_typed()) {
            return Err(DomainError::conflict(format!(
                "account {} already exists",
                account.id_typed()
            )));
        }
        rows.insert(account.id_typed(), account);
        Ok(())
    }

    fn set_monthly_tax(&self, id: AccountId, monthly_tax: Decimal) -> DomainResult<()> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        let account = rows
            .get_mut(&id)
            .ok_or(DomainError::NotFound)?;
        account.set_monthly_tax(monthly_tax)
    }
}
