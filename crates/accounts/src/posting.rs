//! Transaction posting.
//!
//! The only mutator on the current-account side. Every operation is a single
//! read-validate-append unit: all preconditions are checked before anything
//! is appended, and postings against the same source account are serialized
//! through a per-key lock so two concurrent withdrawals cannot both pass the
//! balance check against a stale snapshot. Postings against different
//! accounts proceed in parallel.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use corebank_core::{AccountId, DomainError, DomainResult, KeyLocks};

use crate::balance;
use crate::entry::LedgerEntry;
use crate::status::{AccountStatus, account_status};
use crate::store::{AccountStore, EntryStore};
use crate::tax;

/// Posting service for deposits, withdrawals, transfers and tax payments.
///
/// Collaborators are injected at construction; the poster holds no domain
/// state of its own.
pub struct TransactionPoster<E: EntryStore, A: AccountStore> {
    entries: Arc<E>,
    accounts: Arc<A>,
    locks: KeyLocks<AccountId>,
}

impl<E: EntryStore, A: AccountStore> TransactionPoster<E, A> {
    pub fn new(entries: Arc<E>, accounts: Arc<A>) -> Self {
        Self {
            entries,
            accounts,
            locks: KeyLocks::new(),
        }
    }

    /// Deposit `amount` into `account` (funds entering the system).
    ///
    /// Always allowed: no balance or tax precondition, hence no lock.
    pub fn depot(
        &self,
        account: AccountId,
        amount: Decimal,
        at: Option<DateTime<Utc>>,
    ) -> DomainResult<LedgerEntry> {
        let at = at.unwrap_or_else(Utc::now);
        self.accounts.get(account)?;

        let entry = LedgerEntry::deposit(account, amount, at)?;
        self.entries.append(entry.clone())?;
        info!(%account, %amount, "deposit posted");
        Ok(entry)
    }

    /// Withdraw `amount` from `account`.
    ///
    /// Requires all tax due as of `at` to be paid, and a current balance
    /// covering the amount.
    pub fn retrait(
        &self,
        account: AccountId,
        amount: Decimal,
        at: Option<DateTime<Utc>>,
    ) -> DomainResult<LedgerEntry> {
        let at = at.unwrap_or_else(Utc::now);
        let meta = self.accounts.get(account)?;
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_amount(amount));
        }

        self.locks.with(&account, || {
            let log = self.entries.query(account, None, None);
            self.check_preconditions(&meta, &log, amount, at)?;

            let entry = LedgerEntry::withdrawal(account, amount, at)?;
            self.entries.append(entry.clone())?;
            info!(%account, %amount, "withdrawal posted");
            Ok(entry)
        })
    }

    /// Pay the full outstanding tax as of `at`.
    ///
    /// Returns `Ok(None)` when nothing is due (a no-op, nothing appended).
    pub fn pay_tax(
        &self,
        account: AccountId,
        at: Option<DateTime<Utc>>,
    ) -> DomainResult<Option<LedgerEntry>> {
        let at = at.unwrap_or_else(Utc::now);
        let meta = self.accounts.get(account)?;

        self.locks.with(&account, || {
            let log = self.entries.query(account, None, None);
            let due = tax::amount_due(&meta, &log, at);
            if due == Decimal::ZERO {
                info!(%account, "no tax to pay");
                return Ok(None);
            }

            let available = balance::current_balance(&log, account);
            if available < due {
                warn!(%account, %available, %due, "tax payment rejected: insufficient funds");
                return Err(DomainError::InsufficientFunds {
                    available,
                    requested: due,
                });
            }

            let entry = LedgerEntry::tax_payment(account, due, at)?;
            self.entries.append(entry.clone())?;
            info!(%account, amount = %due, "tax payment posted");
            Ok(Some(entry))
        })
    }

    /// Move `amount` from `source` to `dest` as one entry.
    ///
    /// Same preconditions as a withdrawal, applied to `source`. A single
    /// `Transfer` entry is appended (not a withdrawal/deposit pair), keeping
    /// a 1:1 audit trail for the movement.
    pub fn transfert(
        &self,
        source: AccountId,
        dest: AccountId,
        amount: Decimal,
        at: Option<DateTime<Utc>>,
    ) -> DomainResult<LedgerEntry> {
        let at = at.unwrap_or_else(Utc::now);
        let source_meta = self.accounts.get(source)?;
        self.accounts.get(dest)?;
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_amount(amount));
        }

        self.locks.with(&source, || {
            let log = self.entries.query(source, None, None);
            self.check_preconditions(&source_meta, &log, amount, at)?;

            let entry = LedgerEntry::transfer(source, dest, amount, at)?;
            self.entries.append(entry.clone())?;
            info!(%source, %dest, %amount, "transfer posted");
            Ok(entry)
        })
    }

    /// Read-only status derivation; safe to run concurrently with postings on
    /// other accounts. May race an in-flight posting on the same account, in
    /// which case callers re-derive after it commits.
    pub fn status(&self, account: AccountId, as_of: Option<DateTime<Utc>>) -> DomainResult<AccountStatus> {
        let as_of = as_of.unwrap_or_else(Utc::now);
        let meta = self.accounts.get(account)?;
        let log = self.entries.query(account, None, None);
        Ok(account_status(&meta, &log, as_of))
    }

    fn check_preconditions(
        &self,
        meta: &crate::account::Account,
        log: &[LedgerEntry],
        amount: Decimal,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let account = meta.id_typed();
        let amount_due = tax::amount_due(meta, log, at);
        if amount_due > Decimal::ZERO {
            warn!(%account, %amount_due, "posting rejected: unpaid taxes");
            return Err(DomainError::UnpaidTax { amount_due });
        }

        let available = balance::current_balance(log, account);
        if available < amount {
            warn!(%account, %available, requested = %amount, "posting rejected: insufficient funds");
            return Err(DomainError::InsufficientFunds {
                available,
                requested: amount,
            });
        }
        Ok(())
    }
}
