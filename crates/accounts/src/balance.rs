//! Balance derivation.
//!
//! An account's balance is never stored. It is a pure fold over the entry
//! log: incoming amounts (entries whose destination is the account) minus
//! outgoing amounts (entries whose source is the account), restricted to
//! entries at or before the as-of instant. Replaying the same log prefix
//! always yields the same value.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use corebank_core::AccountId;

use crate::entry::LedgerEntry;

/// Balance of `account` as of `as_of` (entries after `as_of` excluded).
pub fn balance(entries: &[LedgerEntry], account: AccountId, as_of: DateTime<Utc>) -> Decimal {
    entries
        .iter()
        .filter(|e| e.timestamp() <= as_of)
        .fold(Decimal::ZERO, |acc, e| acc + signed_amount(e, account))
}

/// Balance of `account` over the whole committed log.
///
/// Posting preconditions check against this, not an as-of snapshot: funds
/// must exist right now, whatever business timestamp the entry carries.
pub fn current_balance(entries: &[LedgerEntry], account: AccountId) -> Decimal {
    entries
        .iter()
        .fold(Decimal::ZERO, |acc, e| acc + signed_amount(e, account))
}

fn signed_amount(entry: &LedgerEntry, account: AccountId) -> Decimal {
    let mut signed = Decimal::ZERO;
    if entry.dest() == Some(account) {
        signed += entry.amount();
    }
    if entry.source() == Some(account) {
        signed -= entry.amount();
    }
    signed
}
