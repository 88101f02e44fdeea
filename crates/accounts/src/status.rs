use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corebank_core::ValueObject;

use crate::account::Account;
use crate::balance;
use crate::entry::LedgerEntry;
use crate::tax;

/// Point-in-time view of a current account: balance plus tax standing.
///
/// A derived value object; two derivations over the same log prefix are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub balance: Decimal,
    pub tax_paid: Decimal,
    pub tax_to_pay: Decimal,
    pub as_of: DateTime<Utc>,
}

impl ValueObject for AccountStatus {}

/// Derive the account's status as of `as_of`.
pub fn account_status(
    account: &Account,
    entries: &[LedgerEntry],
    as_of: DateTime<Utc>,
) -> AccountStatus {
    AccountStatus {
        balance: balance::balance(entries, account.id_typed(), as_of),
        tax_paid: tax::tax_paid(entries, account.id_typed(), as_of),
        tax_to_pay: tax::amount_due(account, entries, as_of),
        as_of,
    }
}
