use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use corebank_core::AccountId;

use crate::account::Account;
use crate::entry::LedgerEntry;
use crate::status::{AccountStatus, account_status};

/// Account statement: the entries involving an account up to `as_of`, newest
/// first, together with the derived status at that instant.
///
/// This is an export shape for listing screens and reports; it derives
/// everything and stores nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub account_id: AccountId,
    pub status: AccountStatus,
    pub entries: Vec<LedgerEntry>,
}

impl Statement {
    pub fn build(account: &Account, entries: &[LedgerEntry], as_of: DateTime<Utc>) -> Self {
        let mut included: Vec<LedgerEntry> = entries
            .iter()
            .filter(|e| e.involves(account.id_typed()) && e.timestamp() <= as_of)
            .cloned()
            .collect();
        included.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

        Self {
            account_id: account.id_typed(),
            status: account_status(account, entries, as_of),
            entries: included,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use corebank_core::UserId;
    use rust_decimal_macros::dec;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn statement_lists_newest_first_and_cuts_at_as_of() {
        let created = at(2024, 1, 1);
        let account = Account::new(AccountId::new(), UserId::new(), dec!(0), created).unwrap();
        let id = account.id_typed();
        let entries = vec![
            LedgerEntry::deposit(id, dec!(100), at(2024, 1, 2)).unwrap(),
            LedgerEntry::withdrawal(id, dec!(30), at(2024, 1, 5)).unwrap(),
            LedgerEntry::deposit(id, dec!(50), at(2024, 2, 1)).unwrap(),
        ];

        let statement = Statement::build(&account, &entries, at(2024, 1, 31));
        assert_eq!(statement.entries.len(), 2);
        assert!(statement.entries[0].timestamp() > statement.entries[1].timestamp());
        assert_eq!(statement.status.balance, dec!(70));
    }

    #[test]
    fn statement_serializes_amounts_as_strings() {
        let created = at(2024, 1, 1);
        let account = Account::new(AccountId::new(), UserId::new(), dec!(10), created).unwrap();
        let id = account.id_typed();
        let entries = vec![LedgerEntry::deposit(id, dec!(99.50), at(2024, 1, 2)).unwrap()];

        let statement = Statement::build(&account, &entries, at(2024, 1, 31));
        let json = serde_json::to_value(&statement).unwrap();

        // Decimals travel as strings on the wire (serde-with-str).
        assert_eq!(json["status"]["balance"], serde_json::json!("99.50"));
        assert_eq!(json["entries"][0]["kind"], serde_json::json!("deposit"));
        assert_eq!(json["entries"][0]["source"], serde_json::Value::Null);

        let back: Statement = serde_json::from_value(json).unwrap();
        assert_eq!(back, statement);
    }
}
