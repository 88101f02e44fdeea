//! Monthly tax accrual.
//!
//! Tax accrues per calendar month, starting with the account's creation month
//! (inclusive) through the month containing the as-of instant (inclusive).
//! What has been paid is derived from `TaxPayment` entries in the log, so the
//! outstanding amount is as replayable as the balance itself.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use corebank_core::{AccountId, calendar_months_between};

use crate::account::Account;
use crate::entry::{EntryKind, LedgerEntry};

/// Number of accrued tax months as of `as_of`.
///
/// `calendar months between creation and as_of, plus one` to include the
/// creation month, clamped to zero when `as_of` precedes creation (nothing
/// owed before the account exists).
pub fn months_elapsed(account: &Account, as_of: DateTime<Utc>) -> i64 {
    (calendar_months_between(account.created_at(), as_of) + 1).max(0)
}

/// Total tax accrued from creation through `as_of`.
pub fn total_owed(account: &Account, as_of: DateTime<Utc>) -> Decimal {
    account.monthly_tax() * Decimal::from(months_elapsed(account, as_of))
}

/// Total tax paid: sum of `TaxPayment` entries sourced from the account at or
/// before `as_of`.
pub fn tax_paid(entries: &[LedgerEntry], account: AccountId, as_of: DateTime<Utc>) -> Decimal {
    entries
        .iter()
        .filter(|e| {
            e.kind() == EntryKind::TaxPayment
                && e.source() == Some(account)
                && e.timestamp() <= as_of
        })
        .map(LedgerEntry::amount)
        .sum()
}

/// Outstanding tax as of `as_of`. Never negative: prepaying months does not
/// put the account "ahead" with a negative due amount.
pub fn amount_due(account: &Account, entries: &[LedgerEntry], as_of: DateTime<Utc>) -> Decimal {
    let owed = total_owed(account, as_of);
    let paid = tax_paid(entries, account.id_typed(), as_of);
    (owed - paid).max(Decimal::ZERO)
}

/// Whether the account owes nothing as of `as_of`.
pub fn is_tax_paid(account: &Account, entries: &[LedgerEntry], as_of: DateTime<Utc>) -> bool {
    amount_due(account, entries, as_of) == Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use corebank_core::UserId;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn account_created(created_at: DateTime<Utc>, monthly_tax: Decimal) -> Account {
        Account::new(AccountId::new(), UserId::new(), monthly_tax, created_at).unwrap()
    }

    #[test]
    fn creation_month_counts_immediately() {
        let account = account_created(at(2024, 3, 10), dec!(1000));
        assert_eq!(months_elapsed(&account, at(2024, 3, 20)), 1);
        assert_eq!(total_owed(&account, at(2024, 3, 20)), dec!(1000));
    }

    #[test]
    fn two_calendar_months_later_three_months_accrued() {
        let account = account_created(at(2024, 1, 15), dec!(1000));
        assert_eq!(months_elapsed(&account, at(2024, 3, 15)), 3);
        assert_eq!(amount_due(&account, &[], at(2024, 3, 15)), dec!(3000));
    }

    #[test]
    fn nothing_owed_before_creation() {
        let account = account_created(at(2024, 6, 1), dec!(1000));
        assert_eq!(months_elapsed(&account, at(2024, 2, 1)), 0);
        assert_eq!(total_owed(&account, at(2024, 2, 1)), dec!(0));
        assert!(is_tax_paid(&account, &[], at(2024, 2, 1)));
    }

    #[test]
    fn tax_payments_reduce_the_due_amount() {
        let account = account_created(at(2024, 1, 1), dec!(1000));
        let id = account.id_typed();
        let entries = vec![
            LedgerEntry::tax_payment(id, dec!(1000), at(2024, 1, 5)).unwrap(),
            LedgerEntry::tax_payment(id, dec!(1000), at(2024, 2, 5)).unwrap(),
        ];

        assert_eq!(amount_due(&account, &entries, at(2024, 2, 20)), dec!(0));
        assert!(is_tax_paid(&account, &entries, at(2024, 2, 20)));
        // Next month accrues again.
        assert_eq!(amount_due(&account, &entries, at(2024, 3, 1)), dec!(1000));
    }

    #[test]
    fn overpaying_never_goes_negative() {
        let account = account_created(at(2024, 1, 1), dec!(1000));
        let id = account.id_typed();
        let entries = vec![LedgerEntry::tax_payment(id, dec!(9000), at(2024, 1, 5)).unwrap()];
        assert_eq!(amount_due(&account, &entries, at(2024, 1, 31)), dec!(0));
    }

    #[test]
    fn only_tax_payment_entries_count_as_paid() {
        let account = account_created(at(2024, 1, 1), dec!(1000));
        let id = account.id_typed();
        let entries = vec![
            LedgerEntry::deposit(id, dec!(5000), at(2024, 1, 2)).unwrap(),
            LedgerEntry::withdrawal(id, dec!(1000), at(2024, 1, 3)).unwrap(),
        ];
        assert_eq!(tax_paid(&entries, id, at(2024, 1, 31)), dec!(0));
        assert_eq!(amount_due(&account, &entries, at(2024, 1, 31)), dec!(1000));
    }

    proptest! {
        /// Property: with a fixed monthly tax and no payments in between,
        /// the due amount never decreases as `as_of` moves forward.
        #[test]
        fn due_amount_is_monotonic_without_payments(
            tax_units in 0i64..10_000,
            months_a in 0i64..240,
            months_b in 0i64..240,
        ) {
            let created = at(2020, 1, 15);
            let account = account_created(created, Decimal::from(tax_units));
            let (early, late) = if months_a <= months_b { (months_a, months_b) } else { (months_b, months_a) };

            let as_of_early = created + Duration::days(early * 31);
            let as_of_late = created + Duration::days(late * 31);
            prop_assert!(
                amount_due(&account, &[], as_of_early) <= amount_due(&account, &[], as_of_late)
            );
            prop_assert!(amount_due(&account, &[], as_of_early) >= Decimal::ZERO);
        }
    }
}
