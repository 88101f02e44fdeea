//! Expected-vs-paid derivation.
//!
//! Like the current-account side, a loan's standing is a pure function of
//! {loan terms, payments with timestamp <= as_of}. The expected amount walks
//! the amortization schedule month by month without materializing it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corebank_core::{DomainResult, ValueObject, months_inclusive};

use crate::amortization::monthly_payment;
use crate::loan::Loan;
use crate::payment::LoanPayment;

/// Point-in-time view of a loan's repayment standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatus {
    pub total_paid: Decimal,
    pub total_expected: Decimal,
    pub amount_due: Decimal,
    pub monthly_payment: Decimal,
    pub fully_paid: bool,
}

impl ValueObject for PaymentStatus {}

/// The loan's fixed monthly payment.
pub fn loan_monthly_payment(loan: &Loan, annual_rate: Decimal) -> DomainResult<Decimal> {
    monthly_payment(loan.principal(), annual_rate, loan.term_months())
}

/// Full contractual obligation: monthly payment times the term.
pub fn contractual_total(loan: &Loan, annual_rate: Decimal) -> DomainResult<Decimal> {
    Ok(loan_monthly_payment(loan, annual_rate)? * Decimal::from(loan.term_months()))
}

/// Amount the schedule expects to have been paid by `as_of`.
///
/// Zero before the start date; the full contractual total after the end date;
/// otherwise one monthly payment per inclusive month elapsed since start.
pub fn expected_by_date(
    loan: &Loan,
    annual_rate: Decimal,
    as_of: DateTime<Utc>,
) -> DomainResult<Decimal> {
    if as_of < loan.start_date() {
        return Ok(Decimal::ZERO);
    }
    if as_of > loan.end_date() {
        return contractual_total(loan, annual_rate);
    }
    let elapsed = months_inclusive(loan.start_date(), as_of);
    Ok(loan_monthly_payment(loan, annual_rate)? * Decimal::from(elapsed))
}

/// Sum of payments with `timestamp <= as_of`.
pub fn total_paid(payments: &[LoanPayment], as_of: DateTime<Utc>) -> Decimal {
    payments
        .iter()
        .filter(|p| p.timestamp() <= as_of)
        .map(LoanPayment::amount)
        .sum()
}

/// Sum of all committed payments, whatever their business timestamp.
///
/// Posting preconditions and the fully-paid judgement use this: a loan paid
/// off yesterday stays paid off for any later query date.
pub fn total_paid_all(payments: &[LoanPayment]) -> Decimal {
    payments.iter().map(LoanPayment::amount).sum()
}

/// Principal not yet repaid (floored at zero).
pub fn remaining_balance(loan: &Loan, payments: &[LoanPayment]) -> Decimal {
    (loan.principal() - total_paid_all(payments)).max(Decimal::ZERO)
}

/// Derive the loan's standing as of `as_of`.
pub fn payment_status(
    loan: &Loan,
    annual_rate: Decimal,
    payments: &[LoanPayment],
    as_of: DateTime<Utc>,
) -> DomainResult<PaymentStatus> {
    let paid = total_paid(payments, as_of);
    let expected = expected_by_date(loan, annual_rate, as_of)?;
    let amount_due = (expected - paid).max(Decimal::ZERO);
    let fully_paid = total_paid_all(payments) >= loan.principal();

    Ok(PaymentStatus {
        total_paid: paid,
        total_expected: expected,
        amount_due,
        monthly_payment: loan_monthly_payment(loan, annual_rate)?,
        fully_paid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use corebank_core::{LoanId, LoanTypeId, UserId};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn year_loan() -> Loan {
        Loan::new(
            LoanId::new(),
            UserId::new(),
            LoanTypeId::new(),
            dec!(1200000),
            at(2024, 1, 1),
            at(2024, 12, 31),
        )
        .unwrap()
    }

    #[test]
    fn nothing_expected_before_start() {
        let loan = year_loan();
        assert_eq!(
            expected_by_date(&loan, dec!(0.12), at(2023, 12, 31)).unwrap(),
            dec!(0)
        );
    }

    #[test]
    fn full_total_expected_after_end() {
        let loan = year_loan();
        let expected = expected_by_date(&loan, dec!(0.12), at(2025, 6, 1)).unwrap();
        assert_eq!(expected, dec!(106618.55) * dec!(12));
    }

    #[test]
    fn mid_term_expects_one_installment_per_inclusive_month() {
        let loan = year_loan();
        // March: January + February + March = 3 installments.
        let expected = expected_by_date(&loan, dec!(0.12), at(2024, 3, 15)).unwrap();
        assert_eq!(expected, dec!(106618.55) * dec!(3));
    }

    #[test]
    fn due_amount_reflects_payments_and_never_goes_negative() {
        let loan = year_loan();
        let id = loan.id_typed();
        let payments = vec![
            LoanPayment::new(id, dec!(106618.55), at(2024, 1, 10)).unwrap(),
            LoanPayment::new(id, dec!(500000), at(2024, 2, 10)).unwrap(),
        ];

        let status = payment_status(&loan, dec!(0.12), &payments, at(2024, 2, 20)).unwrap();
        assert_eq!(status.total_paid, dec!(606618.55));
        assert_eq!(status.total_expected, dec!(106618.55) * dec!(2));
        // Paid well ahead of schedule: due clamps to zero.
        assert_eq!(status.amount_due, dec!(0));
        assert!(!status.fully_paid);
    }

    #[test]
    fn fully_paid_is_judged_against_principal_for_any_query_date() {
        let loan = year_loan();
        let id = loan.id_typed();
        let payments = vec![LoanPayment::new(id, dec!(1200000), at(2024, 3, 1)).unwrap()];

        for as_of in [at(2024, 1, 5), at(2024, 6, 1), at(2030, 1, 1)] {
            let status = payment_status(&loan, dec!(0.12), &payments, as_of).unwrap();
            assert!(status.fully_paid);
        }
    }

    #[test]
    fn status_serializes_amounts_as_strings() {
        let loan = year_loan();
        let status = payment_status(&loan, dec!(0.12), &[], at(2024, 2, 20)).unwrap();
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["monthly_payment"], "106618.55");
        assert_eq!(json["fully_paid"], false);
    }

    #[test]
    fn remaining_balance_floors_at_zero() {
        let loan = year_loan();
        let id = loan.id_typed();
        assert_eq!(remaining_balance(&loan, &[]), dec!(1200000));

        let payments = vec![LoanPayment::new(id, dec!(1250000), at(2024, 5, 1)).unwrap()];
        assert_eq!(remaining_balance(&loan, &payments), dec!(0));
    }

    proptest! {
        /// Property: the expected amount never decreases as `as_of` advances,
        /// and the due amount is never negative.
        #[test]
        fn expected_is_monotonic_and_due_non_negative(
            offset_a in 0i64..48,
            offset_b in 0i64..48,
            paid_units in 0i64..2_000_000,
        ) {
            let loan = year_loan();
            let id = loan.id_typed();
            let (early, late) = if offset_a <= offset_b { (offset_a, offset_b) } else { (offset_b, offset_a) };
            let base = at(2023, 6, 15);
            let as_of_early = base + chrono::Duration::days(early * 31);
            let as_of_late = base + chrono::Duration::days(late * 31);

            let e1 = expected_by_date(&loan, dec!(0.12), as_of_early).unwrap();
            let e2 = expected_by_date(&loan, dec!(0.12), as_of_late).unwrap();
            prop_assert!(e1 <= e2);

            let payments = if paid_units > 0 {
                vec![LoanPayment::new(id, Decimal::from(paid_units), at(2024, 1, 2)).unwrap()]
            } else {
                vec![]
            };
            let status = payment_status(&loan, dec!(0.12), &payments, as_of_late).unwrap();
            prop_assert!(status.amount_due >= Decimal::ZERO);
        }
    }
}
