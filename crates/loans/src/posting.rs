//! Loan payment posting.
//!
//! The only mutator on the loan side. Mirrors the current-account posting
//! boundary: validate everything against the committed payment log, then
//! append, serialized per loan through a per-key lock.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use corebank_core::{DomainError, DomainResult, KeyLocks, LoanId};

use crate::payment::LoanPayment;
use crate::status::{self, PaymentStatus};
use crate::store::{LoanStore, PaymentStore};

/// Posting service for loan payments.
pub struct LoanPaymentPoster<L: LoanStore, P: PaymentStore> {
    loans: Arc<L>,
    payments: Arc<P>,
    locks: KeyLocks<LoanId>,
}

impl<L: LoanStore, P: PaymentStore> LoanPaymentPoster<L, P> {
    pub fn new(loans: Arc<L>, payments: Arc<P>) -> Self {
        Self {
            loans,
            payments,
            locks: KeyLocks::new(),
        }
    }

    /// Post a payment against a loan.
    ///
    /// Rejected when the loan already covered its principal, or when the
    /// payment would push the paid total past the contractual obligation.
    /// The overpayment error carries attempted/maximum/excess so callers can
    /// render an exact message.
    pub fn make_payment(
        &self,
        loan: LoanId,
        amount: Decimal,
        at: Option<DateTime<Utc>>,
    ) -> DomainResult<LoanPayment> {
        let at = at.unwrap_or_else(Utc::now);
        let meta = self.loans.get_loan(loan)?;
        let loan_type = self.loans.get_loan_type(meta.loan_type_id())?;
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_amount(amount));
        }

        self.locks.with(&loan, || {
            let history = self.payments.payments_for(loan);
            let paid = status::total_paid_all(&history);

            if paid >= meta.principal() {
                warn!(%loan, "payment rejected: loan already fully paid");
                return Err(DomainError::LoanAlreadyPaid);
            }

            let contractual_total = status::contractual_total(&meta, loan_type.annual_rate())?;
            let max_possible = contractual_total - paid;
            if amount > max_possible {
                let excess = amount - max_possible;
                warn!(%loan, %amount, %max_possible, %excess, "payment rejected: overpayment");
                return Err(DomainError::Overpayment {
                    attempted: amount,
                    max_possible,
                    excess,
                });
            }

            let payment = LoanPayment::new(loan, amount, at)?;
            self.payments.append(payment.clone())?;
            info!(%loan, %amount, "loan payment posted");
            Ok(payment)
        })
    }

    /// Read-only standing derivation; safe to run concurrently with postings
    /// on other loans.
    pub fn status(&self, loan: LoanId, as_of: Option<DateTime<Utc>>) -> DomainResult<PaymentStatus> {
        let as_of = as_of.unwrap_or_else(Utc::now);
        let meta = self.loans.get_loan(loan)?;
        let loan_type = self.loans.get_loan_type(meta.loan_type_id())?;
        let history = self.payments.payments_for(loan);
        status::payment_status(&meta, loan_type.annual_rate(), &history, as_of)
    }
}
