//! Store traits the loan posting boundary depends on.

use corebank_core::{DomainResult, LoanId, LoanTypeId, PaymentId};

use crate::loan::{Loan, LoanType};
use crate::payment::LoanPayment;

/// Loan and loan-type metadata lookup (read-mostly).
pub trait LoanStore: Send + Sync {
    fn get_loan(&self, id: LoanId) -> DomainResult<Loan>;

    fn get_loan_type(&self, id: LoanTypeId) -> DomainResult<LoanType>;

    fn insert_loan(&self, loan: Loan) -> DomainResult<()>;

    fn insert_loan_type(&self, loan_type: LoanType) -> DomainResult<()>;
}

/// Append-only loan payment store.
pub trait PaymentStore: Send + Sync {
    /// Append a validated payment. Fails with `Conflict` on id reuse and
    /// `NotFound` when the loan does not exist.
    fn append(&self, payment: LoanPayment) -> DomainResult<PaymentId>;

    /// All payments for a loan, ordered by timestamp ascending.
    fn payments_for(&self, loan: LoanId) -> Vec<LoanPayment>;
}
