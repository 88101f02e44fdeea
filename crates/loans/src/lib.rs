//! Loan module (amortized repayment, derived payment status).
//!
//! Pure domain logic plus the payment posting boundary. A loan's schedule is
//! never materialized: the expected-vs-paid standing at any instant is
//! derived from the loan's terms and its append-only payment log.

pub mod amortization;
pub mod loan;
pub mod payment;
pub mod posting;
pub mod status;
pub mod store;

pub use amortization::monthly_payment;
pub use loan::{Loan, LoanType};
pub use payment::LoanPayment;
pub use posting::LoanPaymentPoster;
pub use status::{PaymentStatus, payment_status, remaining_balance};
pub use store::{LoanStore, PaymentStore};
