//! In-memory loan metadata and payment stores.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use corebank_core::{DomainError, DomainResult, LoanId, LoanTypeId, PaymentId};
use corebank_loans::{Loan, LoanPayment, LoanStore, LoanType, PaymentStore};

/// `LoanStore` backed by two `RwLock<HashMap>`s. Inserting a loan requires
/// its loan type to be registered first.
#[derive(Debug, Default)]
pub struct InMemoryLoanStore {
    loans: RwLock<HashMap<LoanId, Loan>>,
    loan_types: RwLock<HashMap<LoanTypeId, LoanType>>,
}

impl InMemoryLoanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: LoanId) -> bool {
        self.loans
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&id)
    }
}

impl LoanStore for InMemoryLoanStore {
    fn get_loan(&self, id: LoanId) -> DomainResult<Loan> {
        self.loans
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn get_loan_type(&self, id: LoanTypeId) -> DomainResult<LoanType> {
        self.loan_types
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn insert_loan(&self, loan: Loan) -> DomainResult<()> {
        if !self
            .loan_types
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&loan.loan_type_id())
        {
            return Err(DomainError::NotFound);
        }
        let mut loans = self.loans.write().unwrap_or_else(|e| e.into_inner());
        if loans.contains_key(&loan.id_typed()) {
            return Err(DomainError::conflict(format!(
                "loan {} already exists",
                loan.id_typed()
            )));
        }
        loans.insert(loan.id_typed(), loan);
        Ok(())
    }

    fn insert_loan_type(&self, loan_type: LoanType) -> DomainResult<()> {
        let mut loan_types = self.loan_types.write().unwrap_or_else(|e| e.into_inner());
        if loan_types.contains_key(&loan_type.id_typed()) {
            return Err(DomainError::conflict(format!(
                "loan type {} already exists",
                loan_type.id_typed()
            )));
        }
        loan_types.insert(loan_type.id_typed(), loan_type);
        Ok(())
    }
}

/// Append-only `PaymentStore`. When built with
/// [`InMemoryPaymentStore::with_loans`], appends reject payments whose loan
/// is not registered.
#[derive(Debug, Default)]
pub struct InMemoryPaymentStore {
    rows: RwLock<Vec<LoanPayment>>,
    ids: RwLock<HashSet<PaymentId>>,
    loans: Option<Arc<InMemoryLoanStore>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loans(loans: Arc<InMemoryLoanStore>) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            ids: RwLock::new(HashSet::new()),
            loans: Some(loans),
        }
    }
}

impl PaymentStore for InMemoryPaymentStore {
    fn append(&self, payment: LoanPayment) -> DomainResult<PaymentId> {
        if let Some(loans) = &self.loans {
            if !loans.contains(payment.loan_id()) {
                return Err(DomainError::NotFound);
            }
        }
        let id = payment.id();
        let mut ids = self.ids.write().unwrap_or_else(|e| e.into_inner());
        if !ids.insert(id) {
            return Err(DomainError::conflict(format!(
                "payment {id} already posted"
            )));
        }
        self.rows
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(payment);
        Ok(id)
    }

    fn payments_for(&self, loan: LoanId) -> Vec<LoanPayment> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let mut matching: Vec<LoanPayment> = rows
            .iter()
            .filter(|p| p.loan_id() == loan)
            .cloned()
            .collect();
        matching.sort_by_key(LoanPayment::timestamp);
        matching
    }
}
