//! In-memory backends for the account and loan store traits.
//!
//! Every store keeps its rows behind an `RwLock` so the posting engines
//! can share one instance across threads. Appends enforce id uniqueness
//! and, when the store is wired to its referenced collection, existence
//! of the rows an entry or payment points at.

pub mod accounts;
pub mod entries;
pub mod loans;

pub use accounts::InMemoryAccountStore;
pub use entries::InMemoryEntryStore;
pub use loans::{InMemoryLoanStore, InMemoryPaymentStore};
