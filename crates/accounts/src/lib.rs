//! Current-account module (append-only ledger, derived balances).
//!
//! Pure domain logic plus the transaction posting boundary: no IO, no HTTP,
//! no persistence concerns. Balances and tax obligations are never stored;
//! they are derived as of a caller-supplied instant from the entry log.

pub mod account;
pub mod balance;
pub mod entry;
pub mod posting;
pub mod statement;
pub mod status;
pub mod store;
pub mod tax;

pub use account::Account;
pub use balance::{balance, current_balance};
pub use entry::{EntryKind, LedgerEntry};
pub use posting::TransactionPoster;
pub use statement::Statement;
pub use status::{AccountStatus, account_status};
pub use store::{AccountStore, EntryStore};
