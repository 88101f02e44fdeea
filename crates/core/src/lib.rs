//! Domain foundation building blocks for corebank.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod cache;
pub mod calendar;
pub mod entity;
pub mod error;
pub mod id;
pub mod lock;
pub mod money;
pub mod value_object;

pub use cache::CachedValue;
pub use calendar::{calendar_months_between, months_inclusive};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, EntryId, LoanId, LoanTypeId, PaymentId, UserId};
pub use lock::KeyLocks;
pub use money::{MONEY_SCALE, RATE_SCALE, round_money, round_rate};
pub use value_object::ValueObject;
