//! Money and rate precision rules.
//!
//! All amounts move through the engine as [`rust_decimal::Decimal`]. Two scales
//! matter:
//!
//! - `MONEY_SCALE` (2): currency precision, applied only at calculation
//!   boundaries (a final monthly payment, a posted amount).
//! - `RATE_SCALE` (10): precision carried by intermediate rate terms so that
//!   rounding error does not compound across months of an amortization.
//!
//! Rounding is half-up (midpoint away from zero), matching how the posted
//! ledgers were historically valued.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits of a currency amount.
pub const MONEY_SCALE: u32 = 2;

/// Fractional digits carried by intermediate rate terms.
pub const RATE_SCALE: u32 = 10;

/// Round a final amount to currency precision.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Round an intermediate rate term to high precision.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
