//! Amortized monthly payment.
//!
//! Standard amortization formula `M = C * i / (1 - (1 + i)^-n)` with monthly
//! rate `i = annual_rate / 12`. Intermediate rate terms carry ten fractional
//! digits so rounding error does not compound across the term; the final
//! payment is rounded to currency precision once, at the boundary.

use rust_decimal::{Decimal, MathematicalOps};

use corebank_core::{DomainError, DomainResult, round_money, round_rate};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Fixed monthly payment repaying `principal` plus interest over `months`.
///
/// A zero monthly rate degenerates to straight division (`C / n`); the
/// general formula would divide by zero there.
pub fn monthly_payment(principal: Decimal, annual_rate: Decimal, months: i64) -> DomainResult<Decimal> {
    if months <= 0 {
        return Err(DomainError::InvalidLoanDuration);
    }
    if principal <= Decimal::ZERO {
        return Err(DomainError::invalid_amount(principal));
    }
    if annual_rate < Decimal::ZERO {
        return Err(DomainError::validation("annual rate cannot be negative"));
    }

    let monthly_rate = round_rate(annual_rate / MONTHS_PER_YEAR);
    if monthly_rate.is_zero() {
        return Ok(round_money(principal / Decimal::from(months)));
    }

    // (1 + i)^-n, computed as the inverse of the positive power.
    let one_plus_rate = Decimal::ONE + monthly_rate;
    let power = one_plus_rate
        .checked_powi(months)
        .ok_or_else(|| DomainError::validation("loan term too long for amortization"))?;
    let power_term = round_rate(Decimal::ONE / power);

    let denominator = Decimal::ONE - power_term;
    let numerator = principal * monthly_rate;
    Ok(round_money(numerator / denominator))
}
