use anchor_lang::prelude::*;

use crate::error::BettingError;

/// Scales a user-entered amount to integer base units.
///
/// The amount is read through its shortest decimal rendering. Digits past
/// `decimals` are rounded half-up on the first dropped digit, so with
/// `decimals == 0` the value `12.5` becomes `13` and `12.4` becomes `12`.
pub fn to_base_units(amount: f64, decimals: u8) -> Result<u64> {
    require!(amount.is_finite() && amount >= 0.0, BettingError::InvalidAmount);
    if amount == 0.0 {
        return Ok(0);
    }

    let rendered = amount.to_string();
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let decimals = decimals as usize;

    let kept = &fraction[..fraction.len().min(decimals)];
    let mut digits = String::with_capacity(integer.len() + decimals);
    digits.push_str(integer);
    digits.push_str(kept);
    digits.extend(std::iter::repeat('0').take(decimals - kept.len()));

    let round_up = fraction.as_bytes().get(decimals).is_some_and(|digit| *digit >= b'5');

    let units: u64 = digits.parse().map_err(|_| error!(BettingError::AmountOverflow))?;
    if round_up {
        units.checked_add(1).ok_or_else(|| error!(BettingError::AmountOverflow))
    } else {
        Ok(units)
    }
}
