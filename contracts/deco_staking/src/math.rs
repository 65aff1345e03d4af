//! Checked arithmetic and the stake interest formula.
//!
//! Every helper floors like integer division and maps overflow to
//! `Error::ArithmeticOverflow`.

use crate::errors::Error;
use crate::types::Config;

/// Days in the interest year; `apy` is quoted against it.
pub const DAYS_PER_YEAR: i128 = 365;

#[inline]
pub fn add(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_add(b).ok_or(Error::ArithmeticOverflow)
}

#[inline]
pub fn sub(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_sub(b).ok_or(Error::ArithmeticOverflow)
}

#[inline]
pub fn mul(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_mul(b).ok_or(Error::ArithmeticOverflow)
}

#[inline]
pub fn div(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_div(b).ok_or(Error::ArithmeticOverflow)
}

/// `floor(pct * amount / 100)`.
pub fn percent(amount: i128, pct: u32) -> Result<i128, Error> {
    div(mul(pct as i128, amount)?, 100)
}

/// `floor(part * pool / whole)`. Callers guarantee `whole > 0`.
pub fn pro_rata(part: i128, pool: i128, whole: i128) -> Result<i128, Error> {
    div(mul(part, pool)?, whole)
}

/// Interest owed on `amount` after `elapsed_days` of a `term_days` stake.
///
/// Accrual stops at the term. On top of the linear yield, each completed
/// `double_reward_days` interval adds one more full day-rate accrual.
pub fn interest(
    cfg: &Config,
    amount: i128,
    elapsed_days: u32,
    term_days: u32,
) -> Result<i128, Error> {
    let effective = elapsed_days.min(term_days) as i128;
    let apy = cfg.apy as i128;
    let year = DAYS_PER_YEAR * 100;

    let base = div(mul(mul(amount, apy)?, effective)?, year)?;

    let intervals = div(effective, cfg.double_reward_days as i128)?;
    let bonus = div(mul(mul(intervals, apy)?, amount)?, year)?;

    add(base, bonus)
}
