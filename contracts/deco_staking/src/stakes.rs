//! Stake ledger: fixed-term commitments and their exits.
//!
//! A stake ends in one of three ways, each deleting the record:
//! - `cancel`: before maturity, principal minus the early-withdraw penalty
//!   plus interest accrued so far;
//! - `withdraw`: after maturity, full principal plus interest for the term;
//! - pruning by the dividend sweep once it stays unwithdrawn past the grace
//!   period (see `distribution`).

use crate::config;
use crate::errors::Error;
use crate::events;
use crate::math;
use crate::storage;
use crate::transfers;
use crate::types::{DataKey, Stake};
use soroban_sdk::{Address, Env, Vec};

/// Create a stake record with `elapsed_days = 0` and index it.
pub fn open(e: &Env, staker: &Address, amount: i128, term_days: u32) -> Result<Stake, Error> {
    let key = storage::next_key(e, &DataKey::StakeCounter)?;
    let stake = Stake {
        key,
        staker: staker.clone(),
        amount,
        term_days,
        elapsed_days: 0,
    };
    storage::save(e, &DataKey::Stake(key), &stake);
    storage::index_push(e, &DataKey::StakeKeys, key);
    storage::index_push(e, &DataKey::StakesOf(staker.clone()), key);
    Ok(stake)
}

pub fn load(e: &Env, key: u64) -> Result<Stake, Error> {
    storage::load(e, &DataKey::Stake(key)).ok_or(Error::StakeNotFound)
}

pub fn save(e: &Env, stake: &Stake) {
    storage::save(e, &DataKey::Stake(stake.key), stake);
}

/// Drop the record and its entry in the per-staker index.
///
/// The global key index is left to the caller: sweeps rebuild it in one
/// write instead of touching it per record.
pub fn delete(e: &Env, stake: &Stake) {
    storage::remove(e, &DataKey::Stake(stake.key));
    storage::index_remove(e, &DataKey::StakesOf(stake.staker.clone()), &stake.key);
}

fn delete_and_unindex(e: &Env, stake: &Stake) {
    delete(e, stake);
    storage::index_remove(e, &DataKey::StakeKeys, &stake.key);
}

fn load_owned(e: &Env, staker: &Address, key: u64) -> Result<Stake, Error> {
    let stake = load(e, key)?;
    if stake.staker != *staker {
        return Err(Error::NotStakeOwner);
    }
    Ok(stake)
}

pub fn cancel(e: &Env, staker: &Address, key: u64) -> Result<i128, Error> {
    staker.require_auth();
    let cfg = config::load_active(e)?;

    let stake = load_owned(e, staker, key)?;
    if stake.is_matured() {
        return Err(Error::AlreadyMatured);
    }

    let kept_pct = 100 - cfg.early_withdraw_penalty_pct;
    let payout = math::add(
        math::percent(stake.amount, kept_pct)?,
        math::interest(&cfg, stake.amount, stake.elapsed_days, stake.term_days)?,
    )?;
    if payout <= 0 {
        return Err(Error::NothingToWithdraw);
    }

    delete_and_unindex(e, &stake);
    transfers::pay(e, &cfg.stake_token, staker, payout, transfers::MEMO_EARLY_EXIT);

    events::emit_stake_cancelled(e, staker, key, payout);
    Ok(payout)
}

pub fn withdraw(e: &Env, staker: &Address, key: u64) -> Result<i128, Error> {
    staker.require_auth();
    let cfg = config::load_active(e)?;

    let stake = load_owned(e, staker, key)?;
    if !stake.is_matured() {
        return Err(Error::NotMatured);
    }

    let payout = math::add(
        stake.amount,
        math::interest(&cfg, stake.amount, stake.elapsed_days, stake.term_days)?,
    )?;
    if payout <= 0 {
        return Err(Error::NothingToWithdraw);
    }

    delete_and_unindex(e, &stake);
    transfers::pay(e, &cfg.stake_token, staker, payout, transfers::MEMO_MATURED);

    events::emit_stake_withdrawn(e, staker, key, payout);
    Ok(payout)
}

// ─── Queries ───────────────────────────────────────────────────────────────

pub fn keys(e: &Env) -> Vec<u64> {
    storage::index(e, &DataKey::StakeKeys)
}

/// Every live stake, in commit order.
pub fn all(e: &Env) -> Vec<Stake> {
    let mut out = Vec::new(e);
    for key in keys(e).iter() {
        if let Ok(stake) = load(e, key) {
            out.push_back(stake);
        }
    }
    out
}

pub fn of(e: &Env, staker: &Address) -> Vec<Stake> {
    let owned: Vec<u64> = storage::index(e, &DataKey::StakesOf(staker.clone()));
    let mut out = Vec::new(e);
    for key in owned.iter() {
        if let Ok(stake) = load(e, key) {
            out.push_back(stake);
        }
    }
    out
}

/// Principal of stakes already touched by at least one dividend epoch.
pub fn total_active(stakes: &Vec<Stake>) -> Result<i128, Error> {
    let mut total = 0_i128;
    for stake in stakes.iter() {
        if stake.is_active() {
            total = math::add(total, stake.amount)?;
        }
    }
    Ok(total)
}

pub fn clear(e: &Env) -> u32 {
    let stakes = all(e);
    for stake in stakes.iter() {
        storage::remove(e, &DataKey::Stake(stake.key));
        storage::remove(e, &DataKey::StakesOf(stake.staker.clone()));
    }
    storage::remove(e, &DataKey::StakeKeys);
    stakes.len()
}
