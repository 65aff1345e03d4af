//! Deposited stake tokens waiting to be committed to a term.

use crate::config;
use crate::errors::Error;
use crate::events;
use crate::math;
use crate::registration;
use crate::stakes;
use crate::storage;
use crate::transfers;
use crate::types::{DataKey, Stake};
use soroban_sdk::{Address, Env, String, Vec};

/// Memo that makes a deposit a no-op.
pub const IGNORE_MEMO: &str = "IGNORE_THIS";

pub fn deposit(
    e: &Env,
    staker: &Address,
    token: &Address,
    amount: i128,
    memo: &String,
) -> Result<i128, Error> {
    if *staker == e.current_contract_address()
        || *memo == String::from_str(e, IGNORE_MEMO)
    {
        return Ok(pending_of(e, staker));
    }
    staker.require_auth();

    let cfg = config::load_active(e)?;
    if *token != cfg.stake_token {
        return Err(Error::WrongAsset);
    }
    registration::require_registered(e, staker)?;
    if amount <= 0 {
        return Err(Error::NonPositiveAmount);
    }

    let held = pending_of(e, staker);
    let total = math::add(held, amount)?;

    transfers::pull(e, token, staker, amount);

    if held == 0 {
        storage::index_push(e, &DataKey::PendingHolders, staker.clone());
    }
    storage::save(e, &DataKey::Pending(staker.clone()), &total);

    events::emit_deposited(e, staker, amount, total);
    Ok(total)
}

pub fn reduce(e: &Env, staker: &Address, amount: i128) -> Result<i128, Error> {
    staker.require_auth();
    let cfg = config::load_active(e)?;

    let held: i128 = storage::load(e, &DataKey::Pending(staker.clone()))
        .ok_or(Error::NoPendingStake)?;
    if amount <= 0 {
        return Err(Error::NonPositiveAmount);
    }
    if amount > held {
        return Err(Error::InsufficientPending);
    }

    let remaining = math::sub(held, amount)?;
    if remaining == 0 {
        remove_holding(e, staker);
    } else {
        storage::save(e, &DataKey::Pending(staker.clone()), &remaining);
    }

    transfers::pay(
        e,
        &cfg.stake_token,
        staker,
        amount,
        transfers::MEMO_PENDING_REFUND,
    );

    events::emit_pending_reduced(e, staker, amount, remaining);
    Ok(remaining)
}

/// Turn the whole pending amount into a stake of `term_days`.
pub fn commit(e: &Env, staker: &Address, term_days: u32) -> Result<Stake, Error> {
    staker.require_auth();
    let cfg = config::load_active(e)?;

    if term_days < cfg.min_stake_days {
        return Err(Error::TermTooShort);
    }
    if term_days >= cfg.max_stake_days {
        return Err(Error::TermTooLong);
    }
    let amount: i128 = storage::load(e, &DataKey::Pending(staker.clone()))
        .ok_or(Error::NoPendingStake)?;

    let stake = stakes::open(e, staker, amount, term_days)?;
    remove_holding(e, staker);

    events::emit_stake_committed(e, staker, stake.key, amount, term_days);
    Ok(stake)
}

pub fn pending_of(e: &Env, staker: &Address) -> i128 {
    storage::load(e, &DataKey::Pending(staker.clone())).unwrap_or(0)
}

fn remove_holding(e: &Env, staker: &Address) {
    storage::remove(e, &DataKey::Pending(staker.clone()));
    storage::index_remove(e, &DataKey::PendingHolders, staker);
}

pub fn clear(e: &Env) -> u32 {
    let holders: Vec<Address> = storage::index(e, &DataKey::PendingHolders);
    for holder in holders.iter() {
        storage::remove(e, &DataKey::Pending(holder));
    }
    storage::remove(e, &DataKey::PendingHolders);
    holders.len()
}
