use crate::types::{Config, DividendReport, RewardReport};
use soroban_sdk::{Address, Env, Symbol};

/// Emitted once by `initialize`.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - The admin
/// * `Address` - The bid token
/// * `Address` - The stake token
pub fn emit_initialized(e: &Env, admin: &Address, cfg: &Config) {
    let topics = (Symbol::new(e, "initialized"),);
    let data = (admin.clone(), cfg.bid_token.clone(), cfg.stake_token.clone());
    e.events().publish(topics, data);
}

pub fn emit_config_updated(e: &Env, cfg: &Config) {
    e.events()
        .publish((Symbol::new(e, "config_updated"),), cfg.clone());
}

pub fn emit_freeze_set(e: &Env, level: u32) {
    e.events().publish((Symbol::new(e, "freeze_set"),), level);
}

pub fn emit_admin_transferred(e: &Env, old_admin: &Address, new_admin: &Address) {
    e.events().publish(
        (Symbol::new(e, "admin_transferred"), old_admin.clone()),
        new_admin.clone(),
    );
}

/// Emitted when an identity registers.
///
/// # Topics
/// * `Symbol` - "registered"
/// * `Address` - The registrant
///
/// # Data
/// * `u64` - The registration key
pub fn emit_registered(e: &Env, identity: &Address, key: u64) {
    let topics = (Symbol::new(e, "registered"), identity.clone());
    e.events().publish(topics, key);
}

pub fn emit_referral_linked(e: &Env, referred: &Address, referrer: &Address) {
    let topics = (Symbol::new(e, "referral_linked"), referred.clone());
    e.events().publish(topics, referrer.clone());
}

/// Emitted when stake tokens enter the pending area.
///
/// # Data
/// * `i128` - The deposited amount
/// * `i128` - The new pending total
pub fn emit_deposited(e: &Env, staker: &Address, amount: i128, pending: i128) {
    let topics = (Symbol::new(e, "deposited"), staker.clone());
    e.events().publish(topics, (amount, pending));
}

pub fn emit_pending_reduced(e: &Env, staker: &Address, amount: i128, remaining: i128) {
    let topics = (Symbol::new(e, "pending_reduced"), staker.clone());
    e.events().publish(topics, (amount, remaining));
}

/// Emitted when pending tokens become a stake.
///
/// # Data
/// * `u64` - The stake key
/// * `i128` - The principal
/// * `u32` - The term in days
pub fn emit_stake_committed(e: &Env, staker: &Address, key: u64, amount: i128, term_days: u32) {
    let topics = (Symbol::new(e, "stake_committed"), staker.clone());
    e.events().publish(topics, (key, amount, term_days));
}

/// Emitted on every bid.
///
/// # Data
/// * `i128` - The amount of this bid
/// * `i128` - The bidder's cumulative total
pub fn emit_bid_placed(e: &Env, bidder: &Address, amount: i128, total: i128) {
    let topics = (Symbol::new(e, "bid_placed"), bidder.clone());
    e.events().publish(topics, (amount, total));
}

pub fn emit_stake_pruned(e: &Env, staker: &Address, key: u64) {
    let topics = (Symbol::new(e, "stake_pruned"), staker.clone());
    e.events().publish(topics, key);
}

pub fn emit_stake_cancelled(e: &Env, staker: &Address, key: u64, payout: i128) {
    let topics = (Symbol::new(e, "stake_cancelled"), staker.clone());
    e.events().publish(topics, (key, payout));
}

pub fn emit_stake_withdrawn(e: &Env, staker: &Address, key: u64, payout: i128) {
    let topics = (Symbol::new(e, "stake_withdrawn"), staker.clone());
    e.events().publish(topics, (key, payout));
}

/// Emitted for every token payment leaving the contract.
///
/// # Topics
/// * `Symbol` - "payout"
/// * `Address` - The recipient
///
/// # Data
/// * `Address` - The token contract
/// * `i128` - The amount
/// * `Symbol` - The memo
pub fn emit_payout(e: &Env, to: &Address, token: &Address, amount: i128, memo: &Symbol) {
    let topics = (Symbol::new(e, "payout"), to.clone());
    e.events()
        .publish(topics, (token.clone(), amount, memo.clone()));
}

pub fn emit_dividend_epoch(e: &Env, report: &DividendReport) {
    e.events()
        .publish((Symbol::new(e, "dividend_epoch"),), report.clone());
}

pub fn emit_reward_epoch(e: &Env, total_to_mint: i128, report: &RewardReport) {
    e.events().publish(
        (Symbol::new(e, "reward_epoch"),),
        (total_to_mint, report.clone()),
    );
}

/// Emitted by the bulk clear operations.
///
/// # Data
/// * `Symbol` - The collection name
/// * `u32` - Records removed
pub fn emit_collection_cleared(e: &Env, collection: &str, removed: u32) {
    e.events().publish(
        (Symbol::new(e, "collection_cleared"),),
        (Symbol::new(e, collection), removed),
    );
}
