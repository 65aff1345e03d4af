//! Deco Staking Contract
//!
//! Participants register once (optionally naming a referrer), bid the bid
//! token for a share of each reward epoch, and stake the stake token for a
//! fixed number of days to earn interest plus a dividend from the bid pool.
//!
//! ## Lifecycle
//!
//! - `register` → `place_bid` → `run_reward_distribution` pays every bidder
//!   its share of the minted supply (referrers take a commission, referred
//!   bidders get a bonus) and empties the bid ledger.
//! - `register` → `deposit` → `commit_stake` opens a stake. Each
//!   `run_dividend_epoch` pays in-term stakes a share of the bid pool and
//!   advances their day counter. `cancel_stake` exits early with a penalty,
//!   `withdraw_stake` exits after maturity; stakes left unwithdrawn past the
//!   grace period are pruned.
//!
//! ## Key design decisions
//!
//! - **Result errors**: every failure is an `Error` code; the host rolls back
//!   all writes and transfers of a failed call.
//! - **Checks-Effects-Interactions**: validation first, storage next, token
//!   transfers last.
//! - **Snapshot sweeps**: epochs iterate a copy of the key index.
//! - **Freeze gate**: a non-zero freeze level blocks everything but admin
//!   configuration and bulk clears.

#![no_std]

mod bids;
mod config;
mod distribution;
mod errors;
mod events;
mod math;
mod pending;
mod registration;
mod stakes;
mod storage;
mod transfers;
mod types;

pub use errors::{Error, ErrorCategory};
pub use types::{Bid, Config, DividendReport, RewardReport, RewardShare, Stake};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};


#[cfg(test)]
mod test_registration;
#[cfg(test)]
mod test_stakes;

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct DecoStaking;

#[contractimpl]
impl DecoStaking {
    // ── Administration ─────────────────────────────────────────────────────

    /// One-time initialization with the default economic parameters.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called a second time
    pub fn initialize(
        e: Env,
        admin: Address,
        bid_token: Address,
        stake_token: Address,
    ) -> Result<(), Error> {
        config::initialize(&e, &admin, bid_token, stake_token)
    }

    /// Replace the economic parameters.
    ///
    /// # Errors
    /// * `NotAdmin` - `admin` is not the stored admin
    /// * `InvalidConfig` - a percentage above 100, a non-positive bid cap,
    ///   an empty term range or a zero doubling interval
    pub fn set_config(e: Env, admin: Address, new_config: Config) -> Result<(), Error> {
        config::set_config(&e, &admin, new_config)
    }

    /// Set the maintenance freeze level; 0 reopens the contract.
    pub fn set_freeze_level(e: Env, admin: Address, level: u32) -> Result<(), Error> {
        config::set_freeze_level(&e, &admin, level)
    }

    pub fn transfer_admin(e: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        config::transfer_admin(&e, &admin, &new_admin)
    }

    pub fn get_admin(e: Env) -> Result<Address, Error> {
        config::get_admin(&e)
    }

    pub fn get_config(e: Env) -> Result<Config, Error> {
        config::load(&e)
    }

    pub fn get_freeze_level(e: Env) -> u32 {
        config::freeze_level(&e)
    }

    // ── Registration ───────────────────────────────────────────────────────

    /// Register `identity`, linking it to the registrant of `referral_key`
    /// when that key is non-zero. Returns the new registration key.
    ///
    /// # Errors
    /// * `AlreadyRegistered` - `identity` has a registration
    /// * `InvalidReferral` - non-zero key with no registration behind it
    pub fn register(e: Env, identity: Address, referral_key: u64) -> Result<u64, Error> {
        registration::register(&e, &identity, referral_key)
    }

    pub fn is_registered(e: Env, identity: Address) -> bool {
        registration::is_registered(&e, &identity)
    }

    pub fn get_registration_key(e: Env, identity: Address) -> Option<u64> {
        registration::registration_key(&e, &identity)
    }

    pub fn get_registrant(e: Env, key: u64) -> Option<Address> {
        registration::registrant(&e, key)
    }

    pub fn get_referrer(e: Env, identity: Address) -> Option<Address> {
        registration::referrer_of(&e, &identity)
    }

    // ── Pending stake ──────────────────────────────────────────────────────

    /// Move `amount` of the stake token into the caller's pending holding.
    /// The caller must have approved the contract as spender.
    ///
    /// Ignored when `staker` is the contract itself or `memo` is
    /// `"IGNORE_THIS"`. Returns the pending total.
    ///
    /// # Errors
    /// * `WrongAsset` - `token` is not the stake token
    /// * `NotRegistered` - `staker` never registered
    /// * `NonPositiveAmount` - `amount <= 0`
    pub fn deposit(
        e: Env,
        staker: Address,
        token: Address,
        amount: i128,
        memo: String,
    ) -> Result<i128, Error> {
        pending::deposit(&e, &staker, &token, amount, &memo)
    }

    /// Return `amount` of the pending holding to the staker.
    /// Returns what is left pending.
    ///
    /// # Errors
    /// * `NoPendingStake` - nothing pending
    /// * `InsufficientPending` - `amount` exceeds the holding
    pub fn reduce_pending(e: Env, staker: Address, amount: i128) -> Result<i128, Error> {
        pending::reduce(&e, &staker, amount)
    }

    /// Commit the whole pending holding as a stake of `term_days`.
    ///
    /// # Errors
    /// * `TermTooShort` / `TermTooLong` - outside `[min_stake_days, max_stake_days)`
    /// * `NoPendingStake` - nothing pending
    pub fn commit_stake(e: Env, staker: Address, term_days: u32) -> Result<Stake, Error> {
        pending::commit(&e, &staker, term_days)
    }

    /// Pending holding of `staker`, 0 when none.
    pub fn get_pending(e: Env, staker: Address) -> i128 {
        pending::pending_of(&e, &staker)
    }

    // ── Bids ───────────────────────────────────────────────────────────────

    /// Add a bid of `amount` bid tokens to the caller's cumulative bid.
    ///
    /// Ignored (returns `None`) when `bidder` is the contract itself or `memo`
    /// is `"IGNORE_THIS"` or `"Jungle Faucet"`.
    ///
    /// # Errors
    /// * `WrongAsset` - `token` is not the bid token
    /// * `NonPositiveAmount` - `amount <= 0`
    /// * `OverMaxBid` - `amount` above `max_bid_amount`
    /// * `NotRegistered` - `bidder` never registered
    pub fn place_bid(
        e: Env,
        bidder: Address,
        token: Address,
        amount: i128,
        memo: String,
    ) -> Result<Option<Bid>, Error> {
        bids::place(&e, &bidder, &token, amount, &memo)
    }

    pub fn get_bid(e: Env, bidder: Address) -> Option<Bid> {
        bids::load(&e, &bidder)
    }

    pub fn get_bidders(e: Env) -> Vec<Address> {
        bids::bidders(&e)
    }

    pub fn total_bid(e: Env) -> Result<i128, Error> {
        bids::total(&bids::all(&e))
    }

    // ── Stakes ─────────────────────────────────────────────────────────────

    /// Exit a stake before maturity, forfeiting the early-withdraw penalty.
    /// Returns the amount paid.
    ///
    /// # Errors
    /// * `StakeNotFound` / `NotStakeOwner`
    /// * `AlreadyMatured` - use `withdraw_stake`
    /// * `NothingToWithdraw` - payout rounds to zero
    pub fn cancel_stake(e: Env, staker: Address, key: u64) -> Result<i128, Error> {
        stakes::cancel(&e, &staker, key)
    }

    /// Exit a matured stake with principal plus interest.
    /// Returns the amount paid.
    ///
    /// # Errors
    /// * `StakeNotFound` / `NotStakeOwner`
    /// * `NotMatured` - still within the term
    /// * `NothingToWithdraw` - payout rounds to zero
    pub fn withdraw_stake(e: Env, staker: Address, key: u64) -> Result<i128, Error> {
        stakes::withdraw(&e, &staker, key)
    }

    pub fn get_stake(e: Env, key: u64) -> Result<Stake, Error> {
        stakes::load(&e, key)
    }

    pub fn get_stakes_of(e: Env, staker: Address) -> Vec<Stake> {
        stakes::of(&e, &staker)
    }

    pub fn get_stake_keys(e: Env) -> Vec<u64> {
        stakes::keys(&e)
    }

    /// Principal counted by the next dividend epoch.
    pub fn total_active_staked(e: Env) -> Result<i128, Error> {
        stakes::total_active(&stakes::all(&e))
    }

    /// Interest on `amount` after `elapsed_days` of a `term_days` stake under
    /// the current config.
    pub fn calculate_interest(
        e: Env,
        amount: i128,
        elapsed_days: u32,
        term_days: u32,
    ) -> Result<i128, Error> {
        math::interest(&config::load(&e)?, amount, elapsed_days, term_days)
    }

    // ── Distribution ───────────────────────────────────────────────────────

    /// Pay every in-term stake its share of the bid pool, advance every
    /// stake one day and prune stakes abandoned past the grace period.
    pub fn run_dividend_epoch(e: Env, admin: Address) -> Result<DividendReport, Error> {
        config::require_admin(&e, &admin)?;
        let cfg = config::load_active(&e)?;
        distribution::dividend_sweep(&e, &cfg)
    }

    /// Dividend step for a single stake. Returns the dividend paid.
    ///
    /// # Errors
    /// * `StakeNotFound`
    pub fn pay_dividend(e: Env, admin: Address, key: u64) -> Result<i128, Error> {
        config::require_admin(&e, &admin)?;
        let cfg = config::load_active(&e)?;
        distribution::dividend_for_key(&e, &cfg, key)
    }

    /// Split `total_to_mint` stake tokens from the contract balance across
    /// the bid ledger, pay referral commissions and bonuses, and empty the
    /// ledger.
    ///
    /// # Errors
    /// * `NonPositiveAmount` - `total_to_mint <= 0`
    /// * `NoBids` - the bid ledger is empty
    /// * `ZeroShare` - some bidder's share rounds to zero; nothing is paid
    pub fn run_reward_distribution(
        e: Env,
        admin: Address,
        total_to_mint: i128,
    ) -> Result<RewardReport, Error> {
        config::require_admin(&e, &admin)?;
        let cfg = config::load_active(&e)?;
        distribution::reward_sweep(&e, &cfg, total_to_mint)
    }

    /// Dividend epoch followed by reward distribution, as one operation.
    ///
    /// With an empty bid ledger the reward step is skipped and reports
    /// nothing paid; the dividend epoch still runs.
    pub fn distribute_and_pay_dividends(
        e: Env,
        admin: Address,
        total_to_mint: i128,
    ) -> Result<(DividendReport, RewardReport), Error> {
        config::require_admin(&e, &admin)?;
        let cfg = config::load_active(&e)?;
        let dividends = distribution::dividend_sweep(&e, &cfg)?;
        let rewards = distribution::reward_sweep_if_bids(&e, &cfg, total_to_mint)?;
        Ok((dividends, rewards))
    }

    /// The shares `run_reward_distribution(total_to_mint)` would pay now.
    pub fn preview_rewards(e: Env, total_to_mint: i128) -> Result<Vec<RewardShare>, Error> {
        distribution::plan_rewards(&e, &config::load(&e)?, total_to_mint)
    }

    // ── Bulk clears ────────────────────────────────────────────────────────
    //
    // Admin only, allowed while frozen. They drop records without moving
    // tokens and return how many were removed.

    pub fn clear_bids(e: Env, admin: Address) -> Result<u32, Error> {
        config::require_admin(&e, &admin)?;
        let removed = bids::clear(&e);
        events::emit_collection_cleared(&e, "bids", removed);
        Ok(removed)
    }

    pub fn clear_stakes(e: Env, admin: Address) -> Result<u32, Error> {
        config::require_admin(&e, &admin)?;
        let removed = stakes::clear(&e);
        events::emit_collection_cleared(&e, "stakes", removed);
        Ok(removed)
    }

    pub fn clear_pending(e: Env, admin: Address) -> Result<u32, Error> {
        config::require_admin(&e, &admin)?;
        let removed = pending::clear(&e);
        events::emit_collection_cleared(&e, "pending", removed);
        Ok(removed)
    }

    pub fn clear_registrations(e: Env, admin: Address) -> Result<u32, Error> {
        config::require_admin(&e, &admin)?;
        let removed = registration::clear_registrations(&e);
        events::emit_collection_cleared(&e, "registrations", removed);
        Ok(removed)
    }

    pub fn clear_referrals(e: Env, admin: Address) -> Result<u32, Error> {
        config::require_admin(&e, &admin)?;
        let removed = registration::clear_referrals(&e);
        events::emit_collection_cleared(&e, "referrals", removed);
        Ok(removed)
    }

    /// Every bulk clear at once. Returns the total number of records removed.
    pub fn clear_all(e: Env, admin: Address) -> Result<u32, Error> {
        config::require_admin(&e, &admin)?;
        let removed = bids::clear(&e)
            + stakes::clear(&e)
            + pending::clear(&e)
            + registration::clear_registrations(&e)
            + registration::clear_referrals(&e);
        events::emit_collection_cleared(&e, "all", removed);
        Ok(removed)
    }
}
