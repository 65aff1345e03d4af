//! Distribution engine: dividend epochs over the stake ledger and reward
//! epochs over the bid ledger.
//!
//! Both sweeps read a snapshot of the live records first, so every record is
//! visited exactly once even when the pass deletes some of them.
//!
//! The two sweeps treat a zero amount differently: a dividend that rounds to
//! zero is skipped, while a bidder share that rounds to zero aborts the whole
//! reward distribution with `Error::ZeroShare`.

use crate::bids;
use crate::errors::Error;
use crate::events;
use crate::math;
use crate::stakes;
use crate::storage;
use crate::transfers;
use crate::types::{Bid, Config, DataKey, DividendReport, RewardReport, RewardShare, Stake};
use soroban_sdk::{Env, Vec};

// ─── Dividends ─────────────────────────────────────────────────────────────

/// Inputs shared by every stake in one dividend epoch.
struct DividendPool {
    /// Bid-token amount split across active stakes.
    pool: i128,
    total_active_staked: i128,
}

impl DividendPool {
    fn compute(cfg: &Config, stakes: &Vec<Stake>, bids: &Vec<Bid>) -> Result<Self, Error> {
        Ok(Self {
            pool: math::percent(bids::total(bids)?, cfg.share_to_distribute_pct)?,
            total_active_staked: stakes::total_active(stakes)?,
        })
    }

    /// Dividend owed to `stake` this epoch, from its pre-increment counter.
    fn dividend_for(&self, stake: &Stake) -> Result<i128, Error> {
        let in_term = stake.elapsed_days > 0 && stake.elapsed_days <= stake.term_days;
        if !in_term || self.total_active_staked <= 0 {
            return Ok(0);
        }
        math::pro_rata(stake.amount, self.pool, self.total_active_staked)
    }
}

/// Unwithdrawn for longer than the grace period after maturity.
fn is_abandoned(cfg: &Config, stake: &Stake) -> bool {
    stake.elapsed_days as u64 > stake.term_days as u64 + cfg.max_unwithdrawn_days as u64
}

/// Pay one stake's dividend, then prune it or advance its counter.
///
/// Returns the dividend paid and whether the record survived.
fn settle(
    e: &Env,
    cfg: &Config,
    pool: &DividendPool,
    mut stake: Stake,
) -> Result<(i128, bool), Error> {
    let dividend = pool.dividend_for(&stake)?;
    let abandoned = is_abandoned(cfg, &stake);

    if abandoned {
        stakes::delete(e, &stake);
        events::emit_stake_pruned(e, &stake.staker, stake.key);
    } else {
        stake.elapsed_days = stake
            .elapsed_days
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;
        stakes::save(e, &stake);
    }

    if dividend > 0 {
        transfers::pay(
            e,
            &cfg.bid_token,
            &stake.staker,
            dividend,
            transfers::MEMO_DIVIDEND,
        );
    }
    Ok((dividend, !abandoned))
}

/// One dividend epoch over the whole stake ledger.
pub fn dividend_sweep(e: &Env, cfg: &Config) -> Result<DividendReport, Error> {
    let snapshot = stakes::all(e);
    let pool = DividendPool::compute(cfg, &snapshot, &bids::all(e))?;

    let mut report = DividendReport::default();
    let mut survivors: Vec<u64> = Vec::new(e);
    for stake in snapshot.iter() {
        let key = stake.key;
        let (dividend, kept) = settle(e, cfg, &pool, stake)?;
        if dividend > 0 {
            report.paid_total = math::add(report.paid_total, dividend)?;
            report.payments += 1;
        }
        if kept {
            survivors.push_back(key);
        } else {
            report.pruned += 1;
        }
    }
    storage::save_index(e, &DataKey::StakeKeys, &survivors);

    events::emit_dividend_epoch(e, &report);
    Ok(report)
}

/// Settle a single stake against the current epoch totals.
pub fn dividend_for_key(e: &Env, cfg: &Config, key: u64) -> Result<i128, Error> {
    let stake = stakes::load(e, key)?;
    let pool = DividendPool::compute(cfg, &stakes::all(e), &bids::all(e))?;

    let (dividend, kept) = settle(e, cfg, &pool, stake)?;
    if !kept {
        storage::index_remove(e, &DataKey::StakeKeys, &key);
    }
    Ok(dividend)
}

// ─── Rewards ───────────────────────────────────────────────────────────────

fn share_for(
    cfg: &Config,
    bid: &Bid,
    total_to_mint: i128,
    total_bid: i128,
) -> Result<RewardShare, Error> {
    let base = math::pro_rata(bid.amount, total_to_mint, total_bid)?;
    if base == 0 {
        return Err(Error::ZeroShare);
    }

    let mut payout = base;
    let mut commission = 0;
    if bid.referrer.is_some() {
        commission = math::percent(base, cfg.referral_pct)?;
        // The referred bonus only applies when the referrer earns something.
        if commission > 0 {
            payout = math::add(base, math::percent(base, cfg.referred_bonus_pct)?)?;
        }
    }

    Ok(RewardShare {
        bidder: bid.bidder.clone(),
        base,
        payout,
        referrer: bid.referrer.clone(),
        commission,
    })
}

/// Split `total_to_mint` across the bid ledger without touching state.
pub fn plan_rewards(
    e: &Env,
    cfg: &Config,
    total_to_mint: i128,
) -> Result<Vec<RewardShare>, Error> {
    if total_to_mint <= 0 {
        return Err(Error::NonPositiveAmount);
    }
    let snapshot = bids::all(e);
    let total_bid = bids::total(&snapshot)?;
    if snapshot.is_empty() || total_bid <= 0 {
        return Err(Error::NoBids);
    }

    let mut plan = Vec::new(e);
    for bid in snapshot.iter() {
        plan.push_back(share_for(cfg, &bid, total_to_mint, total_bid)?);
    }
    Ok(plan)
}

/// Reward step of the combined epoch. An empty bid ledger pays nothing.
pub fn reward_sweep_if_bids(
    e: &Env,
    cfg: &Config,
    total_to_mint: i128,
) -> Result<RewardReport, Error> {
    if total_to_mint <= 0 {
        return Err(Error::NonPositiveAmount);
    }
    if bids::bidders(e).is_empty() {
        return Ok(RewardReport::default());
    }
    reward_sweep(e, cfg, total_to_mint)
}

/// One reward epoch: pay every bidder (and referrer) and consume the ledger.
///
/// Every share is computed before the first transfer, so a zero share leaves
/// no payment behind.
pub fn reward_sweep(e: &Env, cfg: &Config, total_to_mint: i128) -> Result<RewardReport, Error> {
    let plan = plan_rewards(e, cfg, total_to_mint)?;
    bids::clear(e);

    let mut report = RewardReport::default();
    for share in plan.iter() {
        if let Some(referrer) = &share.referrer {
            if share.commission > 0 {
                transfers::pay(
                    e,
                    &cfg.stake_token,
                    referrer,
                    share.commission,
                    transfers::MEMO_REFERRAL,
                );
                report.commissions = math::add(report.commissions, share.commission)?;
            }
        }
        transfers::pay(
            e,
            &cfg.stake_token,
            &share.bidder,
            share.payout,
            transfers::MEMO_REWARD,
        );
        report.paid_total = math::add(report.paid_total, share.payout)?;
        report.bidders += 1;
    }

    events::emit_reward_epoch(e, total_to_mint, &report);
    Ok(report)
}
