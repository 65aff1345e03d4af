#![cfg(test)]

use crate::test_helpers::*;
use crate::Error;
use soroban_sdk::Env;

// ═══════════════════════════════════════════════════════════════════
// 1. Pending deposits
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_deposits_accumulate() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let contract_before = ctx.stake_balance(&ctx.contract_id);

    let mut expected = 0;
    for amount in [100_i128, 250, 7, 1_000] {
        expected += amount;
        let total = ctx
            .client
            .deposit(&staker, &ctx.stake_token, &amount, &ctx.memo("stake"));
        assert_eq!(total, expected);
    }

    assert_eq!(ctx.client.get_pending(&staker), 1_357);
    assert_eq!(ctx.stake_balance(&staker), USER_MINT - 1_357);
    assert_eq!(ctx.stake_balance(&ctx.contract_id), contract_before + 1_357);
}

#[test]
fn test_deposit_ignore_memo_is_noop() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();

    ctx.client
        .deposit(&staker, &ctx.stake_token, &100, &ctx.memo("IGNORE_THIS"));

    assert_eq!(ctx.client.get_pending(&staker), 0);
    assert_eq!(ctx.stake_balance(&staker), USER_MINT);
}

#[test]
fn test_deposit_rejections() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let stranger = ctx.user();
    let memo = ctx.memo("stake");

    assert_eq!(
        ctx.client.try_deposit(&staker, &ctx.bid_token, &100, &memo),
        Err(Ok(Error::WrongAsset))
    );
    assert_eq!(
        ctx.client.try_deposit(&stranger, &ctx.stake_token, &100, &memo),
        Err(Ok(Error::NotRegistered))
    );
    assert_eq!(
        ctx.client.try_deposit(&staker, &ctx.stake_token, &0, &memo),
        Err(Ok(Error::NonPositiveAmount))
    );
}

#[test]
fn test_reduce_pending_partial_and_full() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    ctx.client
        .deposit(&staker, &ctx.stake_token, &1_000, &ctx.memo("stake"));

    assert_eq!(ctx.client.reduce_pending(&staker, &400), 600);
    assert_eq!(ctx.stake_balance(&staker), USER_MINT - 600);

    assert_eq!(ctx.client.reduce_pending(&staker, &600), 0);
    assert_eq!(ctx.client.get_pending(&staker), 0);
    assert_eq!(ctx.stake_balance(&staker), USER_MINT);

    assert_eq!(
        ctx.client.try_reduce_pending(&staker, &1),
        Err(Ok(Error::NoPendingStake))
    );
}

#[test]
fn test_reduce_more_than_pending_fails() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    ctx.client
        .deposit(&staker, &ctx.stake_token, &100, &ctx.memo("stake"));

    assert_eq!(
        ctx.client.try_reduce_pending(&staker, &101),
        Err(Ok(Error::InsufficientPending))
    );
    assert_eq!(
        ctx.client.try_reduce_pending(&staker, &0),
        Err(Ok(Error::NonPositiveAmount))
    );
    assert_eq!(ctx.client.get_pending(&staker), 100);
}

#[test]
fn test_reduce_without_holding_reports_missing_pending() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();

    for amount in [0_i128, -3, 10] {
        assert_eq!(
            ctx.client.try_reduce_pending(&staker, &amount),
            Err(Ok(Error::NoPendingStake))
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// 2. Committing
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_commit_moves_pending_into_stake() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    ctx.client
        .deposit(&staker, &ctx.stake_token, &700, &ctx.memo("stake"));
    ctx.client
        .deposit(&staker, &ctx.stake_token, &300, &ctx.memo("stake"));

    let stake = ctx.client.commit_stake(&staker, &30);

    assert_eq!(stake.amount, 1_000);
    assert_eq!(stake.term_days, 30);
    assert_eq!(stake.elapsed_days, 0);
    assert_eq!(stake.staker, staker);
    assert_eq!(ctx.client.get_pending(&staker), 0);
    assert_eq!(ctx.client.get_stake(&stake.key), stake);
    assert_eq!(ctx.client.get_stakes_of(&staker).len(), 1);
}

#[test]
fn test_commit_term_bounds() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    ctx.client
        .deposit(&staker, &ctx.stake_token, &100, &ctx.memo("stake"));
    let cfg = ctx.client.get_config();

    assert_eq!(
        ctx.client.try_commit_stake(&staker, &(cfg.min_stake_days - 1)),
        Err(Ok(Error::TermTooShort))
    );
    // The upper bound is exclusive.
    assert_eq!(
        ctx.client.try_commit_stake(&staker, &cfg.max_stake_days),
        Err(Ok(Error::TermTooLong))
    );
    let stake = ctx
        .client
        .commit_stake(&staker, &(cfg.max_stake_days - 1));
    assert_eq!(stake.term_days, cfg.max_stake_days - 1);
}

#[test]
fn test_commit_without_pending_fails() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    assert_eq!(
        ctx.client.try_commit_stake(&staker, &10),
        Err(Ok(Error::NoPendingStake))
    );
}

#[test]
fn test_multiple_stakes_per_staker() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();

    let first = ctx.stake(&staker, 100, 10);
    let second = ctx.stake(&staker, 200, 20);

    assert_ne!(first, second);
    let owned = ctx.client.get_stakes_of(&staker);
    assert_eq!(owned.len(), 2);
    assert_eq!(owned.get(0).unwrap().amount, 100);
    assert_eq!(owned.get(1).unwrap().amount, 200);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Cancel before maturity
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_cancel_same_epoch_pays_principal_less_penalty() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let key = ctx.stake(&staker, 1_000, 10);

    let payout = ctx.client.cancel_stake(&staker, &key);

    // 80% penalty, no interest at elapsed 0.
    assert_eq!(payout, 200);
    assert_eq!(ctx.stake_balance(&staker), USER_MINT - 1_000 + 200);
    assert_eq!(ctx.client.try_get_stake(&key), Err(Ok(Error::StakeNotFound)));
    assert!(ctx.client.get_stakes_of(&staker).is_empty());
    assert!(ctx.client.get_stake_keys().is_empty());
}

#[test]
fn test_cancel_mid_term_adds_accrued_interest() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let key = ctx.stake(&staker, 365_000, 30);
    ctx.epochs(10);

    let interest = ctx.client.calculate_interest(&365_000, &10, &30);
    assert_eq!(interest, 600);
    assert_eq!(ctx.client.cancel_stake(&staker, &key), 73_000 + 600);
}

#[test]
fn test_cancel_at_exact_term_is_still_early() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let key = ctx.stake(&staker, 1_000, 3);
    ctx.epochs(3);

    assert_eq!(ctx.client.get_stake(&key).elapsed_days, 3);
    assert_eq!(
        ctx.client.try_withdraw_stake(&staker, &key),
        Err(Ok(Error::NotMatured))
    );
    ctx.client.cancel_stake(&staker, &key);
}

#[test]
fn test_cancel_after_maturity_fails() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let key = ctx.stake(&staker, 1_000, 3);
    ctx.epochs(4);

    assert_eq!(
        ctx.client.try_cancel_stake(&staker, &key),
        Err(Ok(Error::AlreadyMatured))
    );
}

#[test]
fn test_cancel_with_full_penalty_and_no_interest_fails() {
    let e = Env::default();
    let ctx = setup(&e);
    let mut cfg = ctx.client.get_config();
    cfg.early_withdraw_penalty_pct = 100;
    ctx.client.set_config(&ctx.admin, &cfg);

    let staker = ctx.registered_user();
    let key = ctx.stake(&staker, 1_000, 10);

    assert_eq!(
        ctx.client.try_cancel_stake(&staker, &key),
        Err(Ok(Error::NothingToWithdraw))
    );
    // Nothing changed: the record is still there.
    assert_eq!(ctx.client.get_stake(&key).amount, 1_000);
}

#[test]
fn test_cancel_someone_elses_stake_fails() {
    let e = Env::default();
    let ctx = setup(&e);
    let owner = ctx.registered_user();
    let other = ctx.registered_user();
    let key = ctx.stake(&owner, 1_000, 10);

    assert_eq!(
        ctx.client.try_cancel_stake(&other, &key),
        Err(Ok(Error::NotStakeOwner))
    );
    assert_eq!(
        ctx.client.try_withdraw_stake(&other, &key),
        Err(Ok(Error::NotStakeOwner))
    );
    assert_eq!(
        ctx.client.try_cancel_stake(&owner, &(key + 1_000)),
        Err(Ok(Error::StakeNotFound))
    );
}

// ═══════════════════════════════════════════════════════════════════
// 4. Withdraw after maturity
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_deposit_commit_mature_withdraw_round_trip() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let term = 10_u32;
    let key = ctx.stake(&staker, 1_000, term);

    ctx.epochs(term + 1);

    let expected = 1_000 + ctx.client.calculate_interest(&1_000, &(term + 1), &term);
    assert_eq!(expected, 1_001);
    assert_eq!(ctx.client.withdraw_stake(&staker, &key), expected);
    assert_eq!(ctx.stake_balance(&staker), USER_MINT - 1_000 + expected);
    assert_eq!(ctx.client.try_get_stake(&key), Err(Ok(Error::StakeNotFound)));
    assert!(ctx.client.get_stake_keys().is_empty());
}

#[test]
fn test_interest_stops_accruing_after_term() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let key = ctx.stake(&staker, 365_000, 10);

    ctx.epochs(40);

    // Capped at 10 days: 500 linear + 2 doubling intervals of 50.
    assert_eq!(ctx.client.withdraw_stake(&staker, &key), 365_000 + 600);
}

#[test]
fn test_withdraw_twice_fails() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let key = ctx.stake(&staker, 1_000, 1);
    ctx.epochs(2);

    ctx.client.withdraw_stake(&staker, &key);
    assert_eq!(
        ctx.client.try_withdraw_stake(&staker, &key),
        Err(Ok(Error::StakeNotFound))
    );
}

#[test]
fn test_stake_exits_blocked_while_frozen() {
    let e = Env::default();
    let ctx = setup(&e);
    let staker = ctx.registered_user();
    let key = ctx.stake(&staker, 1_000, 1);
    ctx.epochs(2);
    ctx.client.set_freeze_level(&ctx.admin, &1);

    assert_eq!(
        ctx.client.try_withdraw_stake(&staker, &key),
        Err(Ok(Error::ContractFrozen))
    );
    assert_eq!(
        ctx.client.try_commit_stake(&staker, &5),
        Err(Ok(Error::ContractFrozen))
    );
}

#[test]
fn test_clear_stakes_and_pending() {
    let e = Env::default();
    let ctx = setup(&e);
    let a = ctx.registered_user();
    let b = ctx.registered_user();
    ctx.stake(&a, 100, 5);
    ctx.stake(&b, 100, 5);
    ctx.client
        .deposit(&a, &ctx.stake_token, &50, &ctx.memo("stake"));

    assert_eq!(ctx.client.clear_stakes(&ctx.admin), 2);
    assert!(ctx.client.get_stake_keys().is_empty());
    assert!(ctx.client.get_stakes_of(&a).is_empty());

    assert_eq!(ctx.client.clear_pending(&ctx.admin), 1);
    assert_eq!(ctx.client.get_pending(&a), 0);
}
