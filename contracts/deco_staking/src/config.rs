//! Configuration defaults, validation and the admin/maintenance gates.

use crate::errors::Error;
use crate::events;
use crate::types::{Config, DataKey};
use soroban_sdk::{Address, Env};

pub const DEFAULT_APY: u32 = 5;
pub const DEFAULT_MAX_BID_AMOUNT: i128 = 1_000_000;
pub const DEFAULT_MIN_STAKE_DAYS: u32 = 1;
pub const DEFAULT_MAX_STAKE_DAYS: u32 = 100;
pub const DEFAULT_MAX_UNWITHDRAWN_DAYS: u32 = 100;
pub const DEFAULT_SHARE_TO_DISTRIBUTE_PCT: u32 = 95;
pub const DEFAULT_DOUBLE_REWARD_DAYS: u32 = 5;
pub const DEFAULT_EARLY_WITHDRAW_PENALTY_PCT: u32 = 80;
pub const DEFAULT_REFERRAL_PCT: u32 = 10;
pub const DEFAULT_REFERRED_BONUS_PCT: u32 = 5;

pub fn default_config(bid_token: Address, stake_token: Address) -> Config {
    Config {
        bid_token,
        stake_token,
        apy: DEFAULT_APY,
        max_bid_amount: DEFAULT_MAX_BID_AMOUNT,
        min_stake_days: DEFAULT_MIN_STAKE_DAYS,
        max_stake_days: DEFAULT_MAX_STAKE_DAYS,
        max_unwithdrawn_days: DEFAULT_MAX_UNWITHDRAWN_DAYS,
        share_to_distribute_pct: DEFAULT_SHARE_TO_DISTRIBUTE_PCT,
        double_reward_days: DEFAULT_DOUBLE_REWARD_DAYS,
        early_withdraw_penalty_pct: DEFAULT_EARLY_WITHDRAW_PENALTY_PCT,
        referral_pct: DEFAULT_REFERRAL_PCT,
        referred_bonus_pct: DEFAULT_REFERRED_BONUS_PCT,
    }
}

/// Reject parameter sets the ledger arithmetic cannot honor.
pub fn validate(cfg: &Config) -> Result<(), Error> {
    let percentages = [
        cfg.share_to_distribute_pct,
        cfg.early_withdraw_penalty_pct,
        cfg.referral_pct,
        cfg.referred_bonus_pct,
    ];
    if percentages.iter().any(|pct| *pct > 100) {
        return Err(Error::InvalidConfig);
    }
    if cfg.max_bid_amount <= 0 {
        return Err(Error::InvalidConfig);
    }
    if cfg.min_stake_days == 0 || cfg.min_stake_days >= cfg.max_stake_days {
        return Err(Error::InvalidConfig);
    }
    // Divisor of the interest bonus.
    if cfg.double_reward_days == 0 {
        return Err(Error::InvalidConfig);
    }
    Ok(())
}

// ─── Stored state ──────────────────────────────────────────────────────────

pub fn initialize(
    e: &Env,
    admin: &Address,
    bid_token: Address,
    stake_token: Address,
) -> Result<(), Error> {
    if e.storage().instance().has(&DataKey::Admin) {
        return Err(Error::AlreadyInitialized);
    }
    admin.require_auth();

    let cfg = default_config(bid_token, stake_token);
    e.storage().instance().set(&DataKey::Admin, admin);
    e.storage().instance().set(&DataKey::Config, &cfg);
    e.storage().instance().set(&DataKey::FreezeLevel, &0_u32);

    events::emit_initialized(e, admin, &cfg);
    Ok(())
}

pub fn get_admin(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn load(e: &Env) -> Result<Config, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn freeze_level(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::FreezeLevel)
        .unwrap_or(0)
}

/// Caller must be the stored admin and must have signed.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if get_admin(e)? != *caller {
        return Err(Error::NotAdmin);
    }
    Ok(())
}

pub fn require_not_frozen(e: &Env) -> Result<(), Error> {
    if freeze_level(e) != 0 {
        return Err(Error::ContractFrozen);
    }
    Ok(())
}

/// Config for an operation that mutates the ledger: initialized and not frozen.
pub fn load_active(e: &Env) -> Result<Config, Error> {
    let cfg = load(e)?;
    require_not_frozen(e)?;
    Ok(cfg)
}

// ─── Admin updates ─────────────────────────────────────────────────────────

pub fn set_config(e: &Env, admin: &Address, cfg: Config) -> Result<(), Error> {
    require_admin(e, admin)?;
    validate(&cfg)?;
    e.storage().instance().set(&DataKey::Config, &cfg);
    events::emit_config_updated(e, &cfg);
    Ok(())
}

pub fn set_freeze_level(e: &Env, admin: &Address, level: u32) -> Result<(), Error> {
    require_admin(e, admin)?;
    e.storage().instance().set(&DataKey::FreezeLevel, &level);
    events::emit_freeze_set(e, level);
    Ok(())
}

pub fn transfer_admin(e: &Env, admin: &Address, new_admin: &Address) -> Result<(), Error> {
    require_admin(e, admin)?;
    e.storage().instance().set(&DataKey::Admin, new_admin);
    events::emit_admin_transferred(e, admin, new_admin);
    Ok(())
}
