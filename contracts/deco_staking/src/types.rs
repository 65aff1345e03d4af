use soroban_sdk::{contracttype, Address};

// ─── Configuration ─────────────────────────────────────────────────────────

/// Economic parameters of the ledger. Replaced wholesale by `set_config`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token accepted for bids; dividends are paid in it.
    pub bid_token: Address,
    /// Token accepted for deposits; stake payouts and epoch rewards use it.
    pub stake_token: Address,
    /// Annual yield in whole percent.
    pub apy: u32,
    /// Upper bound on a single bid.
    pub max_bid_amount: i128,
    /// Shortest accepted term, inclusive.
    pub min_stake_days: u32,
    /// Longest accepted term, exclusive.
    pub max_stake_days: u32,
    /// Epochs a matured stake may sit unwithdrawn before it is pruned.
    pub max_unwithdrawn_days: u32,
    /// Percent of the bid pool paid out as dividends each epoch.
    pub share_to_distribute_pct: u32,
    /// Every completed interval of this many days adds one more interest accrual.
    pub double_reward_days: u32,
    /// Percent of principal forfeited by `cancel_stake`.
    pub early_withdraw_penalty_pct: u32,
    /// Commission paid to a referrer, in percent of the bidder's share.
    pub referral_pct: u32,
    /// Bonus credited to a referred bidder, in percent of their share.
    pub referred_bonus_pct: u32,
}

// ─── Ledger records ────────────────────────────────────────────────────────

/// Cumulative bid of one address for the current reward epoch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    /// Refreshed from the referral ledger on every bid.
    pub referrer: Option<Address>,
}

/// A fixed-term staking commitment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stake {
    pub key: u64,
    pub staker: Address,
    /// Principal, fixed at commit time.
    pub amount: i128,
    pub term_days: u32,
    /// Dividend epochs that have processed this stake.
    pub elapsed_days: u32,
}

impl Stake {
    /// Past the agreed term; withdrawable without penalty.
    pub fn is_matured(&self) -> bool {
        self.elapsed_days > self.term_days
    }

    /// Counted in the active stake total and eligible for dividends.
    pub fn is_active(&self) -> bool {
        self.elapsed_days > 0
    }
}

// ─── Sweep reports ─────────────────────────────────────────────────────────

/// Outcome of one dividend epoch.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DividendReport {
    pub paid_total: i128,
    pub payments: u32,
    pub pruned: u32,
}

/// Outcome of one reward distribution.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RewardReport {
    /// Paid to bidders, bonuses included.
    pub paid_total: i128,
    /// Paid to referrers.
    pub commissions: i128,
    pub bidders: u32,
}

/// One bidder's planned payout in a reward distribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardShare {
    pub bidder: Address,
    /// Proportional share before any referral bonus.
    pub base: i128,
    /// What the bidder receives: `base` plus the referral bonus, if any.
    pub payout: i128,
    pub referrer: Option<Address>,
    /// Paid to `referrer`; 0 when there is none or it rounds down.
    pub commission: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Economic parameters (Config).
    Config,
    /// Maintenance gate; 0 means active.
    FreezeLevel,
    /// Last issued registration key.
    RegistrationCounter,
    /// Last issued stake key.
    StakeCounter,
    /// Registration key -> registrant.
    Registration(u64),
    /// Registrant -> registration key.
    RegistrationOf(Address),
    /// Length of the registration key log.
    RegistrationCount,
    /// Registration key at a log position.
    RegistrationAt(u32),
    /// Referred identity -> referrer.
    Referral(Address),
    /// Length of the referred-identity log.
    ReferredCount,
    /// Referred identity at a log position.
    ReferredAt(u32),
    /// Pending stake-token amount per identity.
    Pending(Address),
    /// All identities holding a pending amount.
    PendingHolders,
    /// Per-bidder bid record.
    Bid(Address),
    /// All bidders of the current epoch, in bid order.
    Bidders,
    /// Stake record by key.
    Stake(u64),
    /// All live stake keys, in commit order.
    StakeKeys,
    /// Stake keys owned by one staker.
    StakesOf(Address),
}
