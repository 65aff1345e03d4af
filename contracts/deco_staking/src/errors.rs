use soroban_sdk::contracterror;

/// Groups errors by the part of the ledger that raised them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Setup, admin and maintenance gate (codes 1-9).
    Admin,
    /// Registration and referral ledger (codes 10-19).
    Registration,
    /// Asset class and amount checks (codes 20-29).
    Asset,
    /// Pending-stake holding area (codes 30-39).
    Pending,
    /// Stake ledger lifecycle (codes 40-49).
    Stake,
    /// Distribution sweeps (codes 50-59).
    Distribution,
    /// Checked arithmetic (codes 60-69).
    Arithmetic,
}

/// Every caller-visible failure of the staking contract.
///
/// Codes are wire-stable. Append new variants inside their block only.
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Error {
    // --- Admin (1-9) ---
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotAdmin = 3,
    /// Freeze level is non-zero; only admin operations are accepted.
    ContractFrozen = 4,
    InvalidConfig = 5,

    // --- Registration (10-19) ---
    AlreadyRegistered = 10,
    /// Non-zero referral key that does not point at a registration.
    InvalidReferral = 11,
    NotRegistered = 12,

    // --- Asset (20-29) ---
    /// Token contract is not the one configured for this operation.
    WrongAsset = 20,
    NonPositiveAmount = 21,
    OverMaxBid = 22,

    // --- Pending (30-39) ---
    NoPendingStake = 30,
    InsufficientPending = 31,
    TermTooShort = 32,
    TermTooLong = 33,

    // --- Stake (40-49) ---
    StakeNotFound = 40,
    NotStakeOwner = 41,
    AlreadyMatured = 42,
    NotMatured = 43,
    NothingToWithdraw = 44,

    // --- Distribution (50-59) ---
    NoBids = 50,
    /// A bidder's proportional share rounded down to zero.
    ZeroShare = 51,

    // --- Arithmetic (60-69) ---
    ArithmeticOverflow = 60,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match *self as u32 {
            1..=9 => ErrorCategory::Admin,
            10..=19 => ErrorCategory::Registration,
            20..=29 => ErrorCategory::Asset,
            30..=39 => ErrorCategory::Pending,
            40..=49 => ErrorCategory::Stake,
            50..=59 => ErrorCategory::Distribution,
            _ => ErrorCategory::Arithmetic,
        }
    }

    /// Stable failure reason for off-chain consumers.
    pub fn description(&self) -> &'static str {
        match self {
            Error::NotInitialized => "not initialized",
            Error::AlreadyInitialized => "already initialized",
            Error::NotAdmin => "not admin",
            Error::ContractFrozen => "contract under freeze for maintenance",
            Error::InvalidConfig => "invalid configuration",
            Error::AlreadyRegistered => "account already registered",
            Error::InvalidReferral => "wrong referral id",
            Error::NotRegistered => "account is not registered",
            Error::WrongAsset => "token not accepted for this operation",
            Error::NonPositiveAmount => "amount must be positive",
            Error::OverMaxBid => "more than max bid limit",
            Error::NoPendingStake => "no pending stake found",
            Error::InsufficientPending => "cannot withdraw more than pending stake",
            Error::TermTooShort => "staking days below minimum staking period",
            Error::TermTooLong => "staking days above maximum staking period",
            Error::StakeNotFound => "stake key not found",
            Error::NotStakeOwner => "account does not own this stake",
            Error::AlreadyMatured => "stake is matured and can be withdrawn",
            Error::NotMatured => "stake not matured yet",
            Error::NothingToWithdraw => "no tokens to withdraw",
            Error::NoBids => "no bids to distribute against",
            Error::ZeroShare => "tokens to send is not greater than 0",
            Error::ArithmeticOverflow => "arithmetic overflow",
        }
    }
}
