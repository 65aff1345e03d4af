//! Token movements in and out of the contract.

use crate::events;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env, Symbol};

/// Memo attached to dividend payments.
pub const MEMO_DIVIDEND: &str = "dividend";
/// Memo attached to referral commissions.
pub const MEMO_REFERRAL: &str = "referral";
/// Memo attached to a bidder's epoch reward (bonus included).
pub const MEMO_REWARD: &str = "reward";
/// Memo attached to a cancelled stake's payout.
pub const MEMO_EARLY_EXIT: &str = "early_exit";
/// Memo attached to a matured stake's payout.
pub const MEMO_MATURED: &str = "matured";
/// Memo attached to a pending-stake refund.
pub const MEMO_PENDING_REFUND: &str = "pending_refund";

/// Pull `amount` of `token` from `owner` into the contract.
///
/// `owner` must have approved the contract as spender.
pub fn pull(e: &Env, token: &Address, owner: &Address, amount: i128) {
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer_from(&contract, owner, &contract, &amount);
}

/// Pay `amount` of `token` from the contract balance to `to`.
pub fn pay(e: &Env, token: &Address, to: &Address, amount: i128, memo: &str) {
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer(&contract, to, &amount);
    events::emit_payout(e, to, token, amount, &Symbol::new(e, memo));
}
