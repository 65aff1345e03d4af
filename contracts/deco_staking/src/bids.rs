//! Bid ledger: per-epoch pledges of the bid token.

use crate::config;
use crate::errors::Error;
use crate::events;
use crate::math;
use crate::registration;
use crate::storage;
use crate::transfers;
use crate::types::{Bid, DataKey};
use soroban_sdk::{Address, Env, String, Vec};

/// Memos that make a bid a no-op.
pub const IGNORE_MEMOS: [&str; 2] = ["IGNORE_THIS", "Jungle Faucet"];

fn is_ignored(e: &Env, bidder: &Address, memo: &String) -> bool {
    *bidder == e.current_contract_address()
        || IGNORE_MEMOS
            .iter()
            .any(|ignored| *memo == String::from_str(e, ignored))
}

/// Add `amount` to the bidder's cumulative bid.
///
/// Returns `None` when the call was ignored.
pub fn place(
    e: &Env,
    bidder: &Address,
    token: &Address,
    amount: i128,
    memo: &String,
) -> Result<Option<Bid>, Error> {
    if is_ignored(e, bidder, memo) {
        return Ok(None);
    }
    bidder.require_auth();

    let cfg = config::load_active(e)?;
    if *token != cfg.bid_token {
        return Err(Error::WrongAsset);
    }
    if amount <= 0 {
        return Err(Error::NonPositiveAmount);
    }
    if amount > cfg.max_bid_amount {
        return Err(Error::OverMaxBid);
    }
    registration::require_registered(e, bidder)?;

    let previous = load(e, bidder);
    let total = match &previous {
        Some(bid) => math::add(bid.amount, amount)?,
        None => amount,
    };

    transfers::pull(e, token, bidder, amount);

    if previous.is_none() {
        storage::index_push(e, &DataKey::Bidders, bidder.clone());
    }
    let bid = Bid {
        bidder: bidder.clone(),
        amount: total,
        referrer: registration::referrer_of(e, bidder),
    };
    storage::save(e, &DataKey::Bid(bidder.clone()), &bid);

    events::emit_bid_placed(e, bidder, amount, total);
    Ok(Some(bid))
}

pub fn load(e: &Env, bidder: &Address) -> Option<Bid> {
    storage::load(e, &DataKey::Bid(bidder.clone()))
}

pub fn bidders(e: &Env) -> Vec<Address> {
    storage::index(e, &DataKey::Bidders)
}

/// Every live bid, in first-bid order.
pub fn all(e: &Env) -> Vec<Bid> {
    let mut out = Vec::new(e);
    for bidder in bidders(e).iter() {
        if let Some(bid) = load(e, &bidder) {
            out.push_back(bid);
        }
    }
    out
}

pub fn total(bids: &Vec<Bid>) -> Result<i128, Error> {
    let mut sum = 0_i128;
    for bid in bids.iter() {
        sum = math::add(sum, bid.amount)?;
    }
    Ok(sum)
}

pub fn clear(e: &Env) -> u32 {
    let list = bidders(e);
    for bidder in list.iter() {
        storage::remove(e, &DataKey::Bid(bidder));
    }
    storage::remove(e, &DataKey::Bidders);
    list.len()
}
