//! Persistent record and index helpers.
//!
//! Records and collection indexes live in `persistent()` so each has its own
//! TTL; only the admin, config, freeze level, key counters and log lengths
//! sit in `instance()`.

use crate::errors::Error;
use crate::types::DataKey;
use soroban_sdk::{Env, IntoVal, TryFromVal, Val, Vec};

/// Minimum TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

/// Read a persistent record and bump its TTL.
pub fn load<V: TryFromVal<Env, Val>>(e: &Env, key: &DataKey) -> Option<V> {
    let storage = e.storage().persistent();
    let value: V = storage.get(key)?;
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    Some(value)
}

/// Write a persistent record with a fresh TTL.
pub fn save<V: IntoVal<Env, Val>>(e: &Env, key: &DataKey, value: &V) {
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn has(e: &Env, key: &DataKey) -> bool {
    e.storage().persistent().has(key)
}

pub fn remove(e: &Env, key: &DataKey) {
    e.storage().persistent().remove(key);
}

// ─── Indexes ───────────────────────────────────────────────────────────────

/// Snapshot of an index; empty when it was never written.
pub fn index<T>(e: &Env, key: &DataKey) -> Vec<T>
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    load(e, key).unwrap_or_else(|| Vec::new(e))
}

pub fn save_index<T>(e: &Env, key: &DataKey, items: &Vec<T>)
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    if items.is_empty() {
        remove(e, key);
    } else {
        save(e, key, items);
    }
}

pub fn index_push<T>(e: &Env, key: &DataKey, item: T)
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    let mut items: Vec<T> = index(e, key);
    items.push_back(item);
    save_index(e, key, &items);
}

pub fn index_remove<T>(e: &Env, key: &DataKey, item: &T)
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    let mut items: Vec<T> = index(e, key);
    if let Some(pos) = items.first_index_of(item.clone()) {
        items.remove(pos);
        save_index(e, key, &items);
    }
}

// ─── Append-only logs ──────────────────────────────────────────────────────
//
// Unbounded collections keep one persistent entry per position plus a length
// in `instance()`, so appending never rewrites earlier entries.

pub fn log_len(e: &Env, len_key: &DataKey) -> u32 {
    e.storage().instance().get(len_key).unwrap_or(0)
}

pub fn log_append<T, K>(e: &Env, len_key: &DataKey, entry_key: K, item: &T) -> Result<(), Error>
where
    T: IntoVal<Env, Val>,
    K: Fn(u32) -> DataKey,
{
    let len = log_len(e, len_key);
    let next = len.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    save(e, &entry_key(len), item);
    e.storage().instance().set(len_key, &next);
    Ok(())
}

/// Remove every entry of a log, handing each live one to `on_entry` first.
/// Returns the number of positions dropped.
pub fn log_drain<T, K, F>(e: &Env, len_key: &DataKey, entry_key: K, mut on_entry: F) -> u32
where
    T: TryFromVal<Env, Val>,
    K: Fn(u32) -> DataKey,
    F: FnMut(T),
{
    let len = log_len(e, len_key);
    for pos in 0..len {
        let key = entry_key(pos);
        if let Some(item) = load::<T>(e, &key) {
            on_entry(item);
        }
        remove(e, &key);
    }
    e.storage().instance().remove(len_key);
    len
}

// ─── Keys ──────────────────────────────────────────────────────────────────

/// Issue the next time-derived key for `counter`.
///
/// Keys follow the ledger timestamp but never repeat: two records created in
/// the same second get consecutive keys. The first key is at least 1, so 0
/// stays free to mean "no key".
pub fn next_key(e: &Env, counter: &DataKey) -> Result<u64, Error> {
    let last: u64 = e.storage().instance().get(counter).unwrap_or(0);
    let after_last = last.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    let key = e.ledger().timestamp().max(after_last);
    e.storage().instance().set(counter, &key);
    Ok(key)
}
