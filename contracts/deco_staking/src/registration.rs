//! One-time registration and the referral link made at that moment.

use crate::config;
use crate::errors::Error;
use crate::events;
use crate::storage;
use crate::types::DataKey;
use soroban_sdk::{Address, Env};

pub fn register(e: &Env, identity: &Address, referral_key: u64) -> Result<u64, Error> {
    identity.require_auth();
    config::load_active(e)?;

    if is_registered(e, identity) {
        return Err(Error::AlreadyRegistered);
    }

    // Resolve the referrer before anything is written.
    let referrer = if referral_key > 0 {
        Some(registrant(e, referral_key).ok_or(Error::InvalidReferral)?)
    } else {
        None
    };

    if let Some(referrer) = referrer {
        storage::save(e, &DataKey::Referral(identity.clone()), &referrer);
        storage::log_append(e, &DataKey::ReferredCount, DataKey::ReferredAt, identity)?;
        events::emit_referral_linked(e, identity, &referrer);
    }

    let key = storage::next_key(e, &DataKey::RegistrationCounter)?;
    storage::save(e, &DataKey::Registration(key), identity);
    storage::save(e, &DataKey::RegistrationOf(identity.clone()), &key);
    storage::log_append(e, &DataKey::RegistrationCount, DataKey::RegistrationAt, &key)?;

    events::emit_registered(e, identity, key);
    Ok(key)
}

pub fn is_registered(e: &Env, identity: &Address) -> bool {
    storage::has(e, &DataKey::RegistrationOf(identity.clone()))
}

/// Gate for bids and deposits.
pub fn require_registered(e: &Env, identity: &Address) -> Result<(), Error> {
    if !is_registered(e, identity) {
        return Err(Error::NotRegistered);
    }
    Ok(())
}

pub fn registration_key(e: &Env, identity: &Address) -> Option<u64> {
    storage::load(e, &DataKey::RegistrationOf(identity.clone()))
}

pub fn registrant(e: &Env, key: u64) -> Option<Address> {
    storage::load(e, &DataKey::Registration(key))
}

pub fn referrer_of(e: &Env, identity: &Address) -> Option<Address> {
    storage::load(e, &DataKey::Referral(identity.clone()))
}

// ─── Bulk clear ────────────────────────────────────────────────────────────

pub fn clear_registrations(e: &Env) -> u32 {
    storage::log_drain(
        e,
        &DataKey::RegistrationCount,
        DataKey::RegistrationAt,
        |key: u64| {
            if let Some(identity) = registrant(e, key) {
                storage::remove(e, &DataKey::RegistrationOf(identity));
            }
            storage::remove(e, &DataKey::Registration(key));
        },
    )
}

pub fn clear_referrals(e: &Env) -> u32 {
    storage::log_drain(
        e,
        &DataKey::ReferredCount,
        DataKey::ReferredAt,
        |identity: Address| storage::remove(e, &DataKey::Referral(identity)),
    )
}
