#![cfg(test)]

extern crate std;

use crate::test_helpers::*;
use crate::Error;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env};

#[test]
fn test_register_without_referral() {
    let e = Env::default();
    let ctx = setup(&e);
    let user = ctx.user();

    let key = ctx.client.register(&user, &0);

    assert!(key > 0);
    assert!(ctx.client.is_registered(&user));
    assert_eq!(ctx.client.get_registration_key(&user), Some(key));
    assert_eq!(ctx.client.get_registrant(&key), Some(user.clone()));
    assert_eq!(ctx.client.get_referrer(&user), None);
}

#[test]
fn test_register_with_referral_links_referrer() {
    let e = Env::default();
    let ctx = setup(&e);
    let referrer = ctx.registered_user();
    let referrer_key = ctx.client.get_registration_key(&referrer).unwrap();

    let user = ctx.user();
    ctx.client.register(&user, &referrer_key);

    assert_eq!(ctx.client.get_referrer(&user), Some(referrer.clone()));
    assert_eq!(ctx.client.get_referrer(&referrer), None);
}

#[test]
fn test_register_twice_fails() {
    let e = Env::default();
    let ctx = setup(&e);
    let user = ctx.registered_user();

    assert_eq!(
        ctx.client.try_register(&user, &0),
        Err(Ok(Error::AlreadyRegistered))
    );
}

#[test]
fn test_register_with_unknown_referral_creates_nothing() {
    let e = Env::default();
    let ctx = setup(&e);
    let user = ctx.user();

    assert_eq!(
        ctx.client.try_register(&user, &42),
        Err(Ok(Error::InvalidReferral))
    );
    assert!(!ctx.client.is_registered(&user));
    assert_eq!(ctx.client.get_referrer(&user), None);
    assert_eq!(ctx.client.get_registrant(&42), None);
}

#[test]
fn test_registration_keys_follow_ledger_time() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 1_700_000_000);
    let ctx = setup(&e);

    let first = ctx.client.register(&ctx.user(), &0);
    assert_eq!(first, 1_700_000_000);

    e.ledger().with_mut(|li| li.timestamp = 1_700_000_500);
    let later = ctx.client.register(&ctx.user(), &0);
    assert_eq!(later, 1_700_000_500);
}

#[test]
fn test_registration_keys_unique_within_same_second() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 5_000);
    let ctx = setup(&e);

    let a = ctx.client.register(&ctx.user(), &0);
    let b = ctx.client.register(&ctx.user(), &0);
    let c = ctx.client.register(&ctx.user(), &0);

    assert_eq!((a, b, c), (5_000, 5_001, 5_002));
}

#[test]
fn test_referral_of_referral_points_one_level_up() {
    let e = Env::default();
    let ctx = setup(&e);
    let root = ctx.registered_user();
    let middle = ctx.referred_user(&root);
    let leaf = ctx.referred_user(&middle);

    assert_eq!(ctx.client.get_referrer(&middle), Some(root));
    assert_eq!(ctx.client.get_referrer(&leaf), Some(middle));
}

#[test]
fn test_register_blocked_while_frozen() {
    let e = Env::default();
    let ctx = setup(&e);
    ctx.client.set_freeze_level(&ctx.admin, &1);

    let user = Address::generate(&e);
    assert_eq!(
        ctx.client.try_register(&user, &0),
        Err(Ok(Error::ContractFrozen))
    );

    ctx.client.set_freeze_level(&ctx.admin, &0);
    ctx.client.register(&user, &0);
    assert!(ctx.client.is_registered(&user));
}

#[test]
fn test_clear_registrations_and_referrals() {
    let e = Env::default();
    let ctx = setup(&e);
    let referrer = ctx.registered_user();
    let user = ctx.referred_user(&referrer);

    assert_eq!(ctx.client.clear_referrals(&ctx.admin), 1);
    assert_eq!(ctx.client.get_referrer(&user), None);
    assert!(ctx.client.is_registered(&user));

    assert_eq!(ctx.client.clear_registrations(&ctx.admin), 2);
    assert!(!ctx.client.is_registered(&user));
    assert!(!ctx.client.is_registered(&referrer));

    // A cleared identity may register again.
    ctx.client.register(&user, &0);
    assert!(ctx.client.is_registered(&user));
}

#[test]
fn test_clear_after_many_registrations() {
    let e = Env::default();
    let ctx = setup(&e);
    let root = ctx.registered_user();
    let mut users = std::vec::Vec::new();
    for _ in 0..40 {
        users.push(ctx.referred_user(&root));
    }

    assert_eq!(ctx.client.clear_referrals(&ctx.admin), 40);
    assert_eq!(ctx.client.clear_registrations(&ctx.admin), 41);
    for user in users.iter() {
        assert!(!ctx.client.is_registered(user));
        assert_eq!(ctx.client.get_referrer(user), None);
    }

    // Both logs start over after a clear.
    let again = ctx.registered_user();
    ctx.referred_user(&again);
    assert_eq!(ctx.client.clear_referrals(&ctx.admin), 1);
    assert_eq!(ctx.client.clear_registrations(&ctx.admin), 2);
}
