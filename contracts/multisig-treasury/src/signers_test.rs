#![cfg(test)]

use crate::signers::{is_valid_signer, validate_config};
use crate::test::{setup, setup_uninitialized, zero_account, zero_contract};
use crate::MultiSigError;
use soroban_sdk::{testutils::Address as _, vec, Address, Env, Vec};

// ── validate_config ───────────────────────────────────────────────────────────

#[test]
fn validate_config_accepts_quorum_bounds() {
    let env = Env::default();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let signers: Vec<Address> = vec![&env, a, b];
    assert_eq!(validate_config(&env, &signers, 1), Ok(()));
    assert_eq!(validate_config(&env, &signers, 2), Ok(()));
}

#[test]
fn validate_config_rejects_zero_quorum() {
    let env = Env::default();
    let signers: Vec<Address> = vec![&env, Address::generate(&env)];
    assert_eq!(
        validate_config(&env, &signers, 0),
        Err(MultiSigError::ConfigurationError)
    );
}

#[test]
fn validate_config_rejects_quorum_above_signer_count() {
    let env = Env::default();
    let signers: Vec<Address> = vec![&env, Address::generate(&env), Address::generate(&env)];
    assert_eq!(
        validate_config(&env, &signers, 3),
        Err(MultiSigError::ConfigurationError)
    );
}

#[test]
fn validate_config_rejects_empty_list() {
    let env = Env::default();
    assert_eq!(
        validate_config(&env, &Vec::new(&env), 1),
        Err(MultiSigError::ConfigurationError)
    );
}

#[test]
fn validate_config_rejects_non_adjacent_duplicate() {
    let env = Env::default();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let signers: Vec<Address> = vec![&env, a.clone(), b, a];
    assert_eq!(
        validate_config(&env, &signers, 2),
        Err(MultiSigError::ConfigurationError)
    );
}

#[test]
fn validate_config_rejects_zero_addresses() {
    let env = Env::default();
    let a = Address::generate(&env);

    let with_account: Vec<Address> = vec![&env, a.clone(), zero_account(&env)];
    assert_eq!(
        validate_config(&env, &with_account, 1),
        Err(MultiSigError::ConfigurationError)
    );

    let with_contract: Vec<Address> = vec![&env, zero_contract(&env), a];
    assert_eq!(
        validate_config(&env, &with_contract, 1),
        Err(MultiSigError::ConfigurationError)
    );
}

// ── initialize via client ─────────────────────────────────────────────────────

#[test]
fn initialize_rejects_quorum_above_set_size() {
    let f = setup_uninitialized();
    let client = &f.client;
    let valid_signers: Vec<Address> = vec![&f.env, f.signer2.clone(), f.signer3.clone()];
    let result = client.try_initialize(&f.owner, &4, &valid_signers);
    assert_eq!(result, Err(Ok(MultiSigError::ConfigurationError)));
    assert_eq!(client.quorum(), 0);
    assert_eq!(client.no_of_valid_signers(), 0);
}

#[test]
fn initialize_rejects_zero_quorum() {
    let f = setup_uninitialized();
    let client = &f.client;
    let valid_signers: Vec<Address> = vec![&f.env, f.signer2.clone()];
    let result = client.try_initialize(&f.owner, &0, &valid_signers);
    assert_eq!(result, Err(Ok(MultiSigError::ConfigurationError)));
}

#[test]
fn initialize_rejects_owner_listed_again() {
    let f = setup_uninitialized();
    let client = &f.client;
    let valid_signers: Vec<Address> = vec![&f.env, f.signer2.clone(), f.owner.clone()];
    let result = client.try_initialize(&f.owner, &2, &valid_signers);
    assert_eq!(result, Err(Ok(MultiSigError::ConfigurationError)));
}

#[test]
fn initialize_rejects_zero_signer() {
    let f = setup_uninitialized();
    let client = &f.client;
    let valid_signers: Vec<Address> = vec![&f.env, f.signer2.clone(), zero_account(&f.env)];
    let result = client.try_initialize(&f.owner, &2, &valid_signers);
    assert_eq!(result, Err(Ok(MultiSigError::ConfigurationError)));
}

#[test]
fn initialize_with_owner_only() {
    let f = setup_uninitialized();
    let client = &f.client;
    client.initialize(&f.owner, &1, &Vec::new(&f.env));
    assert_eq!(client.no_of_valid_signers(), 1);
    assert_eq!(client.quorum(), 1);
}

#[test]
fn failed_initialize_can_be_retried() {
    let f = setup_uninitialized();
    let client = &f.client;
    let valid_signers: Vec<Address> = vec![&f.env, f.signer2.clone()];
    assert!(client.try_initialize(&f.owner, &3, &valid_signers).is_err());
    client.initialize(&f.owner, &2, &valid_signers);
    assert_eq!(client.quorum(), 2);
}

#[test]
fn operations_before_initialize_fail() {
    let f = setup_uninitialized();
    let client = &f.client;
    assert_eq!(
        client.try_propose_transfer(&f.owner, &10, &f.signer2, &f.token),
        Err(Ok(MultiSigError::NotInitialized))
    );
    assert_eq!(
        client.try_approve_tx(&f.owner, &1),
        Err(Ok(MultiSigError::NotInitialized))
    );
    assert_eq!(client.tx_count(), 0);
}

// ── membership ────────────────────────────────────────────────────────────────

#[test]
fn membership_reads_stored_signer_set() {
    let f = setup();
    f.env.as_contract(&f.treasury(), || {
        assert!(is_valid_signer(&f.env, &f.signer3));
        assert!(is_valid_signer(&f.env, &f.owner));
        assert!(!is_valid_signer(&f.env, &f.outsider));
    });
}

#[test]
fn membership_is_empty_before_initialize() {
    let f = setup_uninitialized();
    f.env.as_contract(&f.treasury(), || {
        assert!(!is_valid_signer(&f.env, &f.owner));
    });
}
