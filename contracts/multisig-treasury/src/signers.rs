//! # Signer Registry
//!
//! The signer set and quorum are fixed by [`initialize`]; nothing can add or
//! remove a signer afterwards.
//!
//! ## Rules
//! - Every signer is unique and is not the zero address.
//! - `1 <= quorum <= number of signers`.
//! - The deploying owner is always a signer, appended after `valid_signers`.

use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::MultiSigError;
use crate::events::{emit_initialized, InitializedEvent};
use crate::ledger::is_zero_address;
use crate::storage::{get_signers, is_initialized, require_initialized, save_config};

/// Validate and persist the signer set and quorum.
///
/// # Errors
/// - [`MultiSigError::AlreadyInitialized`] if called a second time.
/// - [`MultiSigError::ConfigurationError`] on a zero or duplicate signer, or a
///   quorum outside `[1, signers]`.
pub fn initialize(
    env: &Env,
    owner: Address,
    quorum: u32,
    valid_signers: Vec<Address>,
) -> Result<(), MultiSigError> {
    if is_initialized(env) {
        return Err(MultiSigError::AlreadyInitialized);
    }
    owner.require_auth();

    let mut signers = valid_signers;
    signers.push_back(owner.clone());
    validate_config(env, &signers, quorum)?;

    save_config(env, &signers, quorum);
    log!(
        env,
        "initialize quorum={} signers={}",
        quorum,
        signers.len()
    );

    emit_initialized(
        env,
        InitializedEvent {
            owner,
            quorum,
            signer_count: signers.len(),
        },
    );
    Ok(())
}

/// Check a candidate signer list against a quorum.
pub fn validate_config(
    env: &Env,
    signers: &Vec<Address>,
    quorum: u32,
) -> Result<(), MultiSigError> {
    if quorum == 0 || quorum > signers.len() {
        return Err(MultiSigError::ConfigurationError);
    }

    for i in 0..signers.len() {
        let signer = signers.get(i).ok_or(MultiSigError::ConfigurationError)?;
        if is_zero_address(env, &signer) {
            return Err(MultiSigError::ConfigurationError);
        }
        for j in (i + 1)..signers.len() {
            if signers.get(j).as_ref() == Some(&signer) {
                return Err(MultiSigError::ConfigurationError);
            }
        }
    }
    Ok(())
}

/// Membership test against the signer set. No side effects.
pub fn is_valid_signer(env: &Env, address: &Address) -> bool {
    get_signers(env).contains(address)
}

/// Authenticate `caller` and confirm it is a signer.
pub fn require_signer(env: &Env, caller: &Address) -> Result<(), MultiSigError> {
    require_initialized(env)?;
    caller.require_auth();
    if !is_valid_signer(env, caller) {
        return Err(MultiSigError::Unauthorized);
    }
    Ok(())
}
