//! # Ledger Module
//!
//! Narrow wrapper around the token contract the treasury holds funds in.
//! Every call goes through the standard token interface
//! ([`soroban_sdk::token::Client`]) using the `try_*` variants, so a token
//! that traps or rejects the call surfaces as [`MultiSigError::TransferFailed`]
//! instead of aborting the treasury with a host error.
//!
//! The token is untrusted: callers must commit their own state changes before
//! invoking [`send`].

use soroban_sdk::{token, Address, Env, String};

use crate::errors::MultiSigError;

/// All-zero account strkey.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
/// All-zero contract strkey.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Returns true if `address` is one of the all-zero strkeys.
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    let account = Address::from_string(&String::from_str(env, ZERO_ACCOUNT));
    let contract = Address::from_string(&String::from_str(env, ZERO_CONTRACT));
    *address == account || *address == contract
}

/// Balance of `token` held by the treasury contract.
pub fn held_balance(env: &Env, token: &Address) -> Result<i128, MultiSigError> {
    let client = token::Client::new(env, token);
    match client.try_balance(&env.current_contract_address()) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(MultiSigError::TransferFailed),
    }
}

/// Fails with `InsufficientFunds` unless the treasury holds at least `amount`.
pub fn ensure_funds(env: &Env, token: &Address, amount: i128) -> Result<(), MultiSigError> {
    if held_balance(env, token)? < amount {
        return Err(MultiSigError::InsufficientFunds);
    }
    Ok(())
}

/// Move `amount` of `token` from the treasury to `to`.
pub fn send(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), MultiSigError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(MultiSigError::TransferFailed),
    }
}

/// Pull `amount` of `token` from `from` into the treasury using the
/// allowance `from` granted to the treasury.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), MultiSigError> {
    let client = token::Client::new(env, token);
    let treasury = env.current_contract_address();
    match client.try_transfer_from(&treasury, from, &treasury, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(MultiSigError::TransferFailed),
    }
}
