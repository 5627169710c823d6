//! Storage layout for the treasury.
//!
//! Engine configuration (signers, quorum) and the transaction counter live in
//! instance storage; each transaction is a persistent entry keyed by its id.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::MultiSigError;
use crate::types::Transaction;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Approval threshold, present once the engine is initialized
    Quorum,
    /// Ordered list of authorized signers
    Signers,
    /// Cached length of `Signers`
    SignerCount,
    /// Number of transactions proposed so far
    TxCount,
    /// Transaction record by id
    Transaction(u64),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Quorum)
}

pub fn require_initialized(env: &Env) -> Result<(), MultiSigError> {
    if !is_initialized(env) {
        return Err(MultiSigError::NotInitialized);
    }
    Ok(())
}

/// Persist the signer set and quorum. Callers validate beforehand.
pub fn save_config(env: &Env, signers: &Vec<Address>, quorum: u32) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Signers, signers);
    instance.set(&DataKey::SignerCount, &signers.len());
    instance.set(&DataKey::Quorum, &quorum);
    instance.set(&DataKey::TxCount, &0u64);
}

pub fn get_quorum(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Quorum).unwrap_or(0)
}

pub fn get_signers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn get_signer_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::SignerCount)
        .unwrap_or(0)
}

pub fn get_tx_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::TxCount).unwrap_or(0)
}

/// Bump the counter and return the new value, which is the next transaction id.
pub fn next_tx_id(env: &Env) -> Result<u64, MultiSigError> {
    let id = get_tx_count(env)
        .checked_add(1)
        .ok_or(MultiSigError::Overflow)?;
    env.storage().instance().set(&DataKey::TxCount, &id);
    Ok(id)
}

pub fn load_tx(env: &Env, tx_id: u64) -> Result<Transaction, MultiSigError> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(tx_id))
        .ok_or(MultiSigError::NotFound)
}

pub fn save_tx(env: &Env, tx: &Transaction) {
    env.storage()
        .persistent()
        .set(&DataKey::Transaction(tx.id), tx);
}
