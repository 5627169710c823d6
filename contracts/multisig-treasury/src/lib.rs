//! # Multisig Treasury Contract
//!
//! Holds fungible tokens and releases them only after a fixed quorum of
//! distinct signers has approved the transfer.
//!
//! The signer set and quorum are configured once by [`MultiSigContract::initialize`]
//! and never change. A signer proposes a transfer (counting as its first
//! approval); other signers approve it, and the approval that reaches the
//! quorum executes the token transfer in the same call.

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod errors;
mod events;
mod ledger;
mod signers;
mod storage;
mod transaction;
mod types;

pub use errors::MultiSigError;
pub use events::{
    DepositedEvent, InitializedEvent, TransactionApprovedEvent, TransferExecutedEvent,
    TransferProposedEvent,
};
pub use ledger::{ZERO_ACCOUNT, ZERO_CONTRACT};
pub use types::{ApprovalStatus, Transaction};


#[cfg(test)]
mod signers_test;


#[cfg(test)]
mod reentrancy_test;


#[contract]
pub struct MultiSigContract;

#[contractimpl]
impl MultiSigContract {
    /// Configure the signer set and quorum
    ///
    /// The signer set is `valid_signers` followed by `owner`. Can only be
    /// called once.
    ///
    /// # Arguments
    /// * `owner` - The deploying account (must authorize); always a signer
    /// * `quorum` - Number of distinct approvals required to execute a transfer
    /// * `valid_signers` - Additional signers
    ///
    /// # Errors
    /// - `AlreadyInitialized` - Called more than once
    /// - `ConfigurationError` - Zero or duplicate signer, or quorum outside `[1, signers]`
    pub fn initialize(
        env: Env,
        owner: Address,
        quorum: u32,
        valid_signers: Vec<Address>,
    ) -> Result<(), MultiSigError> {
        signers::initialize(&env, owner, quorum, valid_signers)
    }

    /// Propose a transfer out of the treasury
    ///
    /// The proposer's approval is counted. With a quorum of 1 the transfer
    /// executes immediately.
    ///
    /// # Arguments
    /// * `caller` - A signer (must authorize)
    /// * `amount` - Amount in the token's base units
    /// * `recipient` - Destination of the funds
    /// * `token` - Token contract holding the funds
    ///
    /// # Returns
    /// The new transaction id
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not a signer
    /// - `ZeroAmount` - Amount is zero or negative
    /// - `ZeroAddress` - Recipient or token is the zero address
    /// - `InsufficientFunds` - Treasury balance below amount
    pub fn propose_transfer(
        env: Env,
        caller: Address,
        amount: i128,
        recipient: Address,
        token: Address,
    ) -> Result<u64, MultiSigError> {
        transaction::propose_transfer(&env, caller, amount, recipient, token)
    }

    /// Approve a pending transaction
    ///
    /// Executes the transfer when this approval reaches the quorum.
    ///
    /// # Arguments
    /// * `caller` - A signer (must authorize)
    /// * `tx_id` - Transaction to approve
    ///
    /// # Returns
    /// Approval count and settlement status after the call
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not a signer
    /// - `NotFound` - Unknown transaction id
    /// - `AlreadySettled` - Transaction already executed
    /// - `DuplicateApproval` - Caller already approved
    /// - `InsufficientFunds` - Quorum reached but treasury balance below amount
    /// - `TransferFailed` - Token transfer failed
    pub fn approve_tx(
        env: Env,
        caller: Address,
        tx_id: u64,
    ) -> Result<ApprovalStatus, MultiSigError> {
        transaction::approve_tx(&env, caller, tx_id)
    }

    /// Fund the treasury through a token allowance
    ///
    /// # Arguments
    /// * `from` - Token holder (must authorize) who approved the treasury as spender
    /// * `token` - Token contract
    /// * `amount` - Amount to pull
    ///
    /// # Returns
    /// The treasury's balance of `token` after the deposit
    pub fn deposit(
        env: Env,
        from: Address,
        token: Address,
        amount: i128,
    ) -> Result<i128, MultiSigError> {
        transaction::deposit(&env, from, token, amount)
    }

    /// Number of distinct approvals required to execute a transfer (0 before initialization)
    pub fn quorum(env: Env) -> u32 {
        storage::get_quorum(&env)
    }

    /// Size of the signer set, owner included
    pub fn no_of_valid_signers(env: Env) -> u32 {
        storage::get_signer_count(&env)
    }

    /// Number of transactions proposed so far; also the id of the latest one
    pub fn tx_count(env: Env) -> u64 {
        storage::get_tx_count(&env)
    }

    /// Signer set in registration order, owner last
    pub fn get_signers(env: Env) -> Vec<Address> {
        storage::get_signers(&env)
    }

    /// Whether `address` is in the signer set
    pub fn is_valid_signer(env: Env, address: Address) -> bool {
        signers::is_valid_signer(&env, &address)
    }

    /// Get a transaction by id
    ///
    /// # Errors
    /// - `NotFound` - Unknown transaction id
    pub fn get_transaction(env: Env, tx_id: u64) -> Result<Transaction, MultiSigError> {
        transaction::get_transaction(&env, tx_id)
    }

    /// Whether `signer` has approved `tx_id`; false for unknown ids
    pub fn has_approved(env: Env, tx_id: u64, signer: Address) -> bool {
        transaction::has_approved(&env, tx_id, &signer)
    }

    /// Treasury balance of `token`
    pub fn balance(env: Env, token: Address) -> Result<i128, MultiSigError> {
        ledger::held_balance(&env, &token)
    }
}
