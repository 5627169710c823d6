//! # Treasury Events
//!
//! Every state change publishes one `#[contractevent]` struct. The macro
//! derives the snake_case struct name as the leading topic; fields marked
//! `#[topic]` become extra topics so indexers can filter by transaction id.

use soroban_sdk::{contractevent, Address, Env};

/// Emitted once when the signer set and quorum are configured.
#[contractevent]
#[derive(Clone, Debug)]
pub struct InitializedEvent {
    pub owner: Address,
    pub quorum: u32,
    pub signer_count: u32,
}

/// Emitted when a signer opens a new transfer proposal.
///
/// # Fields
/// * `tx_id` – Id of the new transaction.
/// * `initiator` – Proposing signer; counted as the first approval.
/// * `recipient` – Destination of the funds.
/// * `token` – Token contract the funds are held in.
/// * `amount` – Amount in the token's base units.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TransferProposedEvent {
    #[topic]
    pub tx_id: u64,
    pub initiator: Address,
    pub recipient: Address,
    pub token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Emitted for every recorded approval after the proposer's own.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TransactionApprovedEvent {
    #[topic]
    pub tx_id: u64,
    pub signer: Address,
    pub approvals: u32,
    pub quorum: u32,
}

/// Emitted when a transaction reaches quorum and the funds leave the treasury.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TransferExecutedEvent {
    #[topic]
    pub tx_id: u64,
    pub recipient: Address,
    pub token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct DepositedEvent {
    pub from: Address,
    pub token: Address,
    pub amount: i128,
    pub balance: i128,
}

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    event.publish(env);
}

pub fn emit_transfer_proposed(env: &Env, event: TransferProposedEvent) {
    event.publish(env);
}

pub fn emit_transaction_approved(env: &Env, event: TransactionApprovedEvent) {
    event.publish(env);
}

pub fn emit_transfer_executed(env: &Env, event: TransferExecutedEvent) {
    event.publish(env);
}

pub fn emit_deposited(env: &Env, event: DepositedEvent) {
    event.publish(env);
}
