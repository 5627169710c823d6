//! # Transaction Lifecycle
//!
//! Proposal → approve → settle flow for moving tokens out of the treasury.
//!
//! 1. A signer opens a transaction with [`propose_transfer`]; the proposer's
//!    approval is counted immediately.
//! 2. Other signers call [`approve_tx`]. Quorum is evaluated on every
//!    approval, so the call that reaches it also executes the transfer.
//!    There is no separate execute step.
//!
//! ## Safety Guarantees
//! - Every check runs before any storage write; a failed call changes nothing.
//! - A signer approves a given transaction at most once.
//! - The treasury balance is checked at proposal time and again by the call
//!   that reaches quorum.
//! - A transaction is marked settled and persisted before the token contract
//!   is invoked, so a callback from the token sees it as settled.
//! - Transaction ids are strictly increasing and never reused.

use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::MultiSigError;
use crate::events::{
    emit_deposited, emit_transaction_approved, emit_transfer_executed, emit_transfer_proposed,
    DepositedEvent, TransactionApprovedEvent, TransferExecutedEvent, TransferProposedEvent,
};
use crate::ledger::{ensure_funds, held_balance, is_zero_address, pull, send};
use crate::signers::require_signer;
use crate::storage::{get_quorum, load_tx, next_tx_id, require_initialized, save_tx};
use crate::types::{ApprovalStatus, Transaction};

/// Open a transfer of `amount` of `token` to `recipient`.
///
/// If the quorum is 1 the transfer is executed before returning.
///
/// # Returns
/// The id of the new transaction.
///
/// # Errors
/// - [`MultiSigError::Unauthorized`] if the caller is not a signer.
/// - [`MultiSigError::ZeroAmount`] if `amount <= 0`.
/// - [`MultiSigError::ZeroAddress`] if `recipient` or `token` is the zero address.
/// - [`MultiSigError::InsufficientFunds`] if the treasury holds less than `amount`.
/// - [`MultiSigError::TransferFailed`] if the token contract rejects a call.
pub fn propose_transfer(
    env: &Env,
    caller: Address,
    amount: i128,
    recipient: Address,
    token: Address,
) -> Result<u64, MultiSigError> {
    require_signer(env, &caller)?;

    if amount <= 0 {
        return Err(MultiSigError::ZeroAmount);
    }
    if is_zero_address(env, &recipient) || is_zero_address(env, &token) {
        return Err(MultiSigError::ZeroAddress);
    }
    ensure_funds(env, &token, amount)?;

    let tx_id = next_tx_id(env)?;
    let mut approved_by = Vec::new(env);
    approved_by.push_back(caller.clone());

    let mut tx = Transaction {
        id: tx_id,
        amount,
        recipient: recipient.clone(),
        token: token.clone(),
        initiator: caller.clone(),
        approvals: 1,
        approved_by,
        settled: false,
        created_at: env.ledger().timestamp(),
        settled_at: None,
    };

    emit_transfer_proposed(
        env,
        TransferProposedEvent {
            tx_id,
            initiator: caller.clone(),
            recipient,
            token,
            amount,
            timestamp: tx.created_at,
        },
    );
    log!(
        env,
        "propose_transfer id={} by={} amount={}",
        tx_id,
        caller,
        amount
    );

    if tx.approvals >= get_quorum(env) {
        settle(env, &mut tx)?;
    } else {
        save_tx(env, &tx);
    }
    Ok(tx_id)
}

/// Record `caller`'s approval of transaction `tx_id`, executing the transfer
/// when this approval reaches the quorum.
///
/// # Errors
/// - [`MultiSigError::Unauthorized`] if the caller is not a signer.
/// - [`MultiSigError::NotFound`] if no such transaction exists.
/// - [`MultiSigError::AlreadySettled`] if the transaction was executed.
/// - [`MultiSigError::DuplicateApproval`] if the caller already approved.
/// - [`MultiSigError::InsufficientFunds`] if this approval reaches quorum but
///   the treasury no longer holds the amount. The approval is not recorded;
///   it can be repeated once the treasury is topped up.
/// - [`MultiSigError::TransferFailed`] if the token transfer fails.
pub fn approve_tx(env: &Env, caller: Address, tx_id: u64) -> Result<ApprovalStatus, MultiSigError> {
    require_signer(env, &caller)?;

    let mut tx = load_tx(env, tx_id)?;
    if tx.settled {
        return Err(MultiSigError::AlreadySettled);
    }
    if tx.has_approved(&caller) {
        return Err(MultiSigError::DuplicateApproval);
    }

    let approvals = tx.approvals.checked_add(1).ok_or(MultiSigError::Overflow)?;
    let quorum = get_quorum(env);
    let reaches_quorum = approvals >= quorum;
    if reaches_quorum {
        ensure_funds(env, &tx.token, tx.amount)?;
    }

    tx.approvals = approvals;
    tx.approved_by.push_back(caller.clone());

    emit_transaction_approved(
        env,
        TransactionApprovedEvent {
            tx_id,
            signer: caller.clone(),
            approvals,
            quorum,
        },
    );
    log!(
        env,
        "approve_tx id={} by={} approvals={}",
        tx_id,
        caller,
        approvals
    );

    if reaches_quorum {
        settle(env, &mut tx)?;
    } else {
        save_tx(env, &tx);
    }

    Ok(ApprovalStatus {
        tx_id,
        approvals: tx.approvals,
        settled: tx.settled,
    })
}

/// Mark `tx` settled, persist it, then move the funds.
///
/// Funds must already have been checked by the caller. The write happens
/// before the token call; any failure after it is rolled back by the host
/// because the error propagates out of the contract call.
pub(crate) fn settle(env: &Env, tx: &mut Transaction) -> Result<(), MultiSigError> {
    tx.settled = true;
    tx.settled_at = Some(env.ledger().timestamp());
    save_tx(env, tx);

    send(env, &tx.token, &tx.recipient, tx.amount)?;

    emit_transfer_executed(
        env,
        TransferExecutedEvent {
            tx_id: tx.id,
            recipient: tx.recipient.clone(),
            token: tx.token.clone(),
            amount: tx.amount,
            timestamp: env.ledger().timestamp(),
        },
    );
    log!(env, "transfer executed id={} amount={}", tx.id, tx.amount);
    Ok(())
}

/// Fund the treasury from `from`'s allowance.
///
/// `from` must have approved the treasury as spender of at least `amount`
/// on `token`. Anyone may fund the treasury.
///
/// # Returns
/// The treasury's balance of `token` after the deposit.
pub fn deposit(
    env: &Env,
    from: Address,
    token: Address,
    amount: i128,
) -> Result<i128, MultiSigError> {
    require_initialized(env)?;
    from.require_auth();

    if amount <= 0 {
        return Err(MultiSigError::ZeroAmount);
    }
    if is_zero_address(env, &token) {
        return Err(MultiSigError::ZeroAddress);
    }

    pull(env, &token, &from, amount)?;
    let balance = held_balance(env, &token)?;

    emit_deposited(
        env,
        DepositedEvent {
            from,
            token,
            amount,
            balance,
        },
    );
    Ok(balance)
}

pub fn get_transaction(env: &Env, tx_id: u64) -> Result<Transaction, MultiSigError> {
    load_tx(env, tx_id)
}

/// Whether `signer` has approved transaction `tx_id`. False for unknown ids.
pub fn has_approved(env: &Env, tx_id: u64, signer: &Address) -> bool {
    load_tx(env, tx_id)
        .map(|tx| tx.has_approved(signer))
        .unwrap_or(false)
}
