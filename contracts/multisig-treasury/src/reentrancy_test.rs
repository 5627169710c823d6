#![cfg(test)]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, InvokeError};

use crate::test::setup_with_quorum;
use crate::MultiSigContractClient;

#[contracttype]
#[derive(Clone)]
pub enum HookKey {
    Target,
    Signer,
    Transfers,
}

/// Token that calls back into the treasury from `transfer`.
#[contract]
pub struct CallbackToken;

#[contractimpl]
impl CallbackToken {
    pub fn arm(env: Env, target: Address, signer: Address) {
        env.storage().instance().set(&HookKey::Target, &target);
        env.storage().instance().set(&HookKey::Signer, &signer);
    }

    pub fn balance(_env: Env, _id: Address) -> i128 {
        1_000_000
    }

    pub fn transfer(env: Env, _from: Address, to: Address, amount: i128) {
        let count: u32 = env
            .storage()
            .instance()
            .get(&HookKey::Transfers)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&HookKey::Transfers, &(count + 1));

        let target: Option<Address> = env.storage().instance().get(&HookKey::Target);
        let signer: Option<Address> = env.storage().instance().get(&HookKey::Signer);
        if let (Some(target), Some(signer)) = (target, signer) {
            let treasury = MultiSigContractClient::new(&env, &target);

            // The host refuses to enter the treasury again while it is on the
            // call stack, before any contract code runs.
            let res = treasury.try_approve_tx(&signer, &1);
            assert!(matches!(res, Err(Err(InvokeError::Abort))));

            let token = env.current_contract_address();
            let res = treasury.try_propose_transfer(&signer, &amount, &to, &token);
            assert!(matches!(res, Err(Err(InvokeError::Abort))));
        }
    }

    pub fn transfers(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&HookKey::Transfers)
            .unwrap_or(0)
    }
}

#[test]
fn reentrant_calls_during_transfer_are_rejected() {
    let f = setup_with_quorum(2);
    let client = &f.client;
    let token_id = f.env.register(CallbackToken, ());
    let token = CallbackTokenClient::new(&f.env, &token_id);
    token.arm(&f.treasury(), &f.owner);

    let tx_id = client.propose_transfer(&f.signer2, &10, &f.outsider, &token_id);
    let status = client.approve_tx(&f.signer3, &tx_id);

    assert!(status.settled);
    assert_eq!(token.transfers(), 1);
    assert_eq!(client.tx_count(), 1);

    let tx = client.get_transaction(&tx_id);
    assert!(tx.settled);
    assert_eq!(tx.approvals, 2);
    assert!(!client.has_approved(&tx_id, &f.owner));
}

#[test]
fn settled_transaction_cannot_be_replayed() {
    let f = setup_with_quorum(2);
    let client = &f.client;
    let token_id = f.env.register(CallbackToken, ());
    let token = CallbackTokenClient::new(&f.env, &token_id);

    let tx_id = client.propose_transfer(&f.signer2, &10, &f.outsider, &token_id);
    client.approve_tx(&f.owner, &tx_id);
    assert!(client.try_approve_tx(&f.signer3, &tx_id).is_err());

    assert_eq!(token.transfers(), 1);
}
