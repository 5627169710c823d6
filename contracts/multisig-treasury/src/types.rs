use soroban_sdk::{contracttype, Address, Vec};

/// A proposed movement of tokens out of the treasury.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    /// Sequential id, starting at 1
    pub id: u64,
    /// Amount in the token's base units
    pub amount: i128,
    pub recipient: Address,
    /// Token contract the funds are held in
    pub token: Address,
    /// Signer who proposed the transfer
    pub initiator: Address,
    /// Number of distinct signers that approved, proposer included
    pub approvals: u32,
    pub approved_by: Vec<Address>,
    /// Set once the transfer has been executed; terminal
    pub settled: bool,
    pub created_at: u64,
    pub settled_at: Option<u64>,
}

impl Transaction {
    pub fn has_approved(&self, signer: &Address) -> bool {
        self.approved_by.contains(signer)
    }
}

/// Outcome of an approval call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalStatus {
    pub tx_id: u64,
    pub approvals: u32,
    pub settled: bool,
}
