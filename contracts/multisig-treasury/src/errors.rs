use soroban_sdk::contracterror;

/// Errors returned by every entry point of the multisig treasury.
///
/// Codes are part of the public interface: callers observe them as
/// `Error(Contract, #n)`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultiSigError {
    /// Bad initialization arguments (zero or duplicate signer, quorum out of range)
    ConfigurationError = 1,
    /// Caller is not a registered signer
    Unauthorized = 2,
    /// Amount is zero or negative
    ZeroAmount = 3,
    /// Recipient or token is the zero address
    ZeroAddress = 4,
    /// Treasury holds less of the token than the requested amount
    InsufficientFunds = 5,
    /// No transaction with the given id
    NotFound = 6,
    /// Transaction has already been executed
    AlreadySettled = 7,
    /// Signer already approved this transaction
    DuplicateApproval = 8,
    /// The token contract rejected the call
    TransferFailed = 9,
    AlreadyInitialized = 10,
    NotInitialized = 11,
    Overflow = 12,
}
