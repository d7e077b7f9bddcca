//! Reasons a contract call aborts.
//!
//! Every variant aborts the whole call. The `Display` text is the short reason string
//! reported back to the caller.

/// Failure of a contract operation, independent of the host it runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// The selector is not part of the contract's method table.
    #[error("Unknown method")]
    UnknownMethod,
    /// Total supply already equals the cap.
    #[error("Max supply reached")]
    SupplyExhausted,
    /// A checked counter increment overflowed.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
    /// Calldata is shorter than the arguments the method expects.
    #[error("Invalid calldata")]
    InvalidCalldata,
    /// No owner is recorded for the requested token id.
    #[error("Nonexistent token")]
    NonexistentToken,
    /// The token id already has an owner.
    #[error("Token already minted")]
    TokenAlreadyMinted,
    /// A slot holds a value of the wrong kind, or the counters disagree.
    #[error("Ledger state is corrupted")]
    CorruptedLedger,
    /// A text value does not fit its slot or a length prefix.
    #[error("Value too long")]
    ValueTooLong,
}
