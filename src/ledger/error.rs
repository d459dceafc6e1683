use crate::participant::CodecError;
use crate::storage::StoreError;
use std::fmt;
use thiserror::Error;

/// Which record a lookup was for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordRole {
    Participant,
    Sender,
    Receiver,
    TaxAuthority,
}

impl fmt::Display for RecordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordRole::Participant => "Participant",
            RecordRole::Sender => "Sender",
            RecordRole::Receiver => "Receiver",
            RecordRole::TaxAuthority => "Tax authority",
        };
        f.write_str(label)
    }
}

/// Errors returned by ledger operations
///
/// Every variant is terminal for the operation that raised it.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    ArgumentCount {
        operation: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("{position} argument must be a non-empty string")]
    ArgumentEmpty { position: &'static str },

    #[error("{position} argument must be a numeric string, got {value:?}")]
    ArgumentType {
        position: &'static str,
        value: String,
    },

    #[error("This participant already exists: {0}")]
    AlreadyExists(String),

    #[error("{role} does not exist: {name}")]
    NotFound { role: RecordRole, name: String },

    #[error("Record serialization failed: {0}")]
    Serialization(#[from] CodecError),

    #[error("Tax authority cannot participate in a transfer: {0}")]
    CategoryRestriction(String),

    #[error("Insufficient balance for {name}: available {available}, required {required}")]
    InsufficientBalance {
        name: String,
        available: i64,
        required: i64,
    },

    #[error("Balance would overflow for {0}")]
    BalanceOverflow(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),

    #[error("Received unknown function invocation: {0}")]
    UnknownOperation(String),

    #[error("Invalid ledger config: {0}")]
    InvalidConfig(String),
}
