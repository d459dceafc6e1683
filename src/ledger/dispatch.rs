// Operation dispatch - maps operation names and string arguments onto the ledger

use crate::ledger::{Ledger, LedgerError};
use crate::storage::LedgerStore;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Success payload of an invocation
pub type Payload = Option<Vec<u8>>;

/// The operations a ledger can be invoked with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Insert a new participant
    Create,
    /// Return the encoded participant record
    Read,
    /// Move points between participants
    Transfer,
}

/// Accepted operation names, including the legacy entry-point names
const OPERATION_NAMES: &[(&str, Operation)] = &[
    ("create", Operation::Create),
    ("initParty", Operation::Create),
    ("read", Operation::Read),
    ("readParty", Operation::Read),
    ("transfer", Operation::Transfer),
    ("transferPoints", Operation::Transfer),
];

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Create, Operation::Read, Operation::Transfer];

    /// Resolve an operation by any of its accepted names
    pub fn lookup(name: &str) -> Option<Self> {
        OPERATION_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, op)| *op)
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Transfer => "transfer",
        }
    }

    /// All names that resolve to this operation
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        OPERATION_NAMES
            .iter()
            .filter(move |(_, op)| *op == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| LedgerError::UnknownOperation(s.to_string()))
    }
}

impl<S: LedgerStore> Ledger<S> {
    /// Run one operation with positional string arguments
    pub fn invoke<A: AsRef<str>>(&self, op: Operation, args: &[A]) -> Result<Payload, LedgerError> {
        debug!(%op, args = args.len(), "invoke");
        match op {
            Operation::Create => self.create(args).map(|_| None),
            Operation::Read => self.read(args).map(Some),
            Operation::Transfer => self.transfer(args).map(|_| None),
        }
    }

    /// Resolve `function` by name and run it
    pub fn dispatch<A: AsRef<str>>(&self, function: &str, args: &[A]) -> Result<Payload, LedgerError> {
        let op = function.parse::<Operation>().map_err(|e| {
            warn!(function, "invoke did not find function");
            e
        })?;
        self.invoke(op, args)
    }
}
