// Ledger module - THE CORE
// Participant lifecycle, taxed transfers and operation dispatch over a LedgerStore

mod args;
mod config;
mod dispatch;
mod error;
mod lifecycle;
mod transfer;

pub use config::{AmountParsing, CategoryMatching, LedgerConfig};
pub use dispatch::{Operation, Payload};
pub use error::{LedgerError, RecordRole};
pub use transfer::TransferReceipt;

use crate::storage::LedgerStore;

/// Participant ledger over a keyed byte store
///
/// Every operation runs synchronously against the store: records are read,
/// changed in memory and written back. The ledger keeps no state of its own
/// between calls.
pub struct Ledger<S: LedgerStore> {
    store: S,
    config: LedgerConfig,
}

impl<S: LedgerStore> Ledger<S> {
    /// Create a ledger with the default configuration
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: LedgerConfig::default(),
        }
    }

    /// Create a ledger with a custom configuration
    pub fn with_config(store: S, config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Consume the ledger, handing back the store
    pub fn into_store(self) -> S {
        self.store
    }
}
