// Storage module - PERSISTENCE
// The key-value seam the ledger runs on, with sled and in-memory backends

mod memory;
mod sled_store;
mod store;

pub use memory::MemoryStore;
pub use sled_store::{SledStore, StorageStats};
pub use store::{LedgerStore, StoreError, WriteSet};
