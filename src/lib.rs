// pointledger - keyed participant ledger with taxed point transfers
//
// participant: the record and its JSON encoding
// storage:     the key-value seam (sled and in-memory backends)
// ledger:      lifecycle, transfer engine and operation dispatch

pub mod ledger;
pub mod participant;
pub mod storage;

pub use ledger::{Ledger, LedgerConfig, LedgerError, Operation, Payload, TransferReceipt};
pub use participant::Participant;
pub use storage::{LedgerStore, MemoryStore, SledStore};
