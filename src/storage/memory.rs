// MemoryStore - In-memory LedgerStore with fault injection for tests

use crate::storage::store::{LedgerStore, StoreError};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// In-memory implementation of LedgerStore
///
/// Uses the default sequential `commit`, so a failing put inside a
/// write-set leaves the earlier writes applied.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
    failing_gets: RwLock<HashSet<Vec<u8>>>,
    failing_puts: RwLock<HashSet<Vec<u8>>>,
    put_count: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `get` of `key` fail
    pub fn fail_gets_on(&self, key: impl Into<Vec<u8>>) -> Result<(), StoreError> {
        self.failing_gets
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .insert(key.into());
        Ok(())
    }

    /// Make every `put` of `key` fail
    pub fn fail_puts_on(&self, key: impl Into<Vec<u8>>) -> Result<(), StoreError> {
        self.failing_puts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .insert(key.into());
        Ok(())
    }

    /// Number of successful puts so far
    pub fn put_count(&self) -> usize {
        self.put_count.load(Ordering::SeqCst)
    }

    /// Number of stored keys
    pub fn len(&self) -> Result<usize, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl LedgerStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let failing = self.failing_gets.read().map_err(|_| StoreError::LockPoisoned)?;
        if failing.contains(key) {
            return Err(StoreError::DatabaseError(format!(
                "injected get failure for {}",
                String::from_utf8_lossy(key)
            )));
        }

        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let failing = self.failing_puts.read().map_err(|_| StoreError::LockPoisoned)?;
        if failing.contains(key) {
            return Err(StoreError::DatabaseError(format!(
                "injected put failure for {}",
                String::from_utf8_lossy(key)
            )));
        }

        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_vec(), value.to_vec());
        self.put_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
