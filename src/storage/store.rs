// LedgerStore - Keyed byte storage consumed by the ledger
//
// Implementations provide read-your-writes consistency within one
// invocation. Conflict detection across concurrent invocations is the
// backend's business, not the ledger's.

use thiserror::Error;

/// Errors from storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to open database: {0}")]
    OpenFailed(String),

    #[error("Database operation failed: {0}")]
    DatabaseError(String),

    #[error("Flush failed: {0}")]
    FlushFailed(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl From<sled::Error> for StoreError {
    fn from(err: sled::Error) -> Self {
        StoreError::DatabaseError(err.to_string())
    }
}

/// Ordered key/value writes produced by one logical operation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteSet {
    writes: Vec<(Vec<u8>, Vec<u8>)>,
}

impl WriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a write; later writes to the same key win
    pub fn put(&mut self, key: impl Into<Vec<u8>>, value: Vec<u8>) {
        self.writes.push((key.into(), value));
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Keys in write order
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.writes.iter().map(|(key, _)| key.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.writes
            .iter()
            .map(|(key, value)| (key.as_slice(), value.as_slice()))
    }
}

impl IntoIterator for WriteSet {
    type Item = (Vec<u8>, Vec<u8>);
    type IntoIter = std::vec::IntoIter<(Vec<u8>, Vec<u8>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}

/// Keyed byte store the ledger reads and writes participants through
pub trait LedgerStore: Send + Sync {
    /// Fetch the value under `key`, `None` if absent
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Apply a write-set.
    ///
    /// The default applies writes one at a time in order and stops at the
    /// first failure. Writes before the failing one stay applied and are not
    /// rolled back. Backends with batch support override this to commit the
    /// whole set or nothing.
    fn commit(&self, writes: WriteSet) -> Result<(), StoreError> {
        for (key, value) in writes.iter() {
            self.put(key, value)?;
        }
        Ok(())
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn commit(&self, writes: WriteSet) -> Result<(), StoreError> {
        (**self).commit(writes)
    }
}
