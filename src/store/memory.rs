//! In-memory store backed by a shared `BTreeMap`.
//!
//! A fully functional [`KvStore`] implementation for tests and dry runs.
//! All data lives behind a `parking_lot::RwLock`; each transaction clones
//! a point-in-time snapshot at `begin` and applies buffered mutations
//! under the write lock at `commit`.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::store::{snapshot_range, KvStore, SnapshotRange, Transaction};

/// Shared in-memory key-value store
#[derive(Clone, Default)]
pub struct MemStore {
    data: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl MemStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KvStore for MemStore {
    type Txn = MemTxn;

    fn begin(&self) -> Result<Self::Txn> {
        Ok(MemTxn {
            snapshot: self.data.read().clone(),
            writes: Vec::new(),
            deletes: Vec::new(),
            data: Arc::clone(&self.data),
        })
    }
}

/// Transaction over a snapshot of the shared map
pub struct MemTxn {
    snapshot: BTreeMap<Vec<u8>, Vec<u8>>,
    writes: Vec<(Vec<u8>, Vec<u8>)>,
    deletes: Vec<Vec<u8>>,
    data: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl Transaction for MemTxn {
    type Range<'a>
        = SnapshotRange<'a>
    where
        Self: 'a;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.snapshot.get(key).cloned())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.writes.push((key.to_vec(), value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.deletes.push(key.to_vec());
        Ok(())
    }

    fn range<'a>(&'a self, start: &[u8], end: Option<&[u8]>) -> Result<Self::Range<'a>> {
        Ok(snapshot_range(&self.snapshot, start, end))
    }

    fn commit(self) -> Result<()> {
        // Deletes apply before writes, so a key both deleted and rewritten
        // in one transaction ends up written.
        let mut store = self.data.write();
        for key in self.deletes {
            store.remove(&key);
        }
        for (key, value) in self.writes {
            store.insert(key, value);
        }
        Ok(())
    }

    fn rollback(self) -> Result<()> {
        Ok(())
    }
}
