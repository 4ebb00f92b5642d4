//! Transactional access layer
//!
//! Wraps the store's transaction interface with one method per tool
//! operation. Every method opens exactly one transaction, does its work,
//! and releases it: mutations commit on success, reads are released
//! without committing. Operations are never composed into a larger
//! transaction and are never retried here; any store failure propagates
//! to the caller unmodified.
//!
//! Early returns drop the transaction, which discards buffered mutations,
//! so the transaction resource is released on every exit path.

use crate::error::{AdminError, Result};
use crate::store::{KeyValue, KvStore, Transaction};

/// One-transaction-per-operation client over a [`KvStore`]
pub struct KvClient<S: KvStore> {
    store: S,
}

impl<S: KvStore> KvClient<S> {
    /// Wrap a store backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Write every pair in one transaction. All-or-nothing: if any set or
    /// the commit fails, no pair is durable.
    pub fn put(&self, pairs: &[(Vec<u8>, Vec<u8>)]) -> Result<()> {
        tracing::debug!(pairs = pairs.len(), "put");
        let mut txn = self.store.begin()?;
        for (key, value) in pairs {
            txn.set(key, value)?;
        }
        txn.commit()
    }

    /// Read one key. Absent keys are [`AdminError::KeyNotFound`].
    pub fn get(&self, key: &[u8]) -> Result<KeyValue> {
        tracing::debug!(key_len = key.len(), "get");
        let txn = self.store.begin()?;
        let value = txn.get(key)?;
        txn.rollback()?;
        match value {
            Some(value) => Ok(KeyValue {
                key: key.to_vec(),
                value,
            }),
            None => Err(AdminError::KeyNotFound),
        }
    }

    /// Delete every key in one transaction. Same all-or-nothing semantics
    /// as [`put`](Self::put).
    pub fn delete(&self, keys: &[Vec<u8>]) -> Result<()> {
        tracing::debug!(keys = keys.len(), "delete");
        let mut txn = self.store.begin()?;
        for key in keys {
            txn.delete(key)?;
        }
        txn.commit()
    }

    /// Collect up to `limit` entries from `[start, end)` in ascending key
    /// order. `end = None` means unbounded upward; `limit <= 0` yields an
    /// empty result without opening an iterator.
    pub fn scan(&self, start: &[u8], end: Option<&[u8]>, limit: i64) -> Result<Vec<KeyValue>> {
        tracing::debug!(limit, "scan");
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let txn = self.store.begin()?;
        let mut entries = Vec::new();
        {
            let mut iter = txn.range(start, end)?;
            while (entries.len() as i64) < limit {
                match iter.next() {
                    Some(kv) => entries.push(kv?),
                    None => break,
                }
            }
        }
        txn.rollback()?;
        Ok(entries)
    }
}
