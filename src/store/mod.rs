//! Store Module
//!
//! The seam between this tool and the transactional key-value store it
//! operates on. The store's transaction engine is an external collaborator:
//! everything above this module sees only [`KvStore`] and [`Transaction`].
//!
//! ## Transaction model
//!
//! - `begin` captures a snapshot; reads observe the state at `begin`.
//! - `set`/`delete` buffer mutations; `commit` applies them atomically.
//! - Dropping a transaction without committing discards all buffered
//!   mutations, so every early-return path is an implicit rollback.
//!
//! ## Backends
//!
//! - [`memory::MemStore`] -- shared in-memory `BTreeMap` (always available)
//! - [`file::FileStore`] -- single-file persistent snapshot
//!
//! A remote driver is a build-time concern: it implements the same traits
//! and slots in without touching the access layer.

use std::collections::{btree_map, BTreeMap};
use std::ops::Bound;

use crate::error::Result;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemStore;

/// A key/value record returned from read operations. No schema is imposed
/// on the value at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// A transactional store: creates one transaction per operation.
pub trait KvStore {
    type Txn: Transaction;

    /// Begin a new transaction against the current store state.
    fn begin(&self) -> Result<Self::Txn>;
}

/// A single transaction: snapshot reads, buffered writes, atomic commit.
pub trait Transaction {
    /// Forward iterator over a key range of this transaction's snapshot.
    type Range<'a>: Iterator<Item = Result<KeyValue>>
    where
        Self: 'a;

    /// Read one key from the snapshot.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Buffer a write of `key` to `value`.
    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Buffer a deletion of `key`.
    fn delete(&mut self, key: &[u8]) -> Result<()>;

    /// Open a forward iterator over `[start, end)` in ascending byte order.
    /// `end = None` means unbounded upward. The iterator must be dropped
    /// before the transaction is committed or released.
    fn range<'a>(&'a self, start: &[u8], end: Option<&[u8]>) -> Result<Self::Range<'a>>;

    /// Apply all buffered mutations atomically.
    fn commit(self) -> Result<()>;

    /// Discard all buffered mutations and release the transaction.
    fn rollback(self) -> Result<()>;
}

// =============================================================================
// Shared snapshot iteration
// =============================================================================

/// Range iterator over an owned snapshot map, shared by the bundled
/// backends.
pub struct SnapshotRange<'a> {
    inner: btree_map::Range<'a, Vec<u8>, Vec<u8>>,
}

impl Iterator for SnapshotRange<'_> {
    type Item = Result<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| {
            Ok(KeyValue {
                key: k.clone(),
                value: v.clone(),
            })
        })
    }
}

/// Open a `[start, end)` range over a snapshot map; `end = None` is
/// unbounded upward.
pub(crate) fn snapshot_range<'a>(
    snapshot: &'a BTreeMap<Vec<u8>, Vec<u8>>,
    start: &[u8],
    end: Option<&[u8]>,
) -> SnapshotRange<'a> {
    let start_bound = Bound::Included(start.to_vec());
    let end_bound = match end {
        Some(end) => Bound::Excluded(end.to_vec()),
        None => Bound::Unbounded,
    };
    SnapshotRange {
        inner: snapshot.range((start_bound, end_bound)),
    }
}
