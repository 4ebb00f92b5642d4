//! Single-file persistent store.
//!
//! The whole keyspace is persisted as one snapshot file. Each transaction
//! loads the snapshot at `begin`; `commit` rewrites the file through a
//! sibling temp file and an atomic rename, so a crash mid-commit leaves
//! the previous snapshot intact.
//!
//! ## File Format
//! ```text
//! ┌──────────┬─────────────┬──────────┬────────────────────────┐
//! │Magic (4) │ Version (2) │ CRC (4)  │ bincode(Snapshot)      │
//! └──────────┴─────────────┴──────────┴────────────────────────┘
//! ```
//!
//! Magic, version, and CRC are checked on load; a mismatch is a store
//! error, never a panic. A missing file is an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, Result};
use crate::store::{snapshot_range, KvStore, SnapshotRange, Transaction};

/// File magic: identifies a kvadmin snapshot file
const MAGIC: &[u8; 4] = b"KVAD";

/// On-disk format version
const FORMAT_VERSION: u16 = 1;

/// Header size: magic (4) + version (2) + crc (4)
const HEADER_SIZE: usize = 10;

/// On-disk snapshot payload
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

/// Store persisted as a single snapshot file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`. The file is not created until the first
    /// committed mutation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, validating magic, version, and checksum.
    fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            return Ok(Snapshot::default());
        }

        let bytes = fs::read(&self.path)?;
        if bytes.len() < HEADER_SIZE {
            return Err(AdminError::Store(format!(
                "snapshot file truncated: {} bytes",
                bytes.len()
            )));
        }

        if &bytes[0..4] != MAGIC {
            return Err(AdminError::Store(format!(
                "bad snapshot magic in {}",
                self.path.display()
            )));
        }

        let version = u16::from_be_bytes([bytes[4], bytes[5]]);
        if version != FORMAT_VERSION {
            return Err(AdminError::Store(format!(
                "unsupported snapshot format version {}",
                version
            )));
        }

        let expected_crc = u32::from_be_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]);
        let payload = &bytes[HEADER_SIZE..];
        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            return Err(AdminError::Store(format!(
                "snapshot checksum mismatch: expected {:08x}, got {:08x}",
                expected_crc, actual_crc
            )));
        }

        bincode::deserialize(payload)
            .map_err(|e| AdminError::Store(format!("snapshot decode failed: {}", e)))
    }

    /// Persist a snapshot: write a sibling temp file, then rename over the
    /// live file.
    fn persist(&self, snapshot: &Snapshot) -> Result<()> {
        let payload = bincode::serialize(snapshot)
            .map_err(|e| AdminError::Store(format!("snapshot encode failed: {}", e)))?;

        let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&FORMAT_VERSION.to_be_bytes());
        bytes.extend_from_slice(&crc32fast::hash(&payload).to_be_bytes());
        bytes.extend_from_slice(&payload);

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    type Txn = FileTxn;

    fn begin(&self) -> Result<Self::Txn> {
        Ok(FileTxn {
            snapshot: self.load()?.entries,
            writes: Vec::new(),
            deletes: Vec::new(),
            store: self.clone(),
        })
    }
}

/// Transaction over a snapshot loaded from disk
pub struct FileTxn {
    snapshot: BTreeMap<Vec<u8>, Vec<u8>>,
    writes: Vec<(Vec<u8>, Vec<u8>)>,
    deletes: Vec<Vec<u8>>,
    store: FileStore,
}

impl Transaction for FileTxn {
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

    fn commit(mut self) -> Result<()> {
        if self.writes.is_empty() && self.deletes.is_empty() {
            return Ok(());
        }
        for key in self.deletes.drain(..) {
            self.snapshot.remove(&key);
        }
        for (key, value) in self.writes.drain(..) {
            self.snapshot.insert(key, value);
        }
        let snapshot = Snapshot {
            entries: self.snapshot,
        };
        self.store.persist(&snapshot)
    }

    fn rollback(self) -> Result<()> {
        Ok(())
    }
}
