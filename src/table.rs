//! Table registry
//!
//! Maps each logical metadata table onto its partition of the flat key
//! space. Tables form a closed set of variants, each carrying its prefix
//! and scan bounds as data; there is no string-keyed lookup to drift out
//! of sync with the key builders.
//!
//! ## Key space partitioning
//!
//! ```text
//! Table      Prefix   Key component ordering
//! ---------  -------  -------------------------------------------------
//! cluster    c        prefix \ poolName \ fsid \ backend
//! bucket     b        prefix \ bucketName
//! user       u        prefix \ ownerId \ bucketName
//! object     (none)   bucketName \ objectName [ \ version ]
//! multipart  m        prefix \ bucketName \ objectName \ encodedTime
//! part       p        prefix \ bucketName \ objectName \ uploadId \ partNo
//! gc         g        prefix \ poolName \ fsid \ objectId
//! freezer    f        prefix \ ...
//! ```
//!
//! Prefixes are distinct single characters, so a prefix-bounded scan
//! returns keys of exactly one table. The object table carries no prefix
//! and is distinguished by its range bounds alone.

use std::fmt;
use std::str::FromStr;

use crate::error::AdminError;
use crate::keys::{MAX_KEY_SUFFIX, SEPARATOR};

/// A logical metadata table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Cluster,
    Bucket,
    User,
    Object,
    Multipart,
    Part,
    Gc,
    Freezer,
}

impl Table {
    /// Every known table, in prefix order
    pub const ALL: [Table; 8] = [
        Table::Bucket,
        Table::Cluster,
        Table::Freezer,
        Table::Gc,
        Table::Multipart,
        Table::Part,
        Table::User,
        Table::Object,
    ];

    /// The table's command-line name
    pub fn name(&self) -> &'static str {
        match self {
            Table::Cluster => "cluster",
            Table::Bucket => "bucket",
            Table::User => "user",
            Table::Object => "object",
            Table::Multipart => "multipart",
            Table::Part => "part",
            Table::Gc => "gc",
            Table::Freezer => "freezer",
        }
    }

    /// Fixed key prefix. The object table has none.
    pub fn prefix(&self) -> &'static str {
        match self {
            Table::Cluster => "c",
            Table::Bucket => "b",
            Table::User => "u",
            Table::Object => "",
            Table::Multipart => "m",
            Table::Part => "p",
            Table::Gc => "g",
            Table::Freezer => "f",
        }
    }

    /// Inclusive start bound for a scan of this table, beginning at
    /// `start` (which may be empty to cover the whole table).
    pub fn scan_start(&self, start: &str) -> Vec<u8> {
        let mut key = self.prefixed_base();
        key.extend_from_slice(start.as_bytes());
        key
    }

    /// Exclusive end bound covering all keys of this table: the prefix
    /// extended with the max-key suffix byte.
    pub fn scan_end(&self) -> Vec<u8> {
        let mut key = self.prefixed_base();
        key.push(MAX_KEY_SUFFIX);
        key
    }

    /// `prefix` + separator, or empty for the unprefixed object table
    fn prefixed_base(&self) -> Vec<u8> {
        let prefix = self.prefix();
        if prefix.is_empty() {
            return Vec::new();
        }
        let mut base = prefix.as_bytes().to_vec();
        base.push(SEPARATOR);
        base
    }
}

impl FromStr for Table {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cluster" => Ok(Table::Cluster),
            "bucket" => Ok(Table::Bucket),
            "user" => Ok(Table::User),
            "object" => Ok(Table::Object),
            "multipart" => Ok(Table::Multipart),
            "part" => Ok(Table::Part),
            "gc" => Ok(Table::Gc),
            "freezer" => Ok(Table::Freezer),
            other => Err(AdminError::InvalidTable(other.to_string())),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
