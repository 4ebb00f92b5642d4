//! Key codec
//!
//! Builds and interprets the composite keys of the object-storage metadata
//! keyspace. A key is an ordered list of string components joined by a
//! single separator byte (`\`, ASCII 92) with no trailing separator.
//!
//! Components must not contain the separator byte; the codec does not
//! validate this and a component that does silently corrupts the key shape.
//!
//! ## Ordering
//!
//! Keys sort by raw byte value. Two encodings keep logical order and byte
//! order aligned:
//!
//! - Integer components (part numbers) are encoded as the 16-char lowercase
//!   hex of their fixed-width 8-byte big-endian form, so numeric order and
//!   lexicographic order agree and every encoded component has the same
//!   width.
//! - Multipart initiation times are complemented (`u64::MAX - t`) before
//!   encoding, so lexicographic key order is descending chronological
//!   order: the most recent upload scans first.

use crate::error::{AdminError, Result};
use crate::table::Table;

/// Separator byte between key components (`\`)
pub const SEPARATOR: u8 = b'\\';

/// Max-key suffix sentinel: appended to a prefix to form the open-ended
/// upper bound of a prefix scan
pub const MAX_KEY_SUFFIX: u8 = 0xFF;

/// Null version sentinel: an object version equal to this string is
/// omitted from the key entirely
pub const NULL_VERSION: &str = "0";

// =============================================================================
// Generic codec
// =============================================================================

/// Join components with the separator byte, dropping the trailing separator.
pub fn join(components: &[&str]) -> Vec<u8> {
    let mut key = Vec::with_capacity(
        components.iter().map(|c| c.len() + 1).sum::<usize>(),
    );
    for component in components {
        key.extend_from_slice(component.as_bytes());
        key.push(SEPARATOR);
    }
    key.pop();
    key
}

/// Split a key back into its raw components.
///
/// Inverse of [`join`] for components that contain no separator byte.
pub fn split(key: &[u8]) -> Vec<&[u8]> {
    key.split(|b| *b == SEPARATOR).collect()
}

/// Encode an integer as the 16-char lowercase hex of its big-endian
/// 8-byte form.
pub fn encode_u64(n: u64) -> String {
    format!("{:016x}", n)
}

// =============================================================================
// Per-table key builders
// =============================================================================

/// Key: `b\{bucketName}`
pub fn bucket_key(bucket: &str) -> Vec<u8> {
    join(&[Table::Bucket.prefix(), bucket])
}

/// Key: `u\{ownerId}\{bucketName}`
pub fn user_bucket_key(owner_id: &str, bucket: &str) -> Vec<u8> {
    join(&[Table::User.prefix(), owner_id, bucket])
}

/// Key: `c\{poolName}\{fsid}\{backend}`
pub fn cluster_key(pool: &str, fsid: &str, backend: &str) -> Vec<u8> {
    join(&[Table::Cluster.prefix(), pool, fsid, backend])
}

/// Key: `g\{poolName}\{fsid}\{objectId}`
pub fn gc_key(pool: &str, fsid: &str, object_id: &str) -> Vec<u8> {
    join(&[Table::Gc.prefix(), pool, fsid, object_id])
}

/// Key: `m\{bucketName}\{objectName}\{encodedTime}`
///
/// The initiation time is complemented before encoding so newer uploads
/// sort first.
pub fn multipart_key(bucket: &str, object: &str, initial_time: u64) -> Vec<u8> {
    let encoded_time = encode_u64(u64::MAX - initial_time);
    join(&[Table::Multipart.prefix(), bucket, object, &encoded_time])
}

/// Key: `p\{bucketName}\{objectName}\{uploadId}\{encodedPartNumber}`
///
/// `part_number` is the textual form supplied on the command line; a value
/// that does not parse as an unsigned integer is an [`AdminError::InvalidNumber`].
pub fn object_part_key(
    bucket: &str,
    object: &str,
    upload_id: &str,
    part_number: &str,
) -> Result<Vec<u8>> {
    let number: u64 = part_number
        .parse()
        .map_err(|_| AdminError::InvalidNumber(part_number.to_string()))?;
    let encoded = encode_u64(number);
    Ok(join(&[
        Table::Part.prefix(),
        bucket,
        object,
        upload_id,
        &encoded,
    ]))
}

/// Key: `{bucketName}\{objectName}` or `{bucketName}\{objectName}\{version}`
///
/// A version equal to [`NULL_VERSION`] selects the unversioned form: the
/// component is omitted, not encoded literally.
pub fn object_key(bucket: &str, object: &str, version: &str) -> Vec<u8> {
    if version == NULL_VERSION {
        join(&[bucket, object])
    } else {
        join(&[bucket, object, version])
    }
}
