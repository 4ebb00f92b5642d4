//! Tests for the key codec and table registry
//!
//! These tests verify:
//! - Join/split round-trips and exact key layouts per table
//! - Lexicographic ordering of encoded numeric and time components
//! - Sentinel handling (null version, max-key suffix)
//! - Registry prefixes and scan bounds

use std::str::FromStr;

use kvadmin::keys::{self, MAX_KEY_SUFFIX, NULL_VERSION, SEPARATOR};
use kvadmin::{AdminError, Table};

// =============================================================================
// Generic Codec
// =============================================================================

#[test]
fn test_join_components_with_separator() {
    assert_eq!(keys::join(&["b", "mybucket"]), b"b\\mybucket".to_vec());
    assert_eq!(keys::join(&["one"]), b"one".to_vec());
}

#[test]
fn test_join_drops_trailing_separator() {
    let key = keys::join(&["a", "b", "c"]);
    assert_eq!(key, b"a\\b\\c".to_vec());
    assert_ne!(*key.last().unwrap(), SEPARATOR);
}

#[test]
fn test_split_round_trip() {
    let components = ["m", "bucket", "object", "cafe0123"];
    let key = keys::join(&components);
    let split: Vec<&[u8]> = keys::split(&key);
    let expected: Vec<&[u8]> = components.iter().map(|c| c.as_bytes()).collect();
    assert_eq!(split, expected);
}

#[test]
fn test_join_empty_component_is_preserved() {
    // bucket_key("") must still carry the prefix and separator
    assert_eq!(keys::join(&["b", ""]), b"b\\".to_vec());
}

#[test]
fn test_encode_u64_fixed_width_hex() {
    assert_eq!(keys::encode_u64(0), "0000000000000000");
    assert_eq!(keys::encode_u64(255), "00000000000000ff");
    assert_eq!(keys::encode_u64(u64::MAX), "ffffffffffffffff");
    assert_eq!(keys::encode_u64(1).len(), 16);
}

#[test]
fn test_encode_u64_preserves_numeric_order() {
    // Fixed width makes lexicographic order equal numeric order even
    // across digit-count boundaries.
    let pairs = [(9u64, 10u64), (255, 256), (1, u64::MAX), (0, 1)];
    for (small, large) in pairs {
        assert!(keys::encode_u64(small) < keys::encode_u64(large));
    }
}

// =============================================================================
// Per-Table Key Builders
// =============================================================================

#[test]
fn test_bucket_key_layout() {
    assert_eq!(keys::bucket_key("b1"), b"b\\b1".to_vec());
}

#[test]
fn test_user_bucket_key_layout() {
    assert_eq!(keys::user_bucket_key("owner", "b1"), b"u\\owner\\b1".to_vec());
}

#[test]
fn test_cluster_key_layout() {
    assert_eq!(
        keys::cluster_key("pool", "fsid-1", "backend"),
        b"c\\pool\\fsid-1\\backend".to_vec()
    );
}

#[test]
fn test_gc_key_layout() {
    assert_eq!(
        keys::gc_key("pool", "fsid-1", "oid-9"),
        b"g\\pool\\fsid-1\\oid-9".to_vec()
    );
}

#[test]
fn test_object_key_null_version_omitted() {
    // The sentinel selects the unversioned form: no empty placeholder
    assert_eq!(
        keys::object_key("b1", "o1", NULL_VERSION),
        keys::join(&["b1", "o1"])
    );
    assert_eq!(keys::object_key("b1", "o1", "0"), b"b1\\o1".to_vec());
}

#[test]
fn test_object_key_with_version() {
    assert_eq!(
        keys::object_key("b1", "o1", "cafebabe"),
        b"b1\\o1\\cafebabe".to_vec()
    );
}

#[test]
fn test_multipart_key_layout() {
    // Time is complemented then hex-encoded: u64::MAX - 1 = 0xfffffffffffffffe
    assert_eq!(
        keys::multipart_key("b1", "o1", 1),
        b"m\\b1\\o1\\fffffffffffffffe".to_vec()
    );
}

#[test]
fn test_multipart_keys_sort_descending_by_time() {
    let older = keys::multipart_key("b1", "o1", 1_000);
    let newer = keys::multipart_key("b1", "o1", 2_000);
    // Most recent upload scans first
    assert!(newer < older);
    assert!(!(older < newer));
}

#[test]
fn test_object_part_key_layout() {
    assert_eq!(
        keys::object_part_key("b1", "o1", "up1", "3").unwrap(),
        b"p\\b1\\o1\\up1\\0000000000000003".to_vec()
    );
}

#[test]
fn test_object_part_keys_sort_ascending_by_number() {
    let part2 = keys::object_part_key("b1", "o1", "up1", "2").unwrap();
    let part10 = keys::object_part_key("b1", "o1", "up1", "10").unwrap();
    // Numeric order despite textual encoding
    assert!(part2 < part10);
}

#[test]
fn test_object_part_key_rejects_non_numeric() {
    let err = keys::object_part_key("b1", "o1", "up1", "two").unwrap_err();
    assert!(matches!(err, AdminError::InvalidNumber(_)));

    let err = keys::object_part_key("b1", "o1", "up1", "-1").unwrap_err();
    assert!(matches!(err, AdminError::InvalidNumber(_)));
}

// =============================================================================
// Table Registry
// =============================================================================

#[test]
fn test_table_prefixes_are_fixed_and_distinct() {
    // Table-driven: every name maps to its expected prefix
    let expected = [
        ("cluster", "c"),
        ("bucket", "b"),
        ("user", "u"),
        ("object", ""),
        ("multipart", "m"),
        ("part", "p"),
        ("gc", "g"),
        ("freezer", "f"),
    ];
    for (name, prefix) in expected {
        let table = Table::from_str(name).unwrap();
        assert_eq!(table.prefix(), prefix, "prefix mismatch for {}", name);
        assert_eq!(table.name(), name);
    }

    // Prefixes of prefixed tables are distinct single characters
    let mut prefixes: Vec<&str> = Table::ALL
        .iter()
        .map(|t| t.prefix())
        .filter(|p| !p.is_empty())
        .collect();
    assert!(prefixes.iter().all(|p| p.len() == 1));
    prefixes.sort_unstable();
    prefixes.dedup();
    assert_eq!(prefixes.len(), 7);
}

#[test]
fn test_unknown_table_name_is_rejected() {
    let err = Table::from_str("lifecycle").unwrap_err();
    assert!(matches!(err, AdminError::InvalidTable(_)));
}

#[test]
fn test_scan_bounds_prefixed_table() {
    assert_eq!(Table::Bucket.scan_start(""), b"b\\".to_vec());
    assert_eq!(Table::Bucket.scan_start("b1"), b"b\\b1".to_vec());
    assert_eq!(Table::Bucket.scan_end(), vec![b'b', SEPARATOR, MAX_KEY_SUFFIX]);
}

#[test]
fn test_scan_bounds_object_table() {
    // No prefix: bounds are the bare start key and the max-suffix byte
    assert_eq!(Table::Object.scan_start("b1"), b"b1".to_vec());
    assert_eq!(Table::Object.scan_end(), vec![MAX_KEY_SUFFIX]);
}

#[test]
fn test_table_keys_fall_inside_their_scan_bounds() {
    let samples = [
        (Table::Bucket, keys::bucket_key("b1")),
        (Table::User, keys::user_bucket_key("owner", "b1")),
        (Table::Cluster, keys::cluster_key("p", "f", "be")),
        (Table::Gc, keys::gc_key("p", "f", "oid")),
        (Table::Multipart, keys::multipart_key("b1", "o1", 7)),
        (
            Table::Part,
            keys::object_part_key("b1", "o1", "up", "1").unwrap(),
        ),
    ];

    for (table, key) in &samples {
        let start = table.scan_start("");
        let end = table.scan_end();
        assert!(
            *key >= start && *key < end,
            "{} key escaped its scan range",
            table
        );

        // And no other prefixed table's range captures it
        for other in Table::ALL {
            if other == *table || other.prefix().is_empty() {
                continue;
            }
            let in_range = *key >= other.scan_start("") && *key < other.scan_end();
            assert!(!in_range, "{} key captured by {} range", table, other);
        }
    }
}
