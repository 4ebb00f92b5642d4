//! Tests for the command handlers
//!
//! Drives the handlers the way the binary does: a Config built from flags,
//! a client over the memory store, results checked through the access
//! layer.

use kvadmin::commands::{self, ScanOpts};
use kvadmin::transcode;
use kvadmin::{AdminError, Config, KvClient, MemStore};

fn client() -> KvClient<MemStore> {
    KvClient::new(MemStore::new())
}

#[test]
fn test_set_stores_raw_text() {
    let config = Config::default();
    let client = client();

    commands::set(&config, &client, "b\\b1", "v1").unwrap();

    let kv = client.get(b"b\\b1").unwrap();
    assert_eq!(kv.value, b"v1".to_vec());
}

#[test]
fn test_set_byte_literal_modes() {
    let config = Config::builder().key_bytes(true).value_bytes(true).build();
    let client = client();

    commands::set(&config, &client, "[98 92 255]", "[0 1 2]").unwrap();

    let kv = client.get(&[98, 92, 255]).unwrap();
    assert_eq!(kv.value, vec![0, 1, 2]);
}

#[test]
fn test_set_with_transcoding_stores_encoded_value() {
    let config = Config::builder().transcode_values(true).build();
    let client = client();

    commands::set(&config, &client, "k", "payload").unwrap();

    let stored = client.get(b"k").unwrap().value;
    assert_ne!(stored, b"payload".to_vec());
    assert_eq!(transcode::decode_value(&stored).unwrap(), b"payload".to_vec());
}

#[test]
fn test_get_with_transcoding_rejects_raw_value() {
    // A value stored without transcoding cannot be decoded on the way out
    let config = Config::builder().transcode_values(true).build();
    let client = client();
    client.put(&[(b"k".to_vec(), b"xy".to_vec())]).unwrap();

    let err = commands::get(&config, &client, "k").unwrap_err();
    assert!(matches!(err, AdminError::Transcode(_)));
}

#[test]
fn test_del_removes_key() {
    let config = Config::default();
    let client = client();
    client.put(&[(b"k".to_vec(), b"v".to_vec())]).unwrap();

    commands::del(&config, &client, "k").unwrap();
    assert!(matches!(client.get(b"k"), Err(AdminError::KeyNotFound)));
}

#[test]
fn test_scan_rejects_unknown_table() {
    let config = Config::default();
    let opts = ScanOpts {
        table: Some("widgets".to_string()),
        limit: 10,
        ..Default::default()
    };

    let err = commands::scan(&config, &client(), &opts).unwrap_err();
    assert!(matches!(err, AdminError::InvalidTable(_)));
}

#[test]
fn test_scan_table_and_range_variants_run() {
    let config = Config::default();
    let client = client();
    client
        .put(&[
            (b"b\\b1".to_vec(), b"v1".to_vec()),
            (b"u\\owner\\b1".to_vec(), b"v2".to_vec()),
        ])
        .unwrap();

    let table = ScanOpts {
        table: Some("bucket".to_string()),
        limit: 10,
        ..Default::default()
    };
    commands::scan(&config, &client, &table).unwrap();

    // Range variant with the max-suffix token in the end key
    let range = ScanOpts {
        start_key: Some("b\\".to_string()),
        end_key: Some("b\\$".to_string()),
        limit: 10,
        ..Default::default()
    };
    commands::scan(&config, &client, &range).unwrap();
}
