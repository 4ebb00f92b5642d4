//! Command handlers
//!
//! One handler per subcommand. Each takes the invocation [`Config`] by
//! reference plus the access-layer client, resolves textual arguments into
//! raw keys and values, performs a single store operation, and prints
//! human-readable result lines to stdout. Errors propagate to the binary,
//! which reports them and exits non-zero.

use crate::client::KvClient;
use crate::config::Config;
use crate::error::Result;
use crate::keys::{self, MAX_KEY_SUFFIX, NULL_VERSION, SEPARATOR};
use crate::store::KvStore;
use crate::table::Table;
use crate::transcode;

/// Arguments of the `scan` subcommand.
///
/// With a table name, bounds come from the table registry and the
/// bucket/object/version context flags may pre-fill the start key. Without
/// one, the literal start/end bounds are used directly and `$` in the end
/// key expands to the max-key suffix byte.
#[derive(Debug, Default)]
pub struct ScanOpts {
    pub table: Option<String>,
    pub start_key: Option<String>,
    pub end_key: Option<String>,
    pub limit: i64,
    pub bucket: Option<String>,
    pub object: Option<String>,
    pub version: Option<String>,
}

/// `set <key> <value>`: encode per the active modes and put one pair.
pub fn set<S: KvStore>(config: &Config, client: &KvClient<S>, key: &str, value: &str) -> Result<()> {
    let k = transcode::resolve_key(config, key)?;
    let mut v = transcode::resolve_value(config, value)?;
    if config.transcode_values {
        v = transcode::encode_value(&v)?;
    }
    client.put(&[(k.clone(), v)])?;
    println!("Set key {} success.", String::from_utf8_lossy(&k));
    Ok(())
}

/// `get <key>`: read one key and print its value.
pub fn get<S: KvStore>(config: &Config, client: &KvClient<S>, key: &str) -> Result<()> {
    let k = transcode::resolve_key(config, key)?;
    let kv = client.get(&k)?;
    let value = if config.transcode_values {
        transcode::decode_value(&kv.value)?
    } else {
        kv.value
    };
    println!("{}", String::from_utf8_lossy(&value));
    Ok(())
}

/// `del <key>`: delete one key.
pub fn del<S: KvStore>(config: &Config, client: &KvClient<S>, key: &str) -> Result<()> {
    let k = transcode::resolve_key(config, key)?;
    client.delete(std::slice::from_ref(&k))?;
    println!("Delete key {} success.", String::from_utf8_lossy(&k));
    Ok(())
}

/// `scan [TABLE] [options]`: range-read and print each record.
pub fn scan<S: KvStore>(config: &Config, client: &KvClient<S>, opts: &ScanOpts) -> Result<()> {
    let (start, end) = scan_bounds(config, opts)?;

    println!(
        "Start: {} End: {} Limit: {}",
        String::from_utf8_lossy(&start),
        end.as_deref()
            .map(String::from_utf8_lossy)
            .unwrap_or_default(),
        opts.limit
    );

    let entries = client.scan(&start, end.as_deref(), opts.limit)?;
    for kv in &entries {
        println!(
            "{} {}",
            String::from_utf8_lossy(&kv.key),
            transcode::format_byte_literal(&kv.key)
        );
        let value = if config.transcode_values {
            transcode::decode_value(&kv.value)?
        } else {
            kv.value.clone()
        };
        println!("{}", String::from_utf8_lossy(&value));
        println!("----------------");
    }
    Ok(())
}

/// Resolve the scan bounds from either the table registry or literal keys.
fn scan_bounds(config: &Config, opts: &ScanOpts) -> Result<(Vec<u8>, Option<Vec<u8>>)> {
    if let Some(name) = &opts.table {
        let table: Table = name.parse()?;
        let start = match &opts.start_key {
            Some(start) => table.scan_start(start),
            None => context_start(table, opts),
        };
        return Ok((start, Some(table.scan_end())));
    }

    let start = match &opts.start_key {
        Some(start) => transcode::resolve_key(config, start)?,
        None => Vec::new(),
    };
    let end = match &opts.end_key {
        Some(end) if config.key_bytes => Some(transcode::parse_byte_literal(end)?),
        Some(end) => Some(expand_max_suffix(end)),
        None => None,
    };
    Ok((start, end))
}

/// Start key pre-filled from the bucket/object/version context flags, or
/// the start of the table when none apply.
fn context_start(table: Table, opts: &ScanOpts) -> Vec<u8> {
    let bucket = match &opts.bucket {
        Some(bucket) => bucket.as_str(),
        None => return table.scan_start(""),
    };

    match table {
        Table::Object => match &opts.object {
            Some(object) => {
                let version = opts.version.as_deref().unwrap_or(NULL_VERSION);
                keys::object_key(bucket, object, version)
            }
            None => {
                // All objects of one bucket: "bucket\" is the smallest
                // possible object key of that bucket.
                let mut start = bucket.as_bytes().to_vec();
                start.push(SEPARATOR);
                start
            }
        },
        Table::Multipart | Table::Part => match &opts.object {
            Some(object) => table.scan_start(&format!(
                "{}{}{}",
                bucket, SEPARATOR as char, object
            )),
            None => table.scan_start(bucket),
        },
        _ => table.scan_start(bucket),
    }
}

/// Expand each `$` in an end-key literal to the max-key suffix byte.
fn expand_max_suffix(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for b in s.bytes() {
        if b == b'$' {
            out.push(MAX_KEY_SUFFIX);
        } else {
            out.push(b);
        }
    }
    out
}
