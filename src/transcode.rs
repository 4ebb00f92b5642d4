//! Byte and value transcoders
//!
//! Two concerns live here:
//!
//! - Parsing and formatting the textual byte-array literal (`[1 2 255]`)
//!   used to supply or display raw byte sequences that are not valid text.
//! - The optional reversible binary value transform applied before storage
//!   and after retrieval. The codec is opaque to the rest of the tool; the
//!   only contract is `decode(encode(v)) == v`.

use crate::config::Config;
use crate::error::{AdminError, Result};

// =============================================================================
// Byte-array literals
// =============================================================================

/// Parse a byte-array literal: optional enclosing `[`/`]`, space-separated
/// decimal integers each in `0..=255`.
///
/// `"[1 2 255]"` and `"1 2 255"` both yield `vec![1, 2, 255]`. Any token
/// that is non-numeric or out of range is an [`AdminError::InvalidByteLiteral`].
pub fn parse_byte_literal(s: &str) -> Result<Vec<u8>> {
    let trimmed = s.strip_prefix('[').unwrap_or(s);
    let trimmed = trimmed.strip_suffix(']').unwrap_or(trimmed);

    let mut bytes = Vec::new();
    for token in trimmed.split(' ') {
        let byte: u8 = token
            .parse()
            .map_err(|_| AdminError::InvalidByteLiteral(token.to_string()))?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Format bytes as the literal syntax accepted by [`parse_byte_literal`].
pub fn format_byte_literal(bytes: &[u8]) -> String {
    let tokens: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
    format!("[{}]", tokens.join(" "))
}

/// Resolve key text into raw bytes per the configured key mode.
pub fn resolve_key(config: &Config, text: &str) -> Result<Vec<u8>> {
    if config.key_bytes {
        parse_byte_literal(text)
    } else {
        Ok(text.as_bytes().to_vec())
    }
}

/// Resolve value text into raw bytes per the configured value mode.
pub fn resolve_value(config: &Config, text: &str) -> Result<Vec<u8>> {
    if config.value_bytes {
        parse_byte_literal(text)
    } else {
        Ok(text.as_bytes().to_vec())
    }
}

// =============================================================================
// Binary value transcoding
// =============================================================================

/// Encode a value through the binary codec (applied before put when
/// transcoding is enabled).
pub fn encode_value(value: &[u8]) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| AdminError::Transcode(e.to_string()))
}

/// Decode a value through the binary codec (applied after get when
/// transcoding is enabled).
pub fn decode_value(encoded: &[u8]) -> Result<Vec<u8>> {
    bincode::deserialize(encoded).map_err(|e| AdminError::Transcode(e.to_string()))
}
