//! Error types for kvadmin
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using AdminError
pub type Result<T> = std::result::Result<T, AdminError>;

/// Unified error type for kvadmin operations
#[derive(Debug, Error)]
pub enum AdminError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("invalid byte literal: {0}")]
    InvalidByteLiteral(String),

    #[error("invalid table name: {0}")]
    InvalidTable(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("key not found")]
    KeyNotFound,

    /// Any failure from the store backend: transaction open, commit,
    /// or snapshot corruption. Propagated unmodified, never retried.
    #[error("store error: {0}")]
    Store(String),

    // -------------------------------------------------------------------------
    // Transcoding Errors
    // -------------------------------------------------------------------------
    #[error("transcode error: {0}")]
    Transcode(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}
