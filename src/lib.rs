//! # kvadmin
//!
//! Operator CLI for inspecting and mutating object-storage metadata tables
//! in a distributed transactional key-value store:
//! - Composite key codec over one flat sorted keyspace
//! - Closed table registry with per-table prefixes and scan bounds
//! - Byte-literal and binary value transcoders
//! - One-transaction-per-operation access layer
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI (clap)                               │
//! │              set / get / del / scan                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Command Handlers                             │
//! │     (Config + Table Registry + Key Codec + Transcoders)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 KvClient (access layer)                      │
//! │          one transaction per put/get/del/scan                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  MemStore   │          │  FileStore  │
//!   │ (in-memory) │          │ (snapshot)  │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! The store backends implement the opaque [`store::KvStore`] /
//! [`store::Transaction`] seam; the external store's transaction engine and
//! wire protocol are collaborators behind it, not part of this crate.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod keys;
pub mod table;
pub mod transcode;
pub mod store;
pub mod client;
pub mod commands;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use client::KvClient;
pub use config::Config;
pub use error::{AdminError, Result};
pub use store::{FileStore, KeyValue, KvStore, MemStore, Transaction};
pub use table::Table;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvadmin
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
