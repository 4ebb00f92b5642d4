//! Configuration for kvadmin
//!
//! Centralized configuration with sensible defaults.
//!
//! One `Config` value is constructed from the parsed command line and passed
//! by reference to every command handler; there is no process-wide mutable
//! flag state.

use std::path::PathBuf;

/// Main configuration for a kvadmin invocation
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Selection
    // -------------------------------------------------------------------------
    /// Remote store endpoints (comma-separated on the command line).
    ///
    /// Empty in builds that carry only the local backends; a non-empty list
    /// with no remote driver compiled in is a configuration error, surfaced
    /// by the binary before any command runs.
    pub endpoints: Vec<String>,

    /// Path of the local single-file store
    pub db_path: PathBuf,

    // -------------------------------------------------------------------------
    // Input Interpretation
    // -------------------------------------------------------------------------
    /// Interpret key arguments as byte-array literals (`[1 2 255]`)
    /// instead of raw text
    pub key_bytes: bool,

    /// Interpret value arguments as byte-array literals instead of raw text
    pub value_bytes: bool,

    /// Pass values through the binary transcoder: encode before put,
    /// decode after get
    pub transcode_values: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            db_path: PathBuf::from("./kvadmin.db"),
            key_bytes: false,
            value_bytes: false,
            transcode_values: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Split a comma-separated endpoint list, dropping empty entries.
    ///
    /// `"pd1:2379,pd2:2379"` becomes `["pd1:2379", "pd2:2379"]`; an empty
    /// string becomes an empty list.
    pub fn parse_endpoints(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the remote store endpoints
    pub fn endpoints(mut self, endpoints: Vec<String>) -> Self {
        self.config.endpoints = endpoints;
        self
    }

    /// Set the local store path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Interpret key arguments as byte-array literals
    pub fn key_bytes(mut self, enabled: bool) -> Self {
        self.config.key_bytes = enabled;
        self
    }

    /// Interpret value arguments as byte-array literals
    pub fn value_bytes(mut self, enabled: bool) -> Self {
        self.config.value_bytes = enabled;
        self
    }

    /// Enable binary value transcoding
    pub fn transcode_values(mut self, enabled: bool) -> Self {
        self.config.transcode_values = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
