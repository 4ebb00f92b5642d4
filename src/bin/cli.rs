//! kvadmin CLI
//!
//! Command-line entry point: parses flags into one [`Config`], selects the
//! store backend, and dispatches to the command handlers. Any propagated
//! error is printed and the process exits non-zero.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use kvadmin::commands::{self, ScanOpts};
use kvadmin::{AdminError, Config, FileStore, KvClient, Result};

/// kvadmin CLI
#[derive(Parser, Debug)]
#[command(name = "kvadmin")]
#[command(about = "Inspect and mutate object-storage metadata tables in a transactional KV store")]
#[command(version)]
struct Args {
    /// Remote store endpoints, comma-separated (e.g. pd1:2379,pd2:2379).
    /// This build carries no remote driver; use --db instead.
    #[arg(long, value_name = "ADDRS", default_value = "")]
    pd: String,

    /// Path of the local store file
    #[arg(long, value_name = "PATH", default_value = "./kvadmin.db")]
    db: PathBuf,

    /// Interpret key arguments as byte-array literals, e.g. [1 2 255]
    #[arg(long)]
    key_bytes: bool,

    /// Interpret value arguments as byte-array literals
    #[arg(long)]
    value_bytes: bool,

    /// Pass values through the binary transcoder on set/get/scan
    #[arg(long)]
    transcode: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set a key
    Set {
        key: String,
        value: String,
    },

    /// Get a key and print its value
    Get {
        key: String,
    },

    /// Delete a key
    Del {
        key: String,
    },

    /// Scan a table, or an explicit key range when no table is given
    Scan {
        /// Table name: cluster, bucket, user, object, multipart, part, gc, freezer
        table: Option<String>,

        /// Start key (inclusive)
        #[arg(short = 's', long)]
        startkey: Option<String>,

        /// End key (exclusive); `$` expands to the max-key suffix byte.
        /// Ignored when a table is given.
        #[arg(short = 'e', long)]
        endkey: Option<String>,

        /// Max records to return
        #[arg(short = 'l', long, default_value_t = 1000)]
        limit: i64,

        /// Bucket context used to pre-fill the start key
        #[arg(long)]
        bucket: Option<String>,

        /// Object context used to pre-fill the start key
        #[arg(long)]
        object: Option<String>,

        /// Object version context; "0" selects the unversioned key form
        #[arg(long)]
        version: Option<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder()
        .endpoints(Config::parse_endpoints(&args.pd))
        .db_path(&args.db)
        .key_bytes(args.key_bytes)
        .value_bytes(args.value_bytes)
        .transcode_values(args.transcode)
        .build();

    if !config.endpoints.is_empty() {
        return Err(AdminError::Config(
            "no remote store driver in this build; use --db <path>".to_string(),
        ));
    }

    tracing::debug!(db = %config.db_path.display(), "opening store");
    let client = KvClient::new(FileStore::open(&config.db_path));

    match args.command {
        Commands::Set { key, value } => commands::set(&config, &client, &key, &value),
        Commands::Get { key } => commands::get(&config, &client, &key),
        Commands::Del { key } => commands::del(&config, &client, &key),
        Commands::Scan {
            table,
            startkey,
            endkey,
            limit,
            bucket,
            object,
            version,
        } => commands::scan(
            &config,
            &client,
            &ScanOpts {
                table,
                start_key: startkey,
                end_key: endkey,
                limit,
                bucket,
                object,
                version,
            },
        ),
    }
}
