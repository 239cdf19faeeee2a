//! Command-line configuration and log setup.

use super::api::DEFAULT_BASE_URL;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Terminal reader for short language-learning stories.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Base address of the story API
    #[arg(long, env = "STORYDECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// File that log output is written to
    #[arg(long, env = "STORYDECK_LOG", default_value = "storydeck.log")]
    pub log_file: PathBuf,

    /// View to open first: `/` or `/story/<id>`
    #[arg(default_value = "/")]
    pub route: String,
}

const DEFAULT_DIRECTIVE: &str = "storydeck=info";

/// Installs the global `tracing` subscriber writing to `path`.
///
/// The terminal is owned by the UI, so log lines never go to stdout. The
/// file is appended to, keeping earlier sessions.
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| -> Box<dyn std::error::Error> { err })?;

    Ok(())
}
