use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

// The doc comments below are turned into the `--help` text by clap.
/// Interactive dynamic search table backed by a binary search tree.
#[derive(Parser, Debug, Clone)]
#[command(name = "searchtable", version)]
pub struct CliOpts {
    /// JSON file with an array of records ({"key", "name", "sex", "age"}) to load instead of
    /// the built-in student records.
    #[arg(long = "source", value_name = "PATH")]
    pub source: Option<PathBuf>,
    /// Start with an empty table instead of loading the source records.
    #[arg(long = "empty")]
    pub empty: bool,
    /// Log level used when `RUST_LOG` is not set.
    #[arg(long = "log-level", value_name = "LEVEL", env = "SEARCHTABLE_LOG", default_value = "warn")]
    pub log_level: LevelFilter,
}

impl CliOpts {
    /// Checks that the options are consistent with each other.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.empty && self.source.is_some() {
            anyhow::bail!("`--source` cannot be combined with `--empty`");
        }
        Ok(())
    }
}
