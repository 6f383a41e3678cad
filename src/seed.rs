//! Source records the dynamic table is loaded from.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::Record;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("cannot read source file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse source file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid source records: {0}")]
    Json(#[from] serde_json::Error),
}

/// The built-in student records, in load order.
pub fn default_records() -> Vec<Record> {
    [
        (56, "Zhang", "F", 19),
        (19, "Wang", "F", 20),
        (80, "Zhou", "F", 19),
        (5, "Huang", "M", 20),
        (21, "Zheng", "M", 20),
        (64, "Li", "M", 19),
        (88, "Liu", "F", 18),
        (13, "Qian", "F", 19),
        (37, "Sun", "M", 20),
        (75, "Zhao", "M", 20),
        (92, "Chen", "M", 20),
    ]
    .into_iter()
    .map(Record::from)
    .collect()
}

/// Parses a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<Record>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON array of records from `path`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, SeedError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Record> = serde_json::from_str(&json).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} source records from {}", records.len(), path.display());
    Ok(records)
}
