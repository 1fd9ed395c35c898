// File: crates/eventline-core/src/error.rs
// Summary: Error taxonomy: fatal load/parse failures and per-row validation failures.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal load-stage failures. No dataset is produced; the consuming session
/// stays in its loading state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Fetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Parse(#[from] csv::Error),
}

/// Per-row validation failures. Non-fatal: the offending row is dropped and
/// its siblings are unaffected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowValidationError {
    #[error("missing date field")]
    MissingDate,
    #[error("unparseable date {0:?}")]
    BadDate(String),
    #[error("missing value field")]
    MissingValue,
    #[error("value {0:?} is not a finite number")]
    BadValue(String),
}
