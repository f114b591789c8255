// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`LineProcessor`](crate::processor::LineProcessor).
///
/// `Display` renders the exact stderr message the binary prints.
#[derive(Debug, Error)]
pub enum LowerLinesError {
    /// The path is missing or is not a regular file.
    #[error("Error: {path} does not exist.")]
    NotFound { path: PathBuf },

    /// Opening, reading or decoding the input failed.
    #[error("Error: failed to read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout/stderr failed (e.g. closed pipe).
    #[error("Error: failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LowerLinesError>;
