//! Errors raised outside the scanning core
//!
//! Scanning and size parsing never fail. These cover validating the root
//! before a scan and writing the result afterwards.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access '{}': {}", .path.display(), .source)]
    InvalidRoot { path: PathBuf, source: io::Error },

    #[error("cannot access '{}': Not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("-out file name must have an extension of .json or .html, got '{}'", .0.display())]
    UnsupportedOutput(PathBuf),

    #[error("failed to encode tree as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
