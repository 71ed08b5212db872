//! Command handlers for the `cruck` CLI.
//!
//! Each submodule implements one command. Handlers take their streams as
//! parameters so the integration tests can drive them in memory; the
//! binary passes stdin/stdout/stderr.

use std::io;
use std::path::Path;

use thiserror::Error;

mod explain;
mod lex;
mod run;
mod serve;

pub use explain::explain_error;
pub use lex::{dump_tokens, lex_file};
pub use run::{report_outcome, run_file};
pub use serve::serve;

/// A source file could not be read.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Io { path: String, source: io::Error },
}

/// Read a source file.
pub fn read_source(path: &Path) -> Result<String, ReadError> {
    std::fs::read_to_string(path).map_err(|err| {
        let shown = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound(shown),
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied(shown),
            io::ErrorKind::InvalidData => ReadError::InvalidUtf8(shown),
            _ => ReadError::Io {
                path: shown,
                source: err,
            },
        }
    })
}
