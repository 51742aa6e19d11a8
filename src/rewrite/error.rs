//! Rewrite error types.

use std::path::PathBuf;
use std::str::Utf8Error;
use thiserror::Error;

/// Errors raised while loading, transforming, or saving one document.
///
/// Every variant is scoped to a single file; the run loop reports it and
/// continues with the remaining pages.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// Target file does not exist at the expected path.
    #[error("not found: `{0}`")]
    NotFound(PathBuf),

    /// File content is not valid UTF-8.
    #[error("`{0}` is not valid UTF-8")]
    Decode(PathBuf, #[source] Utf8Error),

    /// Any other I/O failure (permissions, disk, rename).
    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

impl RewriteError {
    /// Whether this error is the benign "file is missing" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
