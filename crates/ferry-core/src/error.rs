//! Error types for ferry-core.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ferry-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Local content file doesn't exist.
    #[error("local file not found: {} - check the path or run `ferry checkout` first", .0.display())]
    MissingContent(PathBuf),

    /// Sidecar metadata doesn't exist, so there is no base revision to
    /// check in against.
    #[error("no sidecar metadata at {} - the file was never checked out, run `ferry checkout` first", .0.display())]
    MissingSidecar(PathBuf),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
