//! Error types for depwatch
//!
//! Uses `thiserror` for library errors. Only entrypoint errors are meant to
//! escape a running watch; everything else is reported and absorbed.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for depwatch operations
pub type DepwatchResult<T> = Result<T, DepwatchError>;

/// Main error type for depwatch operations
#[derive(Error, Debug)]
pub enum DepwatchError {
    /// Entrypoint does not exist
    #[error("no such file or directory: '{}'", path.display())]
    EntrypointNotFound { path: PathBuf },

    /// Entrypoint is a directory
    #[error("can't watch directory: '{}'", path.display())]
    EntrypointIsDirectory { path: PathBuf },

    /// Entrypoint exists but can't be inspected
    #[error("can't stat file '{}', reason: {source}", path.display())]
    EntrypointUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Symlink resolution failed while updating the watch set
    #[error("can't resolve '{}': {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The platform watcher could not be created
    #[error("failed to start file watcher: {message}")]
    Watcher { message: String },

    /// Invalid configuration file
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
