//! Analyzer port - dependency closure queries
//!
//! The analyzer compiles the entrypoint far enough to know which files it
//! depends on and writes a plain-text report to a destination file, one path
//! per line, optionally suffixed with `:`.

use std::path::Path;

use thiserror::Error;

use crate::domain::value_objects::CancelToken;

/// Analyzer invocation errors
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The cancellation scope fired before the analyzer finished
    #[error("analysis cancelled")]
    Cancelled,

    /// The analyzer ran and reported a failure (usually a compilation error)
    #[error("analysis failed: {status}")]
    Failed { status: String },

    /// The analyzer could not be started
    #[error("failed to start analyzer '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Produces dependency reports for an entrypoint
///
/// Implementations:
/// - `CommandAnalyzer` - runs an external analyzer process
/// - test fakes that write canned reports
pub trait Analyzer: Send + Sync {
    /// Write the dependency report for `entrypoint` into `dependency_file`.
    ///
    /// Implementations must observe `cancel` while waiting and return
    /// `AnalyzeError::Cancelled` once it fires.
    fn analyze(
        &self,
        entrypoint: &Path,
        dependency_file: &Path,
        cancel: &CancelToken,
    ) -> Result<(), AnalyzeError>;
}
