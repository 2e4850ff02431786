//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - Command templates and cancellable child processes
//! - `analyzer` - Analyzer command (`toit analyze` by default)
//! - `runner` - Runner command (`jag run` by default)
//! - `notify_backend` - Platform file watcher

pub mod analyzer;
pub mod notify_backend;
pub mod process;
pub mod runner;

// Re-export for convenience
pub use analyzer::CommandAnalyzer;
pub use notify_backend::NotifyBackend;
pub use process::{CommandTemplate, ProcessOutcome};
pub use runner::CommandRunner;
