//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the watch loop.
//! Infrastructure layer provides concrete implementations.

pub mod analyzer;
pub mod runner;
pub mod watch_backend;

pub use analyzer::{AnalyzeError, Analyzer};
pub use runner::{RunError, RunRequest, Runner};
pub use watch_backend::{FsEvent, FsOp, WatchBackend, WatchBackendError, WatchSignal};
