//! Watch backend port - the platform file-event primitive
//!
//! A backend accepts non-recursive directory registrations. Events and errors
//! arrive separately on a channel of `WatchSignal`s; when the backend is
//! dropped the channel closes.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Kind of filesystem operation reported for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    Write,
    Create,
    Remove,
    Rename,
    Other,
}

/// One path-level filesystem event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEvent {
    pub path: PathBuf,
    pub op: FsOp,
}

impl FsEvent {
    pub fn new(path: impl Into<PathBuf>, op: FsOp) -> Self {
        Self {
            path: path.into(),
            op,
        }
    }
}

/// Everything a backend can deliver to the watch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchSignal {
    Event(FsEvent),
    Error(String),
}

/// Registration failure for a single directory
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("can't watch '{}': {message}", dir.display())]
pub struct WatchBackendError {
    pub dir: PathBuf,
    pub message: String,
}

/// Directory registration interface
///
/// Implementations:
/// - `NotifyBackend` - `notify` crate watcher
/// - recording fakes in tests
pub trait WatchBackend: Send {
    /// Start delivering events for entries of `dir` (non-recursive)
    fn watch_dir(&mut self, dir: &Path) -> Result<(), WatchBackendError>;

    /// Stop delivering events for `dir`
    fn unwatch_dir(&mut self, dir: &Path) -> Result<(), WatchBackendError>;
}
