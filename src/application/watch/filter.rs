//! Event classification against the watch set

use std::path::PathBuf;

use crate::domain::ports::{FsEvent, FsOp};

use super::watch_set::WatchSet;

/// What a raw filesystem event means to the control loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventClass {
    /// The path isn't tracked
    Irrelevant,
    /// A tracked path, but not a write (create, remove, rename, metadata)
    Noise,
    /// A write to a tracked path; a trigger candidate
    Write(PathBuf),
}

/// Classify `event` against the latest completed watch set
pub fn classify(watch_set: &WatchSet, event: &FsEvent) -> EventClass {
    if !watch_set.is_relevant(&event.path) {
        return EventClass::Irrelevant;
    }
    match event.op {
        FsOp::Write => EventClass::Write(event.path.clone()),
        FsOp::Create | FsOp::Remove | FsOp::Rename | FsOp::Other => EventClass::Noise,
    }
}
