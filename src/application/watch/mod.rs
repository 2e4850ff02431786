//! Watch Use Case
//!
//! This module implements the dependency-aware rebuild/run loop.
//! It orchestrates:
//! - Dependency closure resolution (via the `Analyzer` port)
//! - File system monitoring of the closure's directories
//! - Debouncing (100ms default)
//! - Generation-scoped cancellation of superseded probe/run pairs
//!
//! ## Architecture
//!
//! - `WatchSet` - Watched directories and relevant paths, shared with tasks
//! - `filter` - Classifies backend events against the watch set
//! - `Coordinator` - Debounce/generation state machine (no I/O)
//! - `DependencyProbe` / `RunTask` - The two tasks of a generation
//! - `WatchUseCase` - Control loop tying it together
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(options, watch_set, launcher, clock, sink);
//! use_case.start(signals, root);
//! ```

mod coordinator;
mod entrypoint;
mod event;
mod filter;
mod launcher;
mod probe;
mod run_task;
mod use_case;
mod watch_set;


pub use coordinator::{
    Clock, Coordinator, Generation, LoopState, ManualClock, SystemClock, Transition,
};
pub use entrypoint::Entrypoint;
pub use event::{EventSink, WatchEvent, WatchOptions, DEBOUNCE_MS, POLL_INTERVAL_MS};
pub use filter::{classify, EventClass};
pub use launcher::{GenerationLauncher, TaskLauncher};
pub use probe::{parse_dependency_report, query_closure, DependencyProbe, ProbeOutcome};
pub use run_task::RunTask;
pub use use_case::{LoopExit, WatchUseCase};
pub use watch_set::{WatchDiff, WatchSet};
