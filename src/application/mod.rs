//! Application Layer
//!
//! Use cases that orchestrate the watch flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `WatchUseCase` - The rebuild/run control loop
//! - `DepsUseCase` - One-shot dependency closure query

pub mod deps;
pub mod watch;

pub use deps::{DepsResult, DepsUseCase};
pub use watch::{
    Entrypoint, EventSink, LoopExit, WatchEvent, WatchOptions, WatchSet, WatchUseCase,
    DEBOUNCE_MS,
};
