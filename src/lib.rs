//! depwatch - dependency-aware rebuild/run loop
//!
//! depwatch runs a program, asks an analyzer which source files the program
//! depends on, and watches exactly those files. A write to any of them starts
//! a new generation: the previous analysis and run are cancelled, the closure
//! is recomputed and the program runs again.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DepsUseCase, Entrypoint, WatchEvent, WatchOptions, WatchSet, WatchUseCase};
pub use config::Config;
pub use error::{DepwatchError, DepwatchResult};
