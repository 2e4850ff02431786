//! Domain Layer
//!
//! The vocabulary shared by the watch loop and its collaborators.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (CancelToken, Device)
//! - `ports/` - Interface definitions for infrastructure (Analyzer, Runner, WatchBackend)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod value_objects;
