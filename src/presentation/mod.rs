//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use depwatch::presentation::factory;
//!
//! let session = factory::create_watch_use_case(&config, &entrypoint, request, sink)?;
//! session.use_case.start(session.signals, root);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_watch_use_case, WatchSession};
