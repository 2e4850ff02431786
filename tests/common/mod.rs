//! Common test utilities for depwatch CLI tests.
//!
//! This module provides:
//! - `TestProject`: Isolated project with shell stand-ins for analyzer and runner
//! - `Running`: A background depwatch process with line-by-line stdout
//! - NDJSON helpers for matching watch events

#![allow(dead_code)]

pub mod env;

pub use env::*;
