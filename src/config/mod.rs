//! Configuration module for depwatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPWATCH_*)
//! 3. `--config <file>`, or `depwatch.toml` in the working directory
//! 4. User config (`<config_dir>/depwatch/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    apply_env_overrides, parse_with_warnings, user_config_path, ConfigWarning, PROJECT_CONFIG,
};
pub use types::{AnalyzerConfig, ColorMode, Config, OutputConfig, RunnerConfig, WatchConfig};
