//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::watch::{DEBOUNCE_MS, POLL_INTERVAL_MS};
use crate::error::{DepwatchError, DepwatchResult};
use crate::infrastructure::CommandTemplate;

use super::loader::{self, ConfigWarning};

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_analyzer_command")]
    pub command: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            command: default_analyzer_command(),
        }
    }
}

fn default_analyzer_command() -> Vec<String> {
    [
        "toit",
        "analyze",
        "--dependency-file",
        "{dependency_file}",
        "--dependency-format",
        "plain",
        "{entrypoint}",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_command")]
    pub command: Vec<String>,

    /// Device to run on; the runner picks one when unset
    #[serde(default)]
    pub device: Option<String>,

    #[serde(default)]
    pub assets: Option<PathBuf>,

    #[serde(default)]
    pub optimization_level: Option<u8>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command: default_runner_command(),
            device: None,
            assets: None,
            optimization_level: None,
        }
    }
}

fn default_runner_command() -> Vec<String> {
    [
        "jag",
        "run",
        "--device={device}",
        "--assets={assets}",
        "--optimization-level={optimization_level}",
        "{entrypoint}",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Watch loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEBOUNCE_MS
}

fn default_poll_interval_ms() -> u64 {
    POLL_INTERVAL_MS
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DepwatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DepwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, the project file in `cwd`, the user file, or
    /// defaults, then apply `DEPWATCH_*` overrides.
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> DepwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (DEPWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject values the watch loop can't work with
    pub fn validate(&self, file: &Path) -> DepwatchResult<()> {
        let invalid = |message: &str| DepwatchError::InvalidConfig {
            file: file.to_path_buf(),
            message: message.to_string(),
        };

        if self.analyzer.command.is_empty() {
            return Err(invalid("analyzer.command must not be empty"));
        }
        if self.runner.command.is_empty() {
            return Err(invalid("runner.command must not be empty"));
        }
        if self.watch.poll_interval_ms == 0 {
            return Err(invalid("watch.poll_interval_ms must be at least 1"));
        }
        Ok(())
    }

    pub fn analyzer_template(&self) -> CommandTemplate {
        CommandTemplate::new(self.analyzer.command.clone())
    }

    pub fn runner_template(&self) -> CommandTemplate {
        CommandTemplate::new(self.runner.command.clone())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.watch.debounce_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.watch.poll_interval_ms)
    }
}
