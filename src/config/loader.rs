//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{DepwatchError, DepwatchResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

/// Project configuration file name, looked up in the working directory
pub const PROJECT_CONFIG: &str = "depwatch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DepwatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (config, warnings) = parse_with_warnings(&content, path)?;
    config.validate(path)?;
    Ok((config, warnings))
}

/// Parse TOML text, reporting unknown keys against `file`
pub fn parse_with_warnings(
    content: &str,
    file: &Path,
) -> DepwatchResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DepwatchError::InvalidConfig {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: file.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the first configuration source that exists and apply env overrides.
///
/// An explicit path must exist. Discovered files are only read when present.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> DepwatchResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(cwd.join(PROJECT_CONFIG)),
        user_config_path(),
    ];
    for candidate in candidates.into_iter().flatten() {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `<config_dir>/depwatch/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("depwatch").join("config.toml"))
}

/// Apply environment variable overrides (DEPWATCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(
        config,
        |name| std::env::var(name).ok(),
        &mut std::io::stderr(),
    )
}

/// Apply overrides read through `lookup`, writing warnings to `writer`
pub fn apply_env_overrides<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    // DEPWATCH_DEVICE
    if let Some(device) = lookup("DEPWATCH_DEVICE") {
        let device = device.trim();
        if !device.is_empty() {
            config.runner.device = Some(device.to_string());
        }
    }

    // DEPWATCH_DEBOUNCE_MS
    if let Some(value) = lookup("DEPWATCH_DEBOUNCE_MS") {
        let validator = EnvVarValidator::new("DEPWATCH_DEBOUNCE_MS", &["<milliseconds>"]);
        config.watch.debounce_ms = validator.parse_with_writer(
            &value,
            |s| s.trim().parse::<u64>().ok(),
            config.watch.debounce_ms,
            writer,
        );
    }

    // DEPWATCH_COLOR
    if let Some(value) = lookup("DEPWATCH_COLOR") {
        let validator = EnvVarValidator::new("DEPWATCH_COLOR", &["auto", "always", "never"]);
        config.output.color =
            validator.parse_with_writer(&value, ColorMode::parse, config.output.color, writer);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "analyzer",
        "runner",
        "watch",
        "output",
        "command",
        "device",
        "assets",
        "optimization_level",
        "debounce_ms",
        "poll_interval_ms",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
