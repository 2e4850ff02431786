//! Watch event types and options

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::RunRequest;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Upper bound on how long the loop waits before re-checking cancellation
pub const POLL_INTERVAL_MS: u64 = 50;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Entrypoint as given by the user (passed to analyzer and runner)
    pub entrypoint: PathBuf,
    /// What to run for every accepted edit
    pub run: RunRequest,
    /// Debounce window
    pub debounce: Duration,
    /// Cancellation poll interval
    pub poll_interval: Duration,
}

impl WatchOptions {
    /// Create watch options with default timings
    pub fn new(entrypoint: PathBuf) -> Self {
        let run = RunRequest::new(entrypoint.clone());
        Self {
            entrypoint,
            run,
            debounce: Duration::from_millis(DEBOUNCE_MS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }

    /// Set the run request
    pub fn with_run(mut self, run: RunRequest) -> Self {
        self.run = run;
        self
    }

    /// Set the debounce window
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the cancellation poll interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        entrypoint: String,
        device: Option<String>,
    },
    /// A relevant write was accepted
    FileModified { path: String },
    /// Probe and run were dispatched for a generation
    GenerationStarted { generation: u64 },
    /// The watch set was replaced by a probe
    DependenciesUpdated {
        generation: u64,
        paths: usize,
        directories: usize,
    },
    /// The analyzer failed; `kept_previous` tells whether the old set stays
    AnalysisFailed {
        generation: u64,
        message: String,
        kept_previous: bool,
    },
    /// The run completed successfully
    RunFinished { generation: u64 },
    /// The run failed
    RunFailed { generation: u64, message: String },
    /// The run was abandoned for a newer generation or shutdown
    RunCancelled { generation: u64 },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Whether the event describes a failure
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            WatchEvent::Error { .. } | WatchEvent::RunFailed { .. } | WatchEvent::AnalysisFailed { .. }
        )
    }
}

/// Receiver of watch events, callable from the loop and from task threads
pub type EventSink = Arc<dyn Fn(WatchEvent) + Send + Sync>;
