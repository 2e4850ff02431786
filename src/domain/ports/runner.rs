//! Runner port - build and execute the entrypoint

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::{CancelToken, Device};

/// Everything the runner needs for one build+run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub entrypoint: PathBuf,
    pub device: Device,
    pub assets: Option<PathBuf>,
    pub optimization_level: Option<u8>,
}

impl RunRequest {
    pub fn new(entrypoint: PathBuf) -> Self {
        Self {
            entrypoint,
            device: Device::Default,
            assets: None,
            optimization_level: None,
        }
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn with_assets(mut self, assets: Option<PathBuf>) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_optimization_level(mut self, level: Option<u8>) -> Self {
        self.optimization_level = level;
        self
    }
}

/// Run errors
#[derive(Debug, Error)]
pub enum RunError {
    /// Abandoned because the generation was superseded or the watch stopped
    #[error("run cancelled")]
    Cancelled,

    /// The program failed to build or exited unsuccessfully
    #[error("run failed: {status}")]
    Failed { status: String },

    /// The runner could not be started
    #[error("failed to start runner '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Builds and executes a program on a device
pub trait Runner: Send + Sync {
    /// Run `request`, abandoning the execution once `cancel` fires.
    fn run(&self, request: &RunRequest, cancel: &CancelToken) -> Result<(), RunError>;
}
