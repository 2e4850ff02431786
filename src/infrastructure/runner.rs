//! Command-based runner

use crate::domain::ports::{RunError, RunRequest, Runner};
use crate::domain::value_objects::CancelToken;

use super::process::{run_cancellable, CommandTemplate, ProcessOutcome};

/// Runner backed by an external command
///
/// Placeholders: `{entrypoint}`, `{device}`, `{assets}`,
/// `{optimization_level}`.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    template: CommandTemplate,
}

impl CommandRunner {
    pub fn new(template: CommandTemplate) -> Self {
        Self { template }
    }

    fn argv(&self, request: &RunRequest) -> Vec<String> {
        self.template.expand(&[
            ("entrypoint", Some(request.entrypoint.display().to_string())),
            ("device", request.device.name().map(str::to_string)),
            (
                "assets",
                request.assets.as_ref().map(|p| p.display().to_string()),
            ),
            (
                "optimization_level",
                request.optimization_level.map(|level| level.to_string()),
            ),
        ])
    }
}

impl Runner for CommandRunner {
    fn run(&self, request: &RunRequest, cancel: &CancelToken) -> Result<(), RunError> {
        let argv = self.argv(request);
        let program = self.template.program().unwrap_or_default().to_string();

        match run_cancellable(&argv, cancel) {
            Ok(ProcessOutcome::Exited(status)) if status.success() => Ok(()),
            Ok(ProcessOutcome::Exited(status)) => Err(RunError::Failed {
                status: status.to_string(),
            }),
            Ok(ProcessOutcome::Cancelled) => Err(RunError::Cancelled),
            Err(source) => Err(RunError::Spawn { program, source }),
        }
    }
}
