//! Command-based analyzer
//!
//! Runs the configured analyzer command with `{entrypoint}` and
//! `{dependency_file}` substituted.

use std::path::Path;

use crate::domain::ports::{AnalyzeError, Analyzer};
use crate::domain::value_objects::CancelToken;

use super::process::{run_cancellable, CommandTemplate, ProcessOutcome};

/// Analyzer backed by an external command
#[derive(Debug, Clone)]
pub struct CommandAnalyzer {
    template: CommandTemplate,
}

impl CommandAnalyzer {
    pub fn new(template: CommandTemplate) -> Self {
        Self { template }
    }

    fn argv(&self, entrypoint: &Path, dependency_file: &Path) -> Vec<String> {
        self.template.expand(&[
            ("entrypoint", Some(entrypoint.display().to_string())),
            ("dependency_file", Some(dependency_file.display().to_string())),
        ])
    }
}

impl Analyzer for CommandAnalyzer {
    fn analyze(
        &self,
        entrypoint: &Path,
        dependency_file: &Path,
        cancel: &CancelToken,
    ) -> Result<(), AnalyzeError> {
        let argv = self.argv(entrypoint, dependency_file);
        let program = self.template.program().unwrap_or_default().to_string();

        match run_cancellable(&argv, cancel) {
            Ok(ProcessOutcome::Exited(status)) if status.success() => Ok(()),
            Ok(ProcessOutcome::Exited(status)) => Err(AnalyzeError::Failed {
                status: status.to_string(),
            }),
            Ok(ProcessOutcome::Cancelled) => Err(AnalyzeError::Cancelled),
            Err(source) => Err(AnalyzeError::Spawn { program, source }),
        }
    }
}
