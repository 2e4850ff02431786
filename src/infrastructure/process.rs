//! External process helpers
//!
//! Analyzer and runner are external commands configured as argument-vector
//! templates. Waiting on them polls the cancellation scope so a superseded
//! generation kills its child instead of letting it finish.

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use crate::domain::value_objects::CancelToken;

/// How often a waiting task checks its child and its scope
pub const PROCESS_POLL: Duration = Duration::from_millis(20);

/// An argument vector with `{name}` placeholders
///
/// An argument that references a placeholder without a value is dropped,
/// which is how optional flags such as `--assets={assets}` disappear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    argv: Vec<String>,
}

impl CommandTemplate {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    /// The program name, if the template is not empty
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Substitute `vars` into every argument
    pub fn expand(&self, vars: &[(&str, Option<String>)]) -> Vec<String> {
        self.argv
            .iter()
            .filter_map(|arg| {
                let mut expanded = arg.clone();
                for (name, value) in vars {
                    let placeholder = format!("{{{}}}", name);
                    if !expanded.contains(&placeholder) {
                        continue;
                    }
                    match value {
                        Some(value) => expanded = expanded.replace(&placeholder, value),
                        None => return None,
                    }
                }
                Some(expanded)
            })
            .collect()
    }
}

/// How a cancellable child ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    Exited(ExitStatus),
    Cancelled,
}

/// Spawn `argv` and wait for it, killing the child once `cancel` fires.
///
/// stdout and stderr are inherited so the user sees compiler and program
/// output; stdin is closed.
pub fn run_cancellable(argv: &[String], cancel: &CancelToken) -> io::Result<ProcessOutcome> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

    if cancel.is_cancelled() {
        return Ok(ProcessOutcome::Cancelled);
    }

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?;

    wait_cancellable(&mut child, cancel, PROCESS_POLL)
}

/// Poll `child` until it exits or `cancel` fires
pub fn wait_cancellable(
    child: &mut Child,
    cancel: &CancelToken,
    poll: Duration,
) -> io::Result<ProcessOutcome> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(ProcessOutcome::Exited(status));
        }
        if cancel.is_cancelled() {
            // The child may have exited between the two checks; either way
            // it must be reaped.
            let _ = child.kill();
            let _ = child.wait();
            return Ok(ProcessOutcome::Cancelled);
        }
        thread::sleep(poll);
    }
}
