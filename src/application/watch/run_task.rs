//! Run task - builds and executes the entrypoint for one generation

use std::sync::Arc;

use crate::domain::ports::{RunError, RunRequest, Runner};

use super::coordinator::Generation;
use super::event::{EventSink, WatchEvent};

/// Runs the program once per generation and reports how it ended
pub struct RunTask {
    runner: Arc<dyn Runner>,
    request: RunRequest,
    sink: EventSink,
}

impl RunTask {
    pub fn new(runner: Arc<dyn Runner>, request: RunRequest, sink: EventSink) -> Self {
        Self {
            runner,
            request,
            sink,
        }
    }

    /// Run to completion or cancellation (blocking). Failures are reported,
    /// never returned.
    pub fn run(&self, generation: &Generation) {
        let id = generation.id();
        let event = match self.runner.run(&self.request, generation.scope()) {
            Ok(()) => WatchEvent::RunFinished { generation: id },
            Err(RunError::Cancelled) => WatchEvent::RunCancelled { generation: id },
            Err(err) => WatchEvent::RunFailed {
                generation: id,
                message: err.to_string(),
            },
        };
        (self.sink)(event);
    }
}
