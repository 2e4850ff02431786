//! Per-generation task dispatch
//!
//! The control loop never waits on its tasks. `TaskLauncher` puts the probe
//! and the run on their own threads and returns immediately; the tasks watch
//! the generation's scope to know when to give up.

use std::sync::Arc;
use std::thread;

use super::coordinator::Generation;
use super::event::{EventSink, WatchEvent};
use super::probe::DependencyProbe;
use super::run_task::RunTask;

/// Starts the work belonging to a generation
pub trait GenerationLauncher {
    /// Dispatch the generation's tasks without blocking
    fn launch(&self, generation: &Generation);
}

/// Runs `DependencyProbe` and `RunTask` on background threads
pub struct TaskLauncher {
    probe: Arc<DependencyProbe>,
    run: Arc<RunTask>,
    sink: EventSink,
}

impl TaskLauncher {
    pub fn new(probe: DependencyProbe, run: RunTask, sink: EventSink) -> Self {
        Self {
            probe: Arc::new(probe),
            run: Arc::new(run),
            sink,
        }
    }

    fn spawn(&self, name: String, task: impl FnOnce() + Send + 'static) {
        if let Err(err) = thread::Builder::new().name(name.clone()).spawn(task) {
            (self.sink)(WatchEvent::Error {
                message: format!("failed to start {}: {}", name, err),
            });
        }
    }
}

impl GenerationLauncher for TaskLauncher {
    fn launch(&self, generation: &Generation) {
        let probe = Arc::clone(&self.probe);
        let probe_generation = generation.clone();
        self.spawn(format!("probe-{}", generation.id()), move || {
            probe.run(&probe_generation);
        });

        let run = Arc::clone(&self.run);
        let run_generation = generation.clone();
        self.spawn(format!("run-{}", generation.id()), move || {
            run.run(&run_generation);
        });
    }
}
