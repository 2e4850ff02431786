//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use crate::application::watch::{
    DependencyProbe, Entrypoint, EventSink, RunTask, SystemClock, TaskLauncher, WatchOptions,
    WatchSet, WatchUseCase,
};
use crate::config::Config;
use crate::domain::ports::{Analyzer, RunRequest, Runner, WatchSignal};
use crate::error::DepwatchResult;
use crate::infrastructure::{CommandAnalyzer, CommandRunner, NotifyBackend};

/// A wired watch loop and the channel its backend feeds
pub struct WatchSession {
    pub use_case: WatchUseCase,
    pub signals: Receiver<WatchSignal>,
}

/// Create the analyzer configured in `config`
pub fn create_analyzer(config: &Config) -> CommandAnalyzer {
    CommandAnalyzer::new(config.analyzer_template())
}

/// Create the runner configured in `config`
pub fn create_runner(config: &Config) -> CommandRunner {
    CommandRunner::new(config.runner_template())
}

/// Create a watch use case with all dependencies wired up
///
/// Fails only if the platform watcher can't be created.
pub fn create_watch_use_case(
    config: &Config,
    entrypoint: &Entrypoint,
    request: RunRequest,
    sink: EventSink,
) -> DepwatchResult<WatchSession> {
    let (backend, signals) = NotifyBackend::new()?;
    let watch_set = Arc::new(WatchSet::new(backend));

    let analyzer: Arc<dyn Analyzer> = Arc::new(create_analyzer(config));
    let runner: Arc<dyn Runner> = Arc::new(create_runner(config));

    let probe = DependencyProbe::new(
        entrypoint.path().to_path_buf(),
        entrypoint.dir().to_path_buf(),
        analyzer,
        Arc::clone(&watch_set),
        Arc::clone(&sink),
    );
    let run = RunTask::new(runner, request.clone(), Arc::clone(&sink));
    let launcher = TaskLauncher::new(probe, run, Arc::clone(&sink));

    let options = WatchOptions::new(entrypoint.path().to_path_buf())
        .with_run(request)
        .with_debounce(config.debounce())
        .with_poll_interval(config.poll_interval());

    let use_case = WatchUseCase::new(
        options,
        watch_set,
        Box::new(launcher),
        Arc::new(SystemClock),
        sink,
    );

    Ok(WatchSession { use_case, signals })
}
