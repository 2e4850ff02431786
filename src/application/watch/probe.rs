//! Dependency probe
//!
//! Asks the analyzer for the entrypoint's dependency closure and turns it into
//! the next watch set. Analysis failures never blind the watcher: a set that
//! was good before is kept, and an empty one falls back to the entrypoint's
//! directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::{AnalyzeError, Analyzer};
use crate::domain::value_objects::CancelToken;

use super::coordinator::Generation;
use super::event::{EventSink, WatchEvent};
use super::watch_set::WatchSet;

/// Parse a plain dependency report.
///
/// Each line is trimmed and loses one trailing `:`. Lines naming paths that
/// don't exist are dropped. The result is sorted and deduplicated.
pub fn parse_dependency_report(report: &str) -> Vec<PathBuf> {
    report
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_suffix(':').unwrap_or(line)
        })
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .filter(|path| path.exists())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Run the analyzer once and parse its report.
///
/// The report goes to a fresh temporary file that is removed on return. An
/// analyzer that succeeds without writing a readable report yields an empty
/// closure.
pub fn query_closure(
    analyzer: &dyn Analyzer,
    entrypoint: &Path,
    cancel: &CancelToken,
) -> Result<Vec<PathBuf>, AnalyzeError> {
    let dependency_file = tempfile::Builder::new()
        .prefix("depwatch-")
        .suffix(".txt")
        .tempfile()
        .map_err(|e| AnalyzeError::Failed {
            status: format!("can't create dependency file: {}", e),
        })?
        .into_temp_path();

    analyzer.analyze(entrypoint, &dependency_file, cancel)?;

    let report = std::fs::read_to_string(&dependency_file).unwrap_or_default();
    Ok(parse_dependency_report(&report))
}

/// What a probe run did to the watch set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The set was replaced with the analyzer's closure
    Updated { paths: usize },
    /// Nothing usable was resolved; the entrypoint's directory is watched
    FellBack,
    /// The analyzer failed and the previous set was kept
    KeptPrevious,
    /// The generation was cancelled; nothing was applied
    Discarded,
    /// The watch set refused the update
    WatchFailed,
}

/// Resolves the dependency closure for one generation
pub struct DependencyProbe {
    entrypoint: PathBuf,
    fallback_dir: PathBuf,
    analyzer: Arc<dyn Analyzer>,
    watch_set: Arc<WatchSet>,
    sink: EventSink,
}

impl DependencyProbe {
    pub fn new(
        entrypoint: PathBuf,
        fallback_dir: PathBuf,
        analyzer: Arc<dyn Analyzer>,
        watch_set: Arc<WatchSet>,
        sink: EventSink,
    ) -> Self {
        Self {
            entrypoint,
            fallback_dir,
            analyzer,
            watch_set,
            sink,
        }
    }

    /// Run the analyzer once and apply its result (blocking)
    pub fn run(&self, generation: &Generation) -> ProbeOutcome {
        let id = generation.id();
        let scope = generation.scope();

        let paths = match query_closure(self.analyzer.as_ref(), &self.entrypoint, scope) {
            Ok(paths) => paths,
            Err(AnalyzeError::Cancelled) => return ProbeOutcome::Discarded,
            Err(err) => {
                if scope.is_cancelled() {
                    return ProbeOutcome::Discarded;
                }
                let kept_previous = self.watch_set.count() > 0;
                (self.sink)(WatchEvent::AnalysisFailed {
                    generation: id,
                    message: err.to_string(),
                    kept_previous,
                });
                if kept_previous {
                    return ProbeOutcome::KeptPrevious;
                }
                Vec::new()
            }
        };

        // Cancellation is advisory: a result that finished after its
        // generation was superseded is dropped here rather than applied.
        if scope.is_cancelled() {
            return ProbeOutcome::Discarded;
        }

        self.settle(id, &paths)
    }

    /// Apply a parsed closure, falling back to the entrypoint's directory
    /// whenever the set would otherwise end up empty
    pub(super) fn settle(&self, id: u64, paths: &[PathBuf]) -> ProbeOutcome {
        if paths.is_empty() {
            if self.apply(id, std::slice::from_ref(&self.fallback_dir)) {
                return ProbeOutcome::FellBack;
            }
            return ProbeOutcome::WatchFailed;
        }

        if self.apply(id, paths) {
            return ProbeOutcome::Updated {
                paths: self.watch_set.count(),
            };
        }

        // Every reported path vanished before it could be watched. A set
        // that is still empty would never see another relevant event.
        if self.watch_set.count() == 0 && self.apply(id, std::slice::from_ref(&self.fallback_dir))
        {
            return ProbeOutcome::FellBack;
        }
        ProbeOutcome::WatchFailed
    }

    fn apply(&self, generation: u64, paths: &[PathBuf]) -> bool {
        match self.watch_set.watch(paths) {
            Ok(diff) => {
                for path in diff.unresolved {
                    (self.sink)(WatchEvent::Error {
                        message: format!("'{}' disappeared before it was watched", path.display()),
                    });
                }
                for failure in diff.failed {
                    (self.sink)(WatchEvent::Error {
                        message: failure.to_string(),
                    });
                }
                (self.sink)(WatchEvent::DependenciesUpdated {
                    generation,
                    paths: self.watch_set.count(),
                    directories: self.watch_set.directories().len(),
                });
                true
            }
            Err(err) => {
                (self.sink)(WatchEvent::Error {
                    message: format!("failed to update watcher: {}", err),
                });
                false
            }
        }
    }
}
