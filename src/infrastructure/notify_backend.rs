//! `notify`-based watch backend

use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};

use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::ports::{FsEvent, FsOp, WatchBackend, WatchBackendError, WatchSignal};
use crate::error::{DepwatchError, DepwatchResult};

/// Platform watcher registering directories non-recursively
pub struct NotifyBackend {
    watcher: RecommendedWatcher,
}

impl NotifyBackend {
    /// Create the watcher and the channel its signals arrive on
    pub fn new() -> DepwatchResult<(Self, Receiver<WatchSignal>)> {
        let (tx, rx) = channel();

        let watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| forward(&tx, res),
            Config::default(),
        )
        .map_err(|e| DepwatchError::Watcher {
            message: e.to_string(),
        })?;

        Ok((Self { watcher }, rx))
    }
}

impl WatchBackend for NotifyBackend {
    fn watch_dir(&mut self, dir: &Path) -> Result<(), WatchBackendError> {
        self.watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|e| WatchBackendError {
                dir: dir.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn unwatch_dir(&mut self, dir: &Path) -> Result<(), WatchBackendError> {
        self.watcher.unwatch(dir).map_err(|e| WatchBackendError {
            dir: dir.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn forward(tx: &Sender<WatchSignal>, res: Result<Event, notify::Error>) {
    match res {
        Ok(event) => {
            let op = op_for(&event.kind);
            for path in event.paths {
                let _ = tx.send(WatchSignal::Event(FsEvent::new(path, op)));
            }
        }
        Err(e) => {
            let _ = tx.send(WatchSignal::Error(e.to_string()));
        }
    }
}

/// Map a notify event kind onto the operations the filter understands
pub fn op_for(kind: &EventKind) -> FsOp {
    match kind {
        EventKind::Modify(ModifyKind::Name(_)) => FsOp::Rename,
        EventKind::Modify(ModifyKind::Metadata(_)) => FsOp::Other,
        EventKind::Modify(_) => FsOp::Write,
        EventKind::Create(_) => FsOp::Create,
        EventKind::Remove(_) => FsOp::Remove,
        _ => FsOp::Other,
    }
}
