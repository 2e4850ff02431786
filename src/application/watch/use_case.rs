//! Watch Use Case implementation

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;

use crate::domain::ports::WatchSignal;
use crate::domain::value_objects::CancelToken;

use super::coordinator::{Clock, Coordinator, Transition};
use super::event::{EventSink, WatchEvent, WatchOptions};
use super::filter::{classify, EventClass};
use super::launcher::GenerationLauncher;
use super::watch_set::WatchSet;

/// Why the control loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The root scope was cancelled (Ctrl+C)
    Cancelled,
    /// The watch backend closed its channel
    ChannelClosed,
}

/// Watch Use Case
///
/// Owns the control loop: it reads backend signals, feeds the coordinator and
/// launches a generation for every accepted edit.
/// This is the main entry point for the `depwatch watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
    watch_set: Arc<WatchSet>,
    launcher: Box<dyn GenerationLauncher>,
    clock: Arc<dyn Clock>,
    sink: EventSink,
}

impl WatchUseCase {
    pub fn new(
        options: WatchOptions,
        watch_set: Arc<WatchSet>,
        launcher: Box<dyn GenerationLauncher>,
        clock: Arc<dyn Clock>,
        sink: EventSink,
    ) -> Self {
        Self {
            options,
            watch_set,
            launcher,
            clock,
            sink,
        }
    }

    /// Start watching (blocking)
    ///
    /// Launches generation 0, then serves `signals` until `root` is cancelled
    /// or the channel closes.
    pub fn start(&self, signals: Receiver<WatchSignal>, root: CancelToken) -> LoopExit {
        (self.sink)(WatchEvent::WatchStarted {
            entrypoint: self.options.entrypoint.display().to_string(),
            device: self.options.run.device.name().map(str::to_string),
        });

        let mut coordinator = Coordinator::new(root.clone(), self.options.debounce);
        self.begin(coordinator.current().id());
        self.launcher.launch(coordinator.current());

        let exit = loop {
            if root.is_cancelled() {
                break LoopExit::Cancelled;
            }

            let now = self.clock.now();
            coordinator.on_tick(now);

            let timeout = coordinator
                .deadline()
                .map(|deadline| deadline.saturating_duration_since(now))
                .unwrap_or(self.options.poll_interval)
                .min(self.options.poll_interval);

            match signals.recv_timeout(timeout) {
                Ok(WatchSignal::Event(event)) => {
                    let class = classify(&self.watch_set, &event);
                    if class == EventClass::Irrelevant {
                        continue;
                    }
                    if let Transition::Triggered(generation) =
                        coordinator.on_event(&class, self.clock.now())
                    {
                        (self.sink)(WatchEvent::FileModified {
                            path: event.path.display().to_string(),
                        });
                        self.begin(generation.id());
                        self.launcher.launch(&generation);
                    }
                }
                Ok(WatchSignal::Error(message)) => {
                    (self.sink)(WatchEvent::Error {
                        message: format!("watch error: {}", message),
                    });
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break LoopExit::ChannelClosed,
            }
        };

        coordinator.shutdown();
        (self.sink)(WatchEvent::Shutdown);
        exit
    }

    fn begin(&self, generation: u64) {
        (self.sink)(WatchEvent::GenerationStarted { generation });
    }
}
