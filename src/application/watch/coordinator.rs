//! Debounce and generation state machine
//!
//! The coordinator owns everything the control loop decides: which edit starts
//! a new generation, when the debounce window closes, and when the session
//! shuts down. It performs no I/O and reads time only through the `now`
//! arguments, so tests drive it with a manual clock.
//!
//! ```text
//!            write (relevant)                  window elapsed
//!   Idle ─────────────────────► Debounced ─────────────────────► Idle
//!    │      cancel g, start g+1     │  write: coalesced,
//!    │                              │  window extended
//!    └──────── cancel / closed ─────┴────────────► Shutdown
//! ```

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::domain::value_objects::CancelToken;

use super::filter::EventClass;

/// Time source for the control loop
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// One cancellation scope and its counter
#[derive(Debug, Clone)]
pub struct Generation {
    id: u64,
    scope: CancelToken,
}

impl Generation {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn scope(&self) -> &CancelToken {
        &self.scope
    }
}

/// Control loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting; the next relevant write starts a generation
    Idle,
    /// A generation was just started; writes before `until` are coalesced
    Debounced { until: Instant },
    /// Terminal
    Shutdown,
}

/// Outcome of feeding the coordinator one input
#[derive(Debug, Clone)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    /// A write landed inside the open window
    Coalesced,
    /// A new generation must be launched
    Triggered(Generation),
    /// The debounce window elapsed
    WindowClosed,
    /// The session ended; the current generation was cancelled
    ShutDown,
}

/// The debounce/generation state machine
#[derive(Debug)]
pub struct Coordinator {
    root: CancelToken,
    current: Generation,
    state: LoopState,
    debounce: Duration,
}

impl Coordinator {
    /// Start in `Idle` with generation 0 derived from `root`
    pub fn new(root: CancelToken, debounce: Duration) -> Self {
        let current = Generation {
            id: 0,
            scope: root.child(),
        };
        Self {
            root,
            current,
            state: LoopState::Idle,
            debounce,
        }
    }

    pub fn current(&self) -> &Generation {
        &self.current
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// When the open window closes, if one is open
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            LoopState::Debounced { until } => Some(until),
            LoopState::Idle | LoopState::Shutdown => None,
        }
    }

    /// Feed one classified filesystem event
    pub fn on_event(&mut self, class: &EventClass, now: Instant) -> Transition {
        match (self.state, class) {
            (LoopState::Shutdown, _) => Transition::Ignored,
            (_, EventClass::Irrelevant) | (_, EventClass::Noise) => Transition::Ignored,
            (LoopState::Debounced { .. }, EventClass::Write(_)) => {
                self.state = LoopState::Debounced {
                    until: now + self.debounce,
                };
                Transition::Coalesced
            }
            (LoopState::Idle, EventClass::Write(_)) => {
                // Cancel first: the superseded generation must see its
                // cancellation before the next one exists.
                self.current.scope.cancel();
                self.current = Generation {
                    id: self.current.id + 1,
                    scope: self.root.child(),
                };
                self.state = LoopState::Debounced {
                    until: now + self.debounce,
                };
                Transition::Triggered(self.current.clone())
            }
        }
    }

    /// Advance time; closes the window once its deadline has passed
    pub fn on_tick(&mut self, now: Instant) -> Transition {
        match self.state {
            LoopState::Debounced { until } if now >= until => {
                self.state = LoopState::Idle;
                Transition::WindowClosed
            }
            _ => Transition::Ignored,
        }
    }

    /// Upstream cancellation or event channel closure
    pub fn shutdown(&mut self) -> Transition {
        if self.state == LoopState::Shutdown {
            return Transition::Ignored;
        }
        self.current.scope.cancel();
        self.state = LoopState::Shutdown;
        Transition::ShutDown
    }
}
