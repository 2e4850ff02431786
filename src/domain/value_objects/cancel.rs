//! Cooperative cancellation scopes
//!
//! A `CancelToken` is a cheap, cloneable flag. Child tokens observe their own
//! flag and every ancestor's, so cancelling the process-level root also
//! cancels every generation derived from it. Tasks poll the token at their own
//! suspension points; nothing is forcibly stopped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cancellation scope
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    parent: Option<Box<CancelToken>>,
}

impl CancelToken {
    /// Create a new root scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a child scope that is cancelled with this one
    pub fn child(&self) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            parent: Some(Box::new(self.clone())),
        }
    }

    /// Request cancellation. Never blocks.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether this scope or any ancestor was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
            || self
                .parent
                .as_ref()
                .map(|p| p.is_cancelled())
                .unwrap_or(false)
    }
}
