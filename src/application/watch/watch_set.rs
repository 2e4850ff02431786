//! The set of watched directories and relevant paths
//!
//! `WatchSet` is shared between the control loop (which reads it for every
//! incoming event) and the dependency probe (which replaces its contents after
//! each analysis). Both sides go through one mutex, so a reader never sees a
//! half-applied update.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::domain::ports::{WatchBackend, WatchBackendError};
use crate::error::{DepwatchError, DepwatchResult};

/// Registration changes made by one `WatchSet::watch` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchDiff {
    /// Directories newly registered with the backend
    pub added: Vec<PathBuf>,
    /// Directories unregistered because nothing in them is relevant anymore
    pub removed: Vec<PathBuf>,
    /// Backend errors. A refused registration is retried on the next `watch`.
    pub failed: Vec<WatchBackendError>,
    /// Inputs that no longer resolve (deleted since they were reported)
    pub unresolved: Vec<PathBuf>,
}

impl WatchDiff {
    /// True when the backend was not touched
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.failed.is_empty()
            && self.unresolved.is_empty()
    }
}

struct Inner {
    backend: Box<dyn WatchBackend>,
    directories: BTreeSet<PathBuf>,
    paths: BTreeSet<PathBuf>,
    // Entries of `paths` that are directories; every file directly inside
    // them counts as relevant.
    directory_entries: BTreeSet<PathBuf>,
}

/// Internally synchronized watch set
pub struct WatchSet {
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for WatchSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("WatchSet")
            .field("directories", &inner.directories)
            .field("paths", &inner.paths)
            .finish()
    }
}

impl WatchSet {
    /// Create an empty watch set on top of a backend
    pub fn new(backend: impl WatchBackend + 'static) -> Self {
        Self {
            inner: Mutex::new(Inner {
                backend: Box::new(backend),
                directories: BTreeSet::new(),
                paths: BTreeSet::new(),
                directory_entries: BTreeSet::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking holder can't leave the sets half-replaced (they are
        // swapped in one assignment), so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the relevant paths and reconcile backend registrations.
    ///
    /// Every input is resolved through symlinks first. Inputs that can't be
    /// resolved are skipped and listed in `WatchDiff::unresolved`; when none
    /// of a non-empty input resolves the call fails and leaves the set
    /// untouched. A file registers its parent directory, a directory
    /// registers itself.
    pub fn watch<I, P>(&self, paths: I) -> DepwatchResult<WatchDiff>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut new_paths = BTreeSet::new();
        let mut new_directory_entries = BTreeSet::new();
        let mut new_dirs = BTreeSet::new();
        let mut unresolved = Vec::new();
        let mut first_error = None;

        for path in paths {
            let path = path.as_ref();
            let resolved = match path.canonicalize() {
                Ok(resolved) => resolved,
                Err(source) => {
                    unresolved.push(path.to_path_buf());
                    first_error.get_or_insert(DepwatchError::Resolve {
                        path: path.to_path_buf(),
                        source,
                    });
                    continue;
                }
            };
            let dir = if resolved.is_dir() {
                new_directory_entries.insert(resolved.clone());
                resolved.clone()
            } else {
                resolved
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| resolved.clone())
            };
            new_dirs.insert(dir);
            new_paths.insert(resolved);
        }

        if new_paths.is_empty() {
            if let Some(err) = first_error {
                return Err(err);
            }
        }

        let mut inner = self.lock();
        let mut diff = WatchDiff {
            unresolved,
            ..WatchDiff::default()
        };
        let mut registered = BTreeSet::new();

        for dir in &new_dirs {
            if inner.directories.contains(dir) {
                registered.insert(dir.clone());
                continue;
            }
            match inner.backend.watch_dir(dir) {
                Ok(()) => {
                    registered.insert(dir.clone());
                    diff.added.push(dir.clone());
                }
                Err(err) => diff.failed.push(err),
            }
        }

        let stale: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|d| !new_dirs.contains(*d))
            .cloned()
            .collect();
        for dir in stale {
            // The directory may already be gone; it is dropped either way.
            if let Err(err) = inner.backend.unwatch_dir(&dir) {
                diff.failed.push(err);
            }
            diff.removed.push(dir);
        }

        inner.directories = registered;
        inner.paths = new_paths;
        inner.directory_entries = new_directory_entries;

        Ok(diff)
    }

    /// Whether an event on `path` matters for the latest completed `watch`
    pub fn is_relevant(&self, path: &Path) -> bool {
        let inner = self.lock();
        inner.paths.contains(path)
            || path
                .parent()
                .map(|dir| inner.directory_entries.contains(dir))
                .unwrap_or(false)
    }

    /// Number of relevant paths
    pub fn count(&self) -> usize {
        self.lock().paths.len()
    }

    /// Currently registered directories, sorted
    pub fn directories(&self) -> Vec<PathBuf> {
        self.lock().directories.iter().cloned().collect()
    }

    /// Currently relevant paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().paths.iter().cloned().collect()
    }
}
