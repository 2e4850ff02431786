//! Property tests for the watch set.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use depwatch::application::watch::WatchSet;
use depwatch::domain::ports::{WatchBackend, WatchBackendError};

/// Backend that tracks which directories are currently registered.
#[derive(Clone, Default)]
struct ActiveBackend {
    active: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl WatchBackend for ActiveBackend {
    fn watch_dir(&mut self, dir: &Path) -> Result<(), WatchBackendError> {
        let fresh = self.active.lock().unwrap().insert(dir.to_path_buf());
        assert!(fresh, "{} registered twice", dir.display());
        Ok(())
    }

    fn unwatch_dir(&mut self, dir: &Path) -> Result<(), WatchBackendError> {
        let known = self.active.lock().unwrap().remove(dir);
        assert!(known, "{} unregistered but never registered", dir.display());
        Ok(())
    }
}

const FILES: &[&str] = &[
    "main.toit",
    "lib/a.toit",
    "lib/b.toit",
    "lib/deep/c.toit",
    "vendor/d.toit",
    "vendor/e.toit",
];

fn project() -> (tempfile::TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    let files = FILES
        .iter()
        .map(|rel| {
            let path = root.join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "").unwrap();
            path
        })
        .collect();
    (dir, files)
}

fn subset() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0..FILES.len(), 0..FILES.len())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any sequence of updates, exactly the parent directories
    /// of the latest paths are registered with the backend.
    #[test]
    fn property_registrations_match_latest_paths(updates in proptest::collection::vec(subset(), 1..6)) {
        let (_dir, files) = project();
        let backend = ActiveBackend::default();
        let set = WatchSet::new(backend.clone());

        for update in &updates {
            let paths: Vec<&PathBuf> = update.iter().map(|i| &files[*i]).collect();
            let diff = set.watch(paths.iter()).unwrap();
            prop_assert!(diff.failed.is_empty());

            let expected: BTreeSet<PathBuf> = paths
                .iter()
                .map(|p| p.parent().unwrap().to_path_buf())
                .collect();
            let active = backend.active.lock().unwrap().clone();
            prop_assert_eq!(&active, &expected);
            prop_assert_eq!(set.directories(), expected.into_iter().collect::<Vec<_>>());
        }
    }

    /// PROPERTY: A path is relevant exactly when it is in the latest set.
    #[test]
    fn property_relevance_is_membership(update in subset()) {
        let (_dir, files) = project();
        let set = WatchSet::new(ActiveBackend::default());

        let chosen: BTreeSet<&PathBuf> = update.iter().map(|i| &files[*i]).collect();
        set.watch(chosen.iter()).unwrap();

        for file in &files {
            prop_assert_eq!(set.is_relevant(file), chosen.contains(file));
        }
        prop_assert_eq!(set.count(), chosen.len());
    }
}
