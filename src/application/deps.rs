//! Dependency closure query
//!
//! One-shot version of the watch loop's probe, used by `depwatch deps` to show
//! what a watch session would track.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::ports::{AnalyzeError, Analyzer};
use crate::domain::value_objects::CancelToken;

use super::watch::query_closure;

/// Result of a dependency query
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct DepsResult {
    /// Files in the closure, as reported by the analyzer
    pub paths: Vec<PathBuf>,
    /// Directories a watch session would register
    pub directories: Vec<PathBuf>,
    /// The closure was empty and the entrypoint directory stands in for it
    pub fell_back: bool,
}

/// Runs the analyzer once for an entrypoint
pub struct DepsUseCase<'a> {
    analyzer: &'a dyn Analyzer,
}

impl<'a> DepsUseCase<'a> {
    pub fn new(analyzer: &'a dyn Analyzer) -> Self {
        Self { analyzer }
    }

    /// Query the closure. Paths that can't be resolved are kept in `paths`
    /// and skipped for `directories`.
    pub fn execute(&self, entrypoint: &Path) -> Result<DepsResult, AnalyzeError> {
        let paths = query_closure(self.analyzer, entrypoint, &CancelToken::new())?;
        if paths.is_empty() {
            let fallback = entrypoint
                .canonicalize()
                .ok()
                .and_then(|p| p.parent().map(Path::to_path_buf));
            return Ok(DepsResult {
                paths,
                directories: fallback.into_iter().collect(),
                fell_back: true,
            });
        }

        let directories: BTreeSet<PathBuf> = paths
            .iter()
            .filter_map(|p| p.canonicalize().ok())
            .filter_map(|p| {
                if p.is_dir() {
                    Some(p)
                } else {
                    p.parent().map(Path::to_path_buf)
                }
            })
            .collect();

        Ok(DepsResult {
            paths,
            directories: directories.into_iter().collect(),
            fell_back: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct ReportAnalyzer(String);

    impl Analyzer for ReportAnalyzer {
        fn analyze(
            &self,
            _entrypoint: &Path,
            dependency_file: &Path,
            _cancel: &CancelToken,
        ) -> Result<(), AnalyzeError> {
            std::fs::write(dependency_file, &self.0).map_err(|e| AnalyzeError::Failed {
                status: e.to_string(),
            })
        }
    }

    struct FailingAnalyzer;

    impl Analyzer for FailingAnalyzer {
        fn analyze(&self, _: &Path, _: &Path, _: &CancelToken) -> Result<(), AnalyzeError> {
            Err(AnalyzeError::Failed {
                status: "exit status: 1".to_string(),
            })
        }
    }

    #[test]
    fn groups_paths_by_directory() {
        let dir = tempdir().unwrap();
        let lib = dir.path().join("lib");
        std::fs::create_dir_all(&lib).unwrap();
        let a = lib.join("a.toit");
        let b = lib.join("b.toit");
        std::fs::write(&a, "").unwrap();
        std::fs::write(&b, "").unwrap();

        let analyzer = ReportAnalyzer(format!("{}:\n{}\n", a.display(), b.display()));
        let result = DepsUseCase::new(&analyzer).execute(&a).unwrap();

        assert_eq!(result.paths, vec![a, b]);
        assert_eq!(result.directories, vec![lib.canonicalize().unwrap()]);
        assert!(!result.fell_back);
    }

    #[test]
    fn empty_closure_falls_back_to_entrypoint_directory() {
        let dir = tempdir().unwrap();
        let main = dir.path().join("main.toit");
        std::fs::write(&main, "").unwrap();

        let analyzer = ReportAnalyzer(String::new());
        let result = DepsUseCase::new(&analyzer).execute(&main).unwrap();

        assert!(result.paths.is_empty());
        assert!(result.fell_back);
        assert_eq!(result.directories, vec![dir.path().canonicalize().unwrap()]);
    }

    #[test]
    fn analyzer_failure_is_returned() {
        let err = DepsUseCase::new(&FailingAnalyzer)
            .execute(Path::new("main.toit"))
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::Failed { .. }));
    }
}
