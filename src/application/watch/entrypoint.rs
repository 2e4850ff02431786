//! Entrypoint resolution
//!
//! The only fatal errors of a watch session happen here, before any watching
//! begins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{DepwatchError, DepwatchResult};

/// A validated entrypoint file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrypoint {
    path: PathBuf,
    dir: PathBuf,
}

impl Entrypoint {
    /// Check that `path` names an existing regular file.
    pub fn resolve(path: &Path) -> DepwatchResult<Self> {
        let metadata = std::fs::metadata(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                DepwatchError::EntrypointNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DepwatchError::EntrypointUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        if metadata.is_dir() {
            return Err(DepwatchError::EntrypointIsDirectory {
                path: path.to_path_buf(),
            });
        }

        let canonical = path
            .canonicalize()
            .map_err(|source| DepwatchError::EntrypointUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let dir = canonical
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(canonical);

        Ok(Self {
            path: path.to_path_buf(),
            dir,
        })
    }

    /// The path as given by the user
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The containing directory, symlinks resolved. Used as the watch fallback.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolves_existing_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("main.toit");
        std::fs::write(&file, "main:\n").unwrap();

        let entrypoint = Entrypoint::resolve(&file).unwrap();
        assert_eq!(entrypoint.path(), file.as_path());
        assert_eq!(entrypoint.dir(), dir.path().canonicalize().unwrap().as_path());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = Entrypoint::resolve(&dir.path().join("missing.toit")).unwrap_err();
        assert!(matches!(err, DepwatchError::EntrypointNotFound { .. }));
        assert!(err.to_string().starts_with("no such file or directory"));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempdir().unwrap();
        let err = Entrypoint::resolve(dir.path()).unwrap_err();
        assert!(matches!(err, DepwatchError::EntrypointIsDirectory { .. }));
    }
}
