use std::path::{Path, PathBuf};

use crate::error::{ServiceError, StorageError};
use crate::sanitize::{redact_path, validate_job_id};

/// Extension of the per-job result file.
pub const RESULT_EXTENSION: &str = "csv";

/// Maps job ids to result files inside a single data folder.
///
/// Paths are `<data_folder>/<job_id>.csv`. Every id goes through
/// [`validate_job_id`] before a path is built, so nothing here touches the
/// filesystem for an id that could escape the folder by name.
#[derive(Debug, Clone)]
pub struct ResultPaths {
    data_folder: PathBuf,
}

impl ResultPaths {
    pub fn new<P: AsRef<Path>>(data_folder: P) -> Self {
        Self {
            data_folder: data_folder.as_ref().to_path_buf(),
        }
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    /// Builds the result path for `id`. Does not check that the file exists.
    pub fn resolve(&self, id: &str) -> Result<PathBuf, ServiceError> {
        let id = validate_job_id(id)?;
        Ok(self
            .data_folder
            .join(format!("{}.{}", id, RESULT_EXTENSION)))
    }

    /// Returns whether a result file exists at `path`.
    pub fn exists(&self, path: &Path) -> Result<bool, StorageError> {
        path.try_exists().map_err(|e| StorageError::Inspect {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Rejects an existing result file whose canonical location is outside
    /// the canonical data folder (e.g. a symlink pointing elsewhere).
    ///
    /// The id denylist only looks at the name; this closes the gap left by
    /// links and encodings the denylist can't see.
    pub fn ensure_contained(&self, id: &str, path: &Path) -> Result<(), ServiceError> {
        let root = std::fs::canonicalize(&self.data_folder).map_err(|e| StorageError::Inspect {
            path: self.data_folder.clone(),
            source: e,
        })?;
        let resolved = std::fs::canonicalize(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                // Removed after the existence check.
                ServiceError::NotFound { id: id.to_string() }
            } else {
                StorageError::Inspect {
                    path: path.to_path_buf(),
                    source: e,
                }
                .into()
            }
        })?;

        if resolved.parent() != Some(root.as_path()) {
            log::warn!(
                "Result file for job {} resolves outside the data folder ({})",
                id,
                redact_path(&resolved)
            );
            return Err(ServiceError::InvalidIdentifier { id: id.to_string() });
        }
        Ok(())
    }

    /// Removes the result file for `id` if present.
    ///
    /// Returns `Ok(true)` when a file was deleted and `Ok(false)` when there
    /// was nothing to delete. Any other failure is an error.
    pub fn remove(&self, id: &str) -> Result<bool, ServiceError> {
        let path = self.resolve(id)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("Removed result file {}", redact_path(&path));
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::RemoveFile { path, source: e }.into()),
        }
    }
}
