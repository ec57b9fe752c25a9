//! Helpers for turning untrusted input into values that are safe to use
//! as filenames or to record in tracing spans.

use std::path::Path;

use crate::error::ServiceError;

/// Substrings that may never appear in a job id used as a filename.
const FORBIDDEN_ID_TOKENS: &[&str] = &["/", "\\", ".."];

/// Checks that a job id can be used as a bare filename inside the data
/// folder.
///
/// This is a denylist: the id is returned unchanged (no trimming, no case
/// folding) unless it contains a path separator of either style or the
/// parent-directory token. Containment of the final path is checked
/// separately by [`crate::storage::ResultPaths::ensure_contained`].
///
/// - `"3f1c"` → `Ok("3f1c")`
/// - `"../etc/passwd"` → `Err(InvalidIdentifier)`
/// - `"a..b"` → `Err(InvalidIdentifier)`
pub fn validate_job_id(id: &str) -> Result<&str, ServiceError> {
    if FORBIDDEN_ID_TOKENS.iter().any(|token| id.contains(token)) {
        log::warn!("Rejected job id containing a path token: {:?}", id);
        return Err(ServiceError::InvalidIdentifier { id: id.to_string() });
    }
    Ok(id)
}

/// Returns only the filename component of a path (no directory).
///
/// Safe for span fields: reveals the file name, not the full path.
pub fn redact_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}
