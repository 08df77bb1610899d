use std::path::Path;

use crate::error::MigrateError;

/// Read a legacy Jenkinsfile from disk
///
/// A missing file is reported as [`MigrateError::InputNotFound`] so callers can
/// stop before creating any output.
pub fn read_source_file(path: &Path) -> Result<String, MigrateError> {
    if !path.exists() {
        return Err(MigrateError::InputNotFound(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|source| MigrateError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
