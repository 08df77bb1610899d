use std::path::Path;

use crate::error::MigrateError;
use crate::models::{MigrationReport, OutputDocument};

/// Write the converted Jenkinsfile
pub fn write_document(document: &OutputDocument, path: &Path) -> Result<(), MigrateError> {
    std::fs::write(path, document.as_str()).map_err(|source| MigrateError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the diagnostic report as pretty JSON
pub fn write_report(report: &MigrationReport, path: &Path) -> Result<(), MigrateError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|source| MigrateError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
