use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while moving documents on and off disk
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("Input file not found: {0:?}")]
    InputNotFound(PathBuf),

    #[error("Failed to read input file {path:?}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {path:?}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize migration report")]
    SerializeReport(#[from] serde_json::Error),
}
