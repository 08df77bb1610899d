pub mod error;
pub mod io;
pub mod migration;
pub mod models;
pub mod rules;
pub mod stages;
pub mod templates;

pub use error::MigrateError;
pub use io::{read_source_file, write_document, write_report};
pub use migration::{migrate, Migration};
pub use models::{ExtractionResult, MigrationReport, OutputDocument, StageBlock, StageFlags, StageKind};
pub use stages::{
    extract, normalize, plan_stages, render_stage, synthesize, NormalizationResult, ServerConfig,
    DEFAULT_SERVER_URL, DEFAULT_SERVER_USER,
};
