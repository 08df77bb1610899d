use crate::models::{ExtractionResult, MigrationReport, OutputDocument};
use crate::stages::{extract, normalize, synthesize, ServerConfig};

/// Everything produced by one run of the pipeline
#[derive(Debug, Clone)]
pub struct Migration {
    /// Entity references decoded by Stage 0
    pub entities_decoded: usize,
    pub extraction: ExtractionResult,
    pub document: OutputDocument,
}

impl Migration {
    pub fn report(&self) -> MigrationReport {
        MigrationReport::new(&self.extraction, &self.document)
    }
}

/// Run normalize, extract and synthesize over one Artifactory-plugin pipeline
pub fn migrate(source: &str, config: &ServerConfig) -> Migration {
    let normalized = normalize(source);
    let extraction = extract(&normalized.text);
    let document = synthesize(&extraction, config);

    Migration {
        entities_decoded: normalized.entities_decoded,
        extraction,
        document,
    }
}
