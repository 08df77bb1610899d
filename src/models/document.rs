use std::fmt;

use serde::Serialize;

use super::{ExtractionResult, StageFlags, StageKind};

/// The converted pipeline text plus what went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// Full Jenkinsfile text
    pub text: String,
    /// Stages emitted, in document order
    pub stages: Vec<StageKind>,
    /// 1-based line holding the credential placeholder
    pub placeholder_line: usize,
}

impl OutputDocument {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn contains_stage(&self, kind: StageKind) -> bool {
        self.stages.contains(&kind)
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Diagnostic summary of one migration, written by `--report`
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub server_id: String,
    pub upload_pattern: String,
    pub upload_target: String,
    #[serde(flatten)]
    pub flags: StageFlags,
    pub stages: Vec<String>,
    pub placeholder_line: usize,
}

impl MigrationReport {
    pub fn new(extraction: &ExtractionResult, document: &OutputDocument) -> Self {
        Self {
            server_id: extraction.server_id.clone(),
            upload_pattern: extraction.upload_pattern.clone(),
            upload_target: extraction.upload_target.clone(),
            flags: extraction.flags,
            stages: document.stages.iter().map(|s| s.name().to_string()).collect(),
            placeholder_line: document.placeholder_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_stage_names() {
        let extraction = ExtractionResult::default();
        let document = OutputDocument {
            text: String::new(),
            stages: vec![StageKind::Configure, StageKind::Publish],
            placeholder_line: 25,
        };

        let report = MigrationReport::new(&extraction, &document);

        assert_eq!(report.stages, vec!["Configure JFrog Server", "Publish Build Info"]);
        assert_eq!(report.placeholder_line, 25);
        assert_eq!(report.server_id, "ecosysjfrog");
    }
}
