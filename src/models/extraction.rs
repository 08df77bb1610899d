use serde::Serialize;

use crate::rules::{FALLBACK_SERVER_ID, FALLBACK_UPLOAD_PATTERN, FALLBACK_UPLOAD_TARGET};

/// Which legacy constructs were found in the source document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageFlags {
    /// `stage('Setup Artifactory')` present (never re-emitted)
    pub has_setup_stage: bool,
    /// `stage('Ping Artifactory')` present
    pub has_ping_stage: bool,
    /// `server.upload` call present
    pub has_upload_call: bool,
    /// `publishBuildInfo` call present
    pub has_publish_call: bool,
}

/// Values recovered from a legacy pipeline by the extraction rules.
///
/// Every field is always populated: rules that find nothing fall back to
/// fixed literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Artifactory server id passed to `Artifactory.server(...)`
    pub server_id: String,
    /// First `"pattern"` value from an upload spec
    pub upload_pattern: String,
    /// First `"target"` value from an upload spec
    pub upload_target: String,
    #[serde(flatten)]
    pub flags: StageFlags,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self {
            server_id: FALLBACK_SERVER_ID.to_string(),
            upload_pattern: FALLBACK_UPLOAD_PATTERN.to_string(),
            upload_target: FALLBACK_UPLOAD_TARGET.to_string(),
            flags: StageFlags::default(),
        }
    }
}

impl StageFlags {
    /// True when no legacy construct was detected at all
    pub fn is_empty(&self) -> bool {
        !(self.has_setup_stage
            || self.has_ping_stage
            || self.has_upload_call
            || self.has_publish_call)
    }
}
