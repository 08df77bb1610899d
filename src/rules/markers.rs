use crate::models::StageFlags;

/// Legacy constructs detected by plain substring search
///
/// No attempt is made to skip comments or string literals, and spacing or
/// casing variants are not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    SetupStage,
    PingStage,
    UploadCall,
    PublishCall,
}

impl Marker {
    pub const ALL: [Marker; 4] = [
        Marker::SetupStage,
        Marker::PingStage,
        Marker::UploadCall,
        Marker::PublishCall,
    ];

    /// The exact text searched for
    pub fn literal(&self) -> &'static str {
        match self {
            Marker::SetupStage => "stage('Setup Artifactory')",
            Marker::PingStage => "stage('Ping Artifactory')",
            Marker::UploadCall => "server.upload",
            Marker::PublishCall => "publishBuildInfo",
        }
    }

    pub fn is_present(&self, text: &str) -> bool {
        text.contains(self.literal())
    }
}

/// Evaluate every marker against the text
pub fn detect_markers(text: &str) -> StageFlags {
    StageFlags {
        has_setup_stage: Marker::SetupStage.is_present(text),
        has_ping_stage: Marker::PingStage.is_present(text),
        has_upload_call: Marker::UploadCall.is_present(text),
        has_publish_call: Marker::PublishCall.is_present(text),
    }
}
