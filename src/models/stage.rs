use std::fmt;

use serde::Serialize;

/// Stages the converted pipeline can contain, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StageKind {
    Configure,
    Ping,
    Upload,
    Publish,
}

impl StageKind {
    /// All stages in the order they appear in the output
    pub const ORDER: [StageKind; 4] = [
        StageKind::Configure,
        StageKind::Ping,
        StageKind::Upload,
        StageKind::Publish,
    ];

    /// Stage name as written in `stage('...')`
    pub fn name(&self) -> &'static str {
        match self {
            StageKind::Configure => "Configure JFrog Server",
            StageKind::Ping => "Ping Artifactory",
            StageKind::Upload => "Upload Artifact",
            StageKind::Publish => "Publish Build Info",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rendered `stage(...) { ... }` fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageBlock {
    pub kind: StageKind,
    pub text: String,
}

impl StageBlock {
    pub fn new(kind: StageKind, text: String) -> Self {
        Self { kind, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_ord() {
        let mut sorted = StageKind::ORDER;
        sorted.sort();
        assert_eq!(sorted, StageKind::ORDER);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(StageKind::Configure.to_string(), "Configure JFrog Server");
        assert_eq!(StageKind::Publish.name(), "Publish Build Info");
    }
}
