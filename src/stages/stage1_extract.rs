use tracing::{debug, info};

use crate::models::ExtractionResult;
use crate::rules::{
    detect_markers, find_server_id, find_upload_pattern, find_upload_target, FALLBACK_SERVER_ID,
    FALLBACK_UPLOAD_PATTERN, FALLBACK_UPLOAD_TARGET,
};

/// Perform Stage 1: pull the server id, upload spec and stage markers out of
/// normalized pipeline text
///
/// Never fails. Each value rule falls back to its default independently, so a
/// spec with a pattern but no target keeps the pattern.
pub fn extract(text: &str) -> ExtractionResult {
    let server_id = value_or_fallback("server id", find_server_id(text), FALLBACK_SERVER_ID);
    let upload_pattern = value_or_fallback(
        "upload pattern",
        find_upload_pattern(text),
        FALLBACK_UPLOAD_PATTERN,
    );
    let upload_target = value_or_fallback(
        "upload target",
        find_upload_target(text),
        FALLBACK_UPLOAD_TARGET,
    );
    let flags = detect_markers(text);

    info!("Server ID: {}", server_id);
    info!("Upload pattern: {}", upload_pattern);
    info!("Upload target: {}", upload_target);
    info!(
        "Stages detected: Setup={}, Ping={}, Upload={}, Publish={}",
        flags.has_setup_stage, flags.has_ping_stage, flags.has_upload_call, flags.has_publish_call
    );

    ExtractionResult {
        server_id,
        upload_pattern,
        upload_target,
        flags,
    }
}

fn value_or_fallback(label: &str, found: Option<&str>, fallback: &str) -> String {
    match found {
        Some(value) => value.to_string(),
        None => {
            debug!("No {} found, using fallback {:?}", label, fallback);
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_full_pipeline() {
        let text = r#"
            def server = Artifactory.server('myserver')
            def uploadSpec = """{"files": [{"pattern": "*.zip", "target": "libs-release/"}]}"""
            server.upload spec: uploadSpec
            server.publishBuildInfo buildInfo
        "#;

        let result = extract(text);

        assert_eq!(result.server_id, "myserver");
        assert_eq!(result.upload_pattern, "*.zip");
        assert_eq!(result.upload_target, "libs-release/");
        assert!(result.flags.has_upload_call);
        assert!(result.flags.has_publish_call);
        assert!(!result.flags.has_ping_stage);
        assert!(!result.flags.has_setup_stage);
    }

    #[test]
    fn test_extract_empty_uses_fallbacks() {
        assert_eq!(extract(""), ExtractionResult::default());
    }

    #[test]
    fn test_partial_spec_keeps_found_value() {
        let result = extract(r#""target": "generic-local/""#);

        assert_eq!(result.upload_pattern, "*.txt");
        assert_eq!(result.upload_target, "generic-local/");
    }

    #[test]
    fn test_fields_never_empty() {
        for text in ["", "garbage {{ ((", "Artifactory.server('')", "\"pattern\": \"\""] {
            let result = extract(text);
            assert!(!result.server_id.is_empty());
            assert!(!result.upload_pattern.is_empty());
            assert!(!result.upload_target.is_empty());
        }
    }
}
