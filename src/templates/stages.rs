use crate::models::StageKind;

/// Bindings: `server_id`, `server_url`, `server_user`, `password`.
pub const CONFIGURE_STAGE_TEMPLATE: &str = r#"        stage('Configure JFrog Server') {
            steps {
                script {
                    echo '=== Configuring JFrog Server ==='
                    jf 'config add {{server_id}} --url={{server_url}} --user={{server_user}} --password={{password}} --interactive=false'
                    jf 'c use {{server_id}}'
                    echo '✅ Server configured'
                }
            }
        }"#;

pub const PING_STAGE_TEMPLATE: &str = r#"        stage('Ping Artifactory') {
            steps {
                script {
                    echo '=== Testing Artifactory Connection ==='
                    jf 'rt ping'
                    echo '✅ Successfully connected to Artifactory!'
                }
            }
        }"#;

/// Bindings: `upload_pattern`, `upload_target`.
///
/// The `sh` step creates a build-numbered file so the upload has something
/// to send, as the legacy job did before calling `server.upload`.
pub const UPLOAD_STAGE_TEMPLATE: &str = r#"        stage('Upload Artifact') {
            steps {
                script {
                    echo '=== Creating and Uploading Artifact ==='

                    // Create test file
                    sh 'echo "Build ${BUILD_NUMBER} - $(date)" > artifactory-test-${BUILD_NUMBER}.txt'

                    // Upload (converted from Artifactory plugin spec)
                    jf 'rt u {{upload_pattern}} {{upload_target}}'

                    echo '✅ Successfully uploaded artifact!'
                    echo "Uploaded to: {{upload_target}}"
                }
            }
        }"#;

pub const PUBLISH_STAGE_TEMPLATE: &str = r#"        stage('Publish Build Info') {
            steps {
                script {
                    echo '=== Publishing Build Info ==='
                    jf 'rt bp'
                    echo '✅ Build info published!'
                }
            }
        }"#;

/// Template for a given stage kind
pub fn stage_template(kind: StageKind) -> &'static str {
    match kind {
        StageKind::Configure => CONFIGURE_STAGE_TEMPLATE,
        StageKind::Ping => PING_STAGE_TEMPLATE,
        StageKind::Upload => UPLOAD_STAGE_TEMPLATE,
        StageKind::Publish => PUBLISH_STAGE_TEMPLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_declare_their_stage_name() {
        for kind in StageKind::ORDER {
            let declaration = format!("stage('{}')", kind.name());
            assert!(
                stage_template(kind).contains(&declaration),
                "template for {:?} should declare {}",
                kind,
                declaration
            );
        }
    }
}
