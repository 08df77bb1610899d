/// Credential value left in the output for a human to replace
pub const PASSWORD_PLACEHOLDER: &str = "YOUR_PASSWORD";

/// Comment block at the top of every converted pipeline
///
/// Bindings: `server_id`, `password`, `placeholder_line`.
pub const HEADER_TEMPLATE: &str = r#"// MIGRATED FROM ARTIFACTORY PLUGIN TO JFROG PLUGIN
// Original server ID: {{server_id}}
//
// Conversion applied:
// - Removed stage: Setup Artifactory
// - Artifactory.server() → jf 'config add' + 'c use'
// - server.upload(spec) → jf 'rt u pattern target'
// - server.publishBuildInfo() → jf 'rt bp'
// - BuildInfo objects → Removed (auto-managed)
//
// ACTION REQUIRED: Replace {{password}} on line {{placeholder_line}} with the actual password
"#;

/// Everything between the header and the first stage
pub const PIPELINE_OPEN: &str = r#"
pipeline {
    agent any

    tools {
        jfrog 'jfrog-cli'
    }

    stages {
"#;

/// Closes the stage list and adds the post-action block
pub const PIPELINE_CLOSE: &str = r#"
    }

    post {
        success {
            echo '🎉 Pipeline completed successfully!'
        }
        failure {
            echo '❌ Pipeline failed'
        }
    }
}
"#;

/// Placed between consecutive stage blocks
pub const STAGE_SEPARATOR: &str = "\n\n";
