use tracing::{info, warn};

use crate::models::{ExtractionResult, OutputDocument, StageBlock, StageFlags, StageKind};
use crate::templates::{
    fill, stage_template, HEADER_TEMPLATE, PASSWORD_PLACEHOLDER, PIPELINE_CLOSE, PIPELINE_OPEN,
    STAGE_SEPARATOR,
};

/// Default JFrog platform URL written into `jf config add`
pub const DEFAULT_SERVER_URL: &str = "https://ecosysjfrog.jfrog.io";

/// Default user written into `jf config add`
pub const DEFAULT_SERVER_USER: &str = "agrasth";

/// Connection settings for the generated `Configure JFrog Server` stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub url: String,
    pub user: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            user: DEFAULT_SERVER_USER.to_string(),
        }
    }
}

/// Decide which stages to emit, in output order
///
/// Configure is unconditional. The legacy Setup stage is never carried over.
pub fn plan_stages(flags: &StageFlags) -> Vec<StageKind> {
    StageKind::ORDER
        .into_iter()
        .filter(|kind| match kind {
            StageKind::Configure => true,
            StageKind::Ping => flags.has_ping_stage,
            StageKind::Upload => flags.has_upload_call,
            StageKind::Publish => flags.has_publish_call,
        })
        .collect()
}

/// Render a single stage from its template
pub fn render_stage(
    kind: StageKind,
    extraction: &ExtractionResult,
    config: &ServerConfig,
) -> StageBlock {
    let text = fill(stage_template(kind), &stage_bindings(extraction, config));
    StageBlock::new(kind, text)
}

fn stage_bindings<'a>(
    extraction: &'a ExtractionResult,
    config: &'a ServerConfig,
) -> [(&'static str, &'a str); 6] {
    [
        ("server_id", extraction.server_id.as_str()),
        ("server_url", config.url.as_str()),
        ("server_user", config.user.as_str()),
        ("password", PASSWORD_PLACEHOLDER),
        ("upload_pattern", extraction.upload_pattern.as_str()),
        ("upload_target", extraction.upload_target.as_str()),
    ]
}

/// Perform Stage 2: build the JFrog plugin pipeline from extracted values
///
/// Pure template assembly; cannot fail.
pub fn synthesize(extraction: &ExtractionResult, config: &ServerConfig) -> OutputDocument {
    if extraction.flags.has_setup_stage {
        warn!("Dropping legacy 'Setup Artifactory' stage; server setup moves to 'Configure JFrog Server'");
    }

    let plan = plan_stages(&extraction.flags);
    info!(
        "Emitting stages: {}",
        plan.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
    );

    let blocks: Vec<StageBlock> = plan
        .iter()
        .map(|&kind| render_stage(kind, extraction, config))
        .collect();

    let stages_text = blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(STAGE_SEPARATOR);

    // Digits of the line number never add lines to the header.
    let placeholder_line = credential_line(&render_header(extraction, 0), extraction, config);
    let text = assemble(&render_header(extraction, placeholder_line), &stages_text);

    OutputDocument {
        text,
        stages: plan,
        placeholder_line,
    }
}

/// 1-based line of the `--password=` argument in the assembled document
///
/// Counted from the Configure template up to its `{{password}}` slot, so
/// extracted values that happen to contain the placeholder text, or line
/// breaks, cannot shift the result.
fn credential_line(header: &str, extraction: &ExtractionResult, config: &ServerConfig) -> usize {
    let template = stage_template(StageKind::Configure);
    let prefix = template
        .find("{{password}}")
        .map_or(template, |at| &template[..at]);
    let rendered = fill(prefix, &stage_bindings(extraction, config));

    [header, PIPELINE_OPEN, rendered.as_str()]
        .iter()
        .map(|part| part.matches('\n').count())
        .sum::<usize>()
        + 1
}

fn render_header(extraction: &ExtractionResult, placeholder_line: usize) -> String {
    let line = placeholder_line.to_string();
    fill(
        HEADER_TEMPLATE,
        &[
            ("server_id", extraction.server_id.as_str()),
            ("password", PASSWORD_PLACEHOLDER),
            ("placeholder_line", line.as_str()),
        ],
    )
}

fn assemble(header: &str, stages_text: &str) -> String {
    let mut output = String::with_capacity(
        header.len() + PIPELINE_OPEN.len() + stages_text.len() + PIPELINE_CLOSE.len(),
    );
    output.push_str(header);
    output.push_str(PIPELINE_OPEN);
    output.push_str(stages_text);
    output.push_str(PIPELINE_CLOSE);
    output
}
