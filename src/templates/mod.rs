pub mod pipeline;
pub mod stages;

pub use pipeline::*;
pub use stages::*;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches `{{name}}` placeholders in templates
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("Valid regex pattern"));

/// Fill `{{name}}` placeholders in a template in a single pass.
///
/// Substituted values are never rescanned, so a value that itself looks like
/// a placeholder is emitted verbatim. Placeholders without a binding are left
/// untouched. Groovy `${VAR}` references are not placeholders.
pub fn fill(template: &str, bindings: &[(&str, &str)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            bindings
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
