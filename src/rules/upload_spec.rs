use once_cell::sync::Lazy;
use regex::Regex;

static PATTERN_FIELD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""pattern"\s*:\s*"([^"]+)""#).expect("Valid regex pattern"));

static TARGET_FIELD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""target"\s*:\s*"([^"]+)""#).expect("Valid regex pattern"));

fn first_capture<'a>(regex: &Regex, text: &'a str) -> Option<&'a str> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First `"pattern": "..."` value anywhere in the text
pub fn find_upload_pattern(text: &str) -> Option<&str> {
    first_capture(&PATTERN_FIELD_REGEX, text)
}

/// First `"target": "..."` value anywhere in the text
///
/// Independent of [`find_upload_pattern`]: the two fields need not belong to
/// the same spec object.
pub fn find_upload_target(text: &str) -> Option<&str> {
    first_capture(&TARGET_FIELD_REGEX, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r#"
        def uploadSpec = """{
            "files": [
                {
                    "pattern": "build/*.jar",
                    "target": "libs-snapshot-local/app/"
                }
            ]
        }"""
    "#;

    #[test]
    fn test_spec_fields() {
        assert_eq!(find_upload_pattern(SPEC), Some("build/*.jar"));
        assert_eq!(find_upload_target(SPEC), Some("libs-snapshot-local/app/"));
    }

    #[test]
    fn test_partial_match() {
        let text = r#"{"pattern": "*.zip"}"#;
        assert_eq!(find_upload_pattern(text), Some("*.zip"));
        assert_eq!(find_upload_target(text), None);
    }

    #[test]
    fn test_single_quotes_not_matched() {
        assert_eq!(find_upload_pattern("'pattern': '*.zip'"), None);
    }

    #[test]
    fn test_empty_value_not_matched() {
        assert_eq!(find_upload_target(r#""target": """#), None);
    }
}
