use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `Artifactory.server('id')` or `Artifactory.server("id")`
static SERVER_CALL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Artifactory\.server\s*\(\s*['"]([^'"]+)['"]"#).expect("Valid regex pattern")
});

/// Find the server id passed to the first `Artifactory.server(...)` call
///
/// Case-sensitive; only a single quoted string argument is recognized.
pub fn find_server_id(text: &str) -> Option<&str> {
    SERVER_CALL_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quoted() {
        assert_eq!(find_server_id("def server = Artifactory.server('myserver')"), Some("myserver"));
    }

    #[test]
    fn test_double_quoted_with_spacing() {
        assert_eq!(find_server_id(r#"Artifactory.server ( "prod-art" )"#), Some("prod-art"));
    }

    #[test]
    fn test_first_match_wins() {
        let text = "Artifactory.server('one')\nArtifactory.server('two')";
        assert_eq!(find_server_id(text), Some("one"));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(find_server_id("artifactory.server('lower')"), None);
    }

    #[test]
    fn test_non_literal_argument_ignored() {
        assert_eq!(find_server_id("Artifactory.server(SERVER_ID)"), None);
        assert_eq!(find_server_id("Artifactory.newServer url: 'x'"), None);
    }
}
