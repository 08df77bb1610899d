/// Named character references decoded by [`normalize`], in replacement order.
///
/// `&amp;` must stay last so that `&amp;apos;` decodes to `&apos;` rather
/// than to an apostrophe.
pub const ENTITY_REPLACEMENTS: [(&str, &str); 5] = [
    ("&apos;", "'"),
    ("&quot;", "\""),
    ("&gt;", ">"),
    ("&lt;", "<"),
    ("&amp;", "&"),
];

/// Result of Stage 0 normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationResult {
    /// Source text with entities decoded
    pub text: String,
    /// Number of entity references replaced
    pub entities_decoded: usize,
}

/// Perform Stage 0: decode HTML entities left behind by a Jenkins XML export
///
/// Only the five references in [`ENTITY_REPLACEMENTS`] are decoded; the text is
/// otherwise untouched. Text without entities passes through unchanged.
pub fn normalize(source: &str) -> NormalizationResult {
    let mut text = source.to_string();
    let mut entities_decoded = 0;

    for (entity, literal) in ENTITY_REPLACEMENTS {
        let count = text.matches(entity).count();
        if count > 0 {
            text = text.replace(entity, literal);
            entities_decoded += count;
        }
    }

    NormalizationResult {
        text,
        entities_decoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_all_entities() {
        let result = normalize("&lt;a href=&quot;x&quot;&gt;it&apos;s &amp; more&lt;/a&gt;");

        assert_eq!(result.text, r#"<a href="x">it's & more</a>"#);
        assert_eq!(result.entities_decoded, 8);
    }

    #[test]
    fn test_no_entities_is_noop() {
        let source = "stage('Ping Artifactory') { steps { echo 'hi' } }";
        let result = normalize(source);

        assert_eq!(result.text, source);
        assert_eq!(result.entities_decoded, 0);
    }

    #[test]
    fn test_ampersand_decoded_last() {
        assert_eq!(normalize("&amp;apos;").text, "&apos;");
        assert_eq!(normalize("&amp;lt;").text, "&lt;");
    }

    #[test]
    fn test_idempotent_on_decoded_text() {
        let inputs = [
            "",
            "Artifactory.server(&apos;srv1&apos;)",
            "a &lt; b &amp;&amp; c &gt; d",
            "plain & text with 'quotes' and \"doubles\"",
        ];

        for input in inputs {
            let once = normalize(input).text;
            let twice = normalize(&once).text;
            assert_eq!(once, twice, "normalizing {:?} twice changed it", input);
        }
    }

    #[test]
    fn test_empty_input() {
        let result = normalize("");
        assert!(result.text.is_empty());
        assert_eq!(result.entities_decoded, 0);
    }
}
