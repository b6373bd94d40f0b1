const PREVIEW_LIMIT: usize = 120;

pub fn format_preview(snippet: &str) -> String {
    if snippet.trim().is_empty() {
        return "(no preview)".to_string();
    }

    let decoded = html_escape::decode_html_entities(snippet).to_string();
    let compact = decoded.split_whitespace().collect::<Vec<_>>().join(" ");

    if compact.len() <= PREVIEW_LIMIT {
        return compact;
    }

    let mut end = PREVIEW_LIMIT;
    while !compact.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &compact[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_previews() {
        let preview = format_preview(
            "this is a very long preview string that should be truncated at one hundred and twenty characters to keep list output compact and readable",
        );
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= PREVIEW_LIMIT + 3);
    }

    #[test]
    fn truncates_on_char_boundary() {
        let preview = format_preview(&"業務".repeat(50));
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= PREVIEW_LIMIT + 3);
    }

    #[test]
    fn decodes_common_html_entities() {
        let preview = format_preview("I&#39;ve &amp; you&#x27;ve &lt;done&gt; this");
        assert_eq!(preview, "I've & you've <done> this");
    }

    #[test]
    fn blank_snippet_has_placeholder() {
        assert_eq!(format_preview("  "), "(no preview)");
    }
}
