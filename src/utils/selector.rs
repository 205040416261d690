//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). A bad selector then degrades to "element not found" instead
/// of a panic, which keeps classification total.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "heading lookup")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        Selector::parse("*:not(*)").expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_valid_selector_matches() {
        let html = Html::parse_document(r#"<select name="colonia"><option>A</option></select>"#);
        let selector = parse_selector_with_fallback(r#"select[name="colonia"]"#, "test");
        assert_eq!(html.select(&selector).count(), 1);
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let html = Html::parse_document("<h2>CON REEXPEDICIÓN</h2>");
        let selector = parse_selector_with_fallback("h2[[[", "test");
        assert_eq!(html.select(&selector).count(), 0);
    }
}
