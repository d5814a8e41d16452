// file: src/fingerprint/html.rs
// description: visible text extraction from html markup
// reference: https://docs.rs/scraper

use scraper::Html;

pub struct HtmlTextExtractor;

impl HtmlTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Concatenates every text node in document order, markup stripped.
    /// Whitespace inside text nodes is preserved exactly so the digest of the
    /// result stays byte-stable across runs.
    pub fn extract(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        document.root_element().text().collect::<String>()
    }
}

impl Default for HtmlTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_markup() {
        let extractor = HtmlTextExtractor::new();
        let text = extractor.extract("<html><body><p>hello</p></body></html>");
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_concatenates_text_nodes_in_order() {
        let extractor = HtmlTextExtractor::new();
        let text = extractor.extract("<div><b>Acme</b> quarterly <i>report</i></div>");
        assert_eq!(text, "Acme quarterly report");
    }

    #[test]
    fn test_identical_text_across_different_markup() {
        let extractor = HtmlTextExtractor::new();
        let a = extractor.extract("<p>hello</p>");
        let b = extractor.extract("<span>hello</span>");
        assert_eq!(a, b);
    }

    #[test]
    fn test_preserves_text_whitespace() {
        let extractor = HtmlTextExtractor::new();
        let text = extractor.extract("<pre>a  b</pre>");
        assert_eq!(text, "a  b");
    }
}
