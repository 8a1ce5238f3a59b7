//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Supports GitHub-style extensions (strikethrough, tables, autolinks).
/// Single newlines become `<br>` so plain-text files such as addresses keep
/// their line structure.
///
/// The output is sanitized using `ammonia` to prevent XSS attacks
/// by removing potentially dangerous HTML elements and attributes.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.render.hardbreaks = true;

    let html_output = render(markdown, &options);

    // Sanitize HTML to prevent XSS attacks
    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_emphasis() {
        let html = markdown_to_html("## Summary\n\n**Bold** text");
        assert!(html.contains("<h2>Summary</h2>"));
        assert!(html.contains("<strong>Bold</strong>"));
    }

    #[test]
    fn test_line_breaks_preserved() {
        let html = markdown_to_html("123 Main Street\nAnytown, ST 12345");
        assert!(html.contains("<br"));
    }

    #[test]
    fn test_script_removed() {
        let html = markdown_to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_links_kept() {
        let html = markdown_to_html("[site](https://example.com)");
        assert!(html.contains("href=\"https://example.com\""));
    }
}
