//! Full-page assembly from a Markdown source and an HTML template.
//!
//! This is a pure string transformation: reading sources and writing
//! output files stays with the caller.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::parser::{extract_title, MarkdownParser, ParseOptions};

/// Placeholder token replaced by the extracted title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder token replaced by the serialized document body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// A fully assembled page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    /// Title extracted from the first `# ` heading
    pub title: String,

    /// Final HTML with both placeholders substituted
    pub html: String,
}

/// Assemble a page from a Markdown source and a template.
///
/// The template must contain both placeholder tokens; a missing token
/// fails with `MissingPlaceholder`. A document without a top-level
/// heading fails with `MissingTitle`. Every occurrence of a placeholder
/// is replaced.
pub fn render_page(markdown: &str, template: &str) -> Result<RenderedPage> {
    render_page_with_options(markdown, template, ParseOptions::default())
}

/// Assemble a page with custom parse options.
pub fn render_page_with_options(
    markdown: &str,
    template: &str,
    options: ParseOptions,
) -> Result<RenderedPage> {
    for placeholder in [TITLE_PLACEHOLDER, CONTENT_PLACEHOLDER] {
        if !template.contains(placeholder) {
            return Err(Error::MissingPlaceholder(placeholder.to_string()));
        }
    }

    let title = extract_title(markdown)?;
    let parser = MarkdownParser::with_options(options);
    let body = parser.parse(markdown)?.to_html();

    let html = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &body);

    Ok(RenderedPage { title, html })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::EmphasisStyle;

    const TEMPLATE: &str =
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[test]
    fn test_render_page() {
        let page = render_page("# Home\n\nWelcome **friend**.", TEMPLATE).unwrap();
        assert_eq!(page.title, "Home");
        assert_eq!(
            page.html,
            "<html><head><title>Home</title></head>\
             <body><div><h1>Home</h1><p>Welcome <strong>friend</strong>.</p></div></body></html>"
        );
    }

    #[test]
    fn test_render_page_replaces_every_occurrence() {
        let template = "<title>{{ Title }}</title><h1>{{ Title }}</h1>{{ Content }}";
        let page = render_page("# Twice", template).unwrap();
        assert_eq!(
            page.html,
            "<title>Twice</title><h1>Twice</h1><div><h1>Twice</h1></div>"
        );
    }

    #[test]
    fn test_render_page_missing_title_placeholder() {
        let err = render_page("# T", "<body>{{ Content }}</body>").unwrap_err();
        match err {
            Error::MissingPlaceholder(token) => assert_eq!(token, TITLE_PLACEHOLDER),
            other => panic!("expected MissingPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn test_render_page_missing_content_placeholder() {
        let err = render_page("# T", "<title>{{ Title }}</title>").unwrap_err();
        match err {
            Error::MissingPlaceholder(token) => assert_eq!(token, CONTENT_PLACEHOLDER),
            other => panic!("expected MissingPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn test_render_page_requires_heading() {
        let err = render_page("just a paragraph", TEMPLATE).unwrap_err();
        assert!(matches!(err, Error::MissingTitle));
    }

    #[test]
    fn test_render_page_with_options() {
        let options = ParseOptions::new().with_emphasis(EmphasisStyle::Presentational);
        let page = render_page_with_options("# T\n\n*hi*", TEMPLATE, options).unwrap();
        assert!(page.html.contains("<i>hi</i>"));
    }
}
