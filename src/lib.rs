//! # sitemark
//!
//! Markdown to HTML conversion core for static site generators.
//!
//! This library converts a restricted Markdown dialect into an HTML document
//! tree and serializes it to HTML, JSON, or a full templated page.
//!
//! ## Quick Start
//!
//! ```
//! use sitemark::to_html;
//!
//! fn main() -> sitemark::Result<()> {
//!     let html = to_html("# Hello\n\nSome **bold** text.")?;
//!     assert_eq!(
//!         html,
//!         "<div><h1>Hello</h1><p>Some <strong>bold</strong> text.</p></div>"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Block structure**: headings, paragraphs, code fences, quotes, lists
//! - **Inline spans**: bold, italic, inline code, links, images
//! - **Deterministic output**: insertion-order attributes, stable serialization
//! - **Structured dumps**: JSON view of the document tree
//! - **Page assembly**: title extraction and template substitution

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{DocumentTree, HtmlNode, LeafNode, ParentNode};
pub use parser::{
    extract_title, BlockType, EmphasisStyle, ErrorMode, InlineTokenizer, MarkdownParser,
    ParseOptions, TextFragment,
};
pub use render::{render_page, render_page_with_options, JsonFormat, RenderedPage};

/// Parse a Markdown document into an HTML document tree.
///
/// # Arguments
///
/// * `markdown` - Markdown source text
///
/// # Returns
///
/// A `Result` containing the parsed `DocumentTree` or an error.
///
/// # Example
///
/// ```
/// use sitemark::parse;
///
/// let tree = parse("# Title\n\nBody text.").unwrap();
/// assert_eq!(tree.block_count(), 2);
/// ```
pub fn parse(markdown: &str) -> Result<DocumentTree> {
    let parser = MarkdownParser::new();
    parser.parse(markdown)
}

/// Parse a Markdown document with custom options.
///
/// # Example
///
/// ```
/// use sitemark::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().strict();
/// assert!(parse_with_options("an **unclosed run", options).is_err());
/// ```
pub fn parse_with_options(markdown: &str, options: ParseOptions) -> Result<DocumentTree> {
    let parser = MarkdownParser::with_options(options);
    parser.parse(markdown)
}

/// Convert a Markdown document to an HTML string.
///
/// # Example
///
/// ```
/// use sitemark::to_html;
///
/// let html = to_html("Plain paragraph.").unwrap();
/// assert_eq!(html, "<div><p>Plain paragraph.</p></div>");
/// ```
pub fn to_html(markdown: &str) -> Result<String> {
    let tree = parse(markdown)?;
    Ok(tree.to_html())
}

/// Convert a Markdown document to HTML with custom options.
///
/// # Example
///
/// ```
/// use sitemark::{to_html_with_options, EmphasisStyle, ParseOptions};
///
/// let options = ParseOptions::new().with_emphasis(EmphasisStyle::Presentational);
/// let html = to_html_with_options("*quiet* word", options).unwrap();
/// assert_eq!(html, "<div><p><i>quiet</i> word</p></div>");
/// ```
pub fn to_html_with_options(markdown: &str, options: ParseOptions) -> Result<String> {
    let tree = parse_with_options(markdown, options)?;
    Ok(tree.to_html())
}

/// Tokenize one line of text into inline fragments.
///
/// Runs the lenient inline pass: a pass that finds an unbalanced
/// delimiter run leaves it unsplit, though a later pass may still match
/// inside the leftover text (a stray `**` reads as two `*` to the
/// italic pass). For repeated use, construct an [`InlineTokenizer`]
/// once instead.
///
/// # Example
///
/// ```
/// use sitemark::{tokenize, TextFragment};
///
/// let fragments = tokenize("a `span` here");
/// assert_eq!(fragments[1], TextFragment::Code("span".to_string()));
/// ```
pub fn tokenize(text: &str) -> Vec<TextFragment> {
    let tokenizer = InlineTokenizer::new();
    tokenizer.tokenize(text)
}
