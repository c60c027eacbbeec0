//! Markdown document parser.
//!
//! Orchestrates the conversion pipeline: segment the source into blocks,
//! classify each block, and convert it into a subtree of the document
//! tree, invoking the inline tokenizer for text spans.

use crate::error::{Error, Result};
use crate::model::{DocumentTree, HtmlNode};

use super::block::{classify_block, split_blocks, BlockType};
use super::inline::{InlineTokenizer, TextFragment};
use super::options::{EmphasisStyle, ParseOptions};

/// Markdown document parser.
pub struct MarkdownParser {
    tokenizer: InlineTokenizer,
    options: ParseOptions,
}

impl MarkdownParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            tokenizer: InlineTokenizer::new(),
            options,
        }
    }

    /// Parse a Markdown document into an HTML node tree.
    ///
    /// With lenient options this never fails on well-formed UTF-8 input;
    /// malformed inline constructs degrade instead of failing. Strict
    /// mode surfaces `UnbalancedDelimiter`.
    pub fn parse(&self, markdown: &str) -> Result<DocumentTree> {
        let blocks = split_blocks(markdown);
        log::debug!("split document into {} blocks", blocks.len());

        let mut tree = DocumentTree::new();
        for block in &blocks {
            tree.push(self.convert_block(block)?);
        }
        Ok(tree)
    }

    /// Convert one block into the root node of its subtree.
    fn convert_block(&self, block: &str) -> Result<HtmlNode> {
        match classify_block(block) {
            BlockType::Paragraph => self.paragraph_node(block),
            BlockType::Heading(level) => self.heading_node(block, level),
            BlockType::Code => self.code_node(block),
            BlockType::Quote => self.quote_node(block),
            BlockType::UnorderedList => self.list_node(block, "ul"),
            BlockType::OrderedList => self.list_node(block, "ol"),
        }
    }

    fn paragraph_node(&self, block: &str) -> Result<HtmlNode> {
        let children = self.inline_children(block, block)?;
        HtmlNode::parent("p", children)
    }

    fn heading_node(&self, block: &str, level: u8) -> Result<HtmlNode> {
        let content = block[level as usize..].trim();
        let children = self.inline_children(content, block)?;
        HtmlNode::parent(&format!("h{}", level), children)
    }

    fn code_node(&self, block: &str) -> Result<HtmlNode> {
        let lines: Vec<&str> = block.split('\n').collect();

        // Single-line form: backticks around the content, no language.
        if lines.len() == 1 {
            let content = lines[0].trim_matches('`').trim();
            let code = HtmlNode::parent("code", vec![HtmlNode::text(space_if_empty(content))?])?;
            return HtmlNode::parent("pre", vec![code]);
        }

        let lang = lines[0].trim().trim_start_matches('`').trim();
        let attrs = if lang.is_empty() {
            Vec::new()
        } else {
            vec![("class".to_string(), format!("language-{}", lang))]
        };

        // Everything between the fence lines, verbatim.
        let body = lines[1..lines.len() - 1].join("\n");
        let code = HtmlNode::parent_with_attrs(
            "code",
            vec![HtmlNode::text(space_if_empty(&body))?],
            attrs,
        )?;
        HtmlNode::parent("pre", vec![code])
    }

    fn quote_node(&self, block: &str) -> Result<HtmlNode> {
        let content = block
            .split('\n')
            .map(|line| line.strip_prefix("> ").unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n");
        let children = self.inline_children(&content, block)?;
        HtmlNode::parent("blockquote", children)
    }

    fn list_node(&self, block: &str, tag: &str) -> Result<HtmlNode> {
        let mut items = Vec::new();
        for line in block.split('\n') {
            items.push(self.list_item_node(line)?);
        }
        HtmlNode::parent(tag, items)
    }

    fn list_item_node(&self, line: &str) -> Result<HtmlNode> {
        let item = line.trim();
        let content = if let Some(rest) = item
            .strip_prefix("* ")
            .or_else(|| item.strip_prefix("- "))
        {
            rest
        } else {
            // Ordered marker: everything after the first ". " separator.
            match item.split_once(". ") {
                Some((_, rest)) => rest,
                None => item,
            }
        };
        let children = self.inline_children(content, line)?;
        HtmlNode::parent("li", children)
    }

    /// Map the inline fragments of `text` into child nodes, falling back
    /// to one untagged leaf holding `raw` when nothing renderable results.
    fn inline_children(&self, text: &str, raw: &str) -> Result<Vec<HtmlNode>> {
        let fragments = self
            .tokenizer
            .tokenize_with_mode(text, self.options.error_mode)?;

        let mut children = Vec::new();
        for fragment in fragments {
            self.append_fragment(fragment, &mut children)?;
        }
        if children.is_empty() {
            children.push(HtmlNode::text(raw)?);
        }
        Ok(children)
    }

    /// Append the node form of one fragment to `children`.
    ///
    /// Empty plain fragments are dropped. Empty styled content renders as
    /// a single space so the wrapping tag keeps a body.
    fn append_fragment(&self, fragment: TextFragment, children: &mut Vec<HtmlNode>) -> Result<()> {
        let (bold_tag, italic_tag) = match self.options.emphasis {
            EmphasisStyle::Semantic => ("strong", "em"),
            EmphasisStyle::Presentational => ("b", "i"),
        };

        match fragment {
            TextFragment::Plain(text) => {
                if !text.is_empty() {
                    children.push(HtmlNode::text(text)?);
                }
            }
            TextFragment::Bold(text) => children.push(styled_node(bold_tag, &text)?),
            TextFragment::Italic(text) => children.push(styled_node(italic_tag, &text)?),
            TextFragment::Code(text) => children.push(styled_node("code", &text)?),
            TextFragment::Link { text, url } => {
                children.push(HtmlNode::parent_with_attrs(
                    "a",
                    vec![HtmlNode::text(space_if_empty(&text))?],
                    vec![("href".to_string(), url)],
                )?);
            }
            TextFragment::Image { alt, url } => {
                children.push(HtmlNode::leaf_with_attrs(
                    "img",
                    "",
                    vec![("src".to_string(), url), ("alt".to_string(), alt)],
                )?);
                if self.options.image_trailing_space {
                    children.push(HtmlNode::text(" ")?);
                }
            }
        }
        Ok(())
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap text in a single-child parent element.
fn styled_node(tag: &str, text: &str) -> Result<HtmlNode> {
    HtmlNode::parent(tag, vec![HtmlNode::text(space_if_empty(text))?])
}

/// Substitute a single space for empty content.
fn space_if_empty(text: &str) -> String {
    if text.is_empty() {
        " ".to_string()
    } else {
        text.to_string()
    }
}

/// Extract the document title from the first line whose trimmed form
/// starts with `# `.
pub fn extract_title(markdown: &str) -> Result<String> {
    for line in markdown.lines() {
        if let Some(rest) = line.trim().strip_prefix("# ") {
            return Ok(rest.trim().to_string());
        }
    }
    Err(Error::MissingTitle)
}
