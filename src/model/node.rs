//! HTML node types.

use crate::error::{Error, Result};
use serde::Serialize;

/// Tags rendered without a body or closing tag.
const SELF_CLOSING_TAGS: [&str; 6] = ["img", "br", "hr", "input", "meta", "link"];

/// Check whether a tag is rendered as self-closing.
fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING_TAGS.contains(&tag)
}

/// Render attributes as ` key="value"` pairs in insertion order.
fn render_attrs(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", key, value))
        .collect()
}

/// A node in the HTML output tree.
///
/// Nodes come in exactly two shapes: a leaf holds text and never has
/// children, a parent holds children and never holds text directly. The
/// shapes are separate types, so a leaf with children cannot be expressed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HtmlNode {
    /// A leaf node holding text content
    Leaf(LeafNode),

    /// A parent node holding child nodes
    Parent(ParentNode),
}

impl HtmlNode {
    /// Create an untagged leaf rendering as bare text.
    pub fn text(text: impl Into<String>) -> Result<Self> {
        Ok(Self::Leaf(LeafNode::new(None, text)?))
    }

    /// Create a tagged leaf.
    pub fn leaf(tag: &str, text: impl Into<String>) -> Result<Self> {
        Ok(Self::Leaf(LeafNode::new(Some(tag), text)?))
    }

    /// Create a tagged leaf with attributes.
    pub fn leaf_with_attrs(
        tag: &str,
        text: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Result<Self> {
        Ok(Self::Leaf(LeafNode::with_attrs(Some(tag), text, attrs)?))
    }

    /// Create a parent node.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<Self> {
        Ok(Self::Parent(ParentNode::new(tag, children)?))
    }

    /// Create a parent node with attributes.
    pub fn parent_with_attrs(
        tag: &str,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    ) -> Result<Self> {
        Ok(Self::Parent(ParentNode::with_attrs(tag, children, attrs)?))
    }

    /// Get the element tag, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag(),
            Self::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Serialize this node and its descendants to an HTML string.
    pub fn to_html(&self) -> String {
        match self {
            Self::Leaf(leaf) => leaf.to_html(),
            Self::Parent(parent) => parent.to_html(),
        }
    }
}

/// A tree node with no children, directly holding text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafNode {
    /// Wrapping element tag; `None` renders the text bare
    tag: Option<String>,

    /// Text content
    text: String,

    /// Attributes in insertion order
    attrs: Vec<(String, String)>,
}

impl LeafNode {
    /// Create a leaf node without attributes.
    ///
    /// Fails with `InvalidNode` if the text is empty and the tag is not
    /// self-closing.
    pub fn new(tag: Option<&str>, text: impl Into<String>) -> Result<Self> {
        Self::with_attrs(tag, text, Vec::new())
    }

    /// Create a leaf node with attributes.
    pub fn with_attrs(
        tag: Option<&str>,
        text: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Result<Self> {
        let text = text.into();
        if text.is_empty() && !tag.is_some_and(is_self_closing) {
            return Err(Error::InvalidNode(
                "leaf text is empty on a non-self-closing tag".to_string(),
            ));
        }
        Ok(Self {
            tag: tag.map(String::from),
            text,
            attrs,
        })
    }

    /// Get the element tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the attributes in insertion order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Serialize to an HTML string.
    ///
    /// An untagged leaf renders as its raw text. No escaping is performed;
    /// input is assumed trusted.
    pub fn to_html(&self) -> String {
        match &self.tag {
            None => self.text.clone(),
            Some(tag) if is_self_closing(tag) => {
                format!("<{}{}>", tag, render_attrs(&self.attrs))
            }
            Some(tag) => {
                format!("<{}{}>{}</{}>", tag, render_attrs(&self.attrs), self.text, tag)
            }
        }
    }
}

/// A tree node whose content is the concatenation of its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParentNode {
    /// Element tag, never empty
    tag: String,

    /// Child nodes in document order, never empty
    children: Vec<HtmlNode>,

    /// Attributes in insertion order
    attrs: Vec<(String, String)>,
}

impl ParentNode {
    /// Create a parent node without attributes.
    ///
    /// Fails with `InvalidNode` if the tag is empty or there are no
    /// children.
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Result<Self> {
        Self::with_attrs(tag, children, Vec::new())
    }

    /// Create a parent node with attributes.
    pub fn with_attrs(
        tag: &str,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    ) -> Result<Self> {
        if tag.is_empty() {
            return Err(Error::InvalidNode("parent tag is empty".to_string()));
        }
        if children.is_empty() {
            return Err(Error::InvalidNode(format!(
                "parent <{}> has no children",
                tag
            )));
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
            attrs,
        })
    }

    /// Get the element tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get the child nodes.
    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    /// Get the attributes in insertion order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Serialize to an HTML string.
    ///
    /// A self-closing tag renders with no body even when children were
    /// supplied.
    pub fn to_html(&self) -> String {
        let attrs = render_attrs(&self.attrs);
        if is_self_closing(&self.tag) {
            return format!("<{}{}>", self.tag, attrs);
        }
        let body: String = self.children.iter().map(HtmlNode::to_html).collect();
        format!("<{}{}>{}</{}>", self.tag, attrs, body, self.tag)
    }
}
