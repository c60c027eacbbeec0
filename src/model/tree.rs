//! Document-level tree container.

use super::HtmlNode;
use serde::Serialize;

/// The root container for a converted document.
///
/// Holds one node per source block and serializes as a `div` wrapping
/// them. Unlike a parent node, the root tolerates zero children so an
/// empty document still renders as an empty container.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentTree {
    /// Per-block root nodes in source order
    children: Vec<HtmlNode>,
}

impl DocumentTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Create a tree from per-block root nodes.
    pub fn from_children(children: Vec<HtmlNode>) -> Self {
        Self { children }
    }

    /// Append a block node to the tree.
    pub fn push(&mut self, node: HtmlNode) {
        self.children.push(node);
    }

    /// Get the per-block nodes.
    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    /// Get the number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.children.len()
    }

    /// Check if the tree has any blocks.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serialize the whole document to an HTML string.
    pub fn to_html(&self) -> String {
        let body: String = self.children.iter().map(HtmlNode::to_html).collect();
        format!("<div>{}</div>", body)
    }
}
