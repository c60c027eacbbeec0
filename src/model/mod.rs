//! HTML tree model types.
//!
//! This module defines the output representation of the conversion
//! pipeline: a small HTML node abstraction with leaf and parent shapes,
//! plus the document root container holding one node per source block.

mod node;
mod tree;

pub use node::{HtmlNode, LeafNode, ParentNode};
pub use tree::DocumentTree;
