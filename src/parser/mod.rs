//! Markdown parsing module.

mod block;
mod inline;
mod markdown_parser;
mod options;

pub use block::{classify_block, split_blocks, BlockType};
pub use inline::{InlineTokenizer, TextFragment};
pub use markdown_parser::{extract_title, MarkdownParser};
pub use options::{EmphasisStyle, ErrorMode, ParseOptions};
