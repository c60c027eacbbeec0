//! Block segmentation and classification.
//!
//! A block is a contiguous run of source lines delimited by blank lines,
//! except inside fenced code where blank lines belong to the block. Each
//! block is classified into exactly one type by pattern inspection.

/// Marker opening and closing a fenced code block.
const FENCE: &str = "```";

/// Type of a source block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// A regular paragraph
    Paragraph,
    /// A heading with its level (1-6)
    Heading(u8),
    /// A fenced code block
    Code,
    /// A quote block
    Quote,
    /// An unordered list
    UnorderedList,
    /// An ordered list
    OrderedList,
}

/// Split a document into trimmed, non-empty block strings.
///
/// Blocks are delimited by one or more blank lines. A line starting with
/// the fence marker toggles fenced-code mode; while it is open, blank
/// lines do not end the block. The closing fence line ends its block
/// immediately, and an unterminated fence closes at end of input.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for line in document.split('\n') {
        if line.starts_with(FENCE) {
            if in_fence {
                current.push(line);
                flush(&mut blocks, &mut current);
                in_fence = false;
            } else {
                flush(&mut blocks, &mut current);
                current.push(line);
                in_fence = true;
            }
        } else if in_fence {
            current.push(line);
        } else if line.is_empty() {
            flush(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    flush(&mut blocks, &mut current);

    blocks
}

/// Join the accumulated lines into a block, dropping it if empty after
/// trimming.
fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }
    let block = current.join("\n");
    let trimmed = block.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
    current.clear();
}

/// Classify a trimmed block into its type.
///
/// The decision order is fixed: code fence, heading, quote, unordered
/// list, ordered list, with paragraph as the fallthrough.
pub fn classify_block(block: &str) -> BlockType {
    if block.is_empty() {
        return BlockType::Paragraph;
    }

    if block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if let Some(level) = heading_level(lines[0]) {
        // A valid marker on a multi-line block is still a paragraph.
        if lines.len() == 1 {
            return BlockType::Heading(level);
        }
        return BlockType::Paragraph;
    }

    if lines.iter().all(|line| line.starts_with("> ")) {
        return BlockType::Quote;
    }

    if lines.iter().all(|line| {
        let item = line.trim();
        item.starts_with("* ") || item.starts_with("- ")
    }) {
        return BlockType::UnorderedList;
    }

    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Parse a heading marker: 1-6 `#` characters followed by a space.
fn heading_level(first_line: &str) -> Option<u8> {
    if !first_line.starts_with('#') {
        return None;
    }
    let (marker, _) = first_line.split_once(' ')?;
    if (1..=6).contains(&marker.len()) && marker.chars().all(|c| c == '#') {
        return Some(marker.len() as u8);
    }
    None
}

/// Check for `1. `, `2. `, ... markers starting at 1 with no gaps.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(index, line)| line.trim().starts_with(&format!("{}. ", index + 1)))
}
