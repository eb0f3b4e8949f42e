use std::fmt;

use serde::Serialize;

/// Structural type of a block, decided by [`classify_block`].
///
/// [`classify_block`]: super::classify_block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    /// Default when no other rule matches.
    Paragraph,
    /// `#` to `######` followed by a space. Holds the level, 1 to 6.
    Heading(u8),
    /// Opened and closed by a line of exactly three backticks.
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Paragraph => f.write_str("paragraph"),
            BlockType::Heading(level) => write!(f, "heading({level})"),
            BlockType::Code => f.write_str("code"),
            BlockType::Quote => f.write_str("quote"),
            BlockType::UnorderedList => f.write_str("unordered_list"),
            BlockType::OrderedList => f.write_str("ordered_list"),
        }
    }
}

/// A segmented block with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Trimmed block text, possibly spanning several lines.
    pub text: String,
    pub block_type: BlockType,
}
