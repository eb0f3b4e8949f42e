use crate::options::Options;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a block with the default options.
pub fn classify_block(block: &str) -> BlockType {
    classify_block_with(block, &Options::default())
}

/// Classifies a block. Rules are tried in order and the first match wins:
/// code fence, heading, quote, unordered list, ordered list, paragraph.
pub fn classify_block_with(block: &str, options: &Options) -> BlockType {
    let block_type = if CodeFence::is_fenced(block) {
        BlockType::Code
    } else if let Some(level) = Heading::level(block) {
        BlockType::Heading(level)
    } else if BlockQuote::is_quote(block, options.strict_quotes) {
        BlockType::Quote
    } else if UnorderedList::is_list(block) {
        BlockType::UnorderedList
    } else if OrderedList::is_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    };
    log::trace!("classified block as {block_type}");
    block_type
}
