use crate::options::Options;

use super::{classify::classify_block_with, types::Block};

/// The separator between blocks: an empty line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty block strings.
///
/// Runs of three or more newlines leave extra newlines at the edges of a
/// piece; trimming removes them, so any number of blank lines acts as a
/// single boundary.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Segments and classifies in one step.
pub fn parse_blocks(markdown: &str, options: &Options) -> Vec<Block> {
    markdown_to_blocks(markdown)
        .into_iter()
        .map(|text| {
            let block_type = classify_block_with(&text, options);
            Block { text, block_type }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::BlockType;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_paragraphs_and_lists() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(markdown_to_blocks("").is_empty());
        assert!(markdown_to_blocks("\n\n\n  \n\n").is_empty());
    }

    #[test]
    fn single_block() {
        assert_eq!(markdown_to_blocks("Just one block"), vec!["Just one block"]);
    }

    #[test]
    fn extra_newlines_collapse() {
        let md = "
Block 1


Block 2



Block 3
";
        assert_eq!(markdown_to_blocks(md), vec!["Block 1", "Block 2", "Block 3"]);
    }

    #[test]
    fn segmenting_is_idempotent() {
        let md = "# Title\n\n\n\nSome text\nmore\n\n\n- a\n- b\n\n";
        let first = markdown_to_blocks(md);
        let second = markdown_to_blocks(&first.join(BLOCK_SEPARATOR));
        assert_eq!(first, second);
    }

    #[test]
    fn parse_blocks_classifies_each_block() {
        let blocks = parse_blocks("## Sub\n\n> quoted\n\ntext", &Options::default());
        let types: Vec<_> = blocks.iter().map(|b| b.block_type).collect();
        assert_eq!(
            types,
            vec![BlockType::Heading(2), BlockType::Quote, BlockType::Paragraph]
        );
        assert_eq!(blocks[1].text, "> quoted");
    }
}
