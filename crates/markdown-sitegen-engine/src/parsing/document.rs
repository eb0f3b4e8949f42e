//! # Document Assembly
//!
//! Maps each classified block onto its HTML subtree and wraps the result in
//! a single `<div>`. Inline text inside every block, code fences included,
//! goes through the inline tokenizer.

use crate::{error::MarkdownError, html::HtmlNode, options::Options};

use super::{
    blocks::{
        Block, BlockType,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        parse_blocks,
    },
    inline::{InlineError, text_to_children},
};

/// Tag of the element wrapping a whole document.
pub const DOCUMENT_TAG: &str = "div";

/// Converts a Markdown document into a `<div>` node tree.
pub fn markdown_to_html(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    markdown_to_html_with(markdown, &Options::default())
}

pub fn markdown_to_html_with(markdown: &str, options: &Options) -> Result<HtmlNode, MarkdownError> {
    let blocks = parse_blocks(markdown, options);
    log::debug!("converting document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(DOCUMENT_TAG, children))
}

/// Converts and renders in one call.
pub fn markdown_to_html_string(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_string_with(markdown, &Options::default())
}

pub fn markdown_to_html_string_with(
    markdown: &str,
    options: &Options,
) -> Result<String, MarkdownError> {
    let node = markdown_to_html_with(markdown, options)?;
    Ok(node.render_with(options)?)
}

/// Builds the subtree for a single classified block.
pub fn block_to_html_node(block: &Block) -> Result<HtmlNode, InlineError> {
    let text = block.text.as_str();
    let node = match block.block_type {
        BlockType::Paragraph => HtmlNode::parent("p", text_to_children(&Paragraph::content(text))?),
        BlockType::Heading(level) => HtmlNode::parent(
            format!("h{level}"),
            text_to_children(Heading::content(text, level))?,
        ),
        BlockType::Code => {
            let code = HtmlNode::parent("code", text_to_children(&CodeFence::content(text))?);
            HtmlNode::parent("pre", vec![code])
        }
        BlockType::Quote => {
            HtmlNode::parent("blockquote", text_to_children(&BlockQuote::content(text))?)
        }
        BlockType::UnorderedList => HtmlNode::parent("ul", list_items(UnorderedList::items(text))?),
        BlockType::OrderedList => HtmlNode::parent("ol", list_items(OrderedList::items(text))?),
    };
    Ok(node)
}

fn list_items(items: Vec<&str>) -> Result<Vec<HtmlNode>, InlineError> {
    items
        .into_iter()
        .map(|item| -> Result<HtmlNode, InlineError> {
            Ok(HtmlNode::parent("li", text_to_children(item)?))
        })
        .collect()
}

/// Returns the text of the first level 1 heading, trimmed.
pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    parse_blocks(markdown, &Options::default())
        .into_iter()
        .find(|block| block.block_type == BlockType::Heading(1))
        .map(|block| Heading::content(&block.text, 1).trim().to_string())
        .ok_or(MarkdownError::MissingTitle)
}
