//! Markdown to HTML conversion core.
//!
//! The pipeline runs in three stages:
//!
//! 1. `parsing::blocks` splits a document into blocks and classifies each one
//! 2. `parsing::inline` tokenizes block text into typed spans
//! 3. `parsing::document` assembles an [`html::HtmlNode`] tree that renders
//!    itself to a string
//!
//! Everything is synchronous and pure: no I/O, no shared state.

pub mod error;
pub mod html;
pub mod options;
pub mod parsing;

pub use error::MarkdownError;
pub use html::{Attributes, HtmlNode, RenderError};
pub use options::Options;
pub use parsing::{
    blocks::{Block, BlockType, classify_block, classify_block_with, markdown_to_blocks},
    document::{
        extract_title, markdown_to_html, markdown_to_html_string, markdown_to_html_string_with,
        markdown_to_html_with,
    },
    inline::{InlineError, SpanKind, TextSpan, span_to_html_node, text_to_spans, text_to_text_nodes},
};
