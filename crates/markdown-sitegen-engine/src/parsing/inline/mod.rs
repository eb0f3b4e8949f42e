//! # Inline Parsing
//!
//! Turns the text of a single block into an ordered sequence of typed
//! [`TextSpan`]s, then maps those spans onto leaf [`HtmlNode`]s.
//!
//! ## Pass Order
//!
//! Passes run in a fixed order and each one only touches `Plain` spans:
//!
//! 1. `**` bold, `_` italic, `` ` `` code (delimiter pairs, repeated to a fixed point)
//! 2. `![alt](url)` images
//! 3. `[text](url)` links
//!
//! A span is never re-classified once it has a non-plain kind, so text inside
//! bold or code is left alone by every later pass.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and the closed `SpanKind` enum
//! - **`kinds`**: per-kind delimiter constants and markup patterns
//! - **`split`**: the splitting passes
//! - **`to_node`**: span to `HtmlNode` mapping
//!
//! [`HtmlNode`]: crate::html::HtmlNode

pub mod error;
pub mod kinds;
pub mod split;
pub mod to_node;
pub mod types;

pub use error::InlineError;
pub use to_node::{span_to_html_node, spans_to_html_nodes};
pub use types::{SpanKind, TextSpan};

use crate::html::HtmlNode;

use kinds::DELIMITERS;
use split::{split_spans_delimiter_repeated, split_spans_image, split_spans_link};

/// Tokenizes `text` into spans.
///
/// Empty input yields an empty sequence. Fails on the first opening
/// delimiter that has no matching close.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let mut spans = if text.is_empty() {
        vec![]
    } else {
        vec![TextSpan::plain(text)]
    };

    for (delimiter, kind) in DELIMITERS {
        spans = split_spans_delimiter_repeated(spans, delimiter, kind)?;
    }
    spans = split_spans_image(spans);
    spans = split_spans_link(spans);

    Ok(spans)
}

/// Runs every inline pass in order and returns the flattened span list.
///
/// This is the entry point used by the document assembler and by callers
/// outside the crate.
pub fn text_to_text_nodes(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    text_to_spans(text)
}

/// Tokenizes `text` and maps every span to a leaf node, in order.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    let spans = text_to_text_nodes(text)?;
    Ok(spans_to_html_nodes(&spans))
}
