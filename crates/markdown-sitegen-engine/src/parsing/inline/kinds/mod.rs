//! # Inline Kinds
//!
//! Inline-specific types that own their syntax: delimiter constants for the
//! paired markers and compiled patterns for image and link markup.
//!
//! ## Types
//!
//! - **`Bold`**: `MARKER = "**"`
//! - **`Italic`**: `MARKER = "_"`
//! - **`CodeSpan`**: `TICK = "`"`
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)` not preceded by `!`
//!
//! The splitting passes read these constants; they never hardcode markup.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

use std::ops::Range;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use image::Image;
pub use link::Link;

use super::types::SpanKind;

/// Paired delimiters in the order they are resolved.
pub const DELIMITERS: [(&str, SpanKind); 3] = [
    (Bold::MARKER, SpanKind::Bold),
    (Italic::MARKER, SpanKind::Italic),
    (CodeSpan::TICK, SpanKind::Code),
];

/// One `[text](url)`-shaped match inside a span's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupMatch {
    /// Byte range of the whole markup, brackets included.
    pub range: Range<usize>,
    pub text: String,
    pub url: String,
}
