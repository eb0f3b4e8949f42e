use crate::{html::RenderError, parsing::inline::InlineError};

/// Any failure surfaced by the conversion entry points.
///
/// Conversion is all-or-nothing per document: the first error aborts the
/// call and no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("document has no level 1 heading to use as a title")]
    MissingTitle,
}
