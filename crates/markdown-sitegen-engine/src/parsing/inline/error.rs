/// Failures raised while tokenizing inline text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    /// An opening `**`, `_` or `` ` `` has no matching close in the span.
    #[error("invalid markdown syntax: missing closing `{delimiter}` in {text:?}")]
    UnterminatedDelimiter { delimiter: String, text: String },
    /// A span kind name that is not one of the known kinds.
    #[error("invalid text type: {0}")]
    UnknownSpanKind(String),
}
