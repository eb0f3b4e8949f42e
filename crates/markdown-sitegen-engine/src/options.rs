use serde::{Deserialize, Serialize};

/// Switches that alter conversion or rendering output.
///
/// Both switches are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Require every line of a quote block to start with `>`.
    /// When off, only the first character of the block is checked.
    pub strict_quotes: bool,
    /// HTML-escape attribute values while rendering.
    pub escape_attributes: bool,
}
