/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether `block` is a quote.
    ///
    /// Lenient mode only checks the first character of the block; strict mode
    /// requires the prefix on every line.
    pub fn is_quote(block: &str, strict: bool) -> bool {
        if strict {
            block.split('\n').all(|line| line.starts_with(Self::PREFIX))
        } else {
            block.starts_with(Self::PREFIX)
        }
    }

    /// Strips `>` and one following space from each line, then joins the
    /// lines with single spaces. Lines without the prefix are kept as-is.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }
}
