/// Bold text, `**like this**`.
pub struct Bold;

impl Bold {
    pub const MARKER: &'static str = "**";
}

/// Italic text, `_like this_`.
pub struct Italic;

impl Italic {
    pub const MARKER: &'static str = "_";
}
