/// ATX heading, `#` through `######` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level when `block` opens with 1 to 6 `#` and a space.
    pub fn level(block: &str) -> Option<u8> {
        let b = block.as_bytes();
        let hashes = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if (1..=Self::MAX_LEVEL).contains(&hashes) && b.get(hashes) == Some(&b' ') {
            u8::try_from(hashes).ok()
        } else {
            None
        }
    }

    /// Text after the `#` run and its single following space.
    pub fn content(block: &str, level: u8) -> &str {
        let prefix = usize::from(level) + 1;
        block.get(prefix..).unwrap_or_default()
    }
}
