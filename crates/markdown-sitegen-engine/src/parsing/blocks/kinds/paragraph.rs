/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the fallback when no other rule
/// matches. Line breaks inside a paragraph collapse to single spaces.
pub struct Paragraph;

impl Paragraph {
    pub fn content(block: &str) -> String {
        block.replace('\n', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newlines_become_spaces() {
        assert_eq!(Paragraph::content("one\ntwo\nthree"), "one two three");
    }
}
