use std::sync::OnceLock;

use regex::Regex;

use super::MarkupMatch;

/// Image markup, `![alt](url)`.
///
/// Neither the alt text nor the url may contain their own bracket pair.
pub struct Image;

impl Image {
    pub const MARKER: char = '!';

    fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }

    /// All image markups in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<MarkupMatch> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(MarkupMatch {
                    range: whole.range(),
                    text: caps.get(1)?.as_str().to_string(),
                    url: caps.get(2)?.as_str().to_string(),
                })
            })
            .collect()
    }
}
