use std::sync::OnceLock;

use regex::Regex;

use super::{Image, MarkupMatch};

/// Link markup, `[text](url)`.
///
/// A `[` directly after `!` belongs to an image and is never read as a link.
pub struct Link;

impl Link {
    fn pattern() -> &'static Regex {
        // The optional leading `!` stands in for a negative lookbehind:
        // matches that consume it are image markup and get dropped.
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"!?\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }

    /// All link markups in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<MarkupMatch> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if whole.as_str().starts_with(Image::MARKER) {
                    return None;
                }
                Some(MarkupMatch {
                    range: whole.range(),
                    text: caps.get(1)?.as_str().to_string(),
                    url: caps.get(2)?.as_str().to_string(),
                })
            })
            .collect()
    }
}
