/// List whose every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_list(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::MARKER))
    }

    /// Item texts with their markers removed. Lines without the marker are
    /// returned unchanged.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect()
    }
}

/// List whose lines are numbered `1. `, `2. `, ... with no gaps.
pub struct OrderedList;

impl OrderedList {
    fn marker(number: usize) -> String {
        format!("{number}. ")
    }

    pub fn is_list(block: &str) -> bool {
        block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Item texts with their `N. ` markers removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                let marker = Self::marker(i + 1);
                line.strip_prefix(marker.as_str()).unwrap_or(line)
            })
            .collect()
    }
}
