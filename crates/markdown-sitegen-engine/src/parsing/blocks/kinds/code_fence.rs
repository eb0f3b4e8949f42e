/// Fenced code block delimited by bare triple-backtick lines.
///
/// Info strings are not recognised: "```rust" does not open a fence.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether the first and last lines are both exactly a fence, on
    /// distinct lines.
    pub fn is_fenced(block: &str) -> bool {
        let lines: Vec<&str> = block.split('\n').collect();
        match (lines.first(), lines.last()) {
            (Some(first), Some(last)) => {
                lines.len() >= 2 && *first == Self::FENCE && *last == Self::FENCE
            }
            _ => false,
        }
    }

    /// Lines between the fences, joined with newlines.
    pub fn content(block: &str) -> String {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.len() < 2 {
            return String::new();
        }
        lines[1..lines.len() - 1].join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_fenced_block() {
        assert!(CodeFence::is_fenced("```\ncode here\n```"));
        assert!(CodeFence::is_fenced("```\n```"));
    }

    #[test]
    fn rejects_single_line_and_info_strings() {
        assert!(!CodeFence::is_fenced("```"));
        assert!(!CodeFence::is_fenced("```rust\nfn main() {}\n```"));
        assert!(!CodeFence::is_fenced("```\nunclosed"));
    }

    #[test]
    fn content_drops_fence_lines() {
        assert_eq!(CodeFence::content("```\nline 1\nline 2\n```"), "line 1\nline 2");
        assert_eq!(CodeFence::content("```\n```"), "");
    }
}
