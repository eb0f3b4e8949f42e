use std::fmt;

use serde::Serialize;

use crate::{
    error::MarkdownError,
    options::Options,
    parsing::{blocks::parse_blocks, document::block_to_html_node},
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub text: String,
    pub html: String,
}

/// Converts `markdown` block by block into a [`Snap`].
pub fn normalize(markdown: &str, options: &Options) -> Result<Snap, MarkdownError> {
    let blocks = parse_blocks(markdown, options)
        .into_iter()
        .map(|block| -> Result<BlockSnap, MarkdownError> {
            let node = block_to_html_node(&block)?;
            Ok(BlockSnap {
                kind: block.block_type.to_string(),
                text: preview(&block.text, 60),
                html: node.render_with(options)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Snap { blocks })
}

/// First line of `s`, truncated to `max` bytes on a char boundary with "..."
/// appended if anything was cut.
pub fn preview(s: &str, max: usize) -> String {
    let line = s.lines().next().unwrap_or_default();
    let mut end = line.len().min(max);
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = line[..end].to_string();
    if end < s.len() {
        out.push_str("...");
    }
    out
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}] {}", block.kind, block.text)?;
            writeln!(f, "{}", block.html)?;
        }
        Ok(())
    }
}
