//! # Block Parsing
//!
//! Two-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty block strings
//!
//! 2. **Classification** (`classify`): each block string gets a `BlockType`
//!    from an ordered list of pattern rules, first match wins
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockType`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `classify_block` and its precedence rules
//!
//! ## Key Invariants
//!
//! - Blocks never start or end with whitespace and are never empty
//! - Block order matches document order

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::{classify_block, classify_block_with};
pub use segment::{markdown_to_blocks, parse_blocks};
pub use types::{Block, BlockType};
