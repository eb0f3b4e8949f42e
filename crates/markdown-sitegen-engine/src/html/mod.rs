//! # HTML Node Model
//!
//! A closed, two-variant tree of renderable nodes produced by the document
//! assembler and serialized on demand.
//!
//! ## Modules
//!
//! - **`attributes`**: `Attributes`, an insertion-ordered attribute list
//! - **`node`**: `HtmlNode` (Leaf / Parent) and `RenderError`
//!
//! ## Key Invariants
//!
//! - A leaf must carry a value (the empty string is a valid value)
//! - A parent must carry a tag and a children list (an empty list is valid)
//! - Nodes are immutable once built; rendering never caches

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, RenderError};
