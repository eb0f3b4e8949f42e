//! # Snapshot Testing Support
//!
//! Utilities for testing the converter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a document to a stable `Snap` listing each block's
//!   type, source preview and rendered HTML, for `insta` snapshot testing
//! - **`invariants`**: Structural checks on an assembled node tree (leaves carry
//!   values, parents carry tags and children, inline tags only on leaves)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{BlockSnap, Snap, normalize};
