pub mod blocks;
pub mod document;
pub mod inline;
pub mod snapshot;
