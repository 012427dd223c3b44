//! Tabular input/output and profile merge plumbing.

pub mod books;
pub mod merge;
