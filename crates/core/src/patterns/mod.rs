//! Filename naming-convention detection.
//!
//! This module provides the pattern classifier, the file-type categories,
//! and the tallies the vault walker accumulates.

pub mod category;
pub mod classifier;
pub mod tally;
pub mod types;

pub use category::FileCategory;
pub use classifier::{classify, count_words, split_extension};
pub use tally::{CategoryTally, PatternTally, Tally};
pub use types::{DateLayout, PatternKind, PatternMatch};
