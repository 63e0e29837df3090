//! Vault traversal and aggregation.
//!
//! This module provides the directory walker, the event-driven aggregator it
//! feeds, and the folder tree they produce.

pub mod aggregator;
pub mod tree;
pub mod walker;

pub use aggregator::{Aggregator, Totals, WalkOutcome};
pub use tree::{FolderEntry, FolderNode, MAX_SAMPLES, RedactedFile};
pub use walker::{DirectoryUnreadable, VaultWalker, VaultWalkerError};
