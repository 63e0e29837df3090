//! The index report document.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::patterns::{CategoryTally, PatternTally};
use crate::vault::aggregator::collect_warnings;
use crate::vault::{FolderNode, Totals, VaultWalker, WalkOutcome};

/// Final, write-once result of indexing a vault.
#[derive(Debug, Clone, Serialize)]
pub struct IndexReport {
    pub vault_name: String,
    pub generated_at: NaiveDateTime,
    pub totals: Totals,
    pub patterns: PatternTally,
    pub file_types: CategoryTally,
    pub tree: FolderNode,
}

impl IndexReport {
    /// Walk the vault and stamp the report with the current local time.
    pub fn generate(walker: &VaultWalker) -> Self {
        let outcome = walker.walk();
        Self::from_outcome(outcome, Local::now().naive_local())
    }

    /// Build a report from a finished walk and a fixed timestamp.
    pub fn from_outcome(outcome: WalkOutcome, generated_at: NaiveDateTime) -> Self {
        Self {
            vault_name: outcome.root.name.clone(),
            generated_at,
            totals: outcome.totals,
            patterns: outcome.patterns,
            file_types: outcome.categories,
            tree: outcome.root,
        }
    }

    /// `(relative path, message)` for every folder that could not be read.
    pub fn warnings(&self) -> Vec<(String, String)> {
        collect_warnings(&self.tree)
    }
}
