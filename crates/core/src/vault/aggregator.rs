//! Accumulates per-folder and vault-wide statistics from walk events.
//!
//! The aggregator knows nothing about the filesystem. A walker drives it
//! with `enter_folder` / `record_file` / `leave_folder` events in depth-first
//! order, so it can be exercised directly in tests.

use serde::Serialize;

use crate::patterns::{CategoryTally, FileCategory, PatternKind, PatternTally};
use crate::redact::redact_filename;

use super::tree::{FolderNode, RedactedFile};

/// Vault-wide counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Folders below the root (the root itself is not counted).
    pub folders: u64,
    pub files: u64,
    /// Deepest folder level reached (root = 0).
    pub max_depth: usize,
}

/// Everything a finished walk produced.
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    pub root: FolderNode,
    pub patterns: PatternTally,
    pub categories: CategoryTally,
    pub totals: Totals,
}

impl WalkOutcome {
    /// `(relative path, message)` for every folder that could not be read.
    pub fn warnings(&self) -> Vec<(String, String)> {
        collect_warnings(&self.root)
    }
}

pub(crate) fn collect_warnings(root: &FolderNode) -> Vec<(String, String)> {
    root.preorder()
        .into_iter()
        .filter_map(|entry| entry.node.warning.clone().map(|w| (entry.path, w)))
        .collect()
}

#[derive(Debug)]
pub struct Aggregator {
    /// Open folders, root first. Never empty.
    stack: Vec<FolderNode>,
    patterns: PatternTally,
    categories: CategoryTally,
    totals: Totals,
}

impl Aggregator {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            stack: vec![FolderNode::new(root_name, 0)],
            patterns: PatternTally::new(),
            categories: CategoryTally::new(),
            totals: Totals::default(),
        }
    }

    /// Depth of the folder currently receiving files.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Open a subfolder of the current folder.
    pub fn enter_folder(&mut self, name: impl Into<String>) {
        let depth = self.stack.len();
        self.stack.push(FolderNode::new(name, depth));
        self.totals.folders = self.totals.folders.saturating_add(1);
        self.totals.max_depth = self.totals.max_depth.max(depth);
    }

    /// Close the current folder and attach it to its parent.
    ///
    /// The root is never closed; calling this at the root does nothing.
    pub fn leave_folder(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(done) = self.stack.pop()
            && let Some(parent) = self.stack.last_mut()
        {
            parent.children.push(done);
        }
    }

    /// Classify, redact and count one file in the current folder.
    pub fn record_file(&mut self, filename: &str) -> PatternKind {
        let (matched, display_name) = redact_filename(filename);
        let pattern = matched.kind();
        let category = FileCategory::from_filename(filename);

        self.patterns.record(pattern);
        self.categories.record(category);
        self.totals.files = self.totals.files.saturating_add(1);

        let folder = self.current_mut();
        folder.file_count = folder.file_count.saturating_add(1);
        folder.offer_sample(RedactedFile { display_name, pattern, category });

        pattern
    }

    /// Flag the current folder as unreadable.
    pub fn mark_unreadable(&mut self, message: impl Into<String>) {
        self.current_mut().warning = Some(message.into());
    }

    /// Close every open folder and hand back the tree and counters.
    pub fn finish(mut self) -> WalkOutcome {
        while self.stack.len() > 1 {
            self.leave_folder();
        }
        let root = self.stack.pop().unwrap_or_else(|| FolderNode::new("", 0));

        WalkOutcome {
            root,
            patterns: self.patterns,
            categories: self.categories,
            totals: self.totals,
        }
    }

    fn current_mut(&mut self) -> &mut FolderNode {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}
