//! Folder tree produced by a vault walk.

use serde::Serialize;

use crate::patterns::{FileCategory, PatternKind};

/// Most redacted samples a folder keeps.
pub const MAX_SAMPLES: usize = 5;

/// Below this many samples, repeats of an already-sampled pattern are kept.
const MIN_SAMPLES: usize = 3;

/// A file as it may appear in a report: redacted, never the real file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactedFile {
    pub display_name: String,
    pub pattern: PatternKind,
    pub category: FileCategory,
}

/// One directory of the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderNode {
    /// Directory name, never redacted.
    pub name: String,
    /// Levels below the vault root (root = 0).
    pub depth: usize,
    /// Direct file children.
    pub file_count: u64,
    /// Subfolders in traversal order.
    pub children: Vec<FolderNode>,
    /// Redacted examples of the files in this folder.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<RedactedFile>,
    /// Set when the directory could not be listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// A folder reached by a pre-order walk, with its `/`-joined path relative
/// to the vault root (empty for the root).
#[derive(Debug, Clone)]
pub struct FolderEntry<'a> {
    pub path: String,
    pub node: &'a FolderNode,
}

impl FolderNode {
    pub fn new(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            depth,
            file_count: 0,
            children: Vec::new(),
            samples: Vec::new(),
            warning: None,
        }
    }

    /// Offer a file for the folder's sample list.
    ///
    /// Files are taken in traversal order: always while fewer than three are
    /// sampled, afterwards only if their pattern is new, up to five.
    pub fn offer_sample(&mut self, file: RedactedFile) {
        if self.samples.len() >= MAX_SAMPLES {
            return;
        }
        let seen = self.samples.iter().any(|s| s.pattern == file.pattern);
        if !seen || self.samples.len() < MIN_SAMPLES {
            self.samples.push(file);
        }
    }

    /// Files counted here but not listed in `samples`.
    pub fn unsampled_count(&self) -> u64 {
        self.file_count.saturating_sub(self.samples.len() as u64)
    }

    /// This folder and every descendant, in pre-order.
    pub fn preorder(&self) -> Vec<FolderEntry<'_>> {
        let mut out = Vec::new();
        let mut stack = vec![(String::new(), self)];

        while let Some((path, node)) = stack.pop() {
            for child in node.children.iter().rev() {
                let child_path = if path.is_empty() {
                    child.name.clone()
                } else {
                    format!("{path}/{}", child.name)
                };
                stack.push((child_path, child));
            }
            out.push(FolderEntry { path, node });
        }
        out
    }

    /// Number of folders below this one.
    pub fn descendant_count(&self) -> u64 {
        self.children.iter().map(|c| 1 + c.descendant_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, pattern: PatternKind) -> RedactedFile {
        RedactedFile {
            display_name: name.to_string(),
            pattern,
            category: FileCategory::Notes,
        }
    }

    #[test]
    fn test_sampling_prefers_new_patterns_after_three() {
        let mut node = FolderNode::new("Inbox", 1);
        for i in 0..4 {
            node.offer_sample(sample(&format!("s{i}"), PatternKind::Standard));
        }
        node.offer_sample(sample("daily", PatternKind::DailyNote));
        node.offer_sample(sample("uuid", PatternKind::Uuid));
        node.offer_sample(sample("weekly", PatternKind::WeeklyNote));

        let names: Vec<_> = node.samples.iter().map(|s| s.display_name.as_str()).collect();
        assert_eq!(names, vec!["s0", "s1", "s2", "daily", "uuid"]);
    }

    #[test]
    fn test_unsampled_count() {
        let mut node = FolderNode::new("Inbox", 1);
        node.file_count = 7;
        node.offer_sample(sample("a", PatternKind::Standard));
        assert_eq!(node.unsampled_count(), 6);
    }

    #[test]
    fn test_preorder_paths() {
        let mut root = FolderNode::new("vault", 0);
        let mut projects = FolderNode::new("Projects", 1);
        projects.children.push(FolderNode::new("Active", 2));
        root.children.push(projects);
        root.children.push(FolderNode::new("Archive", 1));

        let paths: Vec<_> = root.preorder().into_iter().map(|e| e.path).collect();

        assert_eq!(paths, vec!["", "Projects", "Projects/Active", "Archive"]);
        assert_eq!(root.descendant_count(), 3);
    }
}
