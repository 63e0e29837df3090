//! Recursive vault directory walker.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::aggregator::{Aggregator, WalkOutcome};

/// Directory skipped at any depth, hidden or not.
const SKIPPED_DIR: &str = "node_modules";

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault path not found or not a directory: {0}")]
    VaultNotFound(String),
}

/// A directory the walk could not list. Recovered: the folder stays in the
/// tree with no contents.
#[derive(Debug, Error)]
#[error("directory unreadable: {path}: {source}")]
pub struct DirectoryUnreadable {
    pub path: String,
    #[source]
    pub source: walkdir::Error,
}

/// Walker for indexing the folder structure of a vault.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    /// Folders to exclude from walking (relative paths from vault root).
    excluded_folders: Vec<PathBuf>,
}

impl VaultWalker {
    /// Create a new walker for the given vault root.
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a new walker with folder exclusions.
    ///
    /// Excluded folders can be specified as:
    /// - Relative paths from vault root (e.g., "Archive/Private")
    /// - Absolute paths (will be converted to relative)
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::VaultNotFound(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(VaultWalkerError::VaultNotFound(root.display().to_string()));
        }

        // Normalize exclusions to be relative to root
        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Walk the vault depth-first, in file-name order within each folder.
    ///
    /// Only a missing vault is fatal, and that is checked at construction.
    /// Unreadable directories are logged, flagged on their folder, and
    /// skipped.
    pub fn walk(&self) -> WalkOutcome {
        let mut agg = Aggregator::new(self.display_name());
        // Paths of the folders open in `agg`, root first.
        let mut open: Vec<PathBuf> = vec![self.root.clone()];

        // Sorting makes walkdir read each directory fully before descending,
        // so at most one handle per level is open.
        let entries = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.absorb_error(err, &mut open, &mut agg);
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            while open.len() > entry.depth() {
                open.pop();
                agg.leave_folder();
            }

            // Links are not followed, and a link to a directory is not a file.
            if entry.path_is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()) {
                debug!(link = %self.relative(entry.path()), "skipping directory symlink");
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if entry.file_type().is_dir() {
                debug!(folder = %entry.path().display(), depth = entry.depth(), "entering folder");
                agg.enter_folder(name.as_ref());
                open.push(entry.path().to_path_buf());
            } else {
                agg.record_file(&name);
            }
        }

        agg.finish()
    }

    /// Attach a walk error to the folder it belongs to and keep going.
    fn absorb_error(&self, err: walkdir::Error, open: &mut Vec<PathBuf>, agg: &mut Aggregator) {
        let Some(path) = err.path().map(Path::to_path_buf) else {
            warn!("skipping entry: {err}");
            return;
        };

        let reason = err
            .io_error()
            .map_or_else(|| err.to_string(), |io| io.kind().to_string());

        if unwind_to(&path, open, agg) {
            let unreadable = DirectoryUnreadable { path: self.relative(&path), source: err };
            warn!("{unreadable}");
            agg.mark_unreadable(reason);
        } else {
            warn!(entry = %self.relative(&path), "skipping entry: {reason}");
        }
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        // Skip hidden files and directories
        if name.starts_with('.') {
            return true;
        }

        if entry.file_type().is_dir() && name == SKIPPED_DIR {
            return true;
        }

        // Check against configured exclusions
        if !self.excluded_folders.is_empty()
            && let Ok(relative) = entry.path().strip_prefix(&self.root)
        {
            for excluded in &self.excluded_folders {
                if relative.starts_with(excluded) {
                    return true;
                }
            }
        }

        false
    }

    fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        if rel.as_os_str().is_empty() {
            "(root)".to_string()
        } else {
            rel.display().to_string()
        }
    }

    /// Name shown for the vault: the root directory's own name.
    pub fn display_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    /// Get the vault root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Close open folders until `path` is the current one.
///
/// Returns false, leaving everything open, when `path` is not an open folder.
fn unwind_to(path: &Path, open: &mut Vec<PathBuf>, agg: &mut Aggregator) -> bool {
    let Some(idx) = open.iter().rposition(|p| p == path) else {
        return false;
    };
    while open.len() > idx + 1 {
        open.pop();
        agg.leave_folder();
    }
    true
}
