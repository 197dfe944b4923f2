//! Journal of file system changes made by one invocation
//!
//! Asset moves are not undone: once a file has been moved, the journal only reports it.
//! Files written and directories created are cleaned up when the transaction is dropped
//! without being committed, as long as no asset was moved yet.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//!
//! transaction.track_dir_created(&module_dir);
//! transaction.track_move(&source, &destination);
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // cleanup and a report of applied moves
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// A file moved from `source` to `destination`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// File system changes of one invocation
#[derive(Debug, Default)]
pub struct Transaction {
    /// Moves in the order they were applied
    applied_moves: Vec<AppliedMove>,

    /// Files written during this transaction
    created_files: Vec<PathBuf>,

    /// Directories created during this transaction
    created_dirs: Vec<PathBuf>,

    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `dir` and any missing parents, tracking every directory that did not exist
    pub fn create_dir_all(&mut self, dir: &Path) -> std::io::Result<()> {
        let mut missing = Vec::new();
        let mut current = Some(dir);
        while let Some(path) = current {
            if path.as_os_str().is_empty() || path.exists() {
                break;
            }
            missing.push(path.to_path_buf());
            current = path.parent();
        }
        fs::create_dir_all(dir)?;
        for path in missing.into_iter().rev() {
            self.track_dir_created(path);
        }
        Ok(())
    }

    /// Track a directory that was created during this transaction
    pub fn track_dir_created(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.created_dirs.contains(&path) {
            self.created_dirs.push(path);
        }
    }

    /// Track a file that was written during this transaction
    pub fn track_file_created(&mut self, path: impl Into<PathBuf>) {
        self.created_files.push(path.into());
    }

    /// Record a completed file move
    pub fn track_move(&mut self, source: impl Into<PathBuf>, destination: impl Into<PathBuf>) {
        self.applied_moves.push(AppliedMove {
            source: source.into(),
            destination: destination.into(),
        });
    }

    pub fn applied_moves(&self) -> &[AppliedMove] {
        &self.applied_moves
    }

    /// Commit the transaction (prevent cleanup)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Undo what can be undone and report what cannot
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }

        if self.applied_moves.is_empty() {
            for path in &self.created_files {
                if path.is_file() {
                    let _ = fs::remove_file(path);
                }
            }
        } else {
            debug!(
                moves = self.applied_moves.len(),
                "invocation failed after moving files"
            );
            eprintln!(
                "Warning: {} file(s) were already moved and are left in place:",
                self.applied_moves.len()
            );
            for applied in &self.applied_moves {
                eprintln!(
                    "  {} -> {}",
                    applied.source.display(),
                    applied.destination.display()
                );
            }
        }

        // deepest first, only if empty
        let mut dirs: Vec<_> = self.created_dirs.iter().collect();
        dirs.sort_by_key(|d| std::cmp::Reverse(d.components().count()));
        for path in dirs {
            let is_empty = fs::read_dir(path)
                .map(|mut d| d.next().is_none())
                .unwrap_or(false);
            if is_empty {
                debug!(dir = %path.display(), "removing created directory");
                let _ = fs::remove_dir(path);
            }
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}

#[cfg(test)]
mod tests;
