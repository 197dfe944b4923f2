//! Asset file relocation
//!
//! Documents only record references; the asset files behind them have to follow the
//! folders they belong to. Relocation happens in three steps:
//! - planning: turn extracted or grafted parts into source/destination pairs
//! - preflight: check every pair, and every document the invocation will write, before
//!   the first file is touched
//! - execution: move (or copy) each file, recording it in the [`Transaction`]
//!
//! A failure during execution is not rolled back; the error says how many files were
//! already moved and the transaction lists them.

mod mover;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::relocation::move_failed;
use crate::error::{CollageError, RelocationProblem, Result};
use crate::module::ModuleDocument;
use crate::partition::ExtractedPart;
use crate::resource::ResourceKind;
use crate::transaction::Transaction;
use crate::ui::ProgressReporter;

/// One asset file to relocate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Whether sources are removed after relocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelocationMode {
    #[default]
    Move,
    Copy,
}

/// Every file relocation of one invocation
#[derive(Debug, Clone, Default)]
pub struct RelocationPlan {
    entries: Vec<RelocationEntry>,
    /// Files written after relocation that must not exist yet
    reserved: Vec<PathBuf>,
    mode: RelocationMode,
}

impl RelocationPlan {
    pub fn new(mode: RelocationMode) -> Self {
        Self {
            entries: Vec::new(),
            reserved: Vec::new(),
            mode,
        }
    }

    /// Plan moving the assets of extracted parts from the project into their modules.
    ///
    /// Each reference keeps its relative path: `sprites\spr_boss` moves from
    /// `<project>/sprites/spr_boss.sprite.gmx` to `<module>/sprites/spr_boss.sprite.gmx`.
    /// Every module document is reserved, so an earlier module of the same name is never
    /// replaced.
    pub fn for_split(project_dir: &Path, modules: &[ModuleDocument], parts: &[ExtractedPart]) -> Self {
        let mut plan = Self::new(RelocationMode::Move);
        for module in modules {
            plan.reserve(module.file_path());
        }
        for part in parts {
            let Some(module) = modules.get(part.module) else {
                continue;
            };
            for reference in &part.references {
                let relative = part.kind.asset_file(reference);
                plan.push(project_dir.join(&relative), module.dir().join(&relative));
            }
        }
        plan
    }

    /// Plan moving every file below each module's storage directories into the project.
    ///
    /// Files keep their path relative to the module directory.
    pub fn for_merge(project_dir: &Path, modules: &[ModuleDocument], mode: RelocationMode) -> Result<Self> {
        let mut plan = Self::new(mode);
        for module in modules {
            for kind in ResourceKind::ALL {
                let storage = kind.storage_dir(module.dir());
                if !storage.is_dir() {
                    continue;
                }
                let mut files = Vec::new();
                for entry in WalkDir::new(&storage) {
                    let entry = entry?;
                    if entry.file_type().is_file() {
                        files.push(entry.into_path());
                    }
                }
                files.sort();
                for source in files {
                    let relative = source.strip_prefix(module.dir()).unwrap_or(&source);
                    let destination = project_dir.join(relative);
                    plan.push(source.clone(), destination);
                }
            }
        }
        Ok(plan)
    }

    pub fn push(&mut self, source: impl Into<PathBuf>, destination: impl Into<PathBuf>) {
        self.entries.push(RelocationEntry {
            source: source.into(),
            destination: destination.into(),
        });
    }

    /// Require `path` to be free when the plan is checked
    pub fn reserve(&mut self, path: impl Into<PathBuf>) {
        self.reserved.push(path.into());
    }

    pub fn reserved(&self) -> &[PathBuf] {
        &self.reserved
    }

    pub fn entries(&self) -> &[RelocationEntry] {
        &self.entries
    }

    pub fn mode(&self) -> RelocationMode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Problems that would stop the plan part way, found without touching any file
    pub fn check(&self) -> Vec<RelocationProblem> {
        let mut problems = Vec::new();
        let mut destinations = HashSet::new();
        for entry in &self.entries {
            if !entry.source.is_file() {
                problems.push(RelocationProblem::SourceMissing {
                    path: entry.source.display().to_string(),
                });
            }
            if entry.destination.exists() {
                problems.push(RelocationProblem::DestinationExists {
                    path: entry.destination.display().to_string(),
                });
            }
            if !destinations.insert(&entry.destination) {
                problems.push(RelocationProblem::DestinationConflict {
                    path: entry.destination.display().to_string(),
                });
            }
        }
        for path in &self.reserved {
            if path.exists() {
                problems.push(RelocationProblem::DestinationExists {
                    path: path.display().to_string(),
                });
            }
            if !destinations.insert(path) {
                problems.push(RelocationProblem::DestinationConflict {
                    path: path.display().to_string(),
                });
            }
        }
        problems
    }

    /// Fail with every problem [`check`](Self::check) finds
    pub fn preflight(&self) -> Result<()> {
        let problems = self.check();
        if problems.is_empty() {
            debug!(files = self.entries.len(), "relocation preflight passed");
            return Ok(());
        }
        Err(CollageError::RelocationBlocked { problems })
    }

    /// Relocate every file in plan order, returning how many were relocated
    pub fn execute(
        &self,
        reporter: &mut dyn ProgressReporter,
        transaction: &mut Transaction,
    ) -> Result<usize> {
        reporter.init_file_progress(self.entries.len() as u64);

        for (done, entry) in self.entries.iter().enumerate() {
            if let Err(e) = self.relocate(entry, transaction) {
                reporter.abandon();
                return Err(move_failed(
                    entry.source.display().to_string(),
                    entry.destination.display().to_string(),
                    e.to_string(),
                    done,
                ));
            }
            debug!(
                source = %entry.source.display(),
                destination = %entry.destination.display(),
                "relocated asset"
            );
            reporter.update_file(&entry.destination.display().to_string());
        }

        reporter.finish_files();
        info!(files = self.entries.len(), mode = ?self.mode, "relocation finished");
        Ok(self.entries.len())
    }

    fn relocate(&self, entry: &RelocationEntry, transaction: &mut Transaction) -> std::io::Result<()> {
        if let Some(parent) = entry.destination.parent() {
            transaction.create_dir_all(parent)?;
        }
        match self.mode {
            RelocationMode::Move => {
                mover::move_file(&entry.source, &entry.destination)?;
                transaction.track_move(&entry.source, &entry.destination);
            }
            RelocationMode::Copy => {
                mover::copy_file(&entry.source, &entry.destination)?;
                transaction.track_file_created(&entry.destination);
            }
        }
        Ok(())
    }
}
