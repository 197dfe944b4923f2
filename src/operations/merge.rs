//! Merge operation: put modules back into a project
//!
//! All module documents are read and checked against the project before anything is
//! grafted. A single collision, or a part whose folder the project already has, stops
//! the whole merge.

use std::path::PathBuf;

use tracing::info;

use super::project::Project;
use super::stage::{Stage, StageTracker};
use crate::cli::InArgs;
use crate::error::Result;
use crate::module::{ModuleDocument, ModulePart};
use crate::partition;
use crate::relocation::{RelocationMode, RelocationPlan};
use crate::transaction::Transaction;
use crate::ui::ProgressReporter;

/// Configuration options for a merge
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub project: PathBuf,
    pub modules: Vec<PathBuf>,
    pub dry_run: bool,
    pub copy: bool,
}

impl From<&InArgs> for MergeOptions {
    fn from(args: &InArgs) -> Self {
        Self {
            project: args.project.clone(),
            modules: args.modules.clone(),
            dry_run: args.dry_run,
            copy: args.copy,
        }
    }
}

/// What a merge did (or would do, in a dry run)
#[derive(Debug, Clone, Default)]
pub struct MergeSummary {
    pub modules: Vec<String>,
    pub parts: usize,
    pub files: usize,
    pub dry_run: bool,
}

pub struct MergeOperation {
    options: MergeOptions,
    stage: StageTracker,
}

impl MergeOperation {
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options,
            stage: StageTracker::new("in"),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage.current()
    }

    /// Execute the merge
    pub fn execute(&mut self, reporter: &mut dyn ProgressReporter) -> Result<MergeSummary> {
        let result = self.run(reporter);
        if result.is_err() {
            self.stage.abort();
        }
        result
    }

    fn run(&mut self, reporter: &mut dyn ProgressReporter) -> Result<MergeSummary> {
        let mut project = Project::load(&self.options.project)?;
        let modules = self
            .options
            .modules
            .iter()
            .map(|dir| ModuleDocument::load(dir))
            .collect::<Result<Vec<_>>>()?;

        self.stage.advance(Stage::Validating);
        let dirs: Vec<PathBuf> = modules.iter().map(|m| m.dir().to_path_buf()).collect();
        let mut report =
            partition::validate_module_names(modules.iter().map(ModuleDocument::name).zip(&dirs));
        let parts: Vec<ModulePart> = modules
            .iter()
            .flat_map(|m| m.parts().iter().map(|entry| entry.part.clone()))
            .collect();
        report.extend(partition::validate_parts(&parts));
        report.extend(partition::detect_occupied_targets(&project.document, &modules));
        report.extend(partition::detect_collisions(&project.document, &modules));
        report.into_validation_result()?;

        self.stage.advance(Stage::Committing);
        let grafted = partition::graft(&mut project.document, &modules);

        let mode = if self.options.copy {
            RelocationMode::Copy
        } else {
            RelocationMode::Move
        };
        let plan = RelocationPlan::for_merge(&project.dir, &modules, mode)?;
        plan.preflight()?;

        let mut summary = MergeSummary {
            modules: modules.iter().map(|m| m.name().to_string()).collect(),
            parts: grafted.len(),
            files: plan.len(),
            dry_run: self.options.dry_run,
        };

        if self.options.dry_run {
            for part in &grafted {
                println!(
                    "[DRY RUN] Would put '{}/{}' from module '{}' into the project",
                    part.kind, part.path, part.module
                );
            }
            let verb = match plan.mode() {
                RelocationMode::Move => "move",
                RelocationMode::Copy => "copy",
            };
            for entry in plan.entries() {
                println!(
                    "[DRY RUN] Would {verb} {} -> {}",
                    entry.source.display(),
                    entry.destination.display()
                );
            }
            println!("[DRY RUN] Would write {}", project.path.display());
            self.stage.advance(Stage::Done);
            return Ok(summary);
        }

        self.stage.advance(Stage::Relocating);
        let mut transaction = Transaction::new();
        summary.files = plan.execute(reporter, &mut transaction)?;

        self.stage.advance(Stage::Persisting);
        project.save()?;
        transaction.commit();

        self.stage.advance(Stage::Done);
        info!(
            modules = summary.modules.len(),
            parts = summary.parts,
            files = summary.files,
            "merge finished"
        );
        Ok(summary)
    }
}
