//! Split operation: take declared folders out of a project into modules
//!
//! Nothing is changed on disk until every declaration parsed, every part passed
//! validation, every folder resolved, and every asset file and module document passed
//! the relocation preflight.

use std::path::PathBuf;

use tracing::info;

use super::project::Project;
use super::stage::{Stage, StageTracker};
use crate::cli::OutArgs;
use crate::error::Result;
use crate::error::fs::file_write_error;
use crate::module::{ModuleDeclaration, ModulePart};
use crate::partition::{self, Extraction};
use crate::relocation::RelocationPlan;
use crate::resource::ResourceKind;
use crate::transaction::Transaction;
use crate::ui::{self, ProgressReporter};

/// Configuration options for a split
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub project: PathBuf,
    pub declarations: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

impl From<&OutArgs> for SplitOptions {
    fn from(args: &OutArgs) -> Self {
        Self {
            project: args.project.clone(),
            declarations: args.declarations.clone(),
            output_dir: args.output.clone(),
            dry_run: args.dry_run,
        }
    }
}

/// What a split did (or would do, in a dry run)
#[derive(Debug, Clone, Default)]
pub struct SplitSummary {
    pub modules: Vec<String>,
    pub parts: usize,
    pub files: usize,
    pub warnings: Vec<String>,
    pub dry_run: bool,
}

pub struct SplitOperation {
    options: SplitOptions,
    stage: StageTracker,
}

impl SplitOperation {
    pub fn new(options: SplitOptions) -> Self {
        Self {
            options,
            stage: StageTracker::new("out"),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage.current()
    }

    /// Execute the split
    pub fn execute(&mut self, reporter: &mut dyn ProgressReporter) -> Result<SplitSummary> {
        let result = self.run(reporter);
        if result.is_err() {
            self.stage.abort();
        }
        result
    }

    fn run(&mut self, reporter: &mut dyn ProgressReporter) -> Result<SplitSummary> {
        let mut project = Project::load(&self.options.project)?;
        let declarations = self
            .options
            .declarations
            .iter()
            .map(|path| ModuleDeclaration::load(path))
            .collect::<Result<Vec<_>>>()?;

        self.stage.advance(Stage::Validating);
        let mut report =
            partition::validate_module_names(declarations.iter().map(|d| (&d.name, &d.path)));
        let parts: Vec<ModulePart> = declarations
            .iter()
            .flat_map(|d| d.parts.iter().cloned())
            .collect();
        report.extend(partition::validate_parts(&parts));
        report.into_validation_result()?;

        self.stage.advance(Stage::Committing);
        let Extraction {
            modules,
            parts: extracted,
            unresolved,
            warnings,
        } = partition::extract(
            &mut project.document,
            &declarations,
            &self.options.output_dir,
        );
        unresolved.into_resolution_result()?;
        for warning in &warnings {
            ui::print_warning(warning);
        }

        let plan = RelocationPlan::for_split(&project.dir, &modules, &extracted);
        plan.preflight()?;

        let mut summary = SplitSummary {
            modules: modules.iter().map(|m| m.name().to_string()).collect(),
            parts: extracted.len(),
            files: plan.len(),
            warnings,
            dry_run: self.options.dry_run,
        };

        if self.options.dry_run {
            for module in &modules {
                println!(
                    "[DRY RUN] Would take out {} part(s) into {}",
                    module.parts().len(),
                    module.dir().display()
                );
            }
            for entry in plan.entries() {
                println!(
                    "[DRY RUN] Would move {} -> {}",
                    entry.source.display(),
                    entry.destination.display()
                );
            }
            for module in &modules {
                println!("[DRY RUN] Would write {}", module.file_path().display());
            }
            println!("[DRY RUN] Would write {}", project.path.display());
            self.stage.advance(Stage::Done);
            return Ok(summary);
        }

        self.stage.advance(Stage::Relocating);
        let mut transaction = Transaction::new();
        for module in &modules {
            for kind in ResourceKind::ALL {
                let dir = kind.storage_dir(module.dir());
                transaction
                    .create_dir_all(&dir)
                    .map_err(|e| file_write_error(&dir, e))?;
            }
        }
        summary.files = plan.execute(reporter, &mut transaction)?;

        self.stage.advance(Stage::Persisting);
        for module in &modules {
            module.save()?;
            transaction.track_file_created(module.file_path());
        }
        project.save()?;
        transaction.commit();

        self.stage.advance(Stage::Done);
        info!(
            modules = summary.modules.len(),
            parts = summary.parts,
            files = summary.files,
            "split finished"
        );
        Ok(summary)
    }
}
