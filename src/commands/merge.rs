//! In command CLI wrapper
//!
//! This module provides the CLI interface for merging modules,
//! delegating all business logic to operations/merge.rs.

use console::style;

use crate::cli::InArgs;
use crate::error::Result;
use crate::operations::{MergeOperation, MergeOptions, MergeSummary};
use crate::ui;

/// Run in command
pub fn run(args: InArgs) -> Result<()> {
    let options = MergeOptions::from(&args);
    let mut reporter = ui::reporter_for(options.dry_run);
    let mut operation = MergeOperation::new(options);

    let summary = operation.execute(reporter.as_mut())?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &MergeSummary) {
    if summary.dry_run {
        println!(
            "[DRY RUN] Would put in {} module(s), {} part(s), {} file(s)",
            summary.modules.len(),
            summary.parts,
            summary.files
        );
        println!("{}", style("Checks passed").green());
        return;
    }
    println!(
        "{} {}",
        style("Put in module(s):").green().bold(),
        summary.modules.join(", ")
    );
}
