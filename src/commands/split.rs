//! Out command CLI wrapper
//!
//! This module provides the CLI interface for splitting a project,
//! delegating all business logic to operations/split.rs.

use console::style;

use crate::cli::OutArgs;
use crate::error::Result;
use crate::operations::{SplitOperation, SplitOptions, SplitSummary};
use crate::ui;

/// Run out command
pub fn run(args: OutArgs) -> Result<()> {
    let options = SplitOptions::from(&args);
    let mut reporter = ui::reporter_for(options.dry_run);
    let mut operation = SplitOperation::new(options);

    let summary = operation.execute(reporter.as_mut())?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &SplitSummary) {
    if summary.dry_run {
        println!(
            "[DRY RUN] Would take out {} module(s), {} part(s), {} file(s)",
            summary.modules.len(),
            summary.parts,
            summary.files
        );
        println!("{}", style("Checks passed").green());
        return;
    }
    println!(
        "{} {}",
        style("Took out module(s):").green().bold(),
        summary.modules.join(", ")
    );
}
