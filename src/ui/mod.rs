//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while asset files are relocated
//! - Interactive progress bars using indicatif
//! - Silent progress for dry-run mode and non-terminal output
//! - Printing errors together with every accumulated problem
//!
//! All progress reporting goes through the ProgressReporter trait, so operations do not
//! care whether anything is drawn.

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::CollageError;

/// Progress reporter trait for relocation
pub trait ProgressReporter {
    /// Initialize file progress with total file count
    fn init_file_progress(&mut self, total_files: u64);

    /// Update file progress
    fn update_file(&mut self, file_path: &str);

    /// Finish file progress
    fn finish_files(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a visual progress bar
pub struct InteractiveProgressReporter {
    file_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self { file_pb: None }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn init_file_progress(&mut self, total_files: u64) {
        let file_style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(file_style);
        self.file_pb = Some(file_pb);
    }

    fn update_file(&mut self, file_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            // Truncate long paths for display
            let display_path = if file_path.chars().count() > 50 {
                let tail: String = file_path
                    .chars()
                    .rev()
                    .take(47)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("...{tail}")
            } else {
                file_path.to_string()
            };
            file_pb.set_message(display_path);
            file_pb.inc(1);
        }
    }

    fn finish_files(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.abandon();
        }
    }
}

/// Silent progress reporter for dry-run mode
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn init_file_progress(&mut self, _total_files: u64) {}

    fn update_file(&mut self, _file_path: &str) {}

    fn finish_files(&mut self) {}

    fn abandon(&mut self) {}
}

/// Reporter suited to the current run: silent for dry runs and when stderr is not a terminal
pub fn reporter_for(dry_run: bool) -> Box<dyn ProgressReporter> {
    if dry_run || !Term::stderr().is_term() {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    }
}

/// Print a non-fatal warning to stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), message);
}

/// Print an error and every problem it carries to stderr
pub fn report_error(error: &CollageError) {
    eprintln!("{} {}", style("Error:").red().bold(), error);
    for detail in error.details() {
        eprintln!("  {} {}", style("-").red(), detail);
    }
    if let Some(help) = miette::Diagnostic::help(error) {
        eprintln!("{} {}", style("Help:").cyan(), help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_reporter_no_ops() {
        let mut reporter = SilentProgressReporter;

        reporter.init_file_progress(10);
        reporter.update_file("sprites/spr_boss.sprite.gmx");
        reporter.finish_files();
        reporter.abandon();
    }

    #[test]
    fn test_interactive_progress_reporter_creation() {
        let reporter = InteractiveProgressReporter::new();
        assert!(reporter.file_pb.is_none());
    }

    #[test]
    fn test_interactive_progress_reporter_counts_files() {
        let mut reporter = InteractiveProgressReporter::new();
        reporter.init_file_progress(3);
        reporter.update_file("sprites/spr_boss.sprite.gmx");
        reporter.update_file(&"deep/".repeat(20));
        assert_eq!(reporter.file_pb.as_ref().map(ProgressBar::position), Some(2));
        reporter.finish_files();
    }

    #[test]
    fn test_dry_run_reporter_is_silent() {
        let mut reporter = reporter_for(true);
        reporter.init_file_progress(1);
        reporter.finish_files();
    }
}
