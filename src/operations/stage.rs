//! Stages of a split or merge invocation
//!
//! Stages only move forward. Documents are changed in memory during `Committing`; the
//! file system is touched no earlier than `Relocating`. Dry runs go from `Committing`
//! straight to `Done`.

use std::fmt;

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Collecting,
    Validating,
    Committing,
    Relocating,
    Persisting,
    Done,
    Aborted,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Aborted)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Collecting => "collecting",
            Stage::Validating => "validating",
            Stage::Committing => "committing",
            Stage::Relocating => "relocating",
            Stage::Persisting => "persisting",
            Stage::Done => "done",
            Stage::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Current stage of one operation, logging every transition
#[derive(Debug)]
pub struct StageTracker {
    operation: &'static str,
    current: Stage,
}

impl StageTracker {
    pub fn new(operation: &'static str) -> Self {
        debug!(operation, stage = %Stage::Collecting, "stage");
        Self {
            operation,
            current: Stage::Collecting,
        }
    }

    pub fn current(&self) -> Stage {
        self.current
    }

    /// Move forward to `next`; backward or post-terminal moves are ignored
    pub fn advance(&mut self, next: Stage) {
        if self.current.is_terminal() || next <= self.current {
            warn!(
                operation = self.operation,
                from = %self.current,
                to = %next,
                "ignoring stage transition"
            );
            return;
        }
        debug!(operation = self.operation, from = %self.current, to = %next, "stage");
        self.current = next;
    }

    pub fn abort(&mut self) {
        if self.current.is_terminal() {
            return;
        }
        debug!(operation = self.operation, from = %self.current, "aborted");
        self.current = Stage::Aborted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only() {
        let mut tracker = StageTracker::new("out");
        tracker.advance(Stage::Validating);
        tracker.advance(Stage::Committing);
        tracker.advance(Stage::Validating);
        assert_eq!(tracker.current(), Stage::Committing);

        // dry runs skip relocation and persistence
        tracker.advance(Stage::Done);
        assert_eq!(tracker.current(), Stage::Done);
    }

    #[test]
    fn test_terminal_stages_stick() {
        let mut tracker = StageTracker::new("in");
        tracker.advance(Stage::Validating);
        tracker.abort();
        assert_eq!(tracker.current(), Stage::Aborted);

        tracker.advance(Stage::Done);
        tracker.abort();
        assert_eq!(tracker.current(), Stage::Aborted);
    }

    #[test]
    fn test_done_is_not_aborted() {
        let mut tracker = StageTracker::new("out");
        tracker.advance(Stage::Done);
        tracker.abort();
        assert_eq!(tracker.current(), Stage::Done);
    }
}
