//! Operations that split a project into modules and merge them back
//!
//! This module provides high-level operations that coordinate:
//! - SplitOperation: the `out` workflow
//! - MergeOperation: the `in` workflow
//!
//! The operations coordinate with:
//! - Partition: validation, extraction and grafting (from partition module)
//! - Relocation: asset file planning and moves (from relocation module)
//! - Transaction: journal of file system changes (from transaction module)
//! - UI: Progress reporting (from ui module)

pub mod merge;
pub mod project;
pub mod split;
pub mod stage;

pub use merge::{MergeOperation, MergeOptions, MergeSummary};
pub use split::{SplitOperation, SplitOptions, SplitSummary};
pub use stage::Stage;
