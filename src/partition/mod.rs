//! The partition engine: checking, extracting and grafting module parts
//!
//! - [`validator`]: pure legality checks over declared parts
//! - [`extractor`]: takes folder trees out of a project ("out")
//! - [`merger`]: detects collisions and occupied folders, grafts folder trees into a
//!   project ("in")
//! - [`report`]: accumulated violations

pub mod extractor;
pub mod merger;
pub mod report;
pub mod validator;

pub use extractor::{ExtractedPart, Extraction, extract};
pub use merger::{GraftedPart, detect_collisions, detect_occupied_targets, graft};
pub use report::ValidationReport;
pub use validator::{validate_module_names, validate_parts};
