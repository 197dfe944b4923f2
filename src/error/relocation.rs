//! Relocation errors

use miette::Diagnostic;
use thiserror::Error;

use super::CollageError;

/// A planned file move that cannot be carried out
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RelocationProblem {
    #[error("Asset file is missing: {path}")]
    #[diagnostic(code(gmcollage::relocate::source_missing))]
    SourceMissing { path: String },

    #[error("Destination already exists: {path}")]
    #[diagnostic(
        code(gmcollage::relocate::destination_exists),
        help("Remove or rename the existing file first")
    )]
    DestinationExists { path: String },

    #[error("Several files would be moved to {path}")]
    #[diagnostic(code(gmcollage::relocate::destination_conflict))]
    DestinationConflict { path: String },
}

/// Creates a relocation failure for a move that broke after earlier moves succeeded
pub fn move_failed(
    source: impl Into<String>,
    destination: impl Into<String>,
    reason: impl Into<String>,
    applied: usize,
) -> CollageError {
    CollageError::RelocationFailed {
        source_path: source.into(),
        destination: destination.into(),
        reason: reason.into(),
        applied,
    }
}
