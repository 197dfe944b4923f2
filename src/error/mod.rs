//! Error types and handling for gmcollage
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors come in two shapes:
//! - [`CollageError`]: a single fatal condition that stops the invocation
//! - [`Violation`]: one problem found while checking the requested parts; violations are
//!   accumulated and carried as related diagnostics of [`CollageError::ValidationFailed`]
//!   or [`CollageError::ResolutionFailed`]
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: unreadable or malformed inputs
//! - [`fs`]: file system errors
//! - [`violation`]: accumulated validation and resolution problems
//! - [`relocation`]: problems found before or while moving asset files

pub mod fs;
pub mod input;
pub mod relocation;
pub mod violation;

#[cfg(test)]
mod tests;

pub use relocation::RelocationProblem;
pub use violation::Violation;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gmcollage operations
#[derive(Error, Diagnostic, Debug)]
pub enum CollageError {
    // Input errors
    #[error("Project file not found: {path}")]
    #[diagnostic(
        code(gmcollage::input::project_not_found),
        help("Pass the path of a .project.gmx file as the first argument")
    )]
    ProjectNotFound { path: String },

    #[error("Module declaration not found: {path}")]
    #[diagnostic(
        code(gmcollage::input::declaration_not_found),
        help("'out' expects paths to module declaration files (e.g. Enemies.moduleconfig)")
    )]
    DeclarationNotFound { path: String },

    #[error("Module directory not found: {path}")]
    #[diagnostic(
        code(gmcollage::input::module_not_found),
        help("'in' expects directories created by 'out', each containing a 'module' file")
    )]
    ModuleNotFound { path: String },

    #[error("Failed to parse module declaration {path}: {reason}")]
    #[diagnostic(
        code(gmcollage::input::declaration_parse_failed),
        help("A declaration is a JSON list of [kind, path] pairs, e.g. [[\"sprites\", \"Enemies\"]]")
    )]
    DeclarationParseFailed { path: String, reason: String },

    #[error("Failed to parse document {path}: {reason}")]
    #[diagnostic(code(gmcollage::input::document_parse_failed))]
    DocumentParseFailed { path: String, reason: String },

    #[error("Malformed module document {path}: {reason}")]
    #[diagnostic(
        code(gmcollage::input::malformed_module),
        help("Module documents are written by 'out'; recreate the module instead of editing it")
    )]
    MalformedModule { path: String, reason: String },

    // Accumulated problems
    #[error("Found {} problem(s) in the requested module parts", .violations.len())]
    #[diagnostic(
        code(gmcollage::validate::failed),
        help("Nothing was changed. Fix every listed problem and run again")
    )]
    ValidationFailed {
        #[related]
        violations: Vec<Violation>,
    },

    #[error("Could not resolve {} module part(s) in the project", .violations.len())]
    #[diagnostic(
        code(gmcollage::resolve::failed),
        help("Nothing was changed. Check the folder names in the project's resource tree")
    )]
    ResolutionFailed {
        #[related]
        violations: Vec<Violation>,
    },

    // Relocation errors
    #[error("Cannot relocate asset files: {} problem(s) found before moving", .problems.len())]
    #[diagnostic(
        code(gmcollage::relocate::blocked),
        help("Nothing was moved and no document was written")
    )]
    RelocationBlocked {
        #[related]
        problems: Vec<RelocationProblem>,
    },

    #[error(
        "Failed to move {source_path} to {destination}: {reason} ({applied} file(s) already moved were left in place)"
    )]
    #[diagnostic(
        code(gmcollage::relocate::move_failed),
        help("No document was written. Move the listed files back by hand or finish the move manually")
    )]
    RelocationFailed {
        source_path: String,
        destination: String,
        reason: String,
        applied: usize,
    },

    // File system errors
    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(gmcollage::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(gmcollage::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(gmcollage::fs::io_error))]
    IoError { message: String },
}

impl CollageError {
    /// Violations or relocation problems carried by this error, rendered for display
    pub fn details(&self) -> Vec<String> {
        match self {
            CollageError::ValidationFailed { violations }
            | CollageError::ResolutionFailed { violations } => {
                violations.iter().map(ToString::to_string).collect()
            }
            CollageError::RelocationBlocked { problems } => {
                problems.iter().map(ToString::to_string).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl From<std::io::Error> for CollageError {
    fn from(err: std::io::Error) -> Self {
        CollageError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for CollageError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        CollageError::FileReadFailed {
            path,
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CollageError>;
