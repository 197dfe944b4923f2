//! Input errors: missing or malformed declarations, modules and documents

use super::CollageError;

/// Creates a project not found error
pub fn project_not_found(path: impl Into<String>) -> CollageError {
    CollageError::ProjectNotFound { path: path.into() }
}

/// Creates a declaration not found error
pub fn declaration_not_found(path: impl Into<String>) -> CollageError {
    CollageError::DeclarationNotFound { path: path.into() }
}

/// Creates a module directory not found error
pub fn module_not_found(path: impl Into<String>) -> CollageError {
    CollageError::ModuleNotFound { path: path.into() }
}

/// Creates a declaration parse error
pub fn declaration_parse_failed(
    path: impl Into<String>,
    reason: impl Into<String>,
) -> CollageError {
    CollageError::DeclarationParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a document parse error
pub fn document_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CollageError {
    CollageError::DocumentParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a malformed module error
pub fn malformed_module(path: impl Into<String>, reason: impl Into<String>) -> CollageError {
    CollageError::MalformedModule {
        path: path.into(),
        reason: reason.into(),
    }
}
