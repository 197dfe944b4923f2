//! File system errors

use std::path::Path;

use super::CollageError;

/// Creates a file read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> CollageError {
    CollageError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> CollageError {
    CollageError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> CollageError {
    CollageError::IoError {
        message: message.into(),
    }
}

pub(crate) fn file_read_error(path: &Path, e: std::io::Error) -> CollageError {
    read_failed(path.display().to_string(), e.to_string())
}

pub(crate) fn file_write_error(path: &Path, e: std::io::Error) -> CollageError {
    write_failed(path.display().to_string(), e.to_string())
}
