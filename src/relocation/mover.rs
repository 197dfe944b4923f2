//! Single-file move and copy primitives

use std::fs;
use std::io;
use std::path::Path;

/// Move `source` to `destination`.
///
/// Uses a rename when both sides are on the same file system and falls back to copy then
/// remove otherwise.
pub(super) fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    if destination.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        ));
    }
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(e),
        Err(_) => {
            fs::copy(source, destination)?;
            fs::remove_file(source)
        }
    }
}

/// Copy `source` to `destination`, refusing to overwrite
pub(super) fn copy_file(source: &Path, destination: &Path) -> io::Result<()> {
    if destination.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        ));
    }
    fs::copy(source, destination).map(|_| ())
}
