//! The project file an operation works on

use std::path::{Path, PathBuf};

use crate::document::{Document, xml};
use crate::error::Result;
use crate::error::input::project_not_found;

/// A loaded project document and the directory its assets live in
#[derive(Debug)]
pub struct Project {
    pub path: PathBuf,
    pub dir: PathBuf,
    pub document: Document,
}

impl Project {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(project_not_found(path.display().to_string()));
        }
        let document = xml::load(path)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            path: path.to_path_buf(),
            dir,
            document,
        })
    }

    pub fn save(&self) -> Result<()> {
        xml::save(&self.document, &self.path)
    }
}
