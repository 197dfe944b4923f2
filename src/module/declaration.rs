//! Module declaration files
//!
//! A declaration lists the folders that make up one module, as a JSON list of
//! `[kind, path]` pairs:
//!
//! ```json
//! [
//!     ["sprites", "Synthas"],
//!     ["backgrounds", "big/folder/with/backgrounds"],
//!     ["rooms", "Synthas"]
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{DeclaredKind, ModuleName, ModulePart, ResourcePath};
use crate::error::Result;
use crate::error::fs::file_read_error;
use crate::error::input::{declaration_not_found, declaration_parse_failed};

#[derive(Debug, Deserialize)]
struct DeclaredPair(String, String);

/// A parsed module declaration
#[derive(Debug, Clone)]
pub struct ModuleDeclaration {
    pub name: ModuleName,
    pub path: PathBuf,
    pub parts: Vec<ModulePart>,
}

impl ModuleDeclaration {
    /// Read and parse the declaration at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(declaration_not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| file_read_error(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse declaration text read from `path`
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let label = path.display().to_string();
        let pairs: Vec<DeclaredPair> = serde_json::from_str(content)
            .map_err(|e| declaration_parse_failed(label.clone(), e.to_string()))?;

        let name = ModuleName::from_declaration_path(path);
        if name.as_str().is_empty() {
            return Err(declaration_parse_failed(
                label,
                "cannot derive a module name from the file name",
            ));
        }

        let parts = pairs
            .into_iter()
            .map(|DeclaredPair(kind, raw_path)| {
                let resource_path = ResourcePath::parse(&raw_path)
                    .map_err(|reason| declaration_parse_failed(label.clone(), reason))?;
                Ok(ModulePart::new(
                    name.clone(),
                    path,
                    DeclaredKind::parse(&kind),
                    resource_path,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name,
            path: path.to_path_buf(),
            parts,
        })
    }
}
