//! Modules and the parts they are made of
//!
//! A **module** is a named bundle of resource folders taken out of a project.
//! A **part** is one `(kind, path)` entry of a module, e.g. `("sprites", "Enemies/Boss")`.

pub mod declaration;
pub mod document;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::resource::ResourceKind;

pub use declaration::ModuleDeclaration;
pub use document::ModuleDocument;

/// Identity of a module, derived from its declaration file or directory name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name of a module declared by `path`: the file name up to its first `.`
    ///
    /// `configs/Synthas.moduleconfig` declares the module `Synthas`.
    pub fn from_declaration_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = file_name.split('.').next().unwrap_or_default();
        Self(stem.to_string())
    }

    /// Name of a module stored in `dir`: the directory's last component
    pub fn from_module_dir(dir: &Path) -> Self {
        let name = dir
            .components()
            .next_back()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_default();
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a part as written by the user; may name a kind outside the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredKind {
    Known(ResourceKind),
    Unknown(String),
}

impl DeclaredKind {
    pub fn parse(id: &str) -> Self {
        match ResourceKind::from_id(id) {
            Some(kind) => DeclaredKind::Known(kind),
            None => DeclaredKind::Unknown(id.to_string()),
        }
    }

    pub fn known(&self) -> Option<ResourceKind> {
        match self {
            DeclaredKind::Known(kind) => Some(*kind),
            DeclaredKind::Unknown(_) => None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            DeclaredKind::Known(kind) => kind.id(),
            DeclaredKind::Unknown(id) => id,
        }
    }
}

impl fmt::Display for DeclaredKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Slash separated folder path inside one kind's resource tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Normalize and check a declared path.
    ///
    /// Backslashes become `/` and surrounding separators are dropped. Empty paths and
    /// empty segments are rejected.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let normalized = raw.replace('\\', "/");
        let trimmed = normalized.trim_matches('/');
        if trimmed.is_empty() {
            return Err(format!("resource path '{raw}' is empty"));
        }
        if trimmed.split('/').any(str::is_empty) {
            return Err(format!("resource path '{raw}' contains an empty folder name"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// All segments but the last
    pub fn parent_segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.segments().collect();
        segments.pop();
        segments
    }

    /// Whether `ancestor` is a strict ancestor folder of this path
    pub fn is_nested_in(&self, ancestor: &ResourcePath) -> bool {
        self.0.len() > ancestor.0.len()
            && self.0.starts_with(&ancestor.0)
            && self.0.as_bytes()[ancestor.0.len()] == b'/'
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One declared `(kind, path)` mapping of a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePart {
    /// Module this part belongs to
    pub module: ModuleName,

    /// File or directory the part was declared in
    pub origin: PathBuf,

    pub kind: DeclaredKind,

    pub path: ResourcePath,
}

impl ModulePart {
    pub fn new(
        module: ModuleName,
        origin: impl Into<PathBuf>,
        kind: DeclaredKind,
        path: ResourcePath,
    ) -> Self {
        Self {
            module,
            origin: origin.into(),
            kind,
            path,
        }
    }

    /// Origin as shown in reports
    pub fn origin_label(&self) -> String {
        self.origin.display().to_string()
    }
}
