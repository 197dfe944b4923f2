//! Module documents
//!
//! A module document records the folder trees taken out of a project:
//!
//! ```xml
//! <module>
//!   <part resource_type="sprites" resource_path="Enemies/Boss">
//!     <sprites name="Boss">
//!       <sprite>sprites\spr_boss</sprite>
//!     </sprites>
//!   </part>
//! </module>
//! ```
//!
//! It is stored as `<module dir>/module`, next to the module's asset directories.

use std::path::{Path, PathBuf};

use super::{DeclaredKind, ModuleName, ModulePart, ResourcePath};
use crate::document::{Document, NodeId, xml};
use crate::error::Result;
use crate::error::input::{malformed_module, module_not_found};
use crate::resource::ResourceKind;

/// File name of the module document inside a module directory
pub const MODULE_FILE: &str = "module";

const ROOT_TAG: &str = "module";
const PART_TAG: &str = "part";
const KIND_ATTR: &str = "resource_type";
const PATH_ATTR: &str = "resource_path";

/// A part wrapper inside a module document
#[derive(Debug, Clone)]
pub struct PartEntry {
    pub part: ModulePart,
    /// The `<part>` element
    pub wrapper: NodeId,
    /// The folder subtree held by the wrapper
    pub content: NodeId,
}

/// The document of one module together with the directory it lives in
#[derive(Debug, Clone)]
pub struct ModuleDocument {
    name: ModuleName,
    dir: PathBuf,
    document: Document,
    parts: Vec<PartEntry>,
}

impl ModuleDocument {
    /// Create an empty module document for a module stored in `dir`
    pub fn new(name: ModuleName, dir: impl Into<PathBuf>) -> Self {
        Self {
            name,
            dir: dir.into(),
            document: Document::new(ROOT_TAG),
            parts: Vec::new(),
        }
    }

    /// Load the module stored in `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let file = dir.join(MODULE_FILE);
        if !dir.is_dir() || !file.is_file() {
            return Err(module_not_found(dir.display().to_string()));
        }
        let document = xml::load(&file)?;
        Self::from_document(ModuleName::from_module_dir(dir), dir, document)
    }

    /// Wrap an already parsed document, reading its part wrappers
    pub fn from_document(name: ModuleName, dir: &Path, document: Document) -> Result<Self> {
        let label = dir.join(MODULE_FILE).display().to_string();
        let root = document.root();
        if document.tag(root) != ROOT_TAG {
            return Err(malformed_module(
                label,
                format!("root element is <{}>, expected <{ROOT_TAG}>", document.tag(root)),
            ));
        }

        let mut parts = Vec::new();
        for wrapper in document.find_children(root, PART_TAG, None) {
            let kind = document
                .attribute(wrapper, KIND_ATTR)
                .ok_or_else(|| malformed_module(label.clone(), format!("part without {KIND_ATTR}")))?;
            let raw_path = document
                .attribute(wrapper, PATH_ATTR)
                .ok_or_else(|| malformed_module(label.clone(), format!("part without {PATH_ATTR}")))?;
            let path = ResourcePath::parse(raw_path)
                .map_err(|reason| malformed_module(label.clone(), reason))?;
            let content = *document.children(wrapper).first().ok_or_else(|| {
                malformed_module(label.clone(), format!("part '{kind}/{path}' has no content"))
            })?;

            parts.push(PartEntry {
                part: ModulePart::new(name.clone(), dir, DeclaredKind::parse(kind), path),
                wrapper,
                content,
            });
        }

        Ok(Self {
            name,
            dir: dir.to_path_buf(),
            document,
            parts,
        })
    }

    /// Copy `folder` of `source` into a new part wrapper for `part`
    pub fn add_part(
        &mut self,
        part: &ModulePart,
        kind: ResourceKind,
        source: &Document,
        folder: NodeId,
    ) -> NodeId {
        let root = self.document.root();
        let wrapper = self.document.append_element(root, PART_TAG);
        self.document.set_attribute(wrapper, KIND_ATTR, kind.id());
        self.document
            .set_attribute(wrapper, PATH_ATTR, part.path.as_str());
        let content = self.document.import_subtree(source, folder);
        self.document.append_child(wrapper, content);

        self.parts.push(PartEntry {
            part: ModulePart::new(
                self.name.clone(),
                part.origin.clone(),
                DeclaredKind::Known(kind),
                part.path.clone(),
            ),
            wrapper,
            content,
        });
        wrapper
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(MODULE_FILE)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn parts(&self) -> &[PartEntry] {
        &self.parts
    }

    /// Leaf references held by one part, in document order
    pub fn part_references(&self, entry: &PartEntry) -> Vec<String> {
        let Some(kind) = entry.part.kind.known() else {
            return Vec::new();
        };
        leaf_references(&self.document, entry.content, kind)
    }

    /// Write the module document into the module directory
    pub fn save(&self) -> Result<()> {
        xml::save(&self.document, &self.file_path())
    }
}

/// Non-empty trimmed text of every `kind` leaf below `node`
pub fn leaf_references(document: &Document, node: NodeId, kind: ResourceKind) -> Vec<String> {
    document
        .iter_tag(node, kind.tag_name())
        .filter_map(|leaf| document.text(leaf))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
        .collect()
}
