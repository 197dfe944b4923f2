//! Taking folder trees out of a project document
//!
//! Each part is resolved by walking down from its kind's root folder one `name` segment
//! at a time. A resolved folder is copied into the module document and then detached
//! from the project by removing its parent link, which keeps every other folder id valid
//! for the parts still to be resolved.

use tracing::debug;

use super::report::ValidationReport;
use crate::document::{Document, NodeId};
use crate::error::Violation;
use crate::module::document::leaf_references;
use crate::module::{ModuleDeclaration, ModuleDocument, ModulePart, ResourcePath};
use crate::resource::ResourceKind;

/// Outcome of looking up one folder path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(NodeId),
    Missing,
    /// Several folders share the name of `segment`
    Ambiguous { segment: String },
}

/// Root folder of `kind`: the direct child of the document root tagged with the kind id
pub fn kind_root(document: &Document, kind: ResourceKind) -> Option<NodeId> {
    document.find_child(document.root(), kind.id(), None)
}

/// Find the folder addressed by `path` under `kind`'s root
pub fn resolve_folder(document: &Document, kind: ResourceKind, path: &ResourcePath) -> Resolution {
    let Some(mut current) = kind_root(document, kind) else {
        return Resolution::Missing;
    };
    for segment in path.segments() {
        let mut matches = document.find_children(current, kind.id(), Some(segment));
        let Some(found) = matches.next() else {
            return Resolution::Missing;
        };
        if matches.next().is_some() {
            return Resolution::Ambiguous {
                segment: segment.to_string(),
            };
        }
        current = found;
    }
    Resolution::Found(current)
}

/// A part that was taken out of the project
#[derive(Debug, Clone)]
pub struct ExtractedPart {
    /// Index of the owning module in [`Extraction::modules`]
    pub module: usize,
    pub kind: ResourceKind,
    pub path: ResourcePath,
    /// Leaf references inside the extracted folder, in document order
    pub references: Vec<String>,
}

/// Result of taking every declared part out of a project
#[derive(Debug)]
pub struct Extraction {
    /// One document per declaration, in declaration order
    pub modules: Vec<ModuleDocument>,
    pub parts: Vec<ExtractedPart>,
    /// Parts whose folder could not be resolved
    pub unresolved: ValidationReport,
    /// Non-fatal notes, e.g. folders without resources
    pub warnings: Vec<String>,
}

/// Take every declared part out of `project`.
///
/// Parts are processed independently: a part that cannot be resolved is recorded and the
/// remaining parts are still processed. Parts with an unknown kind are skipped; they are
/// rejected during validation before extraction runs.
pub fn extract(
    project: &mut Document,
    declarations: &[ModuleDeclaration],
    output_dir: &std::path::Path,
) -> Extraction {
    let mut extraction = Extraction {
        modules: Vec::with_capacity(declarations.len()),
        parts: Vec::new(),
        unresolved: ValidationReport::new(),
        warnings: Vec::new(),
    };

    for (index, declaration) in declarations.iter().enumerate() {
        let mut module = ModuleDocument::new(
            declaration.name.clone(),
            output_dir.join(declaration.name.as_str()),
        );
        for part in &declaration.parts {
            extract_part(project, part, index, &mut module, &mut extraction);
        }
        extraction.modules.push(module);
    }

    extraction
}

fn extract_part(
    project: &mut Document,
    part: &ModulePart,
    module_index: usize,
    module: &mut ModuleDocument,
    extraction: &mut Extraction,
) {
    let Some(kind) = part.kind.known() else {
        debug!(kind = %part.kind, path = %part.path, "skipping part with unknown kind");
        return;
    };

    let folder = match resolve_folder(project, kind, &part.path) {
        Resolution::Found(folder) => folder,
        Resolution::Missing => {
            extraction.unresolved.push(Violation::MissingPath {
                kind: kind.id().to_string(),
                path: part.path.to_string(),
                origin: part.origin_label(),
            });
            return;
        }
        Resolution::Ambiguous { segment } => {
            extraction.unresolved.push(Violation::AmbiguousPath {
                kind: kind.id().to_string(),
                path: part.path.to_string(),
                segment,
                origin: part.origin_label(),
            });
            return;
        }
    };

    let references = leaf_references(project, folder, kind);
    if project.iter_tag(folder, kind.tag_name()).next().is_none() {
        debug!(kind = %kind, path = %part.path, "module folder holds no resources");
        extraction.warnings.push(format!(
            "Empty module folder '{}/{}' in {}",
            kind,
            part.path,
            part.origin_label()
        ));
    }

    module.add_part(part, kind, project, folder);
    project.detach(folder);
    debug!(
        module = %module.name(),
        kind = %kind,
        path = %part.path,
        resources = references.len(),
        "took part out of project"
    );

    extraction.parts.push(ExtractedPart {
        module: module_index,
        kind,
        path: part.path.clone(),
        references,
    });
}
