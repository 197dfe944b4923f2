//! Grafting module folder trees back into a project document

use std::collections::BTreeMap;

use tracing::debug;

use super::extractor::{Resolution, kind_root, resolve_folder};
use super::report::ValidationReport;
use crate::document::{Document, NodeId};
use crate::error::Violation;
use crate::module::document::leaf_references;
use crate::module::{ModuleDocument, ModuleName, ResourcePath};
use crate::resource::ResourceKind;

const NAME_ATTR: &str = "name";

#[derive(Debug, Default)]
struct Owners<'a> {
    in_project: bool,
    modules: Vec<&'a ModuleName>,
}

/// Report every resource reference held by more than one of the project and the modules.
///
/// A reference repeated inside a single module is not a collision. Datafiles are skipped
/// since their leaves are not storage references. Violations come out sorted by reference.
pub fn detect_collisions(project: &Document, modules: &[ModuleDocument]) -> ValidationReport {
    let mut owners: BTreeMap<String, Owners<'_>> = BTreeMap::new();

    for kind in ResourceKind::ALL.into_iter().filter(|k| k.has_path_references()) {
        if let Some(root) = kind_root(project, kind) {
            for reference in leaf_references(project, root, kind) {
                owners.entry(reference).or_default().in_project = true;
            }
        }
    }

    for module in modules {
        for entry in module.parts() {
            if !entry
                .part
                .kind
                .known()
                .is_some_and(ResourceKind::has_path_references)
            {
                continue;
            }
            for reference in module.part_references(entry) {
                let owner = owners.entry(reference).or_default();
                if !owner.modules.contains(&module.name()) {
                    owner.modules.push(module.name());
                }
            }
        }
    }

    owners
        .into_iter()
        .filter(|(_, o)| (o.in_project && !o.modules.is_empty()) || o.modules.len() > 1)
        .map(|(reference, o)| Violation::Collision {
            reference,
            in_project: o.in_project,
            modules: o.modules.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

/// Report every part whose folder is already present in `project`.
///
/// Grafting such a part would leave two sibling folders with the same name, and the path
/// could no longer be taken out again. A path that is already ambiguous is reported as
/// such.
pub fn detect_occupied_targets(project: &Document, modules: &[ModuleDocument]) -> ValidationReport {
    let mut report = ValidationReport::new();
    for module in modules {
        for entry in module.parts() {
            let Some(kind) = entry.part.kind.known() else {
                continue;
            };
            match resolve_folder(project, kind, &entry.part.path) {
                Resolution::Missing => {}
                Resolution::Found(_) => report.push(Violation::TargetExists {
                    kind: kind.id().to_string(),
                    path: entry.part.path.to_string(),
                    module: module.name().to_string(),
                }),
                Resolution::Ambiguous { segment } => report.push(Violation::AmbiguousPath {
                    kind: kind.id().to_string(),
                    path: entry.part.path.to_string(),
                    segment,
                    origin: entry.part.origin_label(),
                }),
            }
        }
    }
    report
}

/// A part that was grafted into the project
#[derive(Debug, Clone)]
pub struct GraftedPart {
    pub module: ModuleName,
    pub kind: ResourceKind,
    pub path: ResourcePath,
    pub references: Vec<String>,
}

/// Graft every part of every module into `project`, in module then part order.
///
/// Parts with an unknown kind are skipped; kinds are checked before grafting.
pub fn graft(project: &mut Document, modules: &[ModuleDocument]) -> Vec<GraftedPart> {
    let mut grafted = Vec::new();
    for module in modules {
        for entry in module.parts() {
            let Some(kind) = entry.part.kind.known() else {
                continue;
            };
            let parent = ensure_parent_chain(project, kind, &entry.part.path);
            let content = project.import_subtree(module.document(), entry.content);
            project.append_child(parent, content);
            debug!(
                module = %module.name(),
                kind = %kind,
                path = %entry.part.path,
                "grafted part into project"
            );

            grafted.push(GraftedPart {
                module: module.name().clone(),
                kind,
                path: entry.part.path.clone(),
                references: module.part_references(entry),
            });
        }
    }
    grafted
}

/// Folder that receives a part at `path`: the kind root followed by every parent segment,
/// each created on demand
fn ensure_parent_chain(project: &mut Document, kind: ResourceKind, path: &ResourcePath) -> NodeId {
    let mut current = match kind_root(project, kind) {
        Some(root) => root,
        None => {
            let document_root = project.root();
            create_folder(project, document_root, kind, kind.id())
        }
    };
    for segment in path.parent_segments() {
        current = match project.find_child(current, kind.id(), Some(segment)) {
            Some(folder) => folder,
            None => create_folder(project, current, kind, segment),
        };
    }
    current
}

fn create_folder(project: &mut Document, parent: NodeId, kind: ResourceKind, name: &str) -> NodeId {
    debug!(kind = %kind, folder = name, "creating folder");
    let folder = project.append_element(parent, kind.id());
    project.set_attribute(folder, NAME_ATTR, name);
    folder
}
