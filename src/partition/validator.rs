//! Legality checks for a requested set of module parts
//!
//! All checks are pure: they look at the declared parts only and never touch a document.
//! Every pair of parts is compared once, so each offending pair is reported once no matter
//! in which order the parts were declared.

use std::collections::HashMap;
use std::path::PathBuf;

use super::report::ValidationReport;
use crate::error::Violation;
use crate::module::{DeclaredKind, ModuleName, ModulePart};

/// Check parts gathered from every module of one invocation.
///
/// Reports duplicate targets, nested targets and unknown kinds, in that order.
pub fn validate_parts(parts: &[ModulePart]) -> ValidationReport {
    let mut duplicates = Vec::new();
    let mut nested = Vec::new();

    for (i, a) in parts.iter().enumerate() {
        for b in &parts[i + 1..] {
            if a.kind.id() != b.kind.id() {
                continue;
            }
            if a.path == b.path {
                duplicates.push(Violation::DuplicateTarget {
                    kind: a.kind.id().to_string(),
                    path: a.path.to_string(),
                    first: a.origin_label(),
                    second: b.origin_label(),
                });
            } else if a.path.is_nested_in(&b.path) {
                nested.push(nested_violation(a, b));
            } else if b.path.is_nested_in(&a.path) {
                nested.push(nested_violation(b, a));
            }
        }
    }

    let mut report: ValidationReport = duplicates.into_iter().chain(nested).collect();
    report.extend(validate_kinds(parts));
    report
}

fn nested_violation(inner: &ModulePart, outer: &ModulePart) -> Violation {
    Violation::NestedTarget {
        kind: inner.kind.id().to_string(),
        inner_path: inner.path.to_string(),
        inner_origin: inner.origin_label(),
        outer_path: outer.path.to_string(),
        outer_origin: outer.origin_label(),
    }
}

/// Report every part whose kind is outside the resource catalog
pub fn validate_kinds(parts: &[ModulePart]) -> ValidationReport {
    parts
        .iter()
        .filter_map(|part| match &part.kind {
            DeclaredKind::Known(_) => None,
            DeclaredKind::Unknown(kind) => Some(Violation::InvalidKind {
                kind: kind.clone(),
                path: part.path.to_string(),
                origin: part.origin_label(),
            }),
        })
        .collect()
}

/// Report modules of one invocation that would end up with the same identity
pub fn validate_module_names<'a>(
    modules: impl IntoIterator<Item = (&'a ModuleName, &'a PathBuf)>,
) -> ValidationReport {
    let mut seen: HashMap<&ModuleName, &PathBuf> = HashMap::new();
    let mut report = ValidationReport::new();
    for (name, origin) in modules {
        match seen.get(name) {
            Some(first) => report.push(Violation::DuplicateModule {
                module: name.to_string(),
                first: first.display().to_string(),
                second: origin.display().to_string(),
            }),
            None => {
                seen.insert(name, origin);
            }
        }
    }
    report
}
