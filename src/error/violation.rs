//! Problems accumulated while checking the requested module parts
//!
//! A violation never stops checking on its own; callers collect every violation first and
//! abort once, so a single run reports everything that needs fixing.

use miette::Diagnostic;
use thiserror::Error;

/// One problem with a declared or supplied module part
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("'{kind}/{path}' is {}", declared_by(.first, .second))]
    #[diagnostic(
        code(gmcollage::validate::duplicate_target),
        help("Each folder can belong to exactly one module part")
    )]
    DuplicateTarget {
        kind: String,
        path: String,
        first: String,
        second: String,
    },

    #[error("{inner_origin} points to '{kind}/{inner_path}', which is nested in '{kind}/{outer_path}' from {outer_origin}")]
    #[diagnostic(
        code(gmcollage::validate::nested_target),
        help("Declare only the outer folder; its subfolders move with it")
    )]
    NestedTarget {
        kind: String,
        inner_path: String,
        inner_origin: String,
        outer_path: String,
        outer_origin: String,
    },

    #[error("{origin} points to invalid resource kind '{kind}' (path '{path}')")]
    #[diagnostic(
        code(gmcollage::validate::invalid_kind),
        help("Valid kinds: datafiles, sounds, sprites, backgrounds, paths, scripts, shaders, fonts, objects, timelines, rooms")
    )]
    InvalidKind {
        kind: String,
        path: String,
        origin: String,
    },

    #[error("Module name '{module}' is used by both {first} and {second}")]
    #[diagnostic(
        code(gmcollage::validate::duplicate_module),
        help("Module names come from file or directory names; rename one of them")
    )]
    DuplicateModule {
        module: String,
        first: String,
        second: String,
    },

    #[error("Resource '{reference}' {}", collision_owners(.in_project, .modules))]
    #[diagnostic(
        code(gmcollage::validate::collision),
        help("Rename the resource in the project or in the module and try again")
    )]
    Collision {
        reference: String,
        in_project: bool,
        modules: Vec<String>,
    },

    #[error("'{kind}/{path}' from module '{module}' already exists in the project")]
    #[diagnostic(
        code(gmcollage::validate::target_exists),
        help("Rename or take out the project folder first; a path may name only one folder")
    )]
    TargetExists {
        kind: String,
        path: String,
        module: String,
    },

    #[error("Missing resource path '{kind}/{path}' in {origin}")]
    #[diagnostic(code(gmcollage::resolve::missing_path))]
    MissingPath {
        kind: String,
        path: String,
        origin: String,
    },

    #[error("Ambiguous resource path '{kind}/{path}' in {origin}: several folders are named '{segment}'")]
    #[diagnostic(
        code(gmcollage::resolve::ambiguous_path),
        help("Rename the duplicate folders in the project so each path is unique")
    )]
    AmbiguousPath {
        kind: String,
        path: String,
        segment: String,
        origin: String,
    },
}

fn declared_by(first: &str, second: &str) -> String {
    if first == second {
        format!("declared twice in {first}")
    } else {
        format!("declared by both {first} and {second}")
    }
}

fn collision_owners(in_project: &bool, modules: &[String]) -> String {
    let quoted = modules
        .iter()
        .map(|m| format!("'{m}'"))
        .collect::<Vec<_>>()
        .join(", ");
    if *in_project {
        format!("exists in the project and in module(s) {quoted}")
    } else {
        format!("exists in several modules: {quoted}")
    }
}
