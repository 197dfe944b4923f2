//! Error type tests
//!
//! Tests for CollageError and its conversions.

#![allow(clippy::expect_used)]

use crate::error::fs::{io_error, read_failed, write_failed};
use crate::error::input::{
    declaration_not_found, declaration_parse_failed, document_parse_failed, malformed_module,
    module_not_found, project_not_found,
};
use crate::error::relocation::move_failed;
use crate::error::{CollageError, RelocationProblem, Violation};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = project_not_found("game.project.gmx");
    assert_eq!(err.to_string(), "Project file not found: game.project.gmx");
}

#[test]
fn test_error_code() {
    let err = module_not_found("modules/enemies");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("gmcollage::input::module_not_found".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CollageError = io_err.into();
    assert!(matches!(err, CollageError::IoError { .. }));
}

test_error_contains!(
    test_declaration_not_found,
    declaration_not_found("Enemies.moduleconfig"),
    "Module declaration not found",
    "Enemies.moduleconfig"
);

test_error_contains!(
    test_declaration_parse_failed,
    declaration_parse_failed("Enemies.moduleconfig", "expected `,`"),
    "Failed to parse module declaration",
    "expected `,`"
);

test_error_contains!(
    test_document_parse_failed,
    document_parse_failed("game.project.gmx", "unexpected end"),
    "Failed to parse document game.project.gmx"
);

test_error_contains!(
    test_malformed_module,
    malformed_module("modules/enemies/module", "part without content"),
    "Malformed module document",
    "part without content"
);

test_error_contains!(
    test_move_failed_reports_applied_moves,
    move_failed("a.sprite.gmx", "modules/m/a.sprite.gmx", "denied", 3),
    "Failed to move a.sprite.gmx",
    "3 file(s) already moved"
);

test_error_contains!(test_read_failed, read_failed("x", "denied"), "Failed to read file x: denied");
test_error_contains!(test_write_failed, write_failed("y", "full"), "Failed to write file y: full");
test_error_contains!(test_io_error, io_error("boom"), "IO error: boom");

#[test]
fn test_validation_failed_counts_and_relates_violations() {
    let err = CollageError::ValidationFailed {
        violations: vec![
            Violation::InvalidKind {
                kind: "tilesets".to_string(),
                path: "World".to_string(),
                origin: "world.moduleconfig".to_string(),
            },
            Violation::MissingPath {
                kind: "sprites".to_string(),
                path: "Enemies".to_string(),
                origin: "enemies.moduleconfig".to_string(),
            },
        ],
    };

    assert!(err.to_string().contains("Found 2 problem(s)"));
    let related: Vec<String> = err
        .related()
        .expect("validation errors carry related diagnostics")
        .map(ToString::to_string)
        .collect();
    assert_eq!(related.len(), 2);
    assert_eq!(err.details(), related);
}

#[test]
fn test_relocation_blocked_details() {
    let err = CollageError::RelocationBlocked {
        problems: vec![RelocationProblem::SourceMissing {
            path: "sprites/spr_gone.sprite.gmx".to_string(),
        }],
    };
    assert_eq!(
        err.details(),
        vec!["Asset file is missing: sprites/spr_gone.sprite.gmx".to_string()]
    );
}

#[test]
fn test_plain_errors_have_no_details() {
    assert!(project_not_found("p").details().is_empty());
}
