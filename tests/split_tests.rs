//! Tests for taking modules out of a project

mod common;

use predicates::prelude::*;

#[test]
fn test_out_creates_module() {
    let project = common::TestProject::new();
    let declaration = project.declare(
        "Enemies",
        r#"[["sprites", "Enemies"], ["sounds", "Enemies"], ["scripts", "Enemies"]]"#,
    );

    project
        .cmd()
        .args(["out", "game.project.gmx", &declaration])
        .assert()
        .success()
        .stdout(predicate::str::contains("Took out module(s): Enemies"));

    assert!(project.file_exists("modules/Enemies/module"));
    for moved in [
        "sprites/spr_grunt.sprite.gmx",
        "sprites/spr_boss.sprite.gmx",
        "sound/snd_growl.sound.gmx",
        "scripts/enemies/scr_chase.gml",
    ] {
        assert!(project.file_exists(&format!("modules/Enemies/{moved}")), "{moved}");
        assert!(!project.file_exists(moved), "{moved}");
    }
    // every kind gets a storage directory
    for dir in ["rooms", "background", "datafiles", "timelines"] {
        assert!(project.path.join("modules/Enemies").join(dir).is_dir());
    }
    assert!(project.file_exists("sprites/spr_hero.sprite.gmx"));

    let module = project.read_file("modules/Enemies/module");
    assert!(module.contains(r#"resource_type="sprites""#));
    assert!(module.contains(r#"resource_path="Enemies""#));
    assert!(module.contains(r"sprites\spr_boss"));

    let remaining = project.read_file("game.project.gmx");
    assert!(!remaining.contains("spr_grunt"));
    assert!(!remaining.contains("snd_growl"));
    assert!(remaining.contains("spr_hero"));
    assert!(remaining.contains(r"Configs\Default"));
}

#[test]
fn test_out_to_custom_directory() {
    let project = common::TestProject::new();
    let declaration = project.declare("Levels", r#"[["rooms", "Level1"]]"#);

    project
        .cmd()
        .args(["out", "game.project.gmx", &declaration, "-o", "dist"])
        .assert()
        .success();

    assert!(project.file_exists("dist/Levels/module"));
    assert!(project.file_exists("dist/Levels/rooms/start_room.room.gmx"));
    assert!(!project.file_exists("modules"));
}

#[test]
fn test_out_directory_from_env() {
    let project = common::TestProject::new();
    let declaration = project.declare("Levels", r#"[["rooms", "Level1"]]"#);

    project
        .cmd()
        .env("GMCOLLAGE_OUTPUT_DIR", "from-env")
        .args(["out", "game.project.gmx", &declaration])
        .assert()
        .success();

    assert!(project.file_exists("from-env/Levels/module"));
}

#[test]
fn test_out_several_modules() {
    let project = common::TestProject::new();
    let bosses = project.declare("Bosses", r#"[["sprites", "Enemies/Boss"]]"#);
    let heroes = project.declare("Heroes", r#"[["sprites", "Heroes"]]"#);

    project
        .cmd()
        .args(["out", "game.project.gmx", &bosses, &heroes])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bosses, Heroes"));

    assert!(project.file_exists("modules/Bosses/sprites/spr_boss.sprite.gmx"));
    assert!(project.file_exists("modules/Heroes/sprites/spr_hero.sprite.gmx"));
    // the parent folder of the boss stays in the project
    assert!(project.file_exists("sprites/spr_grunt.sprite.gmx"));
    assert!(project.read_file("game.project.gmx").contains(r#"name="Enemies""#));
}

#[test]
fn test_nested_declaration_is_rejected() {
    let project = common::TestProject::new();
    let declaration = project.declare(
        "Enemies",
        r#"[["sprites", "Enemies"], ["sprites", "Enemies/Boss"]]"#,
    );

    project
        .cmd()
        .args(["out", "game.project.gmx", &declaration])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nested in 'sprites/Enemies'"));

    assert_eq!(project.read_file("game.project.gmx"), common::PROJECT);
    assert!(project.file_exists("sprites/spr_boss.sprite.gmx"));
    assert!(!project.file_exists("modules"));
}

#[test]
fn test_missing_folder_is_rejected() {
    let project = common::TestProject::new();
    project.write_file(
        "game.project.gmx",
        r#"<assets><sprites name="sprites"><sprite>sprites\spr_hero</sprite></sprites></assets>"#,
    );
    let declaration = project.declare("Enemies", r#"[["sprites", "Enemies"]]"#);

    project
        .cmd()
        .args(["out", "game.project.gmx", &declaration])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing resource path 'sprites/Enemies'",
        ));

    assert!(!project.file_exists("modules"));
}

#[test]
fn test_every_problem_is_reported() {
    let project = common::TestProject::new();
    let first = project.declare("First", r#"[["tilesets", "World"], ["rooms", "Level1"]]"#);
    let second = project.declare("Second", r#"[["rooms", "Level1"]]"#);

    project
        .cmd()
        .args(["out", "game.project.gmx", &first, &second])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Found 2 problem(s)"))
        .stderr(predicate::str::contains("invalid resource kind 'tilesets'"))
        .stderr(predicate::str::contains(
            "'rooms/Level1' is declared by both First.moduleconfig and Second.moduleconfig",
        ));

    assert_eq!(project.read_file("game.project.gmx"), common::PROJECT);
}

#[test]
fn test_malformed_declaration() {
    let project = common::TestProject::new();
    let declaration = project.declare("Broken", r#"[["sprites"]]"#);

    project
        .cmd()
        .args(["out", "game.project.gmx", &declaration])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse module declaration"))
        .stderr(predicate::str::contains("Broken.moduleconfig"));
}

#[test]
fn test_missing_asset_file_blocks_everything() {
    let project = common::TestProject::new();
    std::fs::remove_file(project.path.join("sprites/spr_boss.sprite.gmx")).unwrap();
    let declaration = project.declare("Enemies", r#"[["sprites", "Enemies"]]"#);

    project
        .cmd()
        .args(["out", "game.project.gmx", &declaration])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Asset file is missing"))
        .stderr(predicate::str::contains("spr_boss.sprite.gmx"));

    assert!(project.file_exists("sprites/spr_grunt.sprite.gmx"));
    assert_eq!(project.read_file("game.project.gmx"), common::PROJECT);
}

#[test]
fn test_empty_folder_warns() {
    let project = common::TestProject::new();
    project.write_file(
        "game.project.gmx",
        r#"<assets><sprites name="sprites"><sprites name="Unused"/></sprites></assets>"#,
    );
    let declaration = project.declare("Unused", r#"[["sprites", "Unused"]]"#);

    project
        .cmd()
        .args(["out", "game.project.gmx", &declaration])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"))
        .stderr(predicate::str::contains("'sprites/Unused'"));
}

#[test]
fn test_out_never_replaces_an_existing_module() {
    let project = common::TestProject::new();
    let heroes = project.declare("Enemies", r#"[["sprites", "Heroes"]]"#);
    project
        .cmd()
        .args(["out", "game.project.gmx", &heroes])
        .assert()
        .success();
    let module_before = project.read_file("modules/Enemies/module");
    let project_before = project.read_file("game.project.gmx");

    project.write_file(
        "other/Enemies.moduleconfig",
        r#"[["rooms", "Level1"]]"#,
    );
    project
        .cmd()
        .args(["out", "game.project.gmx", "other/Enemies.moduleconfig"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Destination already exists"))
        .stderr(predicate::str::contains("module"));

    assert_eq!(project.read_file("modules/Enemies/module"), module_before);
    assert!(module_before.contains(r"sprites\spr_hero"));
    assert_eq!(project.read_file("game.project.gmx"), project_before);
    assert!(project.file_exists("rooms/start_room.room.gmx"));
    assert!(!project.file_exists("modules/Enemies/rooms/start_room.room.gmx"));
}
