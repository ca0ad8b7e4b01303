//! Integration tests for `arb-tidy clean-legacy`

mod common;

use common::{APP_PT, TestWorkspace, keys};
use predicates::prelude::*;

#[test]
fn test_clean_legacy_removes_builtin_key() {
    let workspace = TestWorkspace::new();
    workspace.write_file(APP_PT, r#"{"loadingFood": "Carregando...", "keepMe": "val"}"#);

    workspace
        .cmd()
        .arg("clean-legacy")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed 1 legacy keys. Count reduced from 2 to 1.",
        ));

    assert_eq!(workspace.read_file(APP_PT), "{\n  \"keepMe\": \"val\"\n}");
}

#[test]
fn test_clean_legacy_keeps_metadata_of_removed_key() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        APP_PT,
        r#"{"foodVerdict": "Veredito", "@foodVerdict": {"description": "d"}, "title": "T"}"#,
    );

    workspace.cmd().arg("clean-legacy").assert().success();

    assert_eq!(
        keys(&workspace.read_bundle(APP_PT)),
        vec!["@foodVerdict", "title"]
    );
}

#[test]
fn test_clean_legacy_extra_metadata_key() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        APP_PT,
        r#"{"foodVerdict": "Veredito", "@foodVerdict": {}, "title": "T"}"#,
    );

    workspace
        .cmd()
        .args(["clean-legacy", "--key", "@foodVerdict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 legacy keys"));

    assert_eq!(keys(&workspace.read_bundle(APP_PT)), vec!["title"]);
}

#[test]
fn test_clean_legacy_replace_keys() {
    let workspace = TestWorkspace::new();
    workspace.write_file(APP_PT, r#"{"foodVerdict": "V", "oldTitle": "O", "title": "T"}"#);

    workspace
        .cmd()
        .args(["clean-legacy", "--replace-keys", "--key", "oldTitle"])
        .assert()
        .success();

    assert_eq!(
        keys(&workspace.read_bundle(APP_PT)),
        vec!["foodVerdict", "title"]
    );
}

#[test]
fn test_clean_legacy_keys_from_config_file() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "arb-tidy.yaml",
        "legacy:\n  target: lib/l10n/app_en.arb\n  keys:\n    - retired\n",
    );
    workspace.write_file(
        "lib/l10n/app_en.arb",
        r#"{"retired": "R", "loadingFood": "Loading", "title": "T"}"#,
    );

    workspace.cmd().arg("clean-legacy").assert().success();

    assert_eq!(
        keys(&workspace.read_bundle("lib/l10n/app_en.arb")),
        vec!["loadingFood", "title"]
    );
}

#[test]
fn test_clean_legacy_missing_target() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .arg("clean-legacy")
        .assert()
        .success()
        .stdout(predicate::str::contains("app_pt.arb not found"));

    assert!(!workspace.file_exists(APP_PT));
}

#[test]
fn test_clean_legacy_dry_run() {
    let workspace = TestWorkspace::new();
    let original = r#"{"foodCons": "Contras", "title": "T"}"#;
    workspace.write_file(APP_PT, original);

    workspace
        .cmd()
        .args(["clean-legacy", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would remove foodCons"))
        .stdout(predicate::str::contains("Would remove 1 legacy keys"));

    assert_eq!(workspace.read_file(APP_PT), original);
}

#[test]
fn test_clean_legacy_not_an_object_fails() {
    let workspace = TestWorkspace::new();
    workspace.write_file(APP_PT, r#"["loadingFood"]"#);

    workspace
        .cmd()
        .arg("clean-legacy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a JSON object"));
}
