// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the command-line surface.

use crate::prelude::*;

#[test]
fn help_exits_successfully() {
    allure_select_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("--allure-selection-by-intersection"));
}

#[test]
fn version_exits_successfully() {
    allure_select_cmd().arg("--version").assert().success();
}

#[test]
fn help_lists_category_flags() {
    allure_select_cmd().arg("--help").assert().success().stdout(
        predicates::str::contains("--allure-epics")
            .and(predicates::str::contains("--allure-features"))
            .and(predicates::str::contains("--allure-stories")),
    );
}

#[test]
fn blank_flag_value_is_a_usage_error() {
    run(["--allure-epics=,"])
        .on("allure-markers")
        .exits(2)
        .stderr_has("expected at least one comma-separated value");
}

#[test]
fn malformed_label_flag_is_a_usage_error() {
    run(["--allure-label", "owner"])
        .on("allure-markers")
        .exits(2)
        .stderr_has("expected CATEGORY=VALUES");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    allure_select_cmd()
        .arg("--allure-colors=red")
        .current_dir(fixture("allure-markers"))
        .assert()
        .code(2);
}

#[test]
fn missing_path_exits_with_error() {
    run(["does-not-exist"])
        .on("allure-markers")
        .exits(1)
        .stderr_has("path not found");
}

#[test]
fn explicit_manifest_path() {
    run(["example.tests.toml", "--allure-features=Feature2"])
        .on("allure-markers")
        .passes()
        .assert_only_selected(&["test_two"], &["test_one", "test_three"]);
}

#[test]
fn verbose_lists_discovered_manifests() {
    run(["-v"])
        .on("allure-markers")
        .passes()
        .stderr_has("Discovery:")
        .stderr_has("example.tests.toml")
        .stderr_has("Tests: 3");
}

#[test]
fn quiet_run_has_no_diagnostics() {
    let output = run(["select"]).on("allure-markers").passes();
    assert!(!output.stderr.contains("Discovery:"), "stderr:\n{}", output.stderr);
}

#[test]
fn labels_accepts_color_flags() {
    run(["labels", "--color", "never"])
        .on("allure-markers")
        .passes()
        .stdout_has("epic: Epic1 (2), Epic2 (1)");
    run(["labels", "--no-color"]).on("allure-markers").passes().stdout_has("story: Story1 (3)");
}
