// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for manifest discovery.

use crate::prelude::*;

#[test]
fn reads_json_and_yaml_manifests() {
    run(["--allure-epics=Checkout"])
        .on("mixed-formats")
        .passes()
        .assert_only_selected(
            &["test_create_order", "test_cancel_order", "test_checkout_button"],
            &["test_login_form"],
        );
}

#[test]
fn generic_label_flag_with_intersection() {
    run([
        "--allure-selection-by-intersection",
        "--allure-label=layer=ui",
        "--allure-severities=critical",
    ])
    .on("mixed-formats")
    .passes()
    .assert_only_selected(
        &["test_login_form"],
        &["test_create_order", "test_cancel_order", "test_checkout_button"],
    );
}

#[test]
fn stories_with_spaces() {
    run(["--allure-stories=Sign in"])
        .on("mixed-formats")
        .passes()
        .assert_only_selected(&["test_login_form"], &["test_checkout_button"]);
}

#[test]
fn manifests_are_read_in_path_order() {
    let output = run(["--collect-only"]).on("mixed-formats").passes();
    let names: Vec<&str> = output.stdout.lines().skip(1).collect();
    assert_eq!(
        names,
        vec!["test_create_order", "test_cancel_order", "test_login_form", "test_checkout_button"]
    );
}

#[test]
fn duplicate_test_names_fail() {
    let temp = Project::empty();
    temp.file("a.tests.toml", "[[test]]\nname = \"test_one\"\n");
    temp.file("b.tests.toml", "[[test]]\nname = \"test_one\"\n");
    run(Vec::<String>::new())
        .pwd(temp.path())
        .exits(1)
        .stderr_has("duplicate test name `test_one`");
}

#[test]
fn malformed_manifest_fails_with_path() {
    let temp = Project::empty();
    temp.file("broken.tests.toml", "[[test]\n");
    run(Vec::<String>::new())
        .pwd(temp.path())
        .exits(1)
        .stderr_has("broken.tests.toml");
}

#[test]
fn empty_project_collects_nothing() {
    let temp = Project::empty();
    run(["--allure-epics=Epic1"])
        .pwd(temp.path())
        .passes()
        .stdout_has("collected 0 items / 0 deselected / 0 selected")
        .stdout_has("no tests ran");
}
