// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for allure-select.toml.

use crate::prelude::*;

const MANIFEST: &str = r#"
[[test]]
name = "test_one"
epic = ["Epic1"]
feature = ["Feature1"]

[[test]]
name = "test_two"
epic = ["Epic1"]
feature = ["Feature2"]

[[test]]
name = "test_three"
epic = ["Epic2"]
feature = ["Feature1"]
"#;

fn project(config: &str) -> Project {
    let temp = Project::empty();
    temp.config(config);
    temp.file("suite.tests.toml", MANIFEST);
    temp
}

#[test]
fn config_can_default_to_intersection() {
    let temp = project("version = 1\n[selection]\nintersection = true\n");
    run(["--allure-epics=Epic1", "--allure-features=Feature1"])
        .pwd(temp.path())
        .passes()
        .assert_only_selected(&["test_one"], &["test_two", "test_three"]);
}

#[test]
fn config_labels_are_default_criteria() {
    let temp = project("version = 1\n[selection.labels]\nepic = [\"Epic2\"]\n");
    run(Vec::<String>::new())
        .pwd(temp.path())
        .passes()
        .assert_only_selected(&["test_three"], &["test_one", "test_two"]);
}

#[test]
fn command_line_replaces_config_values_per_category() {
    let temp = project(
        "version = 1\n[selection]\nintersection = true\n[selection.labels]\nepic = [\"Epic2\"]\nfeature = [\"Feature1\"]\n",
    );
    run(["--allure-epics=Epic1"])
        .pwd(temp.path())
        .passes()
        .assert_only_selected(&["test_one"], &["test_two", "test_three"]);
}

#[test]
fn config_is_found_from_subdirectory() {
    let temp = project("version = 1\n[selection]\nintersection = true\n");
    temp.file("nested/keep.txt", "");
    run(["..", "--allure-epics=Epic1", "--allure-features=Feature1"])
        .pwd(temp.path().join("nested"))
        .passes()
        .assert_only_selected(&["test_one"], &["test_two", "test_three"]);
}

#[test]
fn explicit_config_flag() {
    let temp = project("version = 1\n");
    temp.file("strict.toml", "version = 1\n[selection]\nintersection = true\n");
    run(["-C", "strict.toml", "--allure-epics=Epic1", "--allure-features=Feature1"])
        .pwd(temp.path())
        .passes()
        .assert_only_selected(&["test_one"], &["test_two", "test_three"]);
}

#[test]
fn custom_manifest_patterns() {
    let temp = project("version = 1\n[selection]\nmanifests = [\"*.allure.toml\"]\n");
    temp.file("extra.allure.toml", "[[test]]\nname = \"test_extra\"\nepic = \"Epic1\"\n");
    run(["--allure-epics=Epic1"])
        .pwd(temp.path())
        .passes()
        .assert_only_selected(&["test_extra"], &["test_one", "test_two"]);
}

#[test]
fn unknown_config_key_warns() {
    let temp = project("version = 1\n[selection]\nintersect = true\n");
    run(["--allure-epics=Epic1"])
        .pwd(temp.path())
        .passes()
        .stderr_has("unknown config key `selection.intersect`");
}

#[test]
fn unsupported_version_fails() {
    let temp = project("version = 2\n");
    run(Vec::<String>::new())
        .pwd(temp.path())
        .exits(1)
        .stderr_has("unsupported version 2");
}
