// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the labels subcommand.

use crate::prelude::*;

#[test]
fn lists_categories_with_counts() {
    let output = run(["labels"]).on("allure-markers").passes();
    assert_eq!(
        output.stdout,
        "epic: Epic1 (2), Epic2 (1)\n\
         feature: Feature1 (2), Feature2 (1)\n\
         story: Story1 (3)\n"
    );
}

#[test]
fn lists_labels_as_json() {
    let doc = run(["labels", "--output", "json"]).on("mixed-formats").passes().json();
    assert_eq!(doc["layer"]["api"], 2);
    assert_eq!(doc["layer"]["ui"], 2);
    assert_eq!(doc["severity"]["critical"], 2);
}

#[test]
fn labels_of_unlabeled_project() {
    let temp = Project::empty();
    temp.file("bare.tests.toml", "[[test]]\nname = \"test_bare\"\n");
    run(["labels"]).pwd(temp.path()).passes().stdout_has("no labels found");
}
