// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test cases and their label annotations.
//!
//! Labels are a plain side table attached to each test case at discovery
//! time: category name to a set of values. Nothing mutates them afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

/// Set of values attached to one label category.
pub type ValueSet = BTreeSet<String>;

/// Category name to annotated values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, ValueSet>);

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one value under `category`. Duplicates collapse.
    pub fn insert(&mut self, category: impl Into<String>, value: impl Into<String>) {
        self.0.entry(category.into()).or_default().insert(value.into());
    }

    /// Add every value under `category`.
    ///
    /// An empty iterator leaves the category absent rather than present
    /// with no values.
    pub fn extend<I, S>(&mut self, category: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.insert(category, value);
        }
    }

    pub fn get(&self, category: &str) -> Option<&ValueSet> {
        self.0.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueSet)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Labels {
    /// Renders as `epic=Epic1 feature=Feature1,Feature2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_categories(f, self.iter())
    }
}

/// Write `category=v1,v2` pairs separated by spaces.
pub(crate) fn write_categories<'a>(
    f: &mut fmt::Formatter<'_>,
    categories: impl Iterator<Item = (&'a str, &'a ValueSet)>,
) -> fmt::Result {
    for (i, (category, values)) in categories.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        let joined: Vec<&str> = values.iter().map(String::as_str).collect();
        write!(f, "{}={}", category, joined.join(","))?;
    }
    Ok(())
}

/// A discovered test case: unique name plus its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub name: String,
    pub labels: Labels,
}

impl TestCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), labels: Labels::new() }
    }

    /// Builder-style label attachment, mostly for tests and fixtures.
    pub fn label(mut self, category: &str, value: &str) -> Self {
        self.labels.insert(category, value);
        self
    }

    /// Values annotated on this test case for `category`, if any.
    pub fn values(&self, category: &str) -> Option<&ValueSet> {
        self.labels.get(category)
    }
}

/// Every category seen across a set of test cases, with per-value counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelIndex(BTreeMap<String, BTreeMap<String, usize>>);

impl LabelIndex {
    pub fn from_cases(cases: &[TestCase]) -> Self {
        let mut index: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
        for case in cases {
            for (category, values) in case.labels.iter() {
                let counts = index.entry(category.to_string()).or_default();
                for value in values {
                    *counts.entry(value.clone()).or_default() += 1;
                }
            }
        }
        Self(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, usize>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
