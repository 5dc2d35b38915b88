// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter criteria and selection mode for one run.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::labels::{ValueSet, write_categories};

/// Well-known label categories with dedicated command-line flags.
pub mod category {
    pub const EPIC: &str = "epic";
    pub const FEATURE: &str = "feature";
    pub const STORY: &str = "story";
    pub const SEVERITY: &str = "severity";
}

/// How constraints on several categories combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// A test matching any constrained category is selected (legacy behavior).
    #[default]
    Union,
    /// A test must match every constrained category.
    Intersection,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Union => f.write_str("union"),
            SelectionMode::Intersection => f.write_str("intersection"),
        }
    }
}

/// Accepted values per constrained category.
///
/// Every present category has a non-empty value set; categories that are
/// absent impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterCriteria(BTreeMap<String, ValueSet>);

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`FilterCriteria::insert`].
    pub fn require<I, S>(mut self, category: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(category, values);
        self
    }

    /// Accept `values` for `category`, merging with any values already
    /// accepted. Inserting no values is a no-op.
    pub fn insert<I, S>(&mut self, category: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: ValueSet = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return;
        }
        self.0.entry(category.to_string()).or_default().extend(values);
    }

    pub fn get(&self, category: &str) -> Option<&ValueSet> {
        self.0.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueSet)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Layer these criteria over `defaults`.
    ///
    /// A category present here replaces the default value set for that
    /// category; categories only present in `defaults` are kept.
    pub fn merged_over(&self, defaults: &FilterCriteria) -> FilterCriteria {
        let mut merged = defaults.0.clone();
        for (category, values) in &self.0 {
            merged.insert(category.clone(), values.clone());
        }
        FilterCriteria(merged)
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        write_categories(f, self.iter())
    }
}

/// Split a comma-separated flag value into a value set.
///
/// Values are trimmed and empty entries dropped, so `"Epic1, ,Epic2,"`
/// yields `{Epic1, Epic2}`.
pub fn split_values(raw: &str) -> ValueSet {
    clean_values(raw.split(','))
}

/// Trim each value and drop the blank ones.
pub fn clean_values<I, S>(values: I) -> ValueSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|v| {
            let v = v.as_ref().trim();
            (!v.is_empty()).then(|| v.to_string())
        })
        .collect()
}

#[cfg(test)]
#[path = "criteria_tests.rs"]
mod tests;
