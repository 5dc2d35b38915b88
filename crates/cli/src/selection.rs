// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test selection by label criteria.
//!
//! A test case satisfies a constrained category when its values for that
//! category share at least one element with the accepted values. A test
//! case with no values for the category fails it.
//!
//! - Union: selected when any constrained category is satisfied.
//! - Intersection: selected when every constrained category is satisfied.
//!
//! With no criteria every test case is selected in both modes.

use crate::criteria::{FilterCriteria, SelectionMode};
use crate::labels::TestCase;

/// Outcome of filtering one collection of test cases.
///
/// Both lists keep the input order. `filtered` is false only when no
/// criteria were given, which tells "nothing requested" apart from
/// "criteria matched nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub mode: SelectionMode,
    pub filtered: bool,
    pub selected: Vec<&'a TestCase>,
    pub deselected: Vec<&'a TestCase>,
}

impl Selection<'_> {
    /// Number of test cases seen by the filter.
    pub fn collected(&self) -> usize {
        self.selected.len() + self.deselected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Whether `case` is selected under `criteria` and `mode`.
pub fn matches(case: &TestCase, criteria: &FilterCriteria, mode: SelectionMode) -> bool {
    if criteria.is_empty() {
        return true;
    }

    let mut satisfied = criteria.iter().map(|(category, accepted)| {
        case.values(category)
            .is_some_and(|values| !values.is_disjoint(accepted))
    });

    match mode {
        SelectionMode::Union => satisfied.any(|s| s),
        SelectionMode::Intersection => satisfied.all(|s| s),
    }
}

/// Split `cases` into selected and deselected, preserving order.
pub fn partition<'a>(
    cases: &'a [TestCase],
    criteria: &FilterCriteria,
    mode: SelectionMode,
) -> Selection<'a> {
    let (selected, deselected): (Vec<_>, Vec<_>) =
        cases.iter().partition(|case| matches(case, criteria, mode));
    Selection { mode, filtered: !criteria.is_empty(), selected, deselected }
}

/// The selected subsequence of `cases`.
pub fn select<'a>(
    cases: &'a [TestCase],
    criteria: &FilterCriteria,
    mode: SelectionMode,
) -> Vec<&'a TestCase> {
    cases.iter().filter(|case| matches(case, criteria, mode)).collect()
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
