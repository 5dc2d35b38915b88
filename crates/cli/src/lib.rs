// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! allure-select library.
//!
//! Selects labeled test cases by the union (legacy) or intersection of
//! per-category criteria such as epics, features, and stories.

pub mod cli;
pub mod color;
pub mod config;
pub mod criteria;
pub mod discovery;
pub mod error;
pub mod labels;
pub mod manifest;
pub mod report;
pub mod selection;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

pub use criteria::{FilterCriteria, SelectionMode};
pub use error::{Error, Result};
pub use labels::{Labels, TestCase};
pub use selection::{Selection, matches, partition, select};
