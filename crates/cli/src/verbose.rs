// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output for `--verbose`.
//!
//! Goes to stderr so stdout carries only the report.

use std::fmt::Display;

/// Writes sectioned `name: value` diagnostics to stderr when enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    pub fn field(&self, name: &str, value: impl Display) {
        if self.enabled {
            eprintln!("{}", format_field(name, value));
        }
    }

    pub fn items<T: Display>(&self, name: &str, items: &[T]) {
        if self.enabled {
            for line in format_items(name, items) {
                eprintln!("{}", line);
            }
        }
    }
}

fn format_field(name: &str, value: impl Display) -> String {
    format!("  {}: {}", name, value)
}

/// One header line, then one indented line per item; `(none)` when empty.
fn format_items<T: Display>(name: &str, items: &[T]) -> Vec<String> {
    if items.is_empty() {
        return vec![format_field(name, "(none)")];
    }
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(format!("  {}:", name));
    lines.extend(items.iter().map(|item| format!("    {}", item)));
    lines
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
