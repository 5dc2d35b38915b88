// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Supported config schema version.
pub const VERSION: i64 = 1;

/// Default manifest file name globs used when walking directories.
pub const MANIFEST_PATTERNS: &[&str] =
    &["*.tests.toml", "*.tests.json", "*.tests.yaml", "*.tests.yml"];

pub fn manifest_patterns() -> Vec<String> {
    MANIFEST_PATTERNS.iter().map(|p| p.to_string()).collect()
}
