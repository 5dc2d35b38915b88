// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config and test manifest discovery.
//!
//! Config: walks from the current directory up to the git root looking for
//! allure-select.toml.
//!
//! Manifests: explicit files are taken as-is; directories are walked
//! (respecting .gitignore) for file names matching the manifest globs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::labels::TestCase;
use crate::manifest;

/// Name of the config file looked up by [`find_config`].
pub const CONFIG_FILE: &str = "allure-select.toml";

/// Find allure-select.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Test cases found under a set of paths.
#[derive(Debug, Default)]
pub struct Discovered {
    /// Manifest files read, in the order their cases appear.
    pub manifests: Vec<PathBuf>,
    /// Test cases in manifest order, then declaration order.
    pub cases: Vec<TestCase>,
}

/// Builds a glob set matched against manifest file names.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| Error::Discovery(format!("invalid manifest pattern `{pattern}`: {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::Discovery(format!("invalid manifest patterns: {e}")))
}

/// Resolve `paths` to a sorted, deduplicated list of manifest files.
pub fn find_manifests(paths: &[PathBuf], patterns: &[String]) -> Result<Vec<PathBuf>> {
    let globset = build_globset(patterns)?;
    let mut found = Vec::new();

    for path in paths {
        if path.is_file() {
            found.push(path.clone());
        } else if path.is_dir() {
            walk_dir(path, &globset, &mut found);
        } else {
            return Err(Error::Discovery(format!("path not found: {}", path.display())));
        }
    }

    found.sort();
    found.dedup();
    Ok(found)
}

fn walk_dir(root: &Path, globset: &GlobSet, found: &mut Vec<PathBuf>) {
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if globset.is_match(entry.file_name()) {
            found.push(entry.into_path());
        }
    }
}

/// Discover and parse every manifest under `paths`.
///
/// Manifests are parsed in parallel; the result order is still the sorted
/// manifest order. Test names must be unique across all manifests.
pub fn discover(paths: &[PathBuf], patterns: &[String]) -> Result<Discovered> {
    let manifests = find_manifests(paths, patterns)?;

    let parsed: Vec<Vec<TestCase>> = manifests
        .par_iter()
        .map(|path| manifest::load(path))
        .collect::<Result<_>>()?;

    let mut seen: HashMap<String, &Path> = HashMap::new();
    let mut cases = Vec::with_capacity(parsed.iter().map(Vec::len).sum());
    for (path, file_cases) in manifests.iter().zip(parsed) {
        for case in file_cases {
            if let Some(first) = seen.insert(case.name.clone(), path) {
                return Err(Error::Discovery(format!(
                    "duplicate test name `{}` in {} (first declared in {})",
                    case.name,
                    path.display(),
                    first.display()
                )));
            }
            cases.push(case);
        }
    }

    tracing::debug!("discovered {} test case(s) in {} manifest(s)", cases.len(), manifests.len());
    Ok(Discovered { manifests, cases })
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
