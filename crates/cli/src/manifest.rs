// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test manifest parsing.
//!
//! A manifest declares test cases and their labels:
//!
//! ```toml
//! [[test]]
//! name = "test_one"
//! epic = ["Epic1"]
//! feature = "Feature1"
//! labels = { owner = ["qa"] }
//! ```
//!
//! TOML, JSON, and YAML manifests share the same shape.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::criteria::{category, clean_values};
use crate::error::{Error, Result};
use crate::labels::TestCase;

/// Manifest serialization format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
    Yaml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(ManifestFormat::Toml),
            "json" => Some(ManifestFormat::Json),
            "yaml" | "yml" => Some(ManifestFormat::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    #[serde(default, rename = "test", alias = "tests")]
    tests: Vec<RawTestCase>,
}

#[derive(Debug, Deserialize)]
struct RawTestCase {
    name: String,
    #[serde(default)]
    epic: OneOrMany,
    #[serde(default)]
    feature: OneOrMany,
    #[serde(default)]
    story: OneOrMany,
    #[serde(default)]
    labels: BTreeMap<String, OneOrMany>,
}

/// A single string or a list of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(v) => v,
        }
    }
}

impl RawTestCase {
    fn into_test_case(self) -> TestCase {
        let mut case = TestCase::new(self.name.trim());
        case.labels.extend(category::EPIC, clean_values(self.epic.into_vec()));
        case.labels.extend(category::FEATURE, clean_values(self.feature.into_vec()));
        case.labels.extend(category::STORY, clean_values(self.story.into_vec()));
        for (name, values) in self.labels {
            case.labels.extend(name.trim(), clean_values(values.into_vec()));
        }
        case
    }
}

/// Parse manifest `content`. `path` is only used in error messages.
pub fn parse(content: &str, format: ManifestFormat, path: &Path) -> Result<Vec<TestCase>> {
    let raw: RawManifest = match format {
        ManifestFormat::Toml => toml::from_str(content).map_err(|e| Error::parse(path, e))?,
        ManifestFormat::Json => {
            serde_json::from_str(content).map_err(|e| Error::parse(path, e))?
        }
        // An empty YAML document deserializes to unit, not a map.
        ManifestFormat::Yaml if content.trim().is_empty() => RawManifest::default(),
        ManifestFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| Error::parse(path, e))?
        }
    };

    let mut cases = Vec::with_capacity(raw.tests.len());
    for (index, raw_case) in raw.tests.into_iter().enumerate() {
        if raw_case.name.trim().is_empty() {
            return Err(Error::parse(path, format!("test #{} has an empty name", index + 1)));
        }
        cases.push(raw_case.into_test_case());
    }
    Ok(cases)
}

/// Read and parse the manifest at `path`.
pub fn load(path: &Path) -> Result<Vec<TestCase>> {
    let format = ManifestFormat::from_path(path).ok_or_else(|| {
        Error::Discovery(format!(
            "unsupported manifest format: {} (expected .toml, .json, .yaml, or .yml)",
            path.display()
        ))
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let cases = parse(&content, format, path)?;
    tracing::debug!("{}: {} test case(s)", path.display(), cases.len());
    Ok(cases)
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
