// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for allure-select.toml.
//!
//! ```toml
//! version = 1
//!
//! [selection]
//! intersection = true
//! manifests = ["*.tests.toml"]
//!
//! [selection.labels]
//! epic = ["Epic1"]
//! ```

pub mod defaults;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::criteria::{FilterCriteria, SelectionMode, clean_values, split_values};
use crate::error::{Error, Result};

const TOP_LEVEL_KEYS: &[&str] = &["version", "selection"];
const SELECTION_KEYS: &[&str] = &["intersection", "manifests", "labels"];

/// Parsed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,

    #[serde(default)]
    pub selection: SelectionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { version: defaults::VERSION, selection: SelectionConfig::default() }
    }
}

/// `[selection]` table: run defaults that command-line flags override.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Select by intersection unless told otherwise.
    pub intersection: bool,

    /// File name globs for manifests found while walking directories.
    pub manifests: Vec<String>,

    /// Default criteria per label category.
    pub labels: BTreeMap<String, ConfigValues>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            intersection: false,
            manifests: defaults::manifest_patterns(),
            labels: BTreeMap::new(),
        }
    }
}

/// Label values written either as a list or as a comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConfigValues {
    Csv(String),
    List(Vec<String>),
}

impl SelectionConfig {
    pub fn mode(&self) -> SelectionMode {
        if self.intersection { SelectionMode::Intersection } else { SelectionMode::Union }
    }

    /// Default criteria. Categories whose values are all blank are dropped.
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        for (category, values) in &self.labels {
            match values {
                ConfigValues::Csv(raw) => criteria.insert(category, split_values(raw)),
                ConfigValues::List(list) => criteria.insert(category, clean_values(list)),
            }
        }
        criteria
    }
}

/// Load config from a file, logging a warning for each unknown key.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let (config, warnings) = parse_with_warnings(&content, path)?;
    for warning in &warnings {
        tracing::warn!("{}: {}", path.display(), warning);
    }
    Ok(config)
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    parse_with_warnings(content, path).map(|(config, _)| config)
}

/// Parse config content, also returning a message per unknown key.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let table: toml::Table = toml::from_str(content).map_err(|e| Error::config(path, e))?;

    match table.get("version") {
        None => return Err(Error::config(path, "missing required field `version`")),
        Some(toml::Value::Integer(v)) if *v == defaults::VERSION => {}
        Some(other) => {
            return Err(Error::config(
                path,
                format!("unsupported version {other} (expected {})", defaults::VERSION),
            ));
        }
    }

    let config: Config = toml::from_str(content).map_err(|e| Error::config(path, e))?;
    if config.selection.manifests.is_empty() {
        return Err(Error::config(path, "selection.manifests must not be empty"));
    }

    Ok((config, unknown_keys(&table)))
}

fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut warnings = Vec::new();
    for key in table.keys() {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            warnings.push(format!("unknown config key `{key}`"));
        }
    }
    if let Some(toml::Value::Table(selection)) = table.get("selection") {
        for key in selection.keys() {
            if !SELECTION_KEYS.contains(&key.as_str()) {
                warnings.push(format!("unknown config key `selection.{key}`"));
            }
        }
    }
    warnings
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
