// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! Selection flags follow the allure plugin family:
//! `--allure-epics=Epic1,Epic2`, `--allure-features=...`,
//! `--allure-stories=...`, and `--allure-selection-by-intersection`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::criteria::{FilterCriteria, category, split_values};
use crate::labels::ValueSet;

/// Select labeled tests by the union or intersection of label criteria
#[derive(Parser)]
#[command(name = "allure-select")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "ALLURE_SELECT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,

    // Selection flags when no subcommand is given
    #[command(flatten)]
    pub select: SelectArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Select tests and report the outcome (the default)
    Select(SelectArgs),
    /// List label categories and values across discovered tests
    Labels(LabelsArgs),
}

/// Accepted values from one occurrence of a label flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelValues(pub ValueSet);

/// One `--allure-label CATEGORY=VALUES` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFilter {
    pub category: String,
    pub values: ValueSet,
}

#[derive(clap::Args, Clone, Default)]
pub struct SelectArgs {
    /// Manifest files or directories to search (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Select tests matching every given label category instead of any
    #[arg(long = "allure-selection-by-intersection")]
    pub intersection: bool,

    /// Comma-separated epics to select
    #[arg(long = "allure-epics", value_name = "EPICS", value_parser = parse_label_values)]
    pub epics: Vec<LabelValues>,

    /// Comma-separated features to select
    #[arg(long = "allure-features", value_name = "FEATURES", value_parser = parse_label_values)]
    pub features: Vec<LabelValues>,

    /// Comma-separated stories to select
    #[arg(long = "allure-stories", value_name = "STORIES", value_parser = parse_label_values)]
    pub stories: Vec<LabelValues>,

    /// Comma-separated severities to select
    #[arg(
        long = "allure-severities",
        value_name = "SEVERITIES",
        value_parser = parse_label_values
    )]
    pub severities: Vec<LabelValues>,

    /// Select by an arbitrary label category (repeatable)
    #[arg(long = "allure-label", value_name = "CATEGORY=VALUES", value_parser = parse_label_filter)]
    pub labels: Vec<LabelFilter>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// List selected tests without the outcome summary
    #[arg(long)]
    pub collect_only: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl SelectArgs {
    /// Criteria given on the command line. Repeated flags merge.
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        let dedicated = [
            (category::EPIC, &self.epics),
            (category::FEATURE, &self.features),
            (category::STORY, &self.stories),
            (category::SEVERITY, &self.severities),
        ];
        for (name, occurrences) in dedicated {
            for LabelValues(values) in occurrences {
                criteria.insert(name, values.iter().cloned());
            }
        }
        for filter in &self.labels {
            criteria.insert(&filter.category, filter.values.iter().cloned());
        }
        criteria
    }
}

#[derive(clap::Args, Clone, Default)]
pub struct LabelsArgs {
    /// Manifest files or directories to search (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse `Epic1,Epic2`. At least one non-blank value is required.
pub fn parse_label_values(raw: &str) -> Result<LabelValues, String> {
    let values = split_values(raw);
    if values.is_empty() {
        return Err("expected at least one comma-separated value".to_string());
    }
    Ok(LabelValues(values))
}

/// Parse `CATEGORY=Value1,Value2`.
pub fn parse_label_filter(raw: &str) -> Result<LabelFilter, String> {
    let Some((category, values)) = raw.split_once('=') else {
        return Err(format!("expected CATEGORY=VALUES, got `{raw}`"));
    };
    let category = category.trim();
    if category.is_empty() {
        return Err("label category must not be empty".to_string());
    }
    let LabelValues(values) = parse_label_values(values)?;
    Ok(LabelFilter { category: category.to_string(), values })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
