// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Select command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use termcolor::{ColorChoice, StandardStream};

use allure_select::cli::{Cli, OutputFormat, SelectArgs};
use allure_select::config::{self, Config};
use allure_select::criteria::SelectionMode;
use allure_select::discovery;
use allure_select::report::{self, ReportOptions};
use allure_select::selection::partition;
use allure_select::verbose::VerboseLogger;

/// Run the select command.
pub fn run(cli: &Cli, args: &SelectArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::new(args.verbose);

    let (config, config_path) = load_config(cli, &cwd)?;
    verbose.section("Configuration");
    match &config_path {
        Some(path) => verbose.field("Config", path.display()),
        None => verbose.field("Config", "(defaults)"),
    }

    let paths = search_paths(&args.paths, &cwd);
    let discovered = discovery::discover(&paths, &config.selection.manifests)?;
    if verbose.is_enabled() {
        verbose.section("Discovery");
        let manifests: Vec<_> = discovered.manifests.iter().map(|p| p.display()).collect();
        verbose.items("Manifests", &manifests);
        verbose.field("Tests", discovered.cases.len());
    }

    let criteria = args.criteria().merged_over(&config.selection.criteria());
    let mode = resolve_mode(args, &config);
    verbose.section("Selection");
    verbose.field("Mode", mode);
    verbose.field("Criteria", &criteria);

    let selection = partition(&discovered.cases, &criteria, mode);
    tracing::debug!(
        "selected {} of {} test(s) by {}",
        selection.selected.len(),
        selection.collected(),
        mode
    );

    let options = ReportOptions { verbose: args.verbose, collect_only: args.collect_only };
    let choice = match args.output {
        OutputFormat::Text => args.color.choice(args.no_color),
        OutputFormat::Json => ColorChoice::Never,
    };
    let stdout = StandardStream::stdout(choice);
    let mut handle = stdout.lock();
    report::formatter(args.output).write_selection(&mut handle, &selection, &options)?;
    handle.flush()?;
    Ok(())
}

/// Explicit `--config`, else the nearest allure-select.toml, else defaults.
pub(crate) fn load_config(cli: &Cli, cwd: &Path) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match &cli.config {
        Some(path) => Some(cwd.join(path)),
        None => discovery::find_config(cwd),
    };
    let config = match &path {
        Some(path) => config::load_with_warnings(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    Ok((config, path))
}

pub(crate) fn search_paths(paths: &[PathBuf], cwd: &Path) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![cwd.to_path_buf()]
    } else {
        paths.iter().map(|p| cwd.join(p)).collect()
    }
}

/// The intersection flag forces intersection; otherwise config decides.
fn resolve_mode(args: &SelectArgs, config: &Config) -> SelectionMode {
    if args.intersection { SelectionMode::Intersection } else { config.selection.mode() }
}
