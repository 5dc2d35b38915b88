// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Labels command implementation.

use std::io::Write;

use termcolor::{ColorChoice, StandardStream};

use allure_select::cli::{Cli, LabelsArgs, OutputFormat};
use allure_select::discovery;
use allure_select::labels::LabelIndex;
use allure_select::report;

use crate::cmd_select::{load_config, search_paths};

/// Run the labels command.
pub fn run(cli: &Cli, args: &LabelsArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, _) = load_config(cli, &cwd)?;

    let paths = search_paths(&args.paths, &cwd);
    let discovered = discovery::discover(&paths, &config.selection.manifests)?;
    let index = LabelIndex::from_cases(&discovered.cases);

    let choice = match args.output {
        OutputFormat::Text => args.color.choice(args.no_color),
        OutputFormat::Json => ColorChoice::Never,
    };
    let stdout = StandardStream::stdout(choice);
    let mut handle = stdout.lock();
    report::formatter(args.output).write_labels(&mut handle, &index)?;
    handle.flush()?;
    Ok(())
}
