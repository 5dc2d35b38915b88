// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use allure_select::cli::{Cli, Command};

mod cmd_labels;
mod cmd_select;

/// Environment variable holding the tracing filter (e.g. `debug`).
const LOG_ENV: &str = "ALLURE_SELECT_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Command::Select(args)) => cmd_select::run(cli, args),
        Some(Command::Labels(args)) => cmd_labels::run(cli, args),
        None => cmd_select::run(cli, &cli.select),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("allure-select: error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
