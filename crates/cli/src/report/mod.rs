// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection reports.
//!
//! Every selected test appears on its own line; the summary counts one
//! pass per selected test. An empty selection reports "no tests ran".

mod json;
mod text;

use termcolor::{NoColor, WriteColor};

use crate::cli::OutputFormat;
use crate::labels::LabelIndex;
use crate::selection::Selection;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Report switches that never influence which tests are selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Append each selected test's labels.
    pub verbose: bool,
    /// List the selection without outcomes or summary.
    pub collect_only: bool,
}

/// Writes selections and label listings in one output format.
pub trait ReportFormatter {
    fn write_selection(
        &self,
        writer: &mut dyn WriteColor,
        selection: &Selection<'_>,
        options: &ReportOptions,
    ) -> anyhow::Result<()>;

    fn write_labels(&self, writer: &mut dyn WriteColor, index: &LabelIndex) -> anyhow::Result<()>;
}

pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Render a selection report to an uncolored string.
pub fn render_selection(
    format: OutputFormat,
    selection: &Selection<'_>,
    options: &ReportOptions,
) -> anyhow::Result<String> {
    let mut buffer = NoColor::new(Vec::new());
    formatter(format).write_selection(&mut buffer, selection, options)?;
    Ok(String::from_utf8(buffer.into_inner())?)
}

/// Render a label listing to an uncolored string.
pub fn render_labels(format: OutputFormat, index: &LabelIndex) -> anyhow::Result<String> {
    let mut buffer = NoColor::new(Vec::new());
    formatter(format).write_labels(&mut buffer, index)?;
    Ok(String::from_utf8(buffer.into_inner())?)
}

/// `1 item`, `3 items`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 { format!("{count} {singular}") } else { format!("{count} {plural}") }
}
