// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.


use serde::Serialize;
use termcolor::WriteColor;

use crate::criteria::SelectionMode;
use crate::labels::{LabelIndex, Labels};
use crate::selection::Selection;

use super::{ReportFormatter, ReportOptions};

/// JSON format report formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonSelection<'a> {
    mode: SelectionMode,
    filtered: bool,
    collected: usize,
    selected: Vec<JsonCase<'a>>,
    deselected: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    passed: Option<usize>,
}

#[derive(Serialize)]
struct JsonCase<'a> {
    name: &'a str,
    labels: &'a Labels,
}

impl ReportFormatter for JsonFormatter {
    fn write_selection(
        &self,
        writer: &mut dyn WriteColor,
        selection: &Selection<'_>,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        let document = JsonSelection {
            mode: selection.mode,
            filtered: selection.filtered,
            collected: selection.collected(),
            selected: selection
                .selected
                .iter()
                .map(|case| JsonCase { name: &case.name, labels: &case.labels })
                .collect(),
            deselected: selection.deselected.iter().map(|case| case.name.as_str()).collect(),
            passed: (!options.collect_only).then_some(selection.selected.len()),
        };
        serde_json::to_writer_pretty(&mut *writer, &document)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_labels(&self, writer: &mut dyn WriteColor, index: &LabelIndex) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, index)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
