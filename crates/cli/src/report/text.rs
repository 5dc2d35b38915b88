// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! ```text
//! collected 3 items / 2 deselected / 1 selected
//! test_one PASSED
//! 1 passed
//! ```


use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::labels::LabelIndex;
use crate::selection::Selection;

use super::{ReportFormatter, ReportOptions, plural};

/// Text format report formatter.
pub struct TextFormatter;

fn write_colored(writer: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
    writer.set_color(spec)?;
    write!(writer, "{}", text)?;
    writer.reset()
}

fn header(selection: &Selection<'_>) -> String {
    let collected = format!("collected {}", plural(selection.collected(), "item", "items"));
    if !selection.filtered {
        return collected;
    }
    format!(
        "{} / {} deselected / {} selected",
        collected,
        selection.deselected.len(),
        selection.selected.len()
    )
}

impl ReportFormatter for TextFormatter {
    fn write_selection(
        &self,
        writer: &mut dyn WriteColor,
        selection: &Selection<'_>,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        write_colored(writer, &scheme::header(), &header(selection))?;
        writeln!(writer)?;

        for case in &selection.selected {
            write!(writer, "{}", case.name)?;
            if options.verbose && !case.labels.is_empty() {
                write!(writer, " ")?;
                write_colored(writer, &scheme::labels(), &format!("[{}]", case.labels))?;
            }
            if !options.collect_only {
                write!(writer, " ")?;
                write_colored(writer, &scheme::pass(), "PASSED")?;
            }
            writeln!(writer)?;
        }

        if options.collect_only {
            return Ok(());
        }
        if selection.is_empty() {
            write_colored(writer, &scheme::empty(), "no tests ran")?;
        } else {
            write_colored(writer, &scheme::pass(), &format!("{} passed", selection.selected.len()))?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_labels(&self, writer: &mut dyn WriteColor, index: &LabelIndex) -> anyhow::Result<()> {
        if index.is_empty() {
            writeln!(writer, "no labels found")?;
            return Ok(());
        }
        for (category, counts) in index.iter() {
            write_colored(writer, &scheme::category(), category)?;
            let values: Vec<String> =
                counts.iter().map(|(value, n)| format!("{value} ({n})")).collect();
            writeln!(writer, ": {}", values.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
