//! Output formatting helpers for the `labs` CLI.
//!
//! Exercise text goes to stdout exactly as rendered; JSON output is
//! pretty-printed. Write errors (e.g. a closed pipe) are ignored.

use std::io::{self, Write};

use anyhow::{Context, Result};
use labs_core::Report;
use serde::Serialize;

use crate::context::RuntimeContext;

/// Print a value as pretty-printed JSON to stdout.
pub fn output_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize JSON")?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", json);
    Ok(())
}

/// Print raw text to stdout without adding anything.
pub fn output_text(text: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(text.as_bytes());
    let _ = handle.flush();
}

/// Print one exercise report in the context's output mode.
pub fn output_report(ctx: &RuntimeContext, report: &Report) -> Result<()> {
    if ctx.json {
        output_json(report)
    } else {
        output_text(&report.text());
        Ok(())
    }
}

/// Format a simple table with headers and rows.
///
/// Column widths are computed from the data for alignment. Returns an empty
/// string when there are no rows.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = render_row(&widths, headers.iter().copied());
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&render_row(&widths, separator.iter().map(String::as_str)));
    for row in rows {
        out.push_str(&render_row(&widths, row.iter().map(String::as_str)));
    }
    out
}

fn render_row<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let line = cells
        .enumerate()
        .map(|(i, cell)| match widths.get(i) {
            Some(&width) => format!("{:<width$}", cell, width = width),
            None => cell.to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_aligns_columns() {
        let headers = &["NAME", "LAB"];
        let rows = vec![
            vec!["time".into(), "ex1q10".into()],
            vec!["circle-truncated".into(), "ex1q13".into()],
        ];
        let table = format_table(headers, &rows);
        assert_eq!(
            table,
            "NAME              LAB\n\
             ----------------  ------\n\
             time              ex1q10\n\
             circle-truncated  ex1q13\n"
        );
    }

    #[test]
    fn empty_table_prints_nothing() {
        assert_eq!(format_table(&["A"], &[]), "");
    }
}
