//! `labs all` -- run every exercise in coursework order.

use anyhow::Result;
use labs_core::{Exercise, Report};
use tracing::debug;

use crate::context::RuntimeContext;
use crate::output::{output_json, output_text};

/// Execute the `labs all` command.
///
/// Text mode separates exercises with a blank line; JSON mode prints one
/// array of reports.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let reports = Exercise::ALL
        .into_iter()
        .map(|exercise| exercise.run(&ctx.inputs))
        .collect::<Result<Vec<Report>, _>>()?;
    debug!(count = reports.len(), "ran all exercises");

    if ctx.json {
        return output_json(&reports);
    }

    let text = reports
        .iter()
        .map(Report::text)
        .collect::<Vec<_>>()
        .join("\n");
    output_text(&text);
    Ok(())
}
