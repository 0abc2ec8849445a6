//! `labs list` -- show the exercise catalog.

use anyhow::Result;
use labs_core::Exercise;

use crate::context::RuntimeContext;
use crate::output::{format_table, output_json, output_text};

/// Execute the `labs list` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        let entries: Vec<serde_json::Value> = Exercise::ALL
            .iter()
            .map(|e| {
                serde_json::json!({
                    "name": e.as_str(),
                    "lab": e.lab_id(),
                    "title": e.title(),
                })
            })
            .collect();
        return output_json(&entries);
    }

    let rows: Vec<Vec<String>> = Exercise::ALL
        .iter()
        .map(|e| vec![e.as_str().to_string(), e.lab_id().to_string(), e.title().to_string()])
        .collect();
    output_text(&format_table(&["NAME", "LAB", "TITLE"], &rows));
    Ok(())
}
