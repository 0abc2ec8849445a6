//! `labs <exercise>` -- compute and print a single formula exercise.

use anyhow::{Context, Result};
use labs_core::{Exercise, Inputs};
use tracing::debug;

use crate::context::RuntimeContext;
use crate::output::output_report;

/// Execute one exercise with the given inputs.
pub fn run(ctx: &RuntimeContext, exercise: Exercise, inputs: &Inputs) -> Result<()> {
    debug!(%exercise, lab = exercise.lab_id(), ?inputs, "running exercise");

    let report = exercise
        .run(inputs)
        .with_context(|| format!("failed to run {}", exercise))?;
    output_report(ctx, &report)
}
