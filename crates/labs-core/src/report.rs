//! Rendered exercise output.

use serde::Serialize;

use crate::exercise::{Exercise, FormulaError};

/// A computed exercise result that knows how to print itself.
pub trait Outcome: Serialize {
    /// The console lines for this result, without trailing newlines.
    fn lines(&self) -> Vec<String>;
}

/// The output of one exercise run, in both text and JSON form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub exercise: Exercise,
    #[serde(skip)]
    pub lines: Vec<String>,
    pub result: serde_json::Value,
}

impl Report {
    pub fn from_outcome<O: Outcome>(exercise: Exercise, outcome: &O) -> Result<Self, FormulaError> {
        Ok(Self {
            exercise,
            lines: outcome.lines(),
            result: serde_json::to_value(outcome)?,
        })
    }

    /// Text as written to stdout: every line newline-terminated.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
