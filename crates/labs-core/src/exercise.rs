//! The exercise catalog.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::inputs::Inputs;
use crate::report::Report;
use crate::{circle, cylinder, kepler, powers, time};

/// Errors raised by the catalog. The formulas themselves cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum FormulaError {
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    /// Conversion of a result to JSON failed. No current result type reaches
    /// this: non-finite floats become `null` rather than an error.
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One formula exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    Powers,
    Kepler,
    Circle,
    Cylinder,
    Time,
    CircleTruncated,
}

impl Exercise {
    /// Every exercise, in coursework order.
    pub const ALL: [Exercise; 6] = [
        Exercise::Powers,
        Exercise::Kepler,
        Exercise::Circle,
        Exercise::Cylinder,
        Exercise::Time,
        Exercise::CircleTruncated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Powers => "powers",
            Self::Kepler => "kepler",
            Self::Circle => "circle",
            Self::Cylinder => "cylinder",
            Self::Time => "time",
            Self::CircleTruncated => "circle-truncated",
        }
    }

    /// Question identifier from the lab sheet.
    pub fn lab_id(&self) -> &'static str {
        match self {
            Self::Powers => "ex1q6",
            Self::Kepler => "ex1q7",
            Self::Circle => "ex1q8",
            Self::Cylinder => "ex1q9",
            Self::Time => "ex1q10",
            Self::CircleTruncated => "ex1q13",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Powers => "Squares and cubes of 1 to 5",
            Self::Kepler => "Gravitational constant from Kepler's third law",
            Self::Circle => "Area of a circle",
            Self::Cylinder => "Surface area and volume of a cylinder",
            Self::Time => "Seconds to hours, minutes and seconds",
            Self::CircleTruncated => "Area of a circle with integer casts",
        }
    }

    /// Compute this exercise from `inputs` and render it.
    pub fn run(self, inputs: &Inputs) -> Result<Report, FormulaError> {
        match self {
            Self::Powers => Report::from_outcome(self, &powers::table()),
            Self::Kepler => {
                Report::from_outcome(self, &kepler::gravitational_constant(&inputs.kepler))
            }
            Self::Circle => Report::from_outcome(self, &circle::exact_area(&inputs.circle)),
            Self::Cylinder => Report::from_outcome(self, &cylinder::metrics(&inputs.cylinder)),
            Self::Time => Report::from_outcome(self, &time::decompose(&inputs.time)),
            Self::CircleTruncated => {
                Report::from_outcome(self, &circle::truncated_area(&inputs.circle))
            }
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = FormulaError;

    /// Accepts either the exercise name or its lab id, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted || e.lab_id() == wanted)
            .ok_or_else(|| FormulaError::UnknownExercise(s.to_string()))
    }
}
