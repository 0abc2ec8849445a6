//! Circle area, in an exact form and in a form that casts to integers too early.
//!
//! The truncated variant is a casting exercise: both `PI` and `radius²` are cut
//! down to integers *before* they are multiplied, so a radius of 20 gives
//! `3 * 400 = 1200` rather than `1256.64`. That result is the expected output
//! and must not be corrected.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::report::Outcome;

/// Input shared by both circle exercises.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleInput {
    /// Radius in meters.
    pub radius: f64,
}

impl Default for CircleInput {
    fn default() -> Self {
        Self { radius: 20.0 }
    }
}

/// Area computed after truncating both factors to integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TruncatedCircle {
    pub radius: f64,
    pub area: i64,
}

/// Area computed in full floating-point precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleArea {
    pub radius: f64,
    pub area: f64,
}

/// `trunc(PI) * trunc(radius²)`.
pub fn truncated_area(input: &CircleInput) -> TruncatedCircle {
    let pi = PI as i64;
    let squared = input.radius.powi(2) as i64;

    TruncatedCircle {
        radius: input.radius,
        // Overflow wraps, as plain integer arithmetic would.
        area: pi.wrapping_mul(squared),
    }
}

/// `PI * radius²`.
pub fn exact_area(input: &CircleInput) -> CircleArea {
    CircleArea {
        radius: input.radius,
        area: PI * input.radius.powi(2),
    }
}

impl Outcome for TruncatedCircle {
    fn lines(&self) -> Vec<String> {
        vec![format!(
            "The area of a circle with a radius of {} meters is: {}m²",
            self.radius as i64, self.area
        )]
    }
}

impl Outcome for CircleArea {
    fn lines(&self) -> Vec<String> {
        vec![format!(
            "The area of a circle with a radius of {} meters is: {:.2}m²",
            self.radius as i64, self.area
        )]
    }
}
