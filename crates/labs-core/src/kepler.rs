//! Gravitational constant from Kepler's third law.
//!
//! `G = 4π² · (a³ / P² · (m1 + m2))`, where `a` is the semi-major axis, `P`
//! the orbital period and `m1`, `m2` the two masses. The mass sum multiplies
//! the `a³ / P²` term; it is not a separate divisor. Evaluation order matters
//! for the printed digits, so keep the grouping as written.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::report::Outcome;

/// Symbolic form printed above the value.
pub const FORMULA: &str = "G = 4 x π² x (a³ / P² x (m1 + m2))";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeplerInput {
    /// Semi-major axis.
    pub a: f64,
    /// Orbital period.
    pub period: f64,
    pub m1: f64,
    pub m2: f64,
}

impl Default for KeplerInput {
    fn default() -> Self {
        Self {
            a: 3.0,
            period: 2.0,
            m1: 4.0,
            m2: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeplerResult {
    #[serde(flatten)]
    pub input: KeplerInput,
    pub g: f64,
}

pub fn gravitational_constant(input: &KeplerInput) -> KeplerResult {
    let KeplerInput { a, period, m1, m2 } = *input;
    let g = 4.0 * PI.powi(2) * (a.powi(3) / period.powi(2) * (m1 + m2));
    KeplerResult { input: *input, g }
}

impl Outcome for KeplerResult {
    fn lines(&self) -> Vec<String> {
        vec![FORMULA.to_string(), format!("G = {}", self.g)]
    }
}
