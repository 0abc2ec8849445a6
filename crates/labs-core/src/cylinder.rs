//! Surface area and volume of a closed cylinder.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::report::Outcome;

/// Input for the cylinder exercise, both dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderInput {
    pub radius: f64,
    pub height: f64,
}

impl Default for CylinderInput {
    fn default() -> Self {
        Self {
            radius: 20.0,
            height: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CylinderMetrics {
    pub radius: f64,
    pub height: f64,
    pub surface_area: f64,
    pub volume: f64,
}

/// Total surface area (`2πr² + 2πrh`) and volume (`πr²h`).
pub fn metrics(input: &CylinderInput) -> CylinderMetrics {
    let CylinderInput { radius, height } = *input;
    let surface_area = (2.0 * PI * radius.powi(2)) + (2.0 * PI * radius * height);
    let volume = PI * radius.powi(2) * height;

    CylinderMetrics {
        radius,
        height,
        surface_area,
        volume,
    }
}

impl Outcome for CylinderMetrics {
    fn lines(&self) -> Vec<String> {
        // Dimensions are truncated for display only.
        let r = self.radius as i64;
        let h = self.height as i64;
        vec![
            format!(
                "The surface area of a cylinder with a radius of {r} cms and a height of {h} cms is: {:.2}cm²",
                self.surface_area
            ),
            format!(
                "The volume of a cylinder with a radius of {r} and a height of {h} is: {:.2}cm³",
                self.volume
            ),
        ]
    }
}
