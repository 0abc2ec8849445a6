//! The full set of exercise inputs.

use serde::{Deserialize, Serialize};

use crate::circle::CircleInput;
use crate::cylinder::CylinderInput;
use crate::kepler::KeplerInput;
use crate::time::TimeInput;

/// Inputs for every exercise. `Default` yields the coursework literals, and
/// any subset may be given when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    pub time: TimeInput,
    /// Shared by the exact and truncated circle exercises.
    pub circle: CircleInput,
    pub cylinder: CylinderInput,
    pub kepler: KeplerInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_lab_literals() {
        let inputs = Inputs::default();
        assert_eq!(inputs.time.secs, 6500);
        assert_eq!(inputs.circle.radius, 20.0);
        assert_eq!(inputs.cylinder.height, 20.0);
        assert_eq!(inputs.kepler.m2, 8.0);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let inputs: Inputs =
            serde_json::from_str(r#"{"kepler": {"period": 4.0}, "time": {"secs": 60}}"#).unwrap();
        assert_eq!(inputs.time.secs, 60);
        assert_eq!(inputs.kepler.period, 4.0);
        assert_eq!(inputs.kepler.a, 3.0);
        assert_eq!(inputs.cylinder, CylinderInput::default());
    }
}
