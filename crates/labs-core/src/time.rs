//! Seconds to hours, minutes and seconds.

use serde::{Deserialize, Serialize};

use crate::report::Outcome;

const SECS_PER_HOUR: i64 = 3600;
const SECS_PER_MINUTE: i64 = 60;

/// Input for the time decomposition exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeInput {
    /// Total number of seconds to decompose.
    pub secs: i64,
}

impl Default for TimeInput {
    fn default() -> Self {
        Self { secs: 6500 }
    }
}

/// A total number of seconds split into `h:m:s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeBreakdown {
    pub secs: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Decompose `input.secs` using truncating integer division throughout.
pub fn decompose(input: &TimeInput) -> TimeBreakdown {
    let secs = input.secs;
    let hours = secs / SECS_PER_HOUR;
    let minutes = (secs - hours * SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = secs - hours * SECS_PER_HOUR - minutes * SECS_PER_MINUTE;

    TimeBreakdown {
        secs,
        hours,
        minutes,
        seconds,
    }
}

impl Outcome for TimeBreakdown {
    fn lines(&self) -> Vec<String> {
        vec![format!(
            "{} seconds in hours, mins and secs = {}:{}:{}",
            self.secs, self.hours, self.minutes, self.seconds
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decomposes_lab_literal() {
        let out = decompose(&TimeInput::default());
        assert_eq!(
            out,
            TimeBreakdown {
                secs: 6500,
                hours: 1,
                minutes: 48,
                seconds: 20,
            }
        );
        assert_eq!(
            out.lines(),
            vec!["6500 seconds in hours, mins and secs = 1:48:20"]
        );
    }

    #[test]
    fn exact_hour_has_no_remainder() {
        let out = decompose(&TimeInput { secs: 7200 });
        assert_eq!((out.hours, out.minutes, out.seconds), (2, 0, 0));
    }

    #[test]
    fn under_a_minute() {
        let out = decompose(&TimeInput { secs: 59 });
        assert_eq!((out.hours, out.minutes, out.seconds), (0, 0, 59));
    }

    #[test]
    fn negative_truncates_toward_zero() {
        let out = decompose(&TimeInput { secs: -3661 });
        assert_eq!((out.hours, out.minutes, out.seconds), (-1, -1, -1));
    }
}
