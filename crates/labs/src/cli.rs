//! Clap CLI definitions for the `labs` command.
//!
//! One subcommand per exercise (each also reachable by its lab id), plus
//! catalog and utility commands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use labs_core::Inputs;

/// labs -- formula exercises.
///
/// Each exercise computes one closed-form formula from literal inputs and
/// prints the result.
#[derive(Parser, Debug)]
#[command(
    name = "labs",
    about = "Formula exercises",
    long_about = "Each exercise computes one closed-form formula from literal inputs and prints the result.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Config file (default: auto-discover .labs/config.yaml).
    #[arg(long, global = true, env = "LABS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output on stderr.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // ===== Exercises =====
    /// Squares and cubes of 1 to 5.
    #[command(alias = "ex1q6")]
    Powers,

    /// Gravitational constant from Kepler's third law.
    #[command(alias = "ex1q7")]
    Kepler(KeplerArgs),

    /// Area of a circle.
    #[command(alias = "ex1q8")]
    Circle(CircleArgs),

    /// Surface area and volume of a cylinder.
    #[command(alias = "ex1q9")]
    Cylinder(CylinderArgs),

    /// Convert seconds to hours, minutes and seconds.
    #[command(alias = "ex1q10")]
    Time(TimeArgs),

    /// Area of a circle, casting to integers before multiplying.
    #[command(name = "circle-truncated", alias = "ex1q13")]
    CircleTruncated(CircleArgs),

    // ===== Catalog =====
    /// Run every exercise in order.
    All,

    /// List the available exercises.
    List,

    // ===== Utilities =====
    /// Print version information.
    Version,

    /// Generate shell completion scripts.
    Completion(CompletionArgs),
}

// ---------------------------------------------------------------------------
// Exercise inputs
// ---------------------------------------------------------------------------

/// Arguments for `labs time`.
#[derive(Args, Debug, Default)]
pub struct TimeArgs {
    /// Total seconds (default: 6500).
    #[arg(long, allow_negative_numbers = true)]
    pub secs: Option<i64>,
}

impl TimeArgs {
    pub fn apply(&self, inputs: &mut Inputs) {
        if let Some(secs) = self.secs {
            inputs.time.secs = secs;
        }
    }
}

/// Arguments for `labs circle` and `labs circle-truncated`.
#[derive(Args, Debug, Default)]
pub struct CircleArgs {
    /// Radius in meters (default: 20).
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f64>,
}

impl CircleArgs {
    pub fn apply(&self, inputs: &mut Inputs) {
        if let Some(radius) = self.radius {
            inputs.circle.radius = radius;
        }
    }
}

/// Arguments for `labs cylinder`.
#[derive(Args, Debug, Default)]
pub struct CylinderArgs {
    /// Radius in centimeters (default: 20).
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Height in centimeters (default: 20).
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,
}

impl CylinderArgs {
    pub fn apply(&self, inputs: &mut Inputs) {
        if let Some(radius) = self.radius {
            inputs.cylinder.radius = radius;
        }
        if let Some(height) = self.height {
            inputs.cylinder.height = height;
        }
    }
}

/// Arguments for `labs kepler`.
#[derive(Args, Debug, Default)]
pub struct KeplerArgs {
    /// Semi-major axis (default: 3).
    #[arg(long, allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Orbital period (default: 2).
    #[arg(long, allow_negative_numbers = true)]
    pub period: Option<f64>,

    /// Mass of the first body (default: 4).
    #[arg(long, allow_negative_numbers = true)]
    pub m1: Option<f64>,

    /// Mass of the second body (default: 8).
    #[arg(long, allow_negative_numbers = true)]
    pub m2: Option<f64>,
}

impl KeplerArgs {
    pub fn apply(&self, inputs: &mut Inputs) {
        let k = &mut inputs.kepler;
        if let Some(a) = self.a {
            k.a = a;
        }
        if let Some(period) = self.period {
            k.period = period;
        }
        if let Some(m1) = self.m1 {
            k.m1 = m1;
        }
        if let Some(m2) = self.m2 {
            k.m2 = m2;
        }
    }
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Arguments for `labs completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate the script for.
    #[arg(value_enum)]
    pub shell: Shell,
}
