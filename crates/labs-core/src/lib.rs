//! Core formula exercises for the labs workspace.
//!
//! Each exercise lives in its own module with a typed input (whose default is
//! the literal value from the coursework), a pure computation, and a result
//! type that renders the exact console text. [`Exercise`] ties them together
//! into a catalog that the CLI dispatches on.

pub mod circle;
pub mod cylinder;
pub mod exercise;
pub mod inputs;
pub mod kepler;
pub mod powers;
pub mod report;
pub mod time;

pub use exercise::{Exercise, FormulaError};
pub use inputs::Inputs;
pub use report::{Outcome, Report};
