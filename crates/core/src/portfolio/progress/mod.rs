//! Monthly progress module - per-account year grids and reconciliation helpers.

mod progress_calculator;
mod progress_model;

pub use progress_calculator::*;
pub use progress_model::*;
