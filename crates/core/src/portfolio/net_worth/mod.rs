//! Net worth module.
//!
//! Aggregates every account's monthly snapshots into portfolio-level series:
//! total value against cumulative capital invested, and the monthly split
//! between contributions and market movement.

mod net_worth_calculator;
mod net_worth_model;

pub use net_worth_calculator::*;
pub use net_worth_model::*;
