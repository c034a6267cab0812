//! Portfolio snapshot module - monthly balances and per-account histories.

mod snapshot_model;
mod snapshot_traits;

pub use snapshot_model::*;
pub use snapshot_traits::*;
