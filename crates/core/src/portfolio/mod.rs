pub mod allocation;
pub mod analytics;
pub mod net_worth;
pub mod performance;
pub mod progress;
pub mod snapshot;

pub use allocation::*;
pub use analytics::*;
pub use net_worth::*;
pub use performance::*;
pub use progress::*;
pub use snapshot::*;

#[cfg(test)]
pub(crate) mod test_fixtures;
