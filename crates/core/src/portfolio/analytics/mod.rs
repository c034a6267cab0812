//! Analytics module - loads accounts, snapshots, transactions and goals
//! through repository traits and runs the calculators over them.

mod analytics_service;
mod analytics_traits;

pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
