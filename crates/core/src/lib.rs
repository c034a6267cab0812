//! Investfolio Core - performance analytics for personal investment accounts.
//!
//! This crate turns monthly account snapshots, cash-flow transactions and
//! yearly goals into displayable metrics: money-weighted return (XIRR),
//! contribution-adjusted market return, net worth over time, category
//! rollups and goal progress. It is storage-agnostic and defines repository
//! traits that a host application implements.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod portfolio;
pub mod settings;
pub mod transactions;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
