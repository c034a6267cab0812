//! Performance module - cash-flow schedules, the XIRR solver and per-account returns.

mod cash_flow;
pub mod performance_calculator;
pub mod performance_model;
pub mod xirr;

pub use cash_flow::build_cash_flows;
pub use performance_calculator::*;
pub use performance_model::*;
pub use xirr::{xirr, xirr_with_options, XirrOptions};

#[cfg(test)]
mod performance_calculator_tests;
