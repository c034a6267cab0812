use serde::{Deserialize, Serialize};

use crate::constants::{
    DISPLAY_PERCENT_PRECISION, XIRR_DEFAULT_GUESS, XIRR_MAX_ITERATIONS, XIRR_TOLERANCE,
};
use crate::portfolio::performance::XirrOptions;

pub const XIRR_GUESS_KEY: &str = "xirr_guess";
pub const XIRR_MAX_ITERATIONS_KEY: &str = "xirr_max_iterations";
pub const XIRR_TOLERANCE_KEY: &str = "xirr_tolerance";
pub const DISPLAY_PRECISION_KEY: &str = "display_precision";

/// Upper bound accepted for `display_precision`.
pub const MAX_DISPLAY_PRECISION: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSettings {
    pub xirr_guess: f64,
    pub xirr_max_iterations: usize,
    pub xirr_tolerance: f64,
    /// Decimal places used when rendering percentages
    pub display_precision: u32,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            xirr_guess: XIRR_DEFAULT_GUESS,
            xirr_max_iterations: XIRR_MAX_ITERATIONS,
            xirr_tolerance: XIRR_TOLERANCE,
            display_precision: DISPLAY_PERCENT_PRECISION,
        }
    }
}

impl AnalyticsSettings {
    pub fn xirr_options(&self) -> XirrOptions {
        XirrOptions {
            guess: self.xirr_guess,
            max_iterations: self.xirr_max_iterations,
            tolerance: self.xirr_tolerance,
        }
    }
}
