use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the monthly progress grid: an account's balance for each
/// month of a year, `None` where nothing was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMonthlyProgress {
    pub account_id: String,
    pub account_name: String,
    pub year: i32,
    pub months: [Option<Decimal>; 12],
}

impl AccountMonthlyProgress {
    /// Sum of every recorded month.
    pub fn total(&self) -> Decimal {
        self.months.iter().flatten().copied().sum()
    }
}
