//! Net worth domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single month of portfolio net worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthPoint {
    pub month: NaiveDate,
    /// Sum of every account's balance for the month
    pub total_value: Decimal,
    /// Sum of every account's net contribution for the month
    pub monthly_contribution: Decimal,
    /// Running sum of monthly contributions up to and including this month
    pub total_invested: Decimal,
}

/// Split of one month's change in value into cash movement and market movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPerformance {
    pub month: NaiveDate,
    pub total_value: Decimal,
    pub net_contribution: Decimal,
    /// Change in value not explained by contributions, in currency
    pub market_return: Decimal,
}
