//! Allocation models for portfolio breakdown by category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current value held in a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAllocation {
    pub category_id: String,
    /// Display name of the category
    pub category_name: String,
    /// Sum of each account's latest balance
    pub total_value: Decimal,
    /// Share of the whole portfolio (0-100)
    pub percentage: Decimal,
}

/// All-time performance of a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPerformance {
    pub category_id: String,
    pub category_name: String,
    pub total_value: Decimal,
    /// Sum of every net contribution ever recorded in the category
    pub total_invested: Decimal,
    /// `(value - invested) / invested`, percent, 2 decimals; zero when nothing was invested
    pub return_percentage: Decimal,
}
