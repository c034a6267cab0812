use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_PERCENT_PRECISION, NEW_ACCOUNT_MARKER, NO_DATA_MARKER};
use crate::portfolio::snapshot::ReportingPeriod;

/// A dated, signed cash movement as seen from the investor's pocket.
///
/// Negative amounts are capital put into the account, positive amounts are
/// capital taken back out (including the closing valuation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// Growth of an account over a period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum GrowthResult {
    /// Percentage change from the first to the latest balance
    Value(Decimal),
    /// The period started from a zero balance
    NewAccount,
    /// No snapshots in the period
    NoData,
}

impl GrowthResult {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            GrowthResult::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Renders the growth as `12.3%`, `New` or `--`.
    pub fn display(&self, precision: u32) -> String {
        match self {
            GrowthResult::Value(v) => format_percent(Some(*v), precision),
            GrowthResult::NewAccount => NEW_ACCOUNT_MARKER.to_string(),
            GrowthResult::NoData => NO_DATA_MARKER.to_string(),
        }
    }
}

/// Renders a percentage rounded to `precision` decimals, or `--` when absent.
pub fn format_percent(value: Option<Decimal>, precision: u32) -> String {
    match value {
        Some(v) => {
            let rounded = v.round_dp(precision);
            format!("{:.*}%", precision as usize, rounded)
        }
        None => NO_DATA_MARKER.to_string(),
    }
}

/// Performance of a single account over a reporting period.
///
/// Percentages keep full precision; use [`AccountMetrics::display`] for
/// rounded output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetrics {
    pub account_id: String,
    pub period: ReportingPeriod,
    /// Contribution-adjusted return, percent
    pub market_return: Option<Decimal>,
    /// Annualized money-weighted return (XIRR), percent
    pub money_weighted_return: Option<Decimal>,
    pub total_growth: GrowthResult,
    pub current_value: Decimal,
}

impl AccountMetrics {
    pub fn display(&self) -> AccountMetricsDisplay {
        self.display_with_precision(DISPLAY_PERCENT_PRECISION)
    }

    pub fn display_with_precision(&self, precision: u32) -> AccountMetricsDisplay {
        AccountMetricsDisplay {
            account_id: self.account_id.clone(),
            market_return: format_percent(self.market_return, precision),
            money_weighted_return: format_percent(self.money_weighted_return, precision),
            total_growth: self.total_growth.display(precision),
            current_value: self.current_value.round_dp(2),
        }
    }
}

/// Display-ready rendering of [`AccountMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetricsDisplay {
    pub account_id: String,
    pub market_return: String,
    pub money_weighted_return: String,
    pub total_growth: String,
    pub current_value: Decimal,
}
