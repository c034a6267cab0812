//! Net worth calculations over account histories.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::net_worth_model::{MonthlyPerformance, NetWorthPoint};
use crate::portfolio::snapshot::AccountHistory;

#[derive(Debug, Clone, Copy, Default)]
struct MonthTotals {
    value: Decimal,
    contribution: Decimal,
}

/// Sums balances and contributions of every account per month, ascending.
fn totals_by_month(histories: &[AccountHistory]) -> BTreeMap<NaiveDate, MonthTotals> {
    let mut by_month: BTreeMap<NaiveDate, MonthTotals> = BTreeMap::new();

    for history in histories {
        for snapshot in history.snapshots() {
            let totals = by_month.entry(snapshot.month).or_default();
            totals.value += snapshot.amount_value;
            totals.contribution += snapshot.net_contribution;
        }
    }

    by_month
}

/// Portfolio value per month paired with cumulative capital invested.
///
/// `total_invested` starts at zero and accumulates each month's net
/// contribution, so it only reflects capital recorded through snapshots.
pub fn net_worth_series(histories: &[AccountHistory]) -> Vec<NetWorthPoint> {
    let mut total_invested = Decimal::ZERO;

    let series: Vec<NetWorthPoint> = totals_by_month(histories)
        .into_iter()
        .map(|(month, totals)| {
            total_invested += totals.contribution;
            NetWorthPoint {
                month,
                total_value: totals.value,
                monthly_contribution: totals.contribution,
                total_invested,
            }
        })
        .collect();

    debug!("Net worth series calculated: {} months", series.len());
    series
}

/// Monthly market return in currency: value change minus net contribution.
///
/// The month before the first tracked month counts as a zero balance, so the
/// first entry's market return is its value minus its contribution. When the
/// first tracked month is not the portfolio's inception this overstates that
/// month's gain.
pub fn monthly_performance(histories: &[AccountHistory]) -> Vec<MonthlyPerformance> {
    let mut previous_value = Decimal::ZERO;

    totals_by_month(histories)
        .into_iter()
        .map(|(month, totals)| {
            let market_return = totals.value - previous_value - totals.contribution;
            previous_value = totals.value;
            MonthlyPerformance {
                month,
                total_value: totals.value,
                net_contribution: totals.contribution,
                market_return,
            }
        })
        .collect()
}
