//! Per-account return calculations.

use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

use super::cash_flow::build_cash_flows;
use super::performance_model::{AccountMetrics, GrowthResult};
use super::xirr::{xirr_with_options, XirrOptions};
use crate::errors::CalculatorError;
use crate::portfolio::snapshot::{AccountHistory, MonthlySnapshot, ReportingPeriod};

/// Contribution-adjusted return over the given snapshots, in percent.
///
/// Capital invested is the first balance plus every net contribution
/// recorded after the first snapshot. Returns `None` for an empty slice or
/// when nothing was invested.
pub fn market_return(snapshots: &[MonthlySnapshot]) -> Option<Decimal> {
    let (first, rest) = snapshots.split_first()?;
    let current = snapshots.last().map(|s| s.amount_value)?;

    let contributed: Decimal = rest.iter().map(|s| s.net_contribution).sum();
    let total_invested = first.amount_value + contributed;
    if total_invested.is_zero() {
        return None;
    }

    Some((current - total_invested) / total_invested * Decimal::ONE_HUNDRED)
}

/// Change from the first to the latest balance, in percent.
pub fn total_growth(snapshots: &[MonthlySnapshot]) -> GrowthResult {
    let (first, last) = match (snapshots.first(), snapshots.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return GrowthResult::NoData,
    };

    if first.amount_value.is_zero() {
        return GrowthResult::NewAccount;
    }

    GrowthResult::Value(
        (last.amount_value - first.amount_value) / first.amount_value * Decimal::ONE_HUNDRED,
    )
}

/// Annualized money-weighted return (XIRR) over the given snapshots, in percent.
pub fn money_weighted_return(
    snapshots: &[MonthlySnapshot],
    options: &XirrOptions,
) -> Result<Decimal, CalculatorError> {
    let flows = build_cash_flows(snapshots);
    let rate = xirr_with_options(&flows, options)?;
    Decimal::from_f64(rate).ok_or_else(|| {
        CalculatorError::Convergence(format!("rate {} is not representable", rate))
    })
}

/// Latest balance recorded up to the end of `period`.
///
/// A period without snapshots carries the last earlier balance forward; the
/// account's initial amount is used only when nothing was recorded by then.
pub fn current_value(history: &AccountHistory, period: &ReportingPeriod) -> Decimal {
    history
        .value_as_of(period.end)
        .unwrap_or(history.account().initial_amount)
}

/// Computes every per-account metric for one reporting period.
///
/// Never fails: a rate that cannot be solved is reported as `None`.
pub fn calculate_account_metrics(
    history: &AccountHistory,
    period: &ReportingPeriod,
    options: &XirrOptions,
) -> AccountMetrics {
    let account = history.account();
    let snapshots = history.snapshots_in(period);

    let money_weighted_return = if snapshots.is_empty() {
        None
    } else {
        match money_weighted_return(snapshots, options) {
            Ok(rate) => Some(rate),
            Err(e) => {
                debug!(
                    "No money-weighted return for account {} ({} to {}): {}",
                    account.id, period.start, period.end, e
                );
                None
            }
        }
    };

    AccountMetrics {
        account_id: account.id.clone(),
        period: *period,
        market_return: market_return(snapshots),
        money_weighted_return,
        total_growth: total_growth(snapshots),
        current_value: current_value(history, period),
    }
}
