//! Category rollups over account histories.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use super::allocation_model::{CategoryAllocation, CategoryPerformance};
use crate::accounts::Category;
use crate::constants::{CATEGORY_RETURN_PRECISION, DISPLAY_PERCENT_PRECISION, UNCATEGORIZED_NAME};
use crate::portfolio::snapshot::AccountHistory;

#[derive(Debug, Default)]
struct CategoryTotals {
    value: Decimal,
    invested: Decimal,
}

/// Groups accounts by category id and returns `(id, name, totals)` ordered by
/// category name, then id.
fn rollup(
    histories: &[AccountHistory],
    categories: &[Category],
) -> Vec<(String, String, CategoryTotals)> {
    let names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut by_category: BTreeMap<&str, CategoryTotals> = BTreeMap::new();
    for history in histories {
        let totals = by_category
            .entry(history.account().category_id.as_str())
            .or_default();
        totals.value += history.latest_value();
        totals.invested += history.total_net_contribution();
    }

    let mut rows: Vec<(String, String, CategoryTotals)> = by_category
        .into_iter()
        .map(|(id, totals)| {
            let name = names.get(id).copied().unwrap_or(UNCATEGORIZED_NAME);
            (id.to_string(), name.to_string(), totals)
        })
        .collect();

    rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Latest value held per category. Accounts without snapshots contribute zero.
pub fn category_allocation(
    histories: &[AccountHistory],
    categories: &[Category],
) -> Vec<CategoryAllocation> {
    let rows = rollup(histories, categories);
    let portfolio_total: Decimal = rows.iter().map(|(_, _, t)| t.value).sum();

    rows.into_iter()
        .map(|(category_id, category_name, totals)| {
            let percentage = if portfolio_total.is_zero() {
                Decimal::ZERO
            } else {
                (totals.value / portfolio_total * Decimal::ONE_HUNDRED)
                    .round_dp(DISPLAY_PERCENT_PRECISION)
            };
            CategoryAllocation {
                category_id,
                category_name,
                total_value: totals.value,
                percentage,
            }
        })
        .collect()
}

/// All-time return per category, measured against recorded net contributions.
pub fn category_performance(
    histories: &[AccountHistory],
    categories: &[Category],
) -> Vec<CategoryPerformance> {
    rollup(histories, categories)
        .into_iter()
        .map(|(category_id, category_name, totals)| {
            let return_percentage = if totals.invested.is_zero() {
                Decimal::ZERO
            } else {
                ((totals.value - totals.invested) / totals.invested * Decimal::ONE_HUNDRED)
                    .round_dp(CATEGORY_RETURN_PRECISION)
            };
            CategoryPerformance {
                category_id,
                category_name,
                total_value: totals.value,
                total_invested: totals.invested,
                return_percentage,
            }
        })
        .collect()
}
