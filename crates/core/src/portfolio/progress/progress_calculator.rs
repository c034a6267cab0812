use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

use super::progress_model::AccountMonthlyProgress;
use crate::portfolio::snapshot::AccountHistory;
use crate::utils::time_utils::month_index;

/// Builds the monthly progress grid for `year`.
///
/// Accounts with no capital in the year (no positive month and a zero total)
/// are left out. Rows keep the order of `histories`.
pub fn monthly_progress(histories: &[AccountHistory], year: i32) -> Vec<AccountMonthlyProgress> {
    histories
        .iter()
        .filter_map(|history| {
            let mut months: [Option<Decimal>; 12] = [None; 12];
            let mut has_capital = false;

            for snapshot in history
                .snapshots()
                .iter()
                .filter(|s| s.month.year() == year)
            {
                months[month_index(snapshot.month)] = Some(snapshot.amount_value);
                if snapshot.amount_value > Decimal::ZERO {
                    has_capital = true;
                }
            }

            let row = AccountMonthlyProgress {
                account_id: history.account().id.clone(),
                account_name: history.account().name.clone(),
                year,
                months,
            };

            if has_capital || row.total() > Decimal::ZERO {
                Some(row)
            } else {
                None
            }
        })
        .collect()
}

/// Years that have at least one snapshot, plus `current_year`, newest first.
pub fn available_years(histories: &[AccountHistory], current_year: i32) -> Vec<i32> {
    let mut years: BTreeSet<i32> = histories
        .iter()
        .flat_map(|h| h.snapshots().iter().map(|s| s.month.year()))
        .collect();
    years.insert(current_year);
    years.into_iter().rev().collect()
}

/// Gain for a month being reconciled: the part of the new balance not
/// explained by last month's balance plus this month's contribution.
pub fn month_gain(
    previous_value: Decimal,
    current_value: Decimal,
    net_contribution: Decimal,
) -> Decimal {
    current_value - (previous_value + net_contribution)
}
