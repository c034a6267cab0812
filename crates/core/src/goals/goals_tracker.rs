use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::goals_model::{CategoryGoalProgress, Goal, GoalProgress};
use crate::errors::Result;
use crate::portfolio::performance::current_value;
use crate::portfolio::snapshot::{AccountHistory, ReportingPeriod};

/// `current / target × 100`, unclamped. `None` when the target is not positive.
pub fn progress_percent(current: Decimal, target: Decimal) -> Option<Decimal> {
    if target <= Decimal::ZERO {
        return None;
    }
    Some(current / target * Decimal::ONE_HUNDRED)
}

/// Measures the portfolio against a goal.
///
/// Portfolio and category values are each account's latest balance recorded
/// by the end of `as_of_year`, so a year without snapshots yet still counts
/// what was held at the end of the previous one. Contributions are the net
/// contributions recorded in the goal year.
pub fn track_goal(
    goal: &Goal,
    histories: &[AccountHistory],
    as_of_year: i32,
) -> Result<GoalProgress> {
    let period = ReportingPeriod::calendar_year(as_of_year)?;
    let mut value_by_category: HashMap<&str, Decimal> = HashMap::new();
    let mut total_value = Decimal::ZERO;
    let mut total_contributions = Decimal::ZERO;

    for history in histories {
        let value = current_value(history, &period);
        total_value += value;
        *value_by_category
            .entry(history.account().category_id.as_str())
            .or_insert(Decimal::ZERO) += value;

        total_contributions += history
            .snapshots()
            .iter()
            .filter(|s| s.month.year() == goal.year)
            .map(|s| s.net_contribution)
            .sum::<Decimal>();
    }

    let categories = goal
        .category_goals
        .iter()
        .filter_map(|category_goal| {
            let current = value_by_category
                .get(category_goal.category_id.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            progress_percent(current, category_goal.target_amount).map(|progress| {
                CategoryGoalProgress {
                    category_id: category_goal.category_id.clone(),
                    current_value: current,
                    target_amount: category_goal.target_amount,
                    progress,
                }
            })
        })
        .collect();

    Ok(GoalProgress {
        year: goal.year,
        total_value,
        value_progress: goal
            .target_amount
            .and_then(|target| progress_percent(total_value, target)),
        total_contributions,
        contribution_progress: goal
            .contribution_goal
            .and_then(|target| progress_percent(total_contributions, target)),
        categories,
    })
}
