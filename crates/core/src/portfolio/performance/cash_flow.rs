//! Cash-flow schedule construction for money-weighted returns.

use rust_decimal::Decimal;

use super::performance_model::CashFlow;
use crate::portfolio::snapshot::MonthlySnapshot;

/// Builds the XIRR schedule for one account's snapshots within a period.
///
/// `snapshots` must be sorted ascending by month. The schedule contains:
/// the balance held before the first recorded contribution (as an outflow,
/// when positive), every non-zero net contribution with its sign flipped,
/// and the closing balance as an inflow.
///
/// The opening balance is dated at the first snapshot's month rather than
/// the start of the period.
pub fn build_cash_flows(snapshots: &[MonthlySnapshot]) -> Vec<CashFlow> {
    let (first, last) = match (snapshots.first(), snapshots.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Vec::new(),
    };

    let mut flows = Vec::with_capacity(snapshots.len() + 2);

    let start_balance = first.amount_value - first.net_contribution;
    if start_balance > Decimal::ZERO {
        flows.push(CashFlow {
            amount: -start_balance,
            date: first.month,
        });
    }

    flows.extend(
        snapshots
            .iter()
            .filter(|s| !s.net_contribution.is_zero())
            .map(|s| CashFlow {
                amount: -s.net_contribution,
                date: s.month,
            }),
    );

    flows.push(CashFlow {
        amount: last.amount_value,
        date: last.month,
    });

    flows
}
