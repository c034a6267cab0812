//! Property-based integration tests for the analytics calculators.
//!
//! These tests check invariants that must hold for any snapshot series,
//! using the `proptest` crate for random test case generation.

use chrono::{Datelike, Duration, NaiveDate};
use investfolio_core::accounts::Account;
use investfolio_core::portfolio::net_worth::net_worth_series;
use investfolio_core::portfolio::performance::{
    calculate_account_metrics, xirr, CashFlow, XirrOptions,
};
use investfolio_core::portfolio::snapshot::{AccountHistory, MonthlySnapshot, ReportingPeriod};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

// =============================================================================
// Generators
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
}

fn month_at(offset: u32) -> NaiveDate {
    let year = 2021 + (offset / 12) as i32;
    NaiveDate::from_ymd_opt(year, offset % 12 + 1, 1).unwrap()
}

/// Generates a well-formed investment: an opening outflow, a few deposits in
/// the first half year, and a closing inflow between 80% and 150% of what was
/// paid in, 18 months to 3 years after the start.
fn arb_cash_flows() -> impl Strategy<Value = Vec<CashFlow>> {
    (
        100i64..10_000,
        proptest::collection::vec((1i64..180, 1i64..5_000), 0..6),
        540i64..1_095,
        80i64..150,
    )
        .prop_map(|(opening, deposits, horizon, gain_pct)| {
            let mut flows = vec![CashFlow {
                amount: Decimal::from(-opening),
                date: base_date(),
            }];
            let mut paid_in = opening;
            for (day, amount) in deposits {
                paid_in += amount;
                flows.push(CashFlow {
                    amount: Decimal::from(-amount),
                    date: base_date() + Duration::days(day),
                });
            }
            flows.push(CashFlow {
                amount: Decimal::from(paid_in * gain_pct / 100),
                date: base_date() + Duration::days(horizon),
            });
            flows
        })
}

/// Generates a history of up to 12 distinct months over three years.
fn arb_history(account_id: &'static str) -> impl Strategy<Value = AccountHistory> {
    proptest::collection::btree_map(0u32..36, (0i64..100_000, -5_000i64..5_000), 0..12).prop_map(
        move |rows: BTreeMap<u32, (i64, i64)>| {
            let account = Account {
                id: account_id.to_string(),
                name: format!("Account {}", account_id),
                category_id: "stocks".to_string(),
                ..Default::default()
            };
            let snapshots = rows
                .into_iter()
                .map(|(offset, (value, contribution))| {
                    MonthlySnapshot::new(
                        account_id,
                        month_at(offset),
                        Decimal::from(value),
                        Decimal::from(contribution),
                    )
                })
                .collect();
            AccountHistory::new(account, snapshots).unwrap()
        },
    )
}

fn is_rendered_percent(text: &str) -> bool {
    text == "--"
        || text == "New"
        || text
            .strip_suffix('%')
            .map(|n| n.parse::<f64>().map(f64::is_finite).unwrap_or(false))
            .unwrap_or(false)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Reordering the cash flows does not change the solved rate.
    #[test]
    fn prop_xirr_is_order_independent(
        (flows, shuffled) in arb_cash_flows()
            .prop_flat_map(|flows| (Just(flows.clone()), Just(flows).prop_shuffle()))
    ) {
        let ordered = xirr(&flows, 0.1).unwrap();
        let reordered = xirr(&shuffled, 0.1).unwrap();
        prop_assert!(ordered.is_finite());
        prop_assert!((ordered - reordered).abs() < 1e-4);
    }

    /// Cumulative invested capital is the running sum of monthly contributions.
    #[test]
    fn prop_total_invested_is_running_sum(
        a in arb_history("a"),
        b in arb_history("b"),
    ) {
        let histories = vec![a, b];
        let series = net_worth_series(&histories);

        let mut running = Decimal::ZERO;
        for point in &series {
            running += point.monthly_contribution;
            prop_assert_eq!(point.total_invested, running);
        }
        prop_assert!(series.windows(2).all(|w| w[0].month < w[1].month));

        let recorded: Decimal = histories.iter().map(|h| h.total_net_contribution()).sum();
        prop_assert_eq!(running, recorded);
    }

    /// Metrics are a pure function of their inputs.
    #[test]
    fn prop_account_metrics_are_idempotent(history in arb_history("a")) {
        let options = XirrOptions::default();
        for period in [ReportingPeriod::all_time(), ReportingPeriod::calendar_year(2022).unwrap()] {
            let first = calculate_account_metrics(&history, &period, &options);
            let second = calculate_account_metrics(&history, &period, &options);
            prop_assert_eq!(first, second);
        }
    }

    /// Every rendered percentage is a finite number, `New` or `--`.
    #[test]
    fn prop_display_never_renders_nan(history in arb_history("a"), year in 2021i32..2024) {
        let period = ReportingPeriod::calendar_year(year).unwrap();
        let metrics = calculate_account_metrics(&history, &period, &XirrOptions::default());
        let display = metrics.display();

        prop_assert!(is_rendered_percent(&display.market_return), "{}", display.market_return);
        prop_assert!(
            is_rendered_percent(&display.money_weighted_return),
            "{}",
            display.money_weighted_return
        );
        prop_assert!(is_rendered_percent(&display.total_growth), "{}", display.total_growth);

        let in_year = history.snapshots().iter().filter(|s| s.month.year() == year).count();
        if in_year == 0 {
            prop_assert_eq!(display.total_growth.as_str(), "--");
        }
    }
}
