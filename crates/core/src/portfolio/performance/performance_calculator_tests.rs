//! Unit tests for per-account return calculations.

use super::*;
use crate::accounts::Account;
use crate::portfolio::snapshot::ReportingPeriod;
use crate::portfolio::test_fixtures::{account, history};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {} of {}",
        actual,
        tolerance,
        expected
    );
}

#[test]
fn test_all_metrics_agree_without_contributions() {
    let h = history(
        account("a", "c"),
        &[(2023, 1, dec!(1000), dec!(0)), (2024, 1, dec!(1100), dec!(0))],
    );

    let metrics =
        calculate_account_metrics(&h, &ReportingPeriod::all_time(), &XirrOptions::default());

    assert_eq!(metrics.market_return, Some(dec!(10)));
    assert_eq!(metrics.total_growth, GrowthResult::Value(dec!(10)));
    assert_close(metrics.money_weighted_return.unwrap(), dec!(10), dec!(0.1));
    assert_eq!(metrics.current_value, dec!(1100));
}

#[test]
fn test_january_to_december_within_one_year() {
    let h = history(
        account("a", "c"),
        &[(2024, 1, dec!(1000), dec!(0)), (2024, 12, dec!(1100), dec!(0))],
    );
    let period = ReportingPeriod::calendar_year(2024).unwrap();
    let metrics = calculate_account_metrics(&h, &period, &XirrOptions::default());

    assert_eq!(metrics.market_return, Some(dec!(10)));
    assert_eq!(metrics.total_growth, GrowthResult::Value(dec!(10)));
    // Eleven months of holding annualize slightly above the simple 10%
    let mwr = metrics.money_weighted_return.unwrap();
    assert!(mwr > dec!(10) && mwr < dec!(11.5), "got {}", mwr);
}

#[test]
fn test_market_return_adjusts_for_contributions() {
    let h = history(
        account("a", "c"),
        &[
            (2024, 1, dec!(1000), dec!(0)),
            (2024, 6, dec!(1600), dec!(500)),
            (2024, 12, dec!(1650), dec!(0)),
        ],
    );
    let period = ReportingPeriod::calendar_year(2024).unwrap();
    let metrics = calculate_account_metrics(&h, &period, &XirrOptions::default());

    // Invested 1500, worth 1650
    assert_eq!(metrics.market_return, Some(dec!(10)));
    assert_eq!(metrics.total_growth, GrowthResult::Value(dec!(65)));
    assert!(metrics.money_weighted_return.unwrap() > dec!(0));
}

#[test]
fn test_first_snapshot_contribution_is_not_double_counted() {
    // The first snapshot's own contribution is already inside its balance
    let snapshots = history(
        account("a", "c"),
        &[(2024, 1, dec!(1000), dec!(400)), (2024, 2, dec!(1050), dec!(0))],
    );
    assert_eq!(market_return(snapshots.snapshots()), Some(dec!(5)));
}

#[test]
fn test_single_funded_snapshot_has_zero_money_weighted_return() {
    let h = history(account("a", "c"), &[(2024, 3, dec!(1000), dec!(1000))]);
    let metrics =
        calculate_account_metrics(&h, &ReportingPeriod::all_time(), &XirrOptions::default());

    assert_eq!(metrics.money_weighted_return, Some(Decimal::ZERO));
    assert_eq!(metrics.market_return, Some(Decimal::ZERO));
    assert_eq!(metrics.total_growth, GrowthResult::Value(Decimal::ZERO));
}

#[test]
fn test_growth_from_zero_is_new_account() {
    let h = history(
        account("a", "c"),
        &[(2024, 1, dec!(0), dec!(0)), (2024, 2, dec!(500), dec!(500))],
    );
    let metrics =
        calculate_account_metrics(&h, &ReportingPeriod::all_time(), &XirrOptions::default());

    assert_eq!(metrics.total_growth, GrowthResult::NewAccount);
    assert_eq!(metrics.current_value, dec!(500));
    assert_eq!(metrics.display().total_growth, "New");
}

#[test]
fn test_zero_invested_has_no_market_return() {
    let h = history(account("a", "c"), &[(2024, 1, dec!(0), dec!(0))]);
    let metrics =
        calculate_account_metrics(&h, &ReportingPeriod::all_time(), &XirrOptions::default());

    assert_eq!(metrics.market_return, None);
    assert_eq!(metrics.money_weighted_return, None);
    assert_eq!(metrics.total_growth, GrowthResult::NewAccount);
}

#[test]
fn test_empty_period_carries_last_balance_forward() {
    let acc = Account {
        initial_amount: dec!(750),
        ..account("a", "c")
    };
    let h = history(acc, &[(2022, 5, dec!(900), dec!(0))]);
    let period = ReportingPeriod::calendar_year(2024).unwrap();
    let metrics = calculate_account_metrics(&h, &period, &XirrOptions::default());

    assert_eq!(metrics.current_value, dec!(900));
    assert_eq!(metrics.market_return, None);
    assert_eq!(metrics.money_weighted_return, None);
    assert_eq!(metrics.total_growth, GrowthResult::NoData);

    let display = metrics.display();
    assert_eq!(display.market_return, "--");
    assert_eq!(display.money_weighted_return, "--");
    assert_eq!(display.total_growth, "--");
}

#[test]
fn test_display_rounds_to_one_decimal() {
    let h = history(
        account("a", "c"),
        &[(2024, 1, dec!(3000), dec!(0)), (2024, 12, dec!(3100), dec!(0))],
    );
    let period = ReportingPeriod::calendar_year(2024).unwrap();
    let metrics = calculate_account_metrics(&h, &period, &XirrOptions::default());

    // 100 / 3000 = 3.333...%
    assert_eq!(metrics.display().market_return, "3.3%");
    assert_eq!(metrics.display().total_growth, "3.3%");
    assert!(metrics.market_return.unwrap() > dec!(3.33));
}

#[test]
fn test_negative_returns_render_with_sign() {
    assert_eq!(format_percent(Some(dec!(-4.26)), 1), "-4.3%");
    assert_eq!(format_percent(Some(dec!(12)), 1), "12.0%");
    assert_eq!(format_percent(None, 1), "--");
}

#[test]
fn test_metrics_are_idempotent() {
    let h = history(
        account("a", "c"),
        &[
            (2024, 1, dec!(1000), dec!(0)),
            (2024, 5, dec!(1400), dec!(300)),
            (2024, 9, dec!(1250), dec!(-200)),
        ],
    );
    let period = ReportingPeriod::calendar_year(2024).unwrap();
    let options = XirrOptions::default();
    assert_eq!(
        calculate_account_metrics(&h, &period, &options),
        calculate_account_metrics(&h, &period, &options)
    );
}

#[test]
fn test_current_value_uses_initial_amount_only_without_snapshots() {
    let acc = Account {
        initial_amount: dec!(750),
        ..account("a", "c")
    };
    let empty = history(acc.clone(), &[]);
    assert_eq!(current_value(&empty, &ReportingPeriod::all_time()), dec!(750));

    // Nothing recorded yet by the end of 2021
    let later = history(acc, &[(2022, 5, dec!(900), dec!(0))]);
    let before = ReportingPeriod::calendar_year(2021).unwrap();
    assert_eq!(current_value(&later, &before), dec!(750));
    assert_eq!(current_value(&later, &ReportingPeriod::all_time()), dec!(900));
}
