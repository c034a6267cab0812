//! Shared builders for analytics unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::accounts::{Account, Category};
use crate::portfolio::snapshot::{AccountHistory, MonthlySnapshot};

pub fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

pub fn account(id: &str, category_id: &str) -> Account {
    Account {
        id: id.to_string(),
        name: format!("Account {}", id),
        category_id: category_id.to_string(),
        initial_amount: Decimal::ZERO,
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn snapshot(
    account_id: &str,
    year: i32,
    m: u32,
    amount_value: Decimal,
    net_contribution: Decimal,
) -> MonthlySnapshot {
    MonthlySnapshot::new(account_id, month(year, m), amount_value, net_contribution)
}

/// Builds a history from `(year, month, value, contribution)` rows.
pub fn history(account: Account, rows: &[(i32, u32, Decimal, Decimal)]) -> AccountHistory {
    let snapshots = rows
        .iter()
        .map(|(y, m, value, contribution)| snapshot(&account.id, *y, *m, *value, *contribution))
        .collect();
    AccountHistory::new(account, snapshots).unwrap()
}
