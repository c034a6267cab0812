//! Attribution of snapshot net contributions to recorded transactions.

use chrono::{Datelike, NaiveDate};
use log::warn;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::transactions_model::{ContributionAttribution, Transaction, TransactionType};
use crate::portfolio::snapshot::AccountHistory;
use crate::utils::time_utils::month_start;

/// Signed effect of a transaction on one account's net contribution.
pub fn transaction_effect(transaction: &Transaction, account_id: &str) -> Decimal {
    let is_source = transaction.from_account_id.as_deref() == Some(account_id);
    let is_destination = transaction.to_account_id.as_deref() == Some(account_id);

    match transaction.transaction_type {
        TransactionType::Contribution if is_destination => transaction.amount,
        TransactionType::Withdrawal if is_source => -transaction.amount,
        TransactionType::Transfer if is_source && !is_destination => -transaction.amount,
        TransactionType::Transfer if is_destination && !is_source => transaction.amount,
        _ => Decimal::ZERO,
    }
}

/// Transactions dated inside a calendar year.
pub fn transactions_for_year(transactions: &[Transaction], year: i32) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.year() == year)
        .collect()
}

/// Compares each month's recorded net contribution with the transactions
/// that touched the account that month.
///
/// A row is produced for every month with a non-zero recorded contribution
/// or at least one relevant transaction, ascending by month. Invalid
/// transactions are skipped with a warning.
pub fn attribute_contributions(
    history: &AccountHistory,
    transactions: &[Transaction],
) -> Vec<ContributionAttribution> {
    let account_id = history.account().id.as_str();

    let mut by_month: BTreeMap<NaiveDate, (Decimal, Vec<String>)> = BTreeMap::new();
    for transaction in transactions {
        if let Err(e) = transaction.validate() {
            warn!("Skipping transaction {} during attribution: {}", transaction.id, e);
            continue;
        }
        let effect = transaction_effect(transaction, account_id);
        if effect.is_zero() {
            continue;
        }
        let entry = by_month
            .entry(month_start(transaction.date))
            .or_insert_with(|| (Decimal::ZERO, Vec::new()));
        entry.0 += effect;
        entry.1.push(transaction.id.clone());
    }

    let recorded: BTreeMap<NaiveDate, Decimal> = history
        .snapshots()
        .iter()
        .filter(|s| !s.net_contribution.is_zero())
        .map(|s| (s.month, s.net_contribution))
        .collect();

    let mut months: Vec<NaiveDate> = recorded.keys().chain(by_month.keys()).copied().collect();
    months.sort();
    months.dedup();

    months
        .into_iter()
        .map(|month| {
            let recorded = recorded.get(&month).copied().unwrap_or(Decimal::ZERO);
            let (attributed, transaction_ids) = by_month
                .remove(&month)
                .unwrap_or_else(|| (Decimal::ZERO, Vec::new()));
            ContributionAttribution {
                account_id: account_id.to_string(),
                month,
                recorded,
                attributed,
                unexplained: recorded - attributed,
                transaction_ids,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::test_fixtures::{account, history, month};
    use rust_decimal_macros::dec;

    fn tx(
        id: &str,
        transaction_type: TransactionType,
        amount: Decimal,
        from: Option<&str>,
        to: Option<&str>,
        date: NaiveDate,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            transaction_type,
            amount,
            from_account_id: from.map(str::to_string),
            to_account_id: to.map(str::to_string),
            date,
            note: String::new(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_transaction_effects() {
        let jan = day(2024, 1, 9);
        let contribution = tx("1", TransactionType::Contribution, dec!(100), None, Some("a"), jan);
        let withdrawal = tx("2", TransactionType::Withdrawal, dec!(40), Some("a"), None, jan);
        let transfer = tx("3", TransactionType::Transfer, dec!(25), Some("a"), Some("b"), jan);

        assert_eq!(transaction_effect(&contribution, "a"), dec!(100));
        assert_eq!(transaction_effect(&contribution, "b"), dec!(0));
        assert_eq!(transaction_effect(&withdrawal, "a"), dec!(-40));
        assert_eq!(transaction_effect(&transfer, "a"), dec!(-25));
        assert_eq!(transaction_effect(&transfer, "b"), dec!(25));
    }

    #[test]
    fn test_attribution_matches_months() {
        let h = history(
            account("a", "c"),
            &[
                (2024, 1, dec!(1000), dec!(60)),
                (2024, 2, dec!(1010), dec!(0)),
                (2024, 3, dec!(900), dec!(-100)),
            ],
        );
        let transactions = vec![
            tx("t1", TransactionType::Contribution, dec!(100), None, Some("a"), day(2024, 1, 3)),
            tx("t2", TransactionType::Withdrawal, dec!(40), Some("a"), None, day(2024, 1, 20)),
            tx("t3", TransactionType::Transfer, dec!(75), Some("a"), Some("b"), day(2024, 3, 2)),
            tx("t4", TransactionType::Contribution, dec!(500), None, Some("b"), day(2024, 2, 2)),
            tx("t5", TransactionType::Contribution, dec!(30), None, Some("a"), day(2024, 4, 2)),
        ];

        let rows = attribute_contributions(&h, &transactions);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].month, month(2024, 1));
        assert_eq!(rows[0].attributed, dec!(60));
        assert_eq!(rows[0].unexplained, dec!(0));
        assert_eq!(rows[0].transaction_ids, vec!["t1", "t2"]);

        assert_eq!(rows[1].month, month(2024, 3));
        assert_eq!(rows[1].recorded, dec!(-100));
        assert_eq!(rows[1].attributed, dec!(-75));
        assert_eq!(rows[1].unexplained, dec!(-25));

        // Transaction with no matching snapshot contribution
        assert_eq!(rows[2].month, month(2024, 4));
        assert_eq!(rows[2].recorded, dec!(0));
        assert_eq!(rows[2].unexplained, dec!(-30));
    }

    #[test]
    fn test_invalid_transactions_are_skipped() {
        let h = history(account("a", "c"), &[(2024, 1, dec!(100), dec!(100))]);
        let transactions = vec![
            tx("bad", TransactionType::Contribution, dec!(-5), None, Some("a"), day(2024, 1, 3)),
            tx("no-dest", TransactionType::Contribution, dec!(5), None, None, day(2024, 1, 3)),
        ];
        let rows = attribute_contributions(&h, &transactions);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].attributed, dec!(0));
        assert_eq!(rows[0].unexplained, dec!(100));
    }

    #[test]
    fn test_transactions_for_year() {
        let transactions = vec![
            tx("a", TransactionType::Contribution, dec!(1), None, Some("x"), day(2023, 12, 31)),
            tx("b", TransactionType::Contribution, dec!(1), None, Some("x"), day(2024, 1, 1)),
        ];
        let ids: Vec<_> = transactions_for_year(&transactions, 2024)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b"]);
    }
}
