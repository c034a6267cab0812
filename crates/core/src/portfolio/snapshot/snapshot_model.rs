//! Portfolio snapshot domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::accounts::Account;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{month_start, year_bounds};

/// Recorded balance of one account for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySnapshot {
    pub account_id: String,
    /// Month of the snapshot (day normalized to the 1st)
    pub month: NaiveDate,
    /// Ending balance for the month
    pub amount_value: Decimal,
    /// Signed capital movement: positive added, negative removed
    pub net_contribution: Decimal,
}

impl MonthlySnapshot {
    pub fn new(
        account_id: impl Into<String>,
        month: NaiveDate,
        amount_value: Decimal,
        net_contribution: Decimal,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            month: month_start(month),
            amount_value,
            net_contribution,
        }
    }
}

/// Inclusive date range that restricts which snapshots a calculation sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Reporting period start {} is after end {}",
                start, end
            ))));
        }
        Ok(Self { start, end })
    }

    /// January 1st through December 31st of `year`.
    pub fn calendar_year(year: i32) -> Result<Self> {
        let (start, end) = year_bounds(year).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Year {} is out of range",
                year
            )))
        })?;
        Ok(Self { start, end })
    }

    /// A period covering every representable date.
    pub fn all_time() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// An account together with its chronologically ordered snapshot series.
///
/// Construction enforces the series invariants: every snapshot belongs to the
/// account, months are normalized to the 1st and unique, and the series is
/// sorted ascending by month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHistory {
    account: Account,
    snapshots: Vec<MonthlySnapshot>,
}

impl AccountHistory {
    pub fn new(account: Account, snapshots: Vec<MonthlySnapshot>) -> Result<Self> {
        let mut seen_months = HashSet::with_capacity(snapshots.len());
        let mut normalized = Vec::with_capacity(snapshots.len());

        for mut snapshot in snapshots {
            if snapshot.account_id != account.id {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Snapshot for account {} cannot be attached to account {}",
                    snapshot.account_id, account.id
                ))));
            }
            snapshot.month = month_start(snapshot.month);
            if !seen_months.insert(snapshot.month) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Account {} has more than one snapshot for {}",
                    account.id,
                    snapshot.month.format("%Y-%m")
                ))));
            }
            normalized.push(snapshot);
        }

        normalized.sort_by_key(|s| s.month);

        Ok(Self {
            account,
            snapshots: normalized,
        })
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// All snapshots, ascending by month.
    pub fn snapshots(&self) -> &[MonthlySnapshot] {
        &self.snapshots
    }

    /// The contiguous run of snapshots whose month falls inside `period`.
    pub fn snapshots_in(&self, period: &ReportingPeriod) -> &[MonthlySnapshot] {
        let from = self.snapshots.partition_point(|s| s.month < period.start);
        let to = self.snapshots.partition_point(|s| s.month <= period.end);
        if from >= to {
            return &[];
        }
        &self.snapshots[from..to]
    }

    /// Balance of the latest snapshot dated on or before `date`.
    pub fn value_as_of(&self, date: NaiveDate) -> Option<Decimal> {
        let upto = self.snapshots.partition_point(|s| s.month <= date);
        upto.checked_sub(1).map(|i| self.snapshots[i].amount_value)
    }

    /// Most recent snapshot across all time.
    pub fn latest(&self) -> Option<&MonthlySnapshot> {
        self.snapshots.last()
    }

    /// Latest recorded balance, or zero when nothing was recorded.
    pub fn latest_value(&self) -> Decimal {
        self.latest()
            .map(|s| s.amount_value)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of every recorded net contribution, all time.
    pub fn total_net_contribution(&self) -> Decimal {
        self.snapshots.iter().map(|s| s.net_contribution).sum()
    }
}
