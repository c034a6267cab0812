//! Analytics service implementation.

use chrono::Datelike;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

use super::analytics_traits::AnalyticsServiceTrait;
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::errors::Result;
use crate::goals::{track_goal, GoalProgress, GoalServiceTrait};
use crate::portfolio::allocation::{
    category_allocation, category_performance, CategoryAllocation, CategoryPerformance,
};
use crate::portfolio::net_worth::{
    monthly_performance, net_worth_series, MonthlyPerformance, NetWorthPoint,
};
use crate::portfolio::performance::{
    calculate_account_metrics, AccountMetrics, AccountMetricsDisplay,
};
use crate::portfolio::progress::{available_years, monthly_progress, AccountMonthlyProgress};
use crate::portfolio::snapshot::{
    AccountHistory, MonthlySnapshot, ReportingPeriod, SnapshotRepositoryTrait,
};
use crate::settings::SettingsServiceTrait;
use crate::transactions::{
    attribute_contributions, transactions_for_year, ContributionAttribution, Transaction,
    TransactionRepositoryTrait,
};

/// Service computing portfolio analytics from repository data.
pub struct AnalyticsService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl AnalyticsService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        Self {
            account_repository,
            snapshot_repository,
            transaction_repository,
            goal_service,
            settings_service,
        }
    }

    /// Builds one history per valid account, in repository order.
    ///
    /// Accounts that fail validation, or whose snapshots do not form a valid
    /// series, are skipped so the rest of the portfolio can still be computed.
    /// Also returns how many account ids had snapshots but no account.
    pub(crate) fn build_histories(
        accounts: Vec<Account>,
        snapshots: Vec<MonthlySnapshot>,
    ) -> (Vec<AccountHistory>, usize) {
        let mut by_account: HashMap<String, Vec<MonthlySnapshot>> = HashMap::new();
        for snapshot in snapshots {
            by_account
                .entry(snapshot.account_id.clone())
                .or_default()
                .push(snapshot);
        }

        let mut histories = Vec::with_capacity(accounts.len());
        for account in accounts {
            let snapshots = by_account.remove(&account.id).unwrap_or_default();
            if let Err(e) = account.validate() {
                warn!("Skipping invalid account {}: {}", account.id, e);
                continue;
            }
            let account_id = account.id.clone();
            match AccountHistory::new(account, snapshots) {
                Ok(history) => histories.push(history),
                Err(e) => warn!("Skipping account {} with invalid snapshots: {}", account_id, e),
            }
        }

        (histories, by_account.len())
    }

    fn load_histories(&self) -> Result<Vec<AccountHistory>> {
        let accounts = self.account_repository.list()?;
        let snapshots = self.snapshot_repository.list()?;

        let (histories, unknown) = Self::build_histories(accounts, snapshots);
        if unknown > 0 {
            debug!("Ignoring snapshots for {} unknown account(s)", unknown);
        }
        Ok(histories)
    }

    fn period_for(year: Option<i32>) -> Result<ReportingPeriod> {
        match year {
            Some(year) => ReportingPeriod::calendar_year(year),
            None => Ok(ReportingPeriod::all_time()),
        }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_account_metrics(&self, year: Option<i32>) -> Result<Vec<AccountMetrics>> {
        let period = Self::period_for(year)?;
        let options = self.settings_service.get_analytics_settings()?.xirr_options();
        let histories = self.load_histories()?;

        Ok(histories
            .iter()
            .map(|history| calculate_account_metrics(history, &period, &options))
            .collect())
    }

    fn get_account_metrics_display(
        &self,
        year: Option<i32>,
    ) -> Result<Vec<AccountMetricsDisplay>> {
        let precision = self.settings_service.get_analytics_settings()?.display_precision;
        Ok(self
            .get_account_metrics(year)?
            .iter()
            .map(|metrics| metrics.display_with_precision(precision))
            .collect())
    }

    fn get_net_worth_history(&self) -> Result<Vec<NetWorthPoint>> {
        Ok(net_worth_series(&self.load_histories()?))
    }

    fn get_monthly_performance(&self) -> Result<Vec<MonthlyPerformance>> {
        Ok(monthly_performance(&self.load_histories()?))
    }

    fn get_category_allocation(&self) -> Result<Vec<CategoryAllocation>> {
        let categories = self.account_repository.list_categories()?;
        Ok(category_allocation(&self.load_histories()?, &categories))
    }

    fn get_category_performance(&self) -> Result<Vec<CategoryPerformance>> {
        let categories = self.account_repository.list_categories()?;
        Ok(category_performance(&self.load_histories()?, &categories))
    }

    fn get_goal_progress(&self, year: i32) -> Result<Option<GoalProgress>> {
        let goal = match self.goal_service.get_goal(year)? {
            Some(goal) => goal,
            None => {
                debug!("No goal stored for {}", year);
                return Ok(None);
            }
        };
        let histories = self.load_histories()?;
        track_goal(&goal, &histories, year).map(Some)
    }

    fn get_contribution_attribution(
        &self,
        account_id: &str,
    ) -> Result<Vec<ContributionAttribution>> {
        let account = self.account_repository.get_by_id(account_id)?;
        let snapshots = self.snapshot_repository.get_snapshots_by_account(account_id)?;
        let history = AccountHistory::new(account, snapshots)?;
        let transactions = self.transaction_repository.get_by_account(account_id)?;

        Ok(attribute_contributions(&history, &transactions))
    }

    fn get_contribution_attribution_for_year(
        &self,
        account_id: &str,
        year: i32,
    ) -> Result<Vec<ContributionAttribution>> {
        let account = self.account_repository.get_by_id(account_id)?;
        let snapshots = self.snapshot_repository.get_snapshots_by_account(account_id)?;
        let history = AccountHistory::new(account, snapshots)?;
        let transactions = self.transaction_repository.get_by_account(account_id)?;
        let in_year: Vec<Transaction> = transactions_for_year(&transactions, year)
            .into_iter()
            .cloned()
            .collect();

        Ok(attribute_contributions(&history, &in_year)
            .into_iter()
            .filter(|row| row.month.year() == year)
            .collect())
    }

    fn get_transactions(&self, year: Option<i32>) -> Result<Vec<Transaction>> {
        let transactions = self.transaction_repository.list(year)?;
        match year {
            Some(year) => Ok(transactions_for_year(&transactions, year)
                .into_iter()
                .cloned()
                .collect()),
            None => Ok(transactions),
        }
    }

    fn get_monthly_progress(&self, year: i32) -> Result<Vec<AccountMonthlyProgress>> {
        Ok(monthly_progress(&self.load_histories()?, year))
    }

    fn get_available_years(&self, current_year: i32) -> Result<Vec<i32>> {
        Ok(available_years(&self.load_histories()?, current_year))
    }
}
