use crate::errors::Result;
use crate::goals::GoalProgress;
use crate::portfolio::allocation::{CategoryAllocation, CategoryPerformance};
use crate::portfolio::net_worth::{MonthlyPerformance, NetWorthPoint};
use crate::portfolio::performance::{AccountMetrics, AccountMetricsDisplay};
use crate::portfolio::progress::AccountMonthlyProgress;
use crate::transactions::{ContributionAttribution, Transaction};

/// Read-only analytics over the whole portfolio.
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Per-account metrics for a calendar year, or all time when `year` is `None`.
    fn get_account_metrics(&self, year: Option<i32>) -> Result<Vec<AccountMetrics>>;

    /// Same as [`Self::get_account_metrics`], rendered with the configured precision.
    fn get_account_metrics_display(
        &self,
        year: Option<i32>,
    ) -> Result<Vec<AccountMetricsDisplay>>;

    fn get_net_worth_history(&self) -> Result<Vec<NetWorthPoint>>;

    fn get_monthly_performance(&self) -> Result<Vec<MonthlyPerformance>>;

    fn get_category_allocation(&self) -> Result<Vec<CategoryAllocation>>;

    fn get_category_performance(&self) -> Result<Vec<CategoryPerformance>>;

    /// Progress toward the goal stored for `year`, or `None` when no goal exists.
    fn get_goal_progress(&self, year: i32) -> Result<Option<GoalProgress>>;

    fn get_contribution_attribution(
        &self,
        account_id: &str,
    ) -> Result<Vec<ContributionAttribution>>;

    /// Attribution rows and transactions restricted to one calendar year.
    fn get_contribution_attribution_for_year(
        &self,
        account_id: &str,
        year: i32,
    ) -> Result<Vec<ContributionAttribution>>;

    /// Every recorded transaction, optionally restricted to a calendar year.
    fn get_transactions(&self, year: Option<i32>) -> Result<Vec<Transaction>>;

    fn get_monthly_progress(&self, year: i32) -> Result<Vec<AccountMonthlyProgress>>;

    fn get_available_years(&self, current_year: i32) -> Result<Vec<i32>>;
}
