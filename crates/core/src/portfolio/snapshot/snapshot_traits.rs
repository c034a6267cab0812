//! Snapshot repository trait.

use super::snapshot_model::MonthlySnapshot;
use crate::errors::Result;

/// Read access to recorded monthly snapshots.
///
/// Snapshots are written by the reconciliation workflow of the host
/// application; the analytics engine only consumes them.
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Returns every snapshot recorded for an account, in any order.
    fn get_snapshots_by_account(&self, account_id: &str) -> Result<Vec<MonthlySnapshot>>;

    /// Returns every snapshot across all accounts, in any order.
    fn list(&self) -> Result<Vec<MonthlySnapshot>>;
}
