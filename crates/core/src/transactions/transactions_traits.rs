use super::transactions_model::Transaction;
use crate::errors::Result;

/// Read access to recorded transactions.
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Transactions whose source or destination is the account.
    fn get_by_account(&self, account_id: &str) -> Result<Vec<Transaction>>;

    /// Every transaction, optionally restricted to a calendar year.
    fn list(&self, year: Option<i32>) -> Result<Vec<Transaction>>;
}
