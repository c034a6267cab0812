//! Account repository trait.
//!
//! The analytics engine only reads account metadata; creating and editing
//! accounts belongs to the host application.

use super::accounts_model::{Account, Category};
use crate::errors::Result;

/// Trait defining the contract for account and category lookups.
pub trait AccountRepositoryTrait: Send + Sync {
    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts.
    fn list(&self) -> Result<Vec<Account>>;

    /// Lists all categories.
    fn list_categories(&self) -> Result<Vec<Category>>;
}
