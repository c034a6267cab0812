//! Transactions module - contribution, withdrawal and transfer records and
//! their attribution to snapshot net contributions.

mod attribution;
mod transactions_model;
mod transactions_traits;

pub use attribution::{attribute_contributions, transaction_effect, transactions_for_year};
pub use transactions_model::{ContributionAttribution, Transaction, TransactionType};
pub use transactions_traits::TransactionRepositoryTrait;
