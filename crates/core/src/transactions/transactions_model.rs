//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// New money into `to_account_id`
    Contribution,
    /// Money taken out of `from_account_id`
    Withdrawal,
    /// Money moved from `from_account_id` to `to_account_id`
    Transfer,
}

/// A recorded cash movement.
///
/// Transactions only explain snapshot net contributions; balances always
/// come from snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    /// Always positive; direction comes from the type and account ids
    pub amount: Decimal,
    pub from_account_id: Option<String>,
    pub to_account_id: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Transaction {} amount must be positive",
                self.id
            ))));
        }

        let (needs_from, needs_to) = match self.transaction_type {
            TransactionType::Contribution => (false, true),
            TransactionType::Withdrawal => (true, false),
            TransactionType::Transfer => (true, true),
        };
        if needs_from && self.from_account_id.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "fromAccountId".to_string(),
            )));
        }
        if needs_to && self.to_account_id.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "toAccountId".to_string(),
            )));
        }
        if self.transaction_type == TransactionType::Transfer
            && self.from_account_id == self.to_account_id
        {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Transaction {} transfers to its own source account",
                self.id
            ))));
        }
        Ok(())
    }
}

/// How much of a month's recorded net contribution is explained by transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionAttribution {
    pub account_id: String,
    pub month: NaiveDate,
    /// Net contribution recorded on the snapshot (zero if no snapshot)
    pub recorded: Decimal,
    /// Signed sum of the transactions touching the account that month
    pub attributed: Decimal,
    /// `recorded - attributed`
    pub unexplained: Decimal,
    pub transaction_ids: Vec<String>,
}
