//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// An investment account tracked through monthly snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub category_id: String,
    /// Balance reported when the account has no snapshots in a period
    pub initial_amount: Decimal,
}

impl Account {
    /// Validates account metadata before it is used as an aggregation key.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if self.category_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Account {} has no category",
                self.id
            ))));
        }
        Ok(())
    }
}

/// Grouping label for accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}
