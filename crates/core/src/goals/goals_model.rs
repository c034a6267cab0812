//! Goals domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{Error, Result, ValidationError};

/// Target value for one category in a goal year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGoal {
    pub category_id: String,
    pub target_amount: Decimal,
}

/// All goals set for a calendar year.
///
/// Upsert keys are `year` for the global targets and `(year, category_id)`
/// for category targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub year: i32,
    /// Portfolio value to reach
    pub target_amount: Option<Decimal>,
    /// New capital to contribute during the year
    pub contribution_goal: Option<Decimal>,
    #[serde(default)]
    pub category_goals: Vec<CategoryGoal>,
}

impl Goal {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            target_amount: None,
            contribution_goal: None,
            category_goals: Vec::new(),
        }
    }

    pub fn category_target(&self, category_id: &str) -> Option<Decimal> {
        self.category_goals
            .iter()
            .find(|g| g.category_id == category_id)
            .map(|g| g.target_amount)
    }

    /// Inserts or replaces the target for a category.
    pub fn upsert_category_goal(&mut self, category_id: &str, target_amount: Decimal) {
        match self
            .category_goals
            .iter_mut()
            .find(|g| g.category_id == category_id)
        {
            Some(existing) => existing.target_amount = target_amount,
            None => self.category_goals.push(CategoryGoal {
                category_id: category_id.to_string(),
                target_amount,
            }),
        }
    }

    /// Applies an update for the same year on top of this goal.
    pub fn merge(&mut self, update: Goal) {
        if update.target_amount.is_some() {
            self.target_amount = update.target_amount;
        }
        if update.contribution_goal.is_some() {
            self.contribution_goal = update.contribution_goal;
        }
        for category_goal in update.category_goals {
            self.upsert_category_goal(&category_goal.category_id, category_goal.target_amount);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.year <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Goal year {} is not valid",
                self.year
            ))));
        }

        let negative = |v: Option<Decimal>| v.map(|v| v < Decimal::ZERO).unwrap_or(false);
        if negative(self.target_amount) || negative(self.contribution_goal) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal targets cannot be negative".to_string(),
            )));
        }

        let mut seen = HashSet::new();
        for category_goal in &self.category_goals {
            if category_goal.target_amount < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Target for category {} cannot be negative",
                    category_goal.category_id
                ))));
            }
            if !seen.insert(category_goal.category_id.as_str()) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Category {} appears more than once",
                    category_goal.category_id
                ))));
            }
        }
        Ok(())
    }
}

/// Progress toward a single category target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGoalProgress {
    pub category_id: String,
    pub current_value: Decimal,
    pub target_amount: Decimal,
    /// Percent of target reached, unclamped
    pub progress: Decimal,
}

/// Progress toward every goal set for a year.
///
/// A metric is `None` (or absent from `categories`) when no usable target
/// exists for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub year: i32,
    pub total_value: Decimal,
    pub value_progress: Option<Decimal>,
    pub total_contributions: Decimal,
    pub contribution_progress: Option<Decimal>,
    pub categories: Vec<CategoryGoalProgress>,
}
