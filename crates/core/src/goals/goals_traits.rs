use crate::errors::Result;
use crate::goals::goals_model::Goal;
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Loads the goal stored for a year, if any.
    fn load_goal(&self, year: i32) -> Result<Option<Goal>>;

    /// Stores the goal for `goal.year`, replacing whatever was stored.
    async fn save_goal(&self, goal: Goal) -> Result<Goal>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goal(&self, year: i32) -> Result<Option<Goal>>;

    /// Upserts a goal: provided targets replace stored ones and category
    /// goals are upserted by category id.
    async fn set_goal(&self, goal: Goal) -> Result<Goal>;
}
