use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::goals_model::Goal;
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goal(&self, year: i32) -> Result<Option<Goal>> {
        self.goal_repo.load_goal(year)
    }

    async fn set_goal(&self, goal: Goal) -> Result<Goal> {
        goal.validate()?;

        let merged = match self.goal_repo.load_goal(goal.year)? {
            Some(mut existing) => {
                debug!("Merging goal update into existing goal for {}", goal.year);
                existing.merge(goal);
                existing
            }
            None => goal,
        };

        self.goal_repo.save_goal(merged).await
    }
}
