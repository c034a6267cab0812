//! Goals module - yearly goal records, their persistence seam and progress tracking.

mod goals_model;
mod goals_service;
mod goals_tracker;
mod goals_traits;

pub use goals_model::{CategoryGoal, CategoryGoalProgress, Goal, GoalProgress};
pub use goals_service::GoalService;
pub use goals_tracker::{progress_percent, track_goal};
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
