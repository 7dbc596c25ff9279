use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::hierarchy::GoalNode;
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn insert_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, user_id: &str, goal_update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn get_goal_hierarchy(&self, user_id: &str) -> Result<Vec<GoalNode>>;
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, user_id: &str, goal_update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}
