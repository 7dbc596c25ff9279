use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::goals::hierarchy::{build_hierarchy, GoalNode};

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }

    /// The parent, if set, must reference an existing goal owned by the
    /// same user.
    fn check_parent(&self, user_id: &str, parent_goal_id: &Option<String>) -> Result<()> {
        if let Some(parent_id) = parent_goal_id {
            self.goal_repo.get_goal(user_id, parent_id).map_err(|_| {
                ValidationError::InvalidInput(format!(
                    "parent goal '{}' does not exist",
                    parent_id
                ))
            })?;
        }
        Ok(())
    }

    /// Walk the parent chain upward from the proposed parent; reattaching a
    /// goal below one of its own descendants (or itself) would form a cycle.
    fn check_no_cycle(&self, user_id: &str, goal_id: &str, parent_goal_id: &str) -> Result<()> {
        let goals = self.goal_repo.load_goals(user_id)?;
        let parent_of: HashMap<&str, Option<&str>> = goals
            .iter()
            .map(|g| (g.id.as_str(), g.parent_goal_id.as_deref()))
            .collect();

        let mut cursor = Some(parent_goal_id);
        let mut hops = 0;
        while let Some(current) = cursor {
            if current == goal_id {
                return Err(ValidationError::InvalidInput(format!(
                    "goal '{}' cannot be its own ancestor",
                    goal_id
                ))
                .into());
            }
            // Bail out if the stored chain itself is already cyclic.
            hops += 1;
            if hops > goals.len() {
                break;
            }
            cursor = parent_of.get(current).copied().flatten();
        }
        Ok(())
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals(user_id)
    }

    async fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get_goal(user_id, goal_id)
    }

    async fn get_goal_hierarchy(&self, user_id: &str) -> Result<Vec<GoalNode>> {
        let goals = self.goal_repo.load_goals(user_id)?;
        Ok(build_hierarchy(&goals))
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        self.check_parent(user_id, &new_goal.parent_goal_id)?;
        self.goal_repo.insert_goal(user_id, new_goal).await
    }

    async fn update_goal(&self, user_id: &str, goal_update: GoalUpdate) -> Result<Goal> {
        goal_update.validate()?;
        self.check_parent(user_id, &goal_update.parent_goal_id)?;
        if let Some(parent_id) = goal_update.parent_goal_id.as_deref() {
            self.check_no_cycle(user_id, &goal_update.id, parent_id)?;
        }
        self.goal_repo.update_goal(user_id, goal_update).await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        // Children of a deleted parent are left in place; the hierarchy
        // builder surfaces them as roots on the next load.
        self.goal_repo.delete_goal(user_id, goal_id).await
    }
}
