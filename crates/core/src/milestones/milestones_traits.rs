use crate::errors::Result;
use crate::milestones::milestones_model::{Milestone, MilestoneUpdate, NewMilestone};
use async_trait::async_trait;

/// Trait for milestone repository operations
#[async_trait]
pub trait MilestoneRepositoryTrait: Send + Sync {
    fn load_milestones(&self, user_id: &str) -> Result<Vec<Milestone>>;
    async fn insert_milestone(
        &self,
        user_id: &str,
        new_milestone: NewMilestone,
    ) -> Result<Milestone>;
    async fn update_milestone(
        &self,
        user_id: &str,
        milestone_update: MilestoneUpdate,
    ) -> Result<Milestone>;
    async fn delete_milestone(&self, user_id: &str, milestone_id: &str) -> Result<usize>;
}

/// Trait for milestone service operations
#[async_trait]
pub trait MilestoneServiceTrait: Send + Sync {
    async fn get_milestones(&self, user_id: &str) -> Result<Vec<Milestone>>;
    async fn create_milestone(
        &self,
        user_id: &str,
        new_milestone: NewMilestone,
    ) -> Result<Milestone>;
    async fn update_milestone(
        &self,
        user_id: &str,
        milestone_update: MilestoneUpdate,
    ) -> Result<Milestone>;
    async fn delete_milestone(&self, user_id: &str, milestone_id: &str) -> Result<usize>;
}
