use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::milestones::milestones_model::{Milestone, MilestoneUpdate, NewMilestone};
use crate::milestones::milestones_traits::{MilestoneRepositoryTrait, MilestoneServiceTrait};

pub struct MilestoneService {
    milestone_repo: Arc<dyn MilestoneRepositoryTrait>,
}

impl MilestoneService {
    pub fn new(milestone_repo: Arc<dyn MilestoneRepositoryTrait>) -> Self {
        MilestoneService { milestone_repo }
    }
}

#[async_trait]
impl MilestoneServiceTrait for MilestoneService {
    async fn get_milestones(&self, user_id: &str) -> Result<Vec<Milestone>> {
        self.milestone_repo.load_milestones(user_id)
    }

    async fn create_milestone(
        &self,
        user_id: &str,
        new_milestone: NewMilestone,
    ) -> Result<Milestone> {
        new_milestone.validate()?;
        self.milestone_repo
            .insert_milestone(user_id, new_milestone)
            .await
    }

    async fn update_milestone(
        &self,
        user_id: &str,
        milestone_update: MilestoneUpdate,
    ) -> Result<Milestone> {
        milestone_update.validate()?;
        self.milestone_repo
            .update_milestone(user_id, milestone_update)
            .await
    }

    async fn delete_milestone(&self, user_id: &str, milestone_id: &str) -> Result<usize> {
        self.milestone_repo
            .delete_milestone(user_id, milestone_id)
            .await
    }
}
