use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::achievements::achievements_model::{Achievement, NewAchievement};
use crate::achievements::achievements_traits::{
    AchievementRepositoryTrait, AchievementServiceTrait,
};
use crate::errors::Result;

pub struct AchievementService {
    achievement_repo: Arc<dyn AchievementRepositoryTrait>,
}

impl AchievementService {
    pub fn new(achievement_repo: Arc<dyn AchievementRepositoryTrait>) -> Self {
        AchievementService { achievement_repo }
    }
}

#[async_trait]
impl AchievementServiceTrait for AchievementService {
    async fn get_achievements(&self, user_id: &str) -> Result<Vec<Achievement>> {
        self.achievement_repo.load_achievements(user_id)
    }

    async fn create_achievement(
        &self,
        user_id: &str,
        new_achievement: NewAchievement,
    ) -> Result<Achievement> {
        new_achievement.validate()?;
        self.achievement_repo
            .insert_achievement(user_id, new_achievement)
            .await
    }

    async fn mark_earned(&self, user_id: &str, achievement_id: &str) -> Result<Achievement> {
        let achievement = self
            .achievement_repo
            .get_achievement(user_id, achievement_id)?;
        // Earning is idempotent; the original earn date is kept.
        if achievement.earned {
            return Ok(achievement);
        }
        self.achievement_repo
            .set_earned(user_id, achievement_id, Utc::now().naive_utc())
            .await
    }

    async fn delete_achievement(&self, user_id: &str, achievement_id: &str) -> Result<usize> {
        self.achievement_repo
            .delete_achievement(user_id, achievement_id)
            .await
    }
}
