use crate::achievements::achievements_model::{Achievement, NewAchievement};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Trait for achievement repository operations
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    fn load_achievements(&self, user_id: &str) -> Result<Vec<Achievement>>;
    fn get_achievement(&self, user_id: &str, achievement_id: &str) -> Result<Achievement>;
    async fn insert_achievement(
        &self,
        user_id: &str,
        new_achievement: NewAchievement,
    ) -> Result<Achievement>;
    async fn set_earned(
        &self,
        user_id: &str,
        achievement_id: &str,
        earned_at: NaiveDateTime,
    ) -> Result<Achievement>;
    async fn delete_achievement(&self, user_id: &str, achievement_id: &str) -> Result<usize>;
}

/// Trait for achievement service operations
#[async_trait]
pub trait AchievementServiceTrait: Send + Sync {
    async fn get_achievements(&self, user_id: &str) -> Result<Vec<Achievement>>;
    async fn create_achievement(
        &self,
        user_id: &str,
        new_achievement: NewAchievement,
    ) -> Result<Achievement>;
    async fn mark_earned(&self, user_id: &str, achievement_id: &str) -> Result<Achievement>;
    async fn delete_achievement(&self, user_id: &str, achievement_id: &str) -> Result<usize>;
}
