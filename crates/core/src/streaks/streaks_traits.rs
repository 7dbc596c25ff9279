use crate::errors::Result;
use crate::streaks::streaks_model::Streak;
use async_trait::async_trait;

/// Trait for streak persistence. The streak rides on the user's
/// preferences row, so the storage crate implements this alongside the
/// preferences repository.
#[async_trait]
pub trait StreakRepositoryTrait: Send + Sync {
    fn get_streak(&self, user_id: &str) -> Result<Option<Streak>>;
    async fn save_streak(&self, streak: Streak) -> Result<Streak>;
}

/// Trait for streak service operations
#[async_trait]
pub trait StreakServiceTrait: Send + Sync {
    async fn get_streak(&self, user_id: &str) -> Result<Streak>;
    async fn record_activity(&self, user_id: &str) -> Result<Streak>;
}
