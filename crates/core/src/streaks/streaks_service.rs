use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use crate::errors::Result;
use crate::streaks::streaks_model::Streak;
use crate::streaks::streaks_traits::{StreakRepositoryTrait, StreakServiceTrait};

pub struct StreakService {
    streak_repo: Arc<dyn StreakRepositoryTrait>,
}

impl StreakService {
    pub fn new(streak_repo: Arc<dyn StreakRepositoryTrait>) -> Self {
        StreakService { streak_repo }
    }

    /// Record a qualifying day with an explicit date.
    pub async fn record_activity_on(&self, user_id: &str, today: NaiveDate) -> Result<Streak> {
        let mut streak = self
            .streak_repo
            .get_streak(user_id)?
            .unwrap_or_else(|| Streak::empty(user_id));
        streak.record_day(today);
        self.streak_repo.save_streak(streak).await
    }
}

#[async_trait]
impl StreakServiceTrait for StreakService {
    async fn get_streak(&self, user_id: &str) -> Result<Streak> {
        Ok(self
            .streak_repo
            .get_streak(user_id)?
            .unwrap_or_else(|| Streak::empty(user_id)))
    }

    async fn record_activity(&self, user_id: &str) -> Result<Streak> {
        self.record_activity_on(user_id, Local::now().date_naive())
            .await
    }
}
