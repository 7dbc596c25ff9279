use summit_core::achievements::{Achievement, AchievementRepositoryTrait, NewAchievement};
use summit_core::Result;

use super::model::{AchievementDB, NewAchievementDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::achievements;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct AchievementRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AchievementRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AchievementRepository { pool, writer }
    }
}

#[async_trait]
impl AchievementRepositoryTrait for AchievementRepository {
    fn load_achievements(&self, user_id: &str) -> Result<Vec<Achievement>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = achievements::table
            .filter(achievements::user_id.eq(user_id))
            .order(achievements::created_at.asc())
            .load::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Achievement::from).collect())
    }

    fn get_achievement(&self, user_id: &str, achievement_id: &str) -> Result<Achievement> {
        let mut conn = get_connection(&self.pool)?;
        let row = achievements::table
            .filter(achievements::user_id.eq(user_id))
            .filter(achievements::id.eq(achievement_id))
            .first::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Achievement::from(row))
    }

    async fn insert_achievement(
        &self,
        user_id: &str,
        new_achievement: NewAchievement,
    ) -> Result<Achievement> {
        let row = NewAchievementDB::from_domain(user_id, new_achievement, Utc::now().naive_utc());
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Achievement> {
                let result_db = diesel::insert_into(achievements::table)
                    .values(&row)
                    .returning(AchievementDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Achievement::from(result_db))
            })
            .await
    }

    async fn set_earned(
        &self,
        user_id: &str,
        achievement_id: &str,
        earned_at: NaiveDateTime,
    ) -> Result<Achievement> {
        let owner = user_id.to_string();
        let achievement_id = achievement_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Achievement> {
                let result_db = diesel::update(
                    achievements::table
                        .filter(achievements::id.eq(&achievement_id))
                        .filter(achievements::user_id.eq(&owner)),
                )
                .set((
                    achievements::earned.eq(true),
                    achievements::earned_at.eq(Some(earned_at)),
                    achievements::updated_at.eq(earned_at),
                ))
                .returning(AchievementDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Achievement::from(result_db))
            })
            .await
    }

    async fn delete_achievement(&self, user_id: &str, achievement_id: &str) -> Result<usize> {
        let owner = user_id.to_string();
        let achievement_id = achievement_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    achievements::table
                        .filter(achievements::id.eq(&achievement_id))
                        .filter(achievements::user_id.eq(&owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
