//! Repository for the user preferences row.
//!
//! Implements both the preference and streak traits; the streak rides on
//! the same row, matching how the dashboard reads it.

use summit_core::preferences::{PreferenceRepositoryTrait, PreferencesUpdate, UserPreferences};
use summit_core::streaks::{Streak, StreakRepositoryTrait};
use summit_core::Result;

use super::model::{render_document, UserPreferencesDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_preferences;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct PreferenceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PreferenceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PreferenceRepository { pool, writer }
    }

    fn load_row(&self, user_id: &str) -> Result<Option<UserPreferencesDB>> {
        let mut conn = get_connection(&self.pool)?;
        let row = user_preferences::table
            .filter(user_preferences::user_id.eq(user_id))
            .first::<UserPreferencesDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row)
    }
}

fn load_row_on(conn: &mut SqliteConnection, user_id: &str) -> Result<Option<UserPreferencesDB>> {
    let row = user_preferences::table
        .filter(user_preferences::user_id.eq(user_id))
        .first::<UserPreferencesDB>(conn)
        .optional()
        .map_err(StorageError::from)?;
    Ok(row)
}

fn upsert_row(conn: &mut SqliteConnection, row: &UserPreferencesDB) -> Result<()> {
    diesel::replace_into(user_preferences::table)
        .values(row)
        .execute(conn)
        .map_err(StorageError::from)?;
    Ok(())
}

#[async_trait]
impl PreferenceRepositoryTrait for PreferenceRepository {
    fn get_preferences(&self, user_id: &str) -> Result<Option<UserPreferences>> {
        Ok(self.load_row(user_id)?.map(|row| row.to_preferences()))
    }

    async fn upsert_preferences(
        &self,
        user_id: &str,
        update: PreferencesUpdate,
    ) -> Result<UserPreferences> {
        let owner = user_id.to_string();
        let now = Utc::now().naive_utc();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserPreferences> {
                let mut row = load_row_on(conn, &owner)?
                    .unwrap_or_else(|| UserPreferencesDB::empty(&owner, now));

                if let Some(personality) = &update.personality {
                    row.personality = render_document(personality);
                }
                if let Some(preferences) = &update.preferences {
                    row.preferences = render_document(preferences);
                }
                if let Some(motivators) = &update.motivators {
                    row.motivators = render_document(motivators);
                }
                row.updated_at = now;

                upsert_row(conn, &row)?;
                Ok(row.to_preferences())
            })
            .await
    }
}

#[async_trait]
impl StreakRepositoryTrait for PreferenceRepository {
    fn get_streak(&self, user_id: &str) -> Result<Option<Streak>> {
        Ok(self.load_row(user_id)?.map(|row| row.to_streak()))
    }

    async fn save_streak(&self, streak: Streak) -> Result<Streak> {
        let now = Utc::now().naive_utc();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Streak> {
                let mut row = load_row_on(conn, &streak.user_id)
                    .map(|row| row.unwrap_or_else(|| UserPreferencesDB::empty(&streak.user_id, now)))?;

                row.streak_current = streak.current;
                row.streak_best = streak.best;
                row.streak_last_updated = streak.last_updated;
                row.updated_at = now;

                upsert_row(conn, &row)?;
                Ok(row.to_streak())
            })
            .await
    }
}
