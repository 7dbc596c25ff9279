//! Database models for achievements.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for achievements
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::achievements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AchievementDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub earned: bool,
    pub earned_at: Option<NaiveDateTime>,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new achievement
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::achievements)]
pub struct NewAchievementDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub earned: bool,
    pub earned_at: Option<NaiveDateTime>,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<AchievementDB> for summit_core::achievements::Achievement {
    fn from(db: AchievementDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            earned: db.earned,
            earned_at: db.earned_at,
            user_id: db.user_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewAchievementDB {
    /// New achievements always start unearned with no earn date.
    pub fn from_domain(
        user_id: &str,
        domain: summit_core::achievements::NewAchievement,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            title: domain.title,
            description: domain.description,
            earned: false,
            earned_at: None,
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
