//! Database model for the user preferences row.
//!
//! One row per user carries the onboarding profile documents and the
//! streak counters.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use summit_core::preferences::UserPreferences;
use summit_core::streaks::Streak;

#[derive(
    Queryable,
    Insertable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::user_preferences)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserPreferencesDB {
    pub user_id: String,
    pub personality: Option<String>,
    pub preferences: Option<String>,
    pub motivators: Option<String>,
    pub streak_current: i32,
    pub streak_best: i32,
    pub streak_last_updated: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

fn parse_document(raw: &Option<String>) -> Value {
    raw.as_deref()
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or(Value::Null)
}

pub fn render_document(value: &Value) -> Option<String> {
    if value.is_null() {
        None
    } else {
        serde_json::to_string(value).ok()
    }
}

impl UserPreferencesDB {
    /// Fresh row for a user with no stored profile or streak.
    pub fn empty(user_id: &str, now: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.to_string(),
            personality: None,
            preferences: None,
            motivators: None,
            streak_current: 0,
            streak_best: 0,
            streak_last_updated: None,
            updated_at: now,
        }
    }

    pub fn to_preferences(&self) -> UserPreferences {
        UserPreferences {
            user_id: self.user_id.clone(),
            personality: parse_document(&self.personality),
            preferences: parse_document(&self.preferences),
            motivators: parse_document(&self.motivators),
            updated_at: self.updated_at,
        }
    }

    pub fn to_streak(&self) -> Streak {
        Streak {
            current: self.streak_current,
            best: self.streak_best,
            last_updated: self.streak_last_updated,
            user_id: self.user_id.clone(),
        }
    }
}
