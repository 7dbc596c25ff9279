//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for goals
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub progress: i32,
    pub impact: i32,
    pub goal_type: String,
    pub parent_goal_id: Option<String>,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub progress: i32,
    pub impact: i32,
    pub goal_type: String,
    pub parent_goal_id: Option<String>,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for updating an existing goal
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct GoalChangesetDB {
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub progress: i32,
    pub impact: i32,
    pub goal_type: String,
    pub parent_goal_id: Option<String>,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<GoalDB> for summit_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            priority: db.priority,
            progress: db.progress,
            impact: db.impact,
            goal_type: db.goal_type,
            parent_goal_id: db.parent_goal_id,
            user_id: db.user_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewGoalDB {
    pub fn from_domain(
        user_id: &str,
        domain: summit_core::goals::NewGoal,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            title: domain.title,
            description: domain.description,
            priority: domain.priority,
            progress: domain.progress,
            impact: domain.impact,
            goal_type: domain.goal_type,
            parent_goal_id: domain.parent_goal_id,
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl GoalChangesetDB {
    pub fn from_domain(domain: &summit_core::goals::GoalUpdate, now: NaiveDateTime) -> Self {
        Self {
            title: domain.title.clone(),
            description: domain.description.clone(),
            priority: domain.priority.clone(),
            progress: domain.progress,
            impact: domain.impact,
            goal_type: domain.goal_type.clone(),
            parent_goal_id: domain.parent_goal_id.clone(),
            updated_at: now,
        }
    }
}
