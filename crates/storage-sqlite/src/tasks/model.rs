//! Database models for tasks.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for tasks
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TaskDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub estimated_time: i32,
    pub impact_score: i32,
    pub priority: String,
    pub completed: bool,
    pub in_progress: bool,
    pub goal_id: Option<String>,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new task
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTaskDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub estimated_time: i32,
    pub impact_score: i32,
    pub priority: String,
    pub completed: bool,
    pub in_progress: bool,
    pub goal_id: Option<String>,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for updating an existing task
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::tasks)]
pub struct TaskChangesetDB {
    pub title: String,
    pub description: Option<String>,
    pub estimated_time: i32,
    pub impact_score: i32,
    pub priority: String,
    pub completed: bool,
    pub in_progress: bool,
    pub goal_id: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<TaskDB> for summit_core::tasks::Task {
    fn from(db: TaskDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            estimated_time: db.estimated_time,
            impact_score: db.impact_score,
            priority: db.priority,
            completed: db.completed,
            in_progress: db.in_progress,
            goal_id: db.goal_id,
            user_id: db.user_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewTaskDB {
    pub fn from_domain(
        user_id: &str,
        domain: summit_core::tasks::NewTask,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            title: domain.title,
            description: domain.description,
            estimated_time: domain.estimated_time,
            impact_score: domain.impact_score,
            priority: domain.priority,
            completed: false,
            in_progress: false,
            goal_id: domain.goal_id,
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl TaskChangesetDB {
    pub fn from_domain(domain: &summit_core::tasks::TaskUpdate, now: NaiveDateTime) -> Self {
        Self {
            title: domain.title.clone(),
            description: domain.description.clone(),
            estimated_time: domain.estimated_time,
            impact_score: domain.impact_score,
            priority: domain.priority.clone(),
            completed: domain.completed,
            in_progress: domain.in_progress,
            goal_id: domain.goal_id.clone(),
            updated_at: now,
        }
    }
}
