//! Database models for milestones.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for milestones
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::milestones)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub reward: String,
    pub progress: i32,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new milestone
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::milestones)]
pub struct NewMilestoneDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub reward: String,
    pub progress: i32,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for updating an existing milestone
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::milestones)]
pub struct MilestoneChangesetDB {
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub reward: String,
    pub progress: i32,
    pub updated_at: NaiveDateTime,
}

impl From<MilestoneDB> for summit_core::milestones::Milestone {
    fn from(db: MilestoneDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            due_date: db.due_date,
            reward: db.reward,
            progress: db.progress,
            user_id: db.user_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewMilestoneDB {
    pub fn from_domain(
        user_id: &str,
        domain: summit_core::milestones::NewMilestone,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            title: domain.title,
            description: domain.description,
            due_date: domain.due_date,
            reward: domain.reward,
            progress: 0,
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl MilestoneChangesetDB {
    pub fn from_domain(
        domain: &summit_core::milestones::MilestoneUpdate,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            title: domain.title.clone(),
            description: domain.description.clone(),
            due_date: domain.due_date,
            reward: domain.reward.clone(),
            progress: domain.progress,
            updated_at: now,
        }
    }
}
