//! Milestones domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::errors::{Result, ValidationError};

/// Domain model representing a milestone with a due date and a reward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub reward: String,
    /// Percent complete, 0-100.
    pub progress: i32,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new milestone
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub reward: String,
}

/// Input model for updating an existing milestone
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneUpdate {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub reward: String,
    pub progress: i32,
}

impl NewMilestone {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        Ok(())
    }
}

impl MilestoneUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        if !(SCORE_MIN..=SCORE_MAX).contains(&self.progress) {
            return Err(ValidationError::OutOfRange {
                field: "progress",
                min: SCORE_MIN,
                max: SCORE_MAX,
            }
            .into());
        }
        Ok(())
    }
}
