//! Goals domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{GOAL_TYPES, PRIORITIES, SCORE_MAX, SCORE_MIN};
use crate::errors::{Result, ValidationError};

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// One of `high`, `medium`, `low`.
    pub priority: String,
    /// Percent complete, 0-100.
    pub progress: i32,
    /// Expected impact, 0-100.
    pub impact: i32,
    /// Time horizon: `lifetime`, `medium-term` or `daily`.
    pub goal_type: String,
    pub parent_goal_id: Option<String>,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    #[serde(default)]
    pub progress: i32,
    pub impact: i32,
    pub goal_type: String,
    pub parent_goal_id: Option<String>,
}

/// Input model for updating an existing goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub progress: i32,
    pub impact: i32,
    pub goal_type: String,
    pub parent_goal_id: Option<String>,
}

fn check_score(field: &'static str, value: i32) -> Result<()> {
    if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min: SCORE_MIN,
            max: SCORE_MAX,
        }
        .into());
    }
    Ok(())
}

fn check_labels(title: &str, priority: &str, goal_type: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingField("title".to_string()).into());
    }
    if !PRIORITIES.contains(&priority) {
        return Err(
            ValidationError::InvalidInput(format!("unknown priority '{}'", priority)).into(),
        );
    }
    if !GOAL_TYPES.contains(&goal_type) {
        return Err(
            ValidationError::InvalidInput(format!("unknown goal type '{}'", goal_type)).into(),
        );
    }
    Ok(())
}

impl NewGoal {
    /// Field-level validation applied before any storage call.
    pub fn validate(&self) -> Result<()> {
        check_labels(&self.title, &self.priority, &self.goal_type)?;
        check_score("progress", self.progress)?;
        check_score("impact", self.impact)
    }
}

impl GoalUpdate {
    pub fn validate(&self) -> Result<()> {
        check_labels(&self.title, &self.priority, &self.goal_type)?;
        check_score("progress", self.progress)?;
        check_score("impact", self.impact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewGoal {
        NewGoal {
            id: None,
            title: "Learn piano".to_string(),
            description: None,
            priority: "high".to_string(),
            progress: 0,
            impact: 80,
            goal_type: "lifetime".to_string(),
            parent_goal_id: None,
        }
    }

    #[test]
    fn accepts_valid_goal() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_priority() {
        let mut goal = draft();
        goal.priority = "urgent".to_string();
        assert!(goal.validate().is_err());
    }

    #[test]
    fn rejects_unknown_goal_type() {
        let mut goal = draft();
        goal.goal_type = "someday".to_string();
        assert!(goal.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_progress() {
        let mut goal = draft();
        goal.progress = 101;
        assert!(goal.validate().is_err());
        goal.progress = -1;
        assert!(goal.validate().is_err());
    }

    #[test]
    fn rejects_blank_title() {
        let mut goal = draft();
        goal.title = "   ".to_string();
        assert!(goal.validate().is_err());
    }
}
