//! Tasks domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{PRIORITIES, SCORE_MAX, SCORE_MIN};
use crate::errors::{Result, ValidationError};

/// Domain model representing a task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Estimated effort in minutes.
    pub estimated_time: i32,
    /// Expected impact, 0-100.
    pub impact_score: i32,
    /// One of `high`, `medium`, `low`.
    pub priority: String,
    pub completed: bool,
    pub in_progress: bool,
    pub goal_id: Option<String>,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new task
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub estimated_time: i32,
    pub impact_score: i32,
    pub priority: String,
    pub goal_id: Option<String>,
}

/// Input model for updating an existing task
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub estimated_time: i32,
    pub impact_score: i32,
    pub priority: String,
    pub completed: bool,
    pub in_progress: bool,
    pub goal_id: Option<String>,
}

/// Targeted status toggle; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusUpdate {
    pub completed: Option<bool>,
    pub in_progress: Option<bool>,
}

fn check_fields(title: &str, priority: &str, estimated_time: i32, impact_score: i32) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingField("title".to_string()).into());
    }
    if !PRIORITIES.contains(&priority) {
        return Err(
            ValidationError::InvalidInput(format!("unknown priority '{}'", priority)).into(),
        );
    }
    if estimated_time < 0 {
        return Err(ValidationError::InvalidInput(
            "estimated time must not be negative".to_string(),
        )
        .into());
    }
    if !(SCORE_MIN..=SCORE_MAX).contains(&impact_score) {
        return Err(ValidationError::OutOfRange {
            field: "impactScore",
            min: SCORE_MIN,
            max: SCORE_MAX,
        }
        .into());
    }
    Ok(())
}

impl NewTask {
    pub fn validate(&self) -> Result<()> {
        check_fields(
            &self.title,
            &self.priority,
            self.estimated_time,
            self.impact_score,
        )
    }
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<()> {
        check_fields(
            &self.title,
            &self.priority,
            self.estimated_time,
            self.impact_score,
        )
    }

    /// A completed task is never in progress.
    pub fn normalized(mut self) -> Self {
        if self.completed {
            self.in_progress = false;
        }
        self
    }
}

impl Task {
    /// Apply a targeted status toggle, re-asserting the completed /
    /// in-progress exclusion.
    pub fn apply_status(&self, status: &TaskStatusUpdate) -> TaskUpdate {
        let mut completed = status.completed.unwrap_or(self.completed);
        let mut in_progress = status.in_progress.unwrap_or(self.in_progress);
        if completed {
            in_progress = false;
        }
        // Explicitly restarting work on a finished task reopens it.
        if status.in_progress == Some(true) && status.completed.is_none() {
            completed = false;
            in_progress = true;
        }
        TaskUpdate {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            estimated_time: self.estimated_time,
            impact_score: self.impact_score,
            priority: self.priority.clone(),
            completed,
            in_progress,
            goal_id: self.goal_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task() -> Task {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Task {
            id: "t1".to_string(),
            title: "Write outline".to_string(),
            description: None,
            estimated_time: 30,
            impact_score: 60,
            priority: "medium".to_string(),
            completed: false,
            in_progress: true,
            goal_id: None,
            user_id: "u1".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn completing_clears_in_progress() {
        let update = task().apply_status(&TaskStatusUpdate {
            completed: Some(true),
            in_progress: None,
        });
        assert!(update.completed);
        assert!(!update.in_progress);
    }

    #[test]
    fn completed_wins_over_in_progress_in_one_update() {
        let update = task().apply_status(&TaskStatusUpdate {
            completed: Some(true),
            in_progress: Some(true),
        });
        assert!(update.completed);
        assert!(!update.in_progress);
    }

    #[test]
    fn restarting_a_finished_task_reopens_it() {
        let mut done = task();
        done.completed = true;
        done.in_progress = false;

        let update = done.apply_status(&TaskStatusUpdate {
            completed: None,
            in_progress: Some(true),
        });
        assert!(!update.completed);
        assert!(update.in_progress);
    }

    #[test]
    fn update_normalization_enforces_exclusion() {
        let update = TaskUpdate {
            id: "t1".to_string(),
            title: "x".to_string(),
            description: None,
            estimated_time: 5,
            impact_score: 10,
            priority: "low".to_string(),
            completed: true,
            in_progress: true,
            goal_id: None,
        }
        .normalized();
        assert!(!update.in_progress);
    }

    #[test]
    fn rejects_negative_estimated_time() {
        let draft = NewTask {
            id: None,
            title: "x".to_string(),
            description: None,
            estimated_time: -5,
            impact_score: 10,
            priority: "low".to_string(),
            goal_id: None,
        };
        assert!(draft.validate().is_err());
    }
}
