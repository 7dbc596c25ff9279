//! Aggregated dashboard state.

use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::goals::GoalNode;
use crate::milestones::Milestone;
use crate::streaks::Streak;
use crate::tasks::Task;

/// Everything the dashboard view reads, loaded in one refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub goals: Vec<GoalNode>,
    pub tasks: Vec<Task>,
    pub achievements: Vec<Achievement>,
    pub milestones: Vec<Milestone>,
    pub streak: Streak,
    /// Percentage of tasks marked completed; 0 when there are none.
    pub completion_rate: f64,
}

/// Completed task count over total, as a percentage.
pub fn completion_rate(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    completed as f64 / tasks.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(completed: bool) -> Task {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Task {
            id: "t".to_string(),
            title: "t".to_string(),
            description: None,
            estimated_time: 10,
            impact_score: 10,
            priority: "low".to_string(),
            completed,
            in_progress: false,
            goal_id: None,
            user_id: "u1".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn empty_task_list_rates_zero() {
        assert_eq!(completion_rate(&[]), 0.0);
    }

    #[test]
    fn two_of_four_rates_fifty() {
        let tasks = vec![task(true), task(true), task(false), task(false)];
        assert_eq!(completion_rate(&tasks), 50.0);
    }

    #[test]
    fn all_completed_rates_hundred() {
        let tasks = vec![task(true), task(true)];
        assert_eq!(completion_rate(&tasks), 100.0);
    }
}
