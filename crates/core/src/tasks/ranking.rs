//! Display ordering for task lists.

use super::tasks_model::Task;

/// Numeric tier for a priority label; anything unrecognized sorts last.
fn priority_tier(priority: &str) -> u8 {
    match priority {
        "high" => 3,
        "medium" => 2,
        "low" => 1,
        _ => 0,
    }
}

/// Order tasks by priority tier, then impact score, both descending.
///
/// Returns a new vector; the input is untouched. The sort is unstable, so
/// exact ties carry no order guarantee.
pub fn rank_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut ranked = tasks.to_vec();
    ranked.sort_unstable_by(|a, b| {
        priority_tier(&b.priority)
            .cmp(&priority_tier(&a.priority))
            .then(b.impact_score.cmp(&a.impact_score))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: &str, priority: &str, impact_score: i32) -> Task {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Task {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            estimated_time: 15,
            impact_score,
            priority: priority.to_string(),
            completed: false,
            in_progress: false,
            goal_id: None,
            user_id: "u1".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn priority_beats_impact() {
        let tasks = vec![task("b", "medium", 99), task("a", "high", 50)];
        assert_eq!(ids(&rank_tasks(&tasks)), ["a", "b"]);
    }

    #[test]
    fn impact_breaks_ties_within_a_tier() {
        let tasks = vec![task("c", "high", 80), task("d", "high", 95)];
        assert_eq!(ids(&rank_tasks(&tasks)), ["d", "c"]);
    }

    #[test]
    fn unrecognized_priority_sorts_last() {
        let tasks = vec![
            task("x", "someday", 100),
            task("low", "low", 1),
            task("top", "high", 1),
        ];
        assert_eq!(ids(&rank_tasks(&tasks)), ["top", "low", "x"]);
    }

    #[test]
    fn input_order_is_preserved() {
        let tasks = vec![task("b", "low", 10), task("a", "high", 10)];
        let _ = rank_tasks(&tasks);
        assert_eq!(ids(&tasks), ["b", "a"]);
    }
}
