//! Deterministic prompt assembly for the advisor operations.
//!
//! Each builder renders the user's profile, goals and tasks into a plain
//! text prompt. The same inputs always produce the same prompt.

use summit_core::goals::Goal;
use summit_core::preferences::UserPreferences;
use summit_core::tasks::Task;

/// System preamble shared by the prioritize and strategy operations.
pub const STRATEGIST_PREAMBLE: &str =
    "You are an AI strategist specializing in productivity and goal achievement.";

/// System preamble for the free-form agent operation.
pub const AGENT_PREAMBLE: &str = "\
You are an AI productivity assistant that helps users manage their tasks and goals. \
You can create new tasks, prioritize existing tasks, break down complex tasks into \
smaller ones, and provide strategies for completing tasks effectively. \
Be concise, helpful, and action-oriented.

Always answer with a single JSON object of this shape:
{
  \"reply\": \"your message to the user\",
  \"create_task\": true or false,
  \"task\": {
    \"title\": \"task title\",
    \"description\": \"task description\",
    \"estimated_time\": minutes as a number,
    \"impact_score\": number between 0 and 100,
    \"priority\": \"high\", \"medium\" or \"low\"
  }
}
Set create_task to true and fill in task only when the user asked for a new
task to be created; otherwise set create_task to false and omit task.";

fn list_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

fn profile_block(prefs: &UserPreferences) -> String {
    format!(
        "User's personality traits: {}\n\
         User's work style: {}\n\
         User's learning style: {}\n\
         User's focus areas: {}\n\
         User's motivators: {}",
        list_or(&prefs.traits(), "Not specified"),
        prefs.work_style().unwrap_or_else(|| "Not specified".to_string()),
        prefs
            .learning_style()
            .unwrap_or_else(|| "Not specified".to_string()),
        list_or(&prefs.focus_areas(), "Not specified"),
        list_or(&prefs.rewards(), "Not specified"),
    )
}

fn goals_block(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals specified".to_string();
    }
    goals
        .iter()
        .map(|goal| {
            format!(
                "- {} ({}, Priority: {})",
                goal.title, goal.goal_type, goal.priority
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn tasks_block(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks".to_string();
    }
    tasks
        .iter()
        .map(|task| {
            format!(
                "- {}: {} (Estimated time: {} min, Impact score: {}, Priority: {}, Completed: {})",
                task.title,
                task.description.as_deref().unwrap_or("No description"),
                task.estimated_time,
                task.impact_score,
                task.priority,
                if task.completed { "Yes" } else { "No" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt asking the model to order the given tasks.
pub fn prioritize_prompt(prefs: &UserPreferences, goals: &[Goal], tasks: &[Task]) -> String {
    format!(
        "You are helping a user prioritize their tasks effectively.\n\n\
         {}\n\n\
         Here are the user's goals:\n{}\n\n\
         Here are the tasks that need prioritization:\n{}\n\n\
         Analyze these tasks and recommend a priority order based on impact, \
         urgency, and alignment with the user's goals, with a brief explanation \
         for each task's position.\n\n\
         Respond with a JSON object of this shape:\n\
         {{\"recommendations\": [{{\"task_id\": \"[task id]\", \"content\": \
         \"[priority recommendation]\", \"reasoning\": \"[explanation]\"}}]}}",
        profile_block(prefs),
        goals_block(goals),
        tasks_block(tasks),
    )
}

/// Prompt asking the model for a completion strategy for one task.
pub fn strategy_prompt(prefs: &UserPreferences, task: &Task, related_goal: Option<&Goal>) -> String {
    let related = related_goal
        .map(|goal| format!("\n- Related goal: {} ({})", goal.title, goal.goal_type))
        .unwrap_or_default();

    format!(
        "You are helping a user develop an effective strategy for completing a \
         specific task.\n\n\
         {}\n\n\
         Task details:\n\
         - Title: {}\n\
         - Description: {}\n\
         - Estimated time: {} minutes\n\
         - Impact score: {}\n\
         - Priority: {}{}\n\n\
         Provide a detailed strategy for completing this task effectively: a \
         step-by-step approach tailored to the user's work and learning style, \
         techniques to maintain focus, potential obstacles and how to overcome \
         them, and how this task contributes to the user's broader goals.\n\n\
         Respond with a JSON object of this shape:\n\
         {{\"recommendation\": {{\"task_id\": \"{}\", \"content\": \"[your detailed \
         strategy]\", \"reasoning\": \"[why this strategy suits the user]\"}}}}",
        profile_block(prefs),
        task.title,
        task.description.as_deref().unwrap_or("No description provided"),
        task.estimated_time,
        task.impact_score,
        task.priority,
        related,
        task.id,
    )
}

/// Context turn for the agent operation.
pub fn agent_prompt(
    prefs: &UserPreferences,
    goals: &[Goal],
    tasks: &[Task],
    user_prompt: &str,
) -> String {
    format!(
        "{}\n\n\
         Current tasks:\n{}\n\n\
         User goals:\n{}\n\n\
         User prompt: {}",
        profile_block(prefs),
        tasks_block(tasks),
        goals_block(goals),
        user_prompt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn ts() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn prefs() -> UserPreferences {
        UserPreferences {
            user_id: "u1".to_string(),
            personality: json!({ "traits": ["focused"], "workStyle": "sprints" }),
            preferences: json!({ "focusAreas": ["career"] }),
            motivators: json!({ "rewards": ["walks"] }),
            updated_at: ts(),
        }
    }

    fn goal() -> Goal {
        Goal {
            id: "g1".to_string(),
            title: "Ship the album".to_string(),
            description: None,
            priority: "high".to_string(),
            progress: 20,
            impact: 90,
            goal_type: "medium-term".to_string(),
            parent_goal_id: None,
            user_id: "u1".to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn task() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Mix track 3".to_string(),
            description: Some("Rough mix only".to_string()),
            estimated_time: 90,
            impact_score: 70,
            priority: "high".to_string(),
            completed: false,
            in_progress: false,
            goal_id: Some("g1".to_string()),
            user_id: "u1".to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[test]
    fn prioritize_prompt_is_deterministic() {
        let a = prioritize_prompt(&prefs(), &[goal()], &[task()]);
        let b = prioritize_prompt(&prefs(), &[goal()], &[task()]);
        assert_eq!(a, b);
    }

    #[test]
    fn prioritize_prompt_embeds_profile_goals_and_tasks() {
        let prompt = prioritize_prompt(&prefs(), &[goal()], &[task()]);
        assert!(prompt.contains("focused"));
        assert!(prompt.contains("sprints"));
        assert!(prompt.contains("Ship the album (medium-term, Priority: high)"));
        assert!(prompt.contains("Mix track 3"));
        assert!(prompt.contains("Estimated time: 90 min"));
    }

    #[test]
    fn empty_inputs_render_placeholders() {
        let empty = UserPreferences::empty("u1", ts());
        let prompt = prioritize_prompt(&empty, &[], &[]);
        assert!(prompt.contains("No goals specified"));
        assert!(prompt.contains("No tasks"));
        assert!(prompt.contains("Not specified"));
    }

    #[test]
    fn strategy_prompt_mentions_the_related_goal() {
        let g = goal();
        let prompt = strategy_prompt(&prefs(), &task(), Some(&g));
        assert!(prompt.contains("Related goal: Ship the album"));
        assert!(prompt.contains("\"task_id\": \"t1\""));

        let prompt = strategy_prompt(&prefs(), &task(), None);
        assert!(!prompt.contains("Related goal"));
    }

    #[test]
    fn agent_prompt_carries_the_user_text() {
        let prompt = agent_prompt(&prefs(), &[goal()], &[task()], "add a task to call mom");
        assert!(prompt.ends_with("User prompt: add a task to call mom"));
        assert!(prompt.contains("Completed: No"));
    }
}
