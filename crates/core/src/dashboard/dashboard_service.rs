use std::sync::Arc;

use async_trait::async_trait;

use crate::achievements::AchievementServiceTrait;
use crate::dashboard::dashboard_model::{completion_rate, DashboardSnapshot};
use crate::errors::Result;
use crate::goals::GoalServiceTrait;
use crate::milestones::MilestoneServiceTrait;
use crate::streaks::StreakServiceTrait;
use crate::tasks::TaskServiceTrait;

/// Trait for dashboard aggregation.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn load(&self, user_id: &str) -> Result<DashboardSnapshot>;
}

/// Aggregates the per-entity services into one dashboard snapshot.
///
/// Fetches are issued concurrently with no ordering guarantee between
/// them; a snapshot may mix reads from slightly different instants. Any
/// single failure fails the whole load.
pub struct DashboardService {
    goal_service: Arc<dyn GoalServiceTrait>,
    task_service: Arc<dyn TaskServiceTrait>,
    achievement_service: Arc<dyn AchievementServiceTrait>,
    milestone_service: Arc<dyn MilestoneServiceTrait>,
    streak_service: Arc<dyn StreakServiceTrait>,
}

impl DashboardService {
    pub fn new(
        goal_service: Arc<dyn GoalServiceTrait>,
        task_service: Arc<dyn TaskServiceTrait>,
        achievement_service: Arc<dyn AchievementServiceTrait>,
        milestone_service: Arc<dyn MilestoneServiceTrait>,
        streak_service: Arc<dyn StreakServiceTrait>,
    ) -> Self {
        DashboardService {
            goal_service,
            task_service,
            achievement_service,
            milestone_service,
            streak_service,
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn load(&self, user_id: &str) -> Result<DashboardSnapshot> {
        let (goals, tasks, achievements, milestones, streak) = tokio::try_join!(
            self.goal_service.get_goal_hierarchy(user_id),
            self.task_service.get_tasks(user_id),
            self.achievement_service.get_achievements(user_id),
            self.milestone_service.get_milestones(user_id),
            self.streak_service.get_streak(user_id),
        )?;

        let completion_rate = completion_rate(&tasks);

        Ok(DashboardSnapshot {
            goals,
            tasks,
            achievements,
            milestones,
            streak,
            completion_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::{Achievement, NewAchievement};
    use crate::errors::Error;
    use crate::goals::{Goal, GoalNode, GoalUpdate, NewGoal};
    use crate::milestones::{Milestone, MilestoneUpdate, NewMilestone};
    use crate::streaks::Streak;
    use crate::tasks::{NewTask, Task, TaskStatusUpdate, TaskUpdate};
    use chrono::NaiveDate;

    fn ts() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn sample_task(id: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            estimated_time: 10,
            impact_score: 10,
            priority: "low".to_string(),
            completed,
            in_progress: false,
            goal_id: None,
            user_id: "u1".to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    struct FixedGoals(Vec<GoalNode>);
    struct FixedTasks {
        tasks: Vec<Task>,
        fail: bool,
    }
    struct FixedAchievements;
    struct FixedMilestones;
    struct FixedStreak;

    #[async_trait]
    impl GoalServiceTrait for FixedGoals {
        async fn get_goals(&self, _user_id: &str) -> Result<Vec<Goal>> {
            Ok(vec![])
        }
        async fn get_goal(&self, _user_id: &str, _goal_id: &str) -> Result<Goal> {
            unimplemented!()
        }
        async fn get_goal_hierarchy(&self, _user_id: &str) -> Result<Vec<GoalNode>> {
            Ok(self.0.clone())
        }
        async fn create_goal(&self, _user_id: &str, _new_goal: NewGoal) -> Result<Goal> {
            unimplemented!()
        }
        async fn update_goal(&self, _user_id: &str, _goal_update: GoalUpdate) -> Result<Goal> {
            unimplemented!()
        }
        async fn delete_goal(&self, _user_id: &str, _goal_id: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl TaskServiceTrait for FixedTasks {
        async fn get_tasks(&self, _user_id: &str) -> Result<Vec<Task>> {
            if self.fail {
                return Err(Error::Unexpected("tasks unavailable".to_string()));
            }
            Ok(self.tasks.clone())
        }
        async fn get_task(&self, _user_id: &str, _task_id: &str) -> Result<Task> {
            unimplemented!()
        }
        async fn get_ranked_tasks(&self, _user_id: &str) -> Result<Vec<Task>> {
            Ok(self.tasks.clone())
        }
        async fn create_task(&self, _user_id: &str, _new_task: NewTask) -> Result<Task> {
            unimplemented!()
        }
        async fn update_task(&self, _user_id: &str, _task_update: TaskUpdate) -> Result<Task> {
            unimplemented!()
        }
        async fn set_task_status(
            &self,
            _user_id: &str,
            _task_id: &str,
            _status: TaskStatusUpdate,
        ) -> Result<Task> {
            unimplemented!()
        }
        async fn delete_task(&self, _user_id: &str, _task_id: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl AchievementServiceTrait for FixedAchievements {
        async fn get_achievements(&self, _user_id: &str) -> Result<Vec<Achievement>> {
            Ok(vec![])
        }
        async fn create_achievement(
            &self,
            _user_id: &str,
            _new_achievement: NewAchievement,
        ) -> Result<Achievement> {
            unimplemented!()
        }
        async fn mark_earned(
            &self,
            _user_id: &str,
            _achievement_id: &str,
        ) -> Result<Achievement> {
            unimplemented!()
        }
        async fn delete_achievement(
            &self,
            _user_id: &str,
            _achievement_id: &str,
        ) -> Result<usize> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl MilestoneServiceTrait for FixedMilestones {
        async fn get_milestones(&self, _user_id: &str) -> Result<Vec<Milestone>> {
            Ok(vec![])
        }
        async fn create_milestone(
            &self,
            _user_id: &str,
            _new_milestone: NewMilestone,
        ) -> Result<Milestone> {
            unimplemented!()
        }
        async fn update_milestone(
            &self,
            _user_id: &str,
            _milestone_update: MilestoneUpdate,
        ) -> Result<Milestone> {
            unimplemented!()
        }
        async fn delete_milestone(&self, _user_id: &str, _milestone_id: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl StreakServiceTrait for FixedStreak {
        async fn get_streak(&self, user_id: &str) -> Result<Streak> {
            Ok(Streak::empty(user_id))
        }
        async fn record_activity(&self, _user_id: &str) -> Result<Streak> {
            unimplemented!()
        }
    }

    fn service(tasks: Vec<Task>, fail_tasks: bool) -> DashboardService {
        DashboardService::new(
            Arc::new(FixedGoals(vec![])),
            Arc::new(FixedTasks {
                tasks,
                fail: fail_tasks,
            }),
            Arc::new(FixedAchievements),
            Arc::new(FixedMilestones),
            Arc::new(FixedStreak),
        )
    }

    #[tokio::test]
    async fn snapshot_carries_completion_rate() {
        let tasks = vec![
            sample_task("a", true),
            sample_task("b", true),
            sample_task("c", false),
            sample_task("d", false),
        ];
        let snapshot = service(tasks, false).load("u1").await.unwrap();
        assert_eq!(snapshot.completion_rate, 50.0);
        assert_eq!(snapshot.tasks.len(), 4);
    }

    #[tokio::test]
    async fn one_failed_fetch_fails_the_whole_load() {
        let result = service(vec![], true).load("u1").await;
        assert!(result.is_err());
    }
}
