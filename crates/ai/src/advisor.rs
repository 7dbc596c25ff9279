//! Advisor operations: prioritize, strategy, and the free-form agent.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use summit_core::goals::GoalServiceTrait;
use summit_core::preferences::PreferenceServiceTrait;
use summit_core::tasks::{NewTask, Task, TaskServiceTrait};

use crate::completion::{extract_json, CompletionBackend};
use crate::error::AiError;
use crate::prompt::{
    agent_prompt, prioritize_prompt, strategy_prompt, AGENT_PREAMBLE, STRATEGIST_PREAMBLE,
};
use crate::types::{
    AgentDecision, AgentReply, NewRecommendation, PrioritizePayload, Recommendation,
    RecommendationRepositoryTrait, RecommendationType, StrategyPayload,
};

/// Reply used when the provider or its response lets us down mid-turn.
const AGENT_FALLBACK_REPLY: &str = "I'm having trouble reaching the AI service right now. \
     Your tasks and goals are safe; please try again in a moment.";

/// Trait for advisor operations
#[async_trait]
pub trait AdvisorServiceTrait: Send + Sync {
    /// Rank the given tasks (or all of the user's tasks) by AI judgment.
    async fn prioritize_tasks(
        &self,
        user_id: &str,
        tasks: Option<Vec<Task>>,
    ) -> Result<Vec<Recommendation>, AiError>;

    /// Produce a completion strategy for one task.
    async fn task_strategy(&self, user_id: &str, task_id: &str)
        -> Result<Recommendation, AiError>;

    /// Handle a free-form prompt; may create a task as a side effect.
    async fn agent_prompt(&self, user_id: &str, prompt: &str) -> Result<AgentReply, AiError>;

    /// Previously persisted recommendations for the user.
    fn get_recommendations(&self, user_id: &str) -> Result<Vec<Recommendation>, AiError>;
}

pub struct AdvisorService {
    backend: Arc<dyn CompletionBackend>,
    goal_service: Arc<dyn GoalServiceTrait>,
    task_service: Arc<dyn TaskServiceTrait>,
    preference_service: Arc<dyn PreferenceServiceTrait>,
    recommendation_repo: Arc<dyn RecommendationRepositoryTrait>,
}

impl AdvisorService {
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        goal_service: Arc<dyn GoalServiceTrait>,
        task_service: Arc<dyn TaskServiceTrait>,
        preference_service: Arc<dyn PreferenceServiceTrait>,
        recommendation_repo: Arc<dyn RecommendationRepositoryTrait>,
    ) -> Self {
        AdvisorService {
            backend,
            goal_service,
            task_service,
            preference_service,
            recommendation_repo,
        }
    }

    async fn persist(
        &self,
        user_id: &str,
        recommendation_type: RecommendationType,
        task_id: String,
        content: String,
        reasoning: String,
    ) -> Result<Recommendation, AiError> {
        self.recommendation_repo
            .insert_recommendation(
                user_id,
                NewRecommendation {
                    task_id,
                    recommendation_type,
                    content,
                    reasoning,
                },
            )
            .await
    }

    /// Best-effort task creation from an agent decision.
    async fn create_task_from_decision(&self, user_id: &str, decision: &AgentDecision) -> bool {
        let Some(draft) = decision.task.clone() else {
            warn!("agent decision asked to create a task but carried none");
            return false;
        };
        let new_task = NewTask::from(draft);
        match self.task_service.create_task(user_id, new_task).await {
            Ok(task) => {
                log::info!("agent created task {} for {}", task.id, user_id);
                true
            }
            Err(err) => {
                warn!("agent task draft rejected: {}", err);
                false
            }
        }
    }
}

#[async_trait]
impl AdvisorServiceTrait for AdvisorService {
    async fn prioritize_tasks(
        &self,
        user_id: &str,
        tasks: Option<Vec<Task>>,
    ) -> Result<Vec<Recommendation>, AiError> {
        let tasks = match tasks {
            Some(tasks) if !tasks.is_empty() => tasks,
            _ => self.task_service.get_tasks(user_id).await?,
        };
        if tasks.is_empty() {
            return Err(AiError::invalid_input("no tasks to prioritize"));
        }

        let prefs = self.preference_service.get_preferences(user_id).await?;
        let goals = self.goal_service.get_goals(user_id).await?;

        let prompt = prioritize_prompt(&prefs, &goals, &tasks);
        let reply = self.backend.complete(STRATEGIST_PREAMBLE, &prompt).await?;
        let payload: PrioritizePayload = serde_json::from_str(extract_json(&reply))
            .map_err(|e| AiError::Parse(e.to_string()))?;

        let mut recommendations = Vec::with_capacity(payload.recommendations.len());
        for draft in payload.recommendations {
            recommendations.push(
                self.persist(
                    user_id,
                    RecommendationType::Priority,
                    draft.task_id,
                    draft.content,
                    draft.reasoning,
                )
                .await?,
            );
        }
        Ok(recommendations)
    }

    async fn task_strategy(
        &self,
        user_id: &str,
        task_id: &str,
    ) -> Result<Recommendation, AiError> {
        let task = self.task_service.get_task(user_id, task_id).await?;
        let prefs = self.preference_service.get_preferences(user_id).await?;
        let goals = self.goal_service.get_goals(user_id).await?;
        let related_goal = task
            .goal_id
            .as_deref()
            .and_then(|goal_id| goals.iter().find(|g| g.id == goal_id));

        let prompt = strategy_prompt(&prefs, &task, related_goal);
        let reply = self.backend.complete(STRATEGIST_PREAMBLE, &prompt).await?;
        let payload: StrategyPayload = serde_json::from_str(extract_json(&reply))
            .map_err(|e| AiError::Parse(e.to_string()))?;

        // The task id is authoritative regardless of what the model echoed.
        self.persist(
            user_id,
            RecommendationType::Strategy,
            task.id,
            payload.recommendation.content,
            payload.recommendation.reasoning,
        )
        .await
    }

    async fn agent_prompt(&self, user_id: &str, prompt: &str) -> Result<AgentReply, AiError> {
        if prompt.trim().is_empty() {
            return Err(AiError::invalid_input("prompt must not be empty"));
        }

        let prefs = self.preference_service.get_preferences(user_id).await?;
        let goals = self.goal_service.get_goals(user_id).await?;
        let tasks = self.task_service.get_tasks(user_id).await?;

        let context = agent_prompt(&prefs, &goals, &tasks, prompt);
        let reply = match self.backend.complete(AGENT_PREAMBLE, &context).await {
            Ok(reply) => reply,
            // A misconfigured key is an operator problem; surface it.
            Err(err @ AiError::MissingApiKey(_)) => return Err(err),
            Err(err) => {
                warn!("agent completion failed, falling back: {}", err);
                return Ok(AgentReply {
                    response: AGENT_FALLBACK_REPLY.to_string(),
                    tasks_modified: false,
                });
            }
        };

        let decision: AgentDecision = match serde_json::from_str(extract_json(&reply)) {
            Ok(decision) => decision,
            Err(err) => {
                warn!("agent reply was not a decision object: {}", err);
                return Ok(AgentReply {
                    response: AGENT_FALLBACK_REPLY.to_string(),
                    tasks_modified: false,
                });
            }
        };

        let tasks_modified = if decision.create_task {
            self.create_task_from_decision(user_id, &decision).await
        } else {
            false
        };

        Ok(AgentReply {
            response: decision.reply,
            tasks_modified,
        })
    }

    fn get_recommendations(&self, user_id: &str) -> Result<Vec<Recommendation>, AiError> {
        self.recommendation_repo.load_recommendations(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::FakeCompletionBackend;
    use chrono::{NaiveDate, Utc};
    use std::sync::Mutex;
    use summit_core::errors::{DatabaseError, Error, Result as CoreResult};
    use summit_core::goals::{Goal, GoalNode, GoalUpdate, NewGoal};
    use summit_core::preferences::{PreferencesUpdate, UserPreferences};
    use summit_core::tasks::{TaskStatusUpdate, TaskUpdate};
    use uuid::Uuid;

    fn ts() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn sample_task(id: &str, goal_id: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {}", id),
            description: None,
            estimated_time: 20,
            impact_score: 50,
            priority: "medium".to_string(),
            completed: false,
            in_progress: false,
            goal_id: goal_id.map(str::to_string),
            user_id: "u1".to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn sample_goal(id: &str) -> Goal {
        Goal {
            id: id.to_string(),
            title: format!("goal {}", id),
            description: None,
            priority: "high".to_string(),
            progress: 0,
            impact: 80,
            goal_type: "lifetime".to_string(),
            parent_goal_id: None,
            user_id: "u1".to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    struct StubGoals(Vec<Goal>);

    #[async_trait]
    impl GoalServiceTrait for StubGoals {
        async fn get_goals(&self, _user_id: &str) -> CoreResult<Vec<Goal>> {
            Ok(self.0.clone())
        }
        async fn get_goal(&self, _user_id: &str, _goal_id: &str) -> CoreResult<Goal> {
            unimplemented!()
        }
        async fn get_goal_hierarchy(&self, _user_id: &str) -> CoreResult<Vec<GoalNode>> {
            Ok(vec![])
        }
        async fn create_goal(&self, _user_id: &str, _new_goal: NewGoal) -> CoreResult<Goal> {
            unimplemented!()
        }
        async fn update_goal(&self, _user_id: &str, _goal_update: GoalUpdate) -> CoreResult<Goal> {
            unimplemented!()
        }
        async fn delete_goal(&self, _user_id: &str, _goal_id: &str) -> CoreResult<usize> {
            unimplemented!()
        }
    }

    struct StubTasks {
        tasks: Mutex<Vec<Task>>,
    }

    impl StubTasks {
        fn new(tasks: Vec<Task>) -> Self {
            Self {
                tasks: Mutex::new(tasks),
            }
        }
    }

    #[async_trait]
    impl TaskServiceTrait for StubTasks {
        async fn get_tasks(&self, _user_id: &str) -> CoreResult<Vec<Task>> {
            Ok(self.tasks.lock().unwrap().clone())
        }
        async fn get_task(&self, _user_id: &str, task_id: &str) -> CoreResult<Task> {
            self.tasks
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id == task_id)
                .cloned()
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(task_id.to_string())))
        }
        async fn get_ranked_tasks(&self, user_id: &str) -> CoreResult<Vec<Task>> {
            self.get_tasks(user_id).await
        }
        async fn create_task(&self, user_id: &str, new_task: NewTask) -> CoreResult<Task> {
            new_task.validate()?;
            let task = Task {
                id: Uuid::new_v4().to_string(),
                title: new_task.title,
                description: new_task.description,
                estimated_time: new_task.estimated_time,
                impact_score: new_task.impact_score,
                priority: new_task.priority,
                completed: false,
                in_progress: false,
                goal_id: new_task.goal_id,
                user_id: user_id.to_string(),
                created_at: ts(),
                updated_at: ts(),
            };
            self.tasks.lock().unwrap().push(task.clone());
            Ok(task)
        }
        async fn update_task(&self, _user_id: &str, _task_update: TaskUpdate) -> CoreResult<Task> {
            unimplemented!()
        }
        async fn set_task_status(
            &self,
            _user_id: &str,
            _task_id: &str,
            _status: TaskStatusUpdate,
        ) -> CoreResult<Task> {
            unimplemented!()
        }
        async fn delete_task(&self, _user_id: &str, _task_id: &str) -> CoreResult<usize> {
            unimplemented!()
        }
    }

    struct StubPreferences;

    #[async_trait]
    impl PreferenceServiceTrait for StubPreferences {
        async fn get_preferences(&self, user_id: &str) -> CoreResult<UserPreferences> {
            Ok(UserPreferences::empty(user_id, ts()))
        }
        async fn update_preferences(
            &self,
            _user_id: &str,
            _update: PreferencesUpdate,
        ) -> CoreResult<UserPreferences> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct InMemoryRecommendations {
        rows: Mutex<Vec<Recommendation>>,
    }

    #[async_trait]
    impl RecommendationRepositoryTrait for InMemoryRecommendations {
        fn load_recommendations(&self, user_id: &str) -> Result<Vec<Recommendation>, AiError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn insert_recommendation(
            &self,
            user_id: &str,
            recommendation: NewRecommendation,
        ) -> Result<Recommendation, AiError> {
            let row = Recommendation {
                id: Uuid::new_v4().to_string(),
                task_id: recommendation.task_id,
                recommendation_type: recommendation.recommendation_type,
                content: recommendation.content,
                reasoning: recommendation.reasoning,
                user_id: user_id.to_string(),
                created_at: Utc::now().naive_utc(),
            };
            self.rows.lock().unwrap().push(row.clone());
            Ok(row)
        }
    }

    fn service_with(
        backend: FakeCompletionBackend,
        tasks: Vec<Task>,
        goals: Vec<Goal>,
    ) -> (Arc<StubTasks>, Arc<InMemoryRecommendations>, AdvisorService) {
        let task_service = Arc::new(StubTasks::new(tasks));
        let repo = Arc::new(InMemoryRecommendations::default());
        let service = AdvisorService::new(
            Arc::new(backend),
            Arc::new(StubGoals(goals)),
            task_service.clone(),
            Arc::new(StubPreferences),
            repo.clone(),
        );
        (task_service, repo, service)
    }

    #[tokio::test]
    async fn prioritize_parses_and_persists_recommendations() {
        let reply = r#"{"recommendations": [
            {"task_id": "t1", "content": "Do this first", "reasoning": "Highest impact"},
            {"task_id": "t2", "content": "Do this second", "reasoning": "Quick win"}
        ]}"#;
        let (_, repo, service) = service_with(
            FakeCompletionBackend::with_reply(reply),
            vec![sample_task("t1", None), sample_task("t2", None)],
            vec![sample_goal("g1")],
        );

        let recs = service.prioritize_tasks("u1", None).await.unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].recommendation_type, RecommendationType::Priority);
        assert_eq!(recs[0].task_id, "t1");
        assert_eq!(repo.load_recommendations("u1").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn prioritize_rejects_empty_task_sets() {
        let (_, _, service) =
            service_with(FakeCompletionBackend::with_reply("{}"), vec![], vec![]);
        assert!(matches!(
            service.prioritize_tasks("u1", None).await,
            Err(AiError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn prioritize_surfaces_malformed_replies_as_parse_errors() {
        let (_, _, service) = service_with(
            FakeCompletionBackend::with_reply("the dog ate my JSON"),
            vec![sample_task("t1", None)],
            vec![],
        );
        assert!(matches!(
            service.prioritize_tasks("u1", None).await,
            Err(AiError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn strategy_uses_the_stored_task_id() {
        let reply = r#"{"recommendation":
            {"task_id": "whatever-the-model-said", "content": "Plan", "reasoning": "Fits"}}"#;
        let (_, _, service) = service_with(
            FakeCompletionBackend::with_reply(reply),
            vec![sample_task("t1", Some("g1"))],
            vec![sample_goal("g1")],
        );

        let rec = service.task_strategy("u1", "t1").await.unwrap();
        assert_eq!(rec.task_id, "t1");
        assert_eq!(rec.recommendation_type, RecommendationType::Strategy);
    }

    #[tokio::test]
    async fn agent_creates_a_task_when_the_decision_says_so() {
        let reply = r#"```json
        {"reply": "Created it for you.", "create_task": true,
         "task": {"title": "Call mom", "description": "Sunday call",
                  "estimated_time": 15, "impact_score": 40, "priority": "medium"}}
        ```"#;
        let (tasks, _, service) =
            service_with(FakeCompletionBackend::with_reply(reply), vec![], vec![]);

        let outcome = service.agent_prompt("u1", "please add a task").await.unwrap();
        assert!(outcome.tasks_modified);
        assert_eq!(outcome.response, "Created it for you.");
        assert_eq!(tasks.get_tasks("u1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn agent_rejecting_draft_reports_no_modification() {
        // impact_score outside 0-100 fails task validation.
        let reply = r#"{"reply": "Done!", "create_task": true,
            "task": {"title": "Bad", "estimated_time": 5, "impact_score": 400,
                     "priority": "medium"}}"#;
        let (tasks, _, service) =
            service_with(FakeCompletionBackend::with_reply(reply), vec![], vec![]);

        let outcome = service.agent_prompt("u1", "please add a task").await.unwrap();
        assert!(!outcome.tasks_modified);
        assert!(tasks.get_tasks("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn agent_falls_back_on_provider_failure() {
        let (_, _, service) = service_with(
            FakeCompletionBackend::failing("connection refused"),
            vec![],
            vec![],
        );
        let outcome = service.agent_prompt("u1", "hello").await.unwrap();
        assert!(!outcome.tasks_modified);
        assert!(outcome.response.contains("trouble reaching"));
    }

    #[tokio::test]
    async fn agent_falls_back_on_unparseable_reply() {
        let (_, _, service) = service_with(
            FakeCompletionBackend::with_reply("I made you a task! (no JSON here)"),
            vec![],
            vec![],
        );
        let outcome = service.agent_prompt("u1", "hello").await.unwrap();
        assert!(!outcome.tasks_modified);
        assert!(outcome.response.contains("trouble reaching"));
    }

    #[tokio::test]
    async fn agent_rejects_empty_prompts_before_calling_out() {
        let (_, _, service) =
            service_with(FakeCompletionBackend::with_reply("{}"), vec![], vec![]);
        assert!(matches!(
            service.agent_prompt("u1", "   ").await,
            Err(AiError::InvalidInput(_))
        ));
    }
}
