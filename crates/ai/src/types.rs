//! Wire and persistence types for the advisor.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use summit_core::tasks::NewTask;

use crate::error::AiError;

/// Kind of advice a recommendation carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Priority,
    Strategy,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Priority => "priority",
            RecommendationType::Strategy => "strategy",
        }
    }
}

/// A persisted piece of advice tied to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub task_id: String,
    pub recommendation_type: RecommendationType,
    pub content: String,
    pub reasoning: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
}

/// Input model for persisting a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub task_id: String,
    pub recommendation_type: RecommendationType,
    pub content: String,
    pub reasoning: String,
}

/// Recommendation fields as the model is asked to emit them.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationDraft {
    pub task_id: String,
    pub content: String,
    pub reasoning: String,
}

/// Model reply shape for the prioritize operation.
#[derive(Debug, Deserialize)]
pub struct PrioritizePayload {
    pub recommendations: Vec<RecommendationDraft>,
}

/// Model reply shape for the strategy operation.
#[derive(Debug, Deserialize)]
pub struct StrategyPayload {
    pub recommendation: RecommendationDraft,
}

/// Typed decision object the agent operation asks the model for, instead
/// of scanning prose for task-creation phrases.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentDecision {
    pub reply: String,
    #[serde(default)]
    pub create_task: bool,
    #[serde(default)]
    pub task: Option<TaskDraft>,
}

/// Task fields the agent may extract from the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub estimated_time: i32,
    pub impact_score: i32,
    pub priority: String,
}

impl From<TaskDraft> for NewTask {
    fn from(draft: TaskDraft) -> Self {
        NewTask {
            id: None,
            title: draft.title,
            description: draft.description,
            estimated_time: draft.estimated_time,
            impact_score: draft.impact_score,
            priority: draft.priority,
            goal_id: None,
        }
    }
}

/// What the agent operation hands back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentReply {
    pub response: String,
    pub tasks_modified: bool,
}

/// Trait for recommendation persistence, implemented by the storage crate.
#[async_trait]
pub trait RecommendationRepositoryTrait: Send + Sync {
    fn load_recommendations(&self, user_id: &str) -> Result<Vec<Recommendation>, AiError>;
    async fn insert_recommendation(
        &self,
        user_id: &str,
        recommendation: NewRecommendation,
    ) -> Result<Recommendation, AiError>;
}
