//! Database models for persisted AI recommendations.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use summit_ai::{AiError, NewRecommendation, Recommendation, RecommendationType};

#[derive(
    Queryable, Insertable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::ai_recommendations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDB {
    pub id: String,
    pub task_id: String,
    pub recommendation_type: String,
    pub content: String,
    pub reasoning: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
}

fn parse_type(raw: &str) -> Result<RecommendationType, AiError> {
    match raw {
        "priority" => Ok(RecommendationType::Priority),
        "strategy" => Ok(RecommendationType::Strategy),
        other => Err(AiError::internal(format!(
            "unknown recommendation type '{}' in storage",
            other
        ))),
    }
}

impl RecommendationDB {
    pub fn from_domain(
        user_id: &str,
        domain: NewRecommendation,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            task_id: domain.task_id,
            recommendation_type: domain.recommendation_type.as_str().to_string(),
            content: domain.content,
            reasoning: domain.reasoning,
            user_id: user_id.to_string(),
            created_at: now,
        }
    }

    pub fn into_domain(self) -> Result<Recommendation, AiError> {
        Ok(Recommendation {
            recommendation_type: parse_type(&self.recommendation_type)?,
            id: self.id,
            task_id: self.task_id,
            content: self.content,
            reasoning: self.reasoning,
            user_id: self.user_id,
            created_at: self.created_at,
        })
    }
}
