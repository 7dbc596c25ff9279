use summit_ai::{
    AiError, NewRecommendation, Recommendation, RecommendationRepositoryTrait,
};
use summit_core::Error as CoreError;

use super::model::RecommendationDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::ai_recommendations;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct RecommendationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RecommendationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RecommendationRepository { pool, writer }
    }
}

fn to_ai_error(err: StorageError) -> AiError {
    AiError::Core(CoreError::from(err))
}

#[async_trait]
impl RecommendationRepositoryTrait for RecommendationRepository {
    fn load_recommendations(&self, user_id: &str) -> Result<Vec<Recommendation>, AiError> {
        let mut conn = get_connection(&self.pool).map_err(AiError::Core)?;
        let rows = ai_recommendations::table
            .filter(ai_recommendations::user_id.eq(user_id))
            .order(ai_recommendations::created_at.desc())
            .load::<RecommendationDB>(&mut conn)
            .map_err(StorageError::from)
            .map_err(to_ai_error)?;
        rows.into_iter().map(RecommendationDB::into_domain).collect()
    }

    async fn insert_recommendation(
        &self,
        user_id: &str,
        recommendation: NewRecommendation,
    ) -> Result<Recommendation, AiError> {
        let row = RecommendationDB::from_domain(user_id, recommendation, Utc::now().naive_utc());
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> summit_core::Result<RecommendationDB> {
                let result_db = diesel::insert_into(ai_recommendations::table)
                    .values(&row)
                    .returning(RecommendationDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db)
            })
            .await
            .map_err(AiError::Core)?
            .into_domain()
    }
}
