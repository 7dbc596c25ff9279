use summit_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use summit_core::Result;

use super::model::{GoalChangesetDB, GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .filter(goals::user_id.eq(user_id))
            .order(goals::created_at.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals::table
            .filter(goals::user_id.eq(user_id))
            .filter(goals::id.eq(goal_id))
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Goal::from(goal_db))
    }

    async fn insert_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let new_goal_db = NewGoalDB::from_domain(user_id, new_goal, Utc::now().naive_utc());
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal(&self, user_id: &str, goal_update: GoalUpdate) -> Result<Goal> {
        let owner = user_id.to_string();
        let changeset = GoalChangesetDB::from_domain(&goal_update, Utc::now().naive_utc());
        let goal_id = goal_update.id;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let result_db = diesel::update(
                    goals::table
                        .filter(goals::id.eq(&goal_id))
                        .filter(goals::user_id.eq(&owner)),
                )
                .set(&changeset)
                .returning(GoalDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let owner = user_id.to_string();
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    goals::table
                        .filter(goals::id.eq(&goal_id))
                        .filter(goals::user_id.eq(&owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
