use summit_core::milestones::{
    Milestone, MilestoneRepositoryTrait, MilestoneUpdate, NewMilestone,
};
use summit_core::Result;

use super::model::{MilestoneChangesetDB, MilestoneDB, NewMilestoneDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::milestones;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct MilestoneRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MilestoneRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MilestoneRepository { pool, writer }
    }
}

#[async_trait]
impl MilestoneRepositoryTrait for MilestoneRepository {
    fn load_milestones(&self, user_id: &str) -> Result<Vec<Milestone>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = milestones::table
            .filter(milestones::user_id.eq(user_id))
            .order(milestones::due_date.asc())
            .load::<MilestoneDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Milestone::from).collect())
    }

    async fn insert_milestone(
        &self,
        user_id: &str,
        new_milestone: NewMilestone,
    ) -> Result<Milestone> {
        let row = NewMilestoneDB::from_domain(user_id, new_milestone, Utc::now().naive_utc());
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Milestone> {
                let result_db = diesel::insert_into(milestones::table)
                    .values(&row)
                    .returning(MilestoneDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Milestone::from(result_db))
            })
            .await
    }

    async fn update_milestone(
        &self,
        user_id: &str,
        milestone_update: MilestoneUpdate,
    ) -> Result<Milestone> {
        let owner = user_id.to_string();
        let changeset = MilestoneChangesetDB::from_domain(&milestone_update, Utc::now().naive_utc());
        let milestone_id = milestone_update.id;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Milestone> {
                let result_db = diesel::update(
                    milestones::table
                        .filter(milestones::id.eq(&milestone_id))
                        .filter(milestones::user_id.eq(&owner)),
                )
                .set(&changeset)
                .returning(MilestoneDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Milestone::from(result_db))
            })
            .await
    }

    async fn delete_milestone(&self, user_id: &str, milestone_id: &str) -> Result<usize> {
        let owner = user_id.to_string();
        let milestone_id = milestone_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    milestones::table
                        .filter(milestones::id.eq(&milestone_id))
                        .filter(milestones::user_id.eq(&owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
