use summit_core::tasks::{NewTask, Task, TaskRepositoryTrait, TaskUpdate};
use summit_core::Result;

use super::model::{NewTaskDB, TaskChangesetDB, TaskDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::tasks;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct TaskRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TaskRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TaskRepository { pool, writer }
    }
}

#[async_trait]
impl TaskRepositoryTrait for TaskRepository {
    fn load_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        let mut conn = get_connection(&self.pool)?;
        let tasks_db = tasks::table
            .filter(tasks::user_id.eq(user_id))
            .order(tasks::created_at.asc())
            .load::<TaskDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(tasks_db.into_iter().map(Task::from).collect())
    }

    fn get_task(&self, user_id: &str, task_id: &str) -> Result<Task> {
        let mut conn = get_connection(&self.pool)?;
        let task_db = tasks::table
            .filter(tasks::user_id.eq(user_id))
            .filter(tasks::id.eq(task_id))
            .first::<TaskDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Task::from(task_db))
    }

    async fn insert_task(&self, user_id: &str, new_task: NewTask) -> Result<Task> {
        let new_task_db = NewTaskDB::from_domain(user_id, new_task, Utc::now().naive_utc());
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Task> {
                let result_db = diesel::insert_into(tasks::table)
                    .values(&new_task_db)
                    .returning(TaskDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Task::from(result_db))
            })
            .await
    }

    async fn update_task(&self, user_id: &str, task_update: TaskUpdate) -> Result<Task> {
        let owner = user_id.to_string();
        let changeset = TaskChangesetDB::from_domain(&task_update, Utc::now().naive_utc());
        let task_id = task_update.id;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Task> {
                let result_db = diesel::update(
                    tasks::table
                        .filter(tasks::id.eq(&task_id))
                        .filter(tasks::user_id.eq(&owner)),
                )
                .set(&changeset)
                .returning(TaskDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Task::from(result_db))
            })
            .await
    }

    async fn delete_task(&self, user_id: &str, task_id: &str) -> Result<usize> {
        let owner = user_id.to_string();
        let task_id = task_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    tasks::table
                        .filter(tasks::id.eq(&task_id))
                        .filter(tasks::user_id.eq(&owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
