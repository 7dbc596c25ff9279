use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::tasks::ranking::rank_tasks;
use crate::tasks::tasks_model::{NewTask, Task, TaskStatusUpdate, TaskUpdate};
use crate::tasks::tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};

pub struct TaskService {
    task_repo: Arc<dyn TaskRepositoryTrait>,
}

impl TaskService {
    pub fn new(task_repo: Arc<dyn TaskRepositoryTrait>) -> Self {
        TaskService { task_repo }
    }
}

#[async_trait]
impl TaskServiceTrait for TaskService {
    async fn get_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        self.task_repo.load_tasks(user_id)
    }

    async fn get_task(&self, user_id: &str, task_id: &str) -> Result<Task> {
        self.task_repo.get_task(user_id, task_id)
    }

    async fn get_ranked_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        let tasks = self.task_repo.load_tasks(user_id)?;
        Ok(rank_tasks(&tasks))
    }

    async fn create_task(&self, user_id: &str, new_task: NewTask) -> Result<Task> {
        new_task.validate()?;
        self.task_repo.insert_task(user_id, new_task).await
    }

    async fn update_task(&self, user_id: &str, task_update: TaskUpdate) -> Result<Task> {
        task_update.validate()?;
        self.task_repo
            .update_task(user_id, task_update.normalized())
            .await
    }

    async fn set_task_status(
        &self,
        user_id: &str,
        task_id: &str,
        status: TaskStatusUpdate,
    ) -> Result<Task> {
        let task = self.task_repo.get_task(user_id, task_id)?;
        let update = task.apply_status(&status);
        self.task_repo.update_task(user_id, update).await
    }

    async fn delete_task(&self, user_id: &str, task_id: &str) -> Result<usize> {
        self.task_repo.delete_task(user_id, task_id).await
    }
}
