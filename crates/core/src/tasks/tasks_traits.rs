use crate::errors::Result;
use crate::tasks::tasks_model::{NewTask, Task, TaskStatusUpdate, TaskUpdate};
use async_trait::async_trait;

/// Trait for task repository operations
#[async_trait]
pub trait TaskRepositoryTrait: Send + Sync {
    fn load_tasks(&self, user_id: &str) -> Result<Vec<Task>>;
    fn get_task(&self, user_id: &str, task_id: &str) -> Result<Task>;
    async fn insert_task(&self, user_id: &str, new_task: NewTask) -> Result<Task>;
    async fn update_task(&self, user_id: &str, task_update: TaskUpdate) -> Result<Task>;
    async fn delete_task(&self, user_id: &str, task_id: &str) -> Result<usize>;
}

/// Trait for task service operations
#[async_trait]
pub trait TaskServiceTrait: Send + Sync {
    async fn get_tasks(&self, user_id: &str) -> Result<Vec<Task>>;
    async fn get_task(&self, user_id: &str, task_id: &str) -> Result<Task>;
    async fn get_ranked_tasks(&self, user_id: &str) -> Result<Vec<Task>>;
    async fn create_task(&self, user_id: &str, new_task: NewTask) -> Result<Task>;
    async fn update_task(&self, user_id: &str, task_update: TaskUpdate) -> Result<Task>;
    async fn set_task_status(
        &self,
        user_id: &str,
        task_id: &str,
        status: TaskStatusUpdate,
    ) -> Result<Task>;
    async fn delete_task(&self, user_id: &str, task_id: &str) -> Result<usize>;
}
