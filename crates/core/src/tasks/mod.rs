//! Tasks module - domain models, services, and traits.

mod ranking;
mod tasks_model;
mod tasks_service;
mod tasks_traits;

pub use ranking::rank_tasks;
pub use tasks_model::{NewTask, Task, TaskStatusUpdate, TaskUpdate};
pub use tasks_service::TaskService;
pub use tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
