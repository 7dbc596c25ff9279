//! Streaks module - consecutive-day activity tracking.

mod streaks_model;
mod streaks_service;
mod streaks_traits;

pub use streaks_model::Streak;
pub use streaks_service::StreakService;
pub use streaks_traits::{StreakRepositoryTrait, StreakServiceTrait};
