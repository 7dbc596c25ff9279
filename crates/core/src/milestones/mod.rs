//! Milestones module - domain models, services, and traits.

mod milestones_model;
mod milestones_service;
mod milestones_traits;

pub use milestones_model::{Milestone, MilestoneUpdate, NewMilestone};
pub use milestones_service::MilestoneService;
pub use milestones_traits::{MilestoneRepositoryTrait, MilestoneServiceTrait};
