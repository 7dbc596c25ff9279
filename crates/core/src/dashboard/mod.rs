//! Dashboard module - per-user aggregation facade.

mod dashboard_model;
mod dashboard_service;
mod dashboard_store;

pub use dashboard_model::{completion_rate, DashboardSnapshot};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
pub use dashboard_store::DashboardStore;
