//! Summit Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Summit.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod achievements;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod milestones;
pub mod preferences;
pub mod streaks;
pub mod tasks;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
