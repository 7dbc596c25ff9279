//! Preferences module - user profile documents.

mod preferences_model;
mod preferences_service;
mod preferences_traits;

pub use preferences_model::{PreferencesUpdate, UserPreferences};
pub use preferences_service::PreferenceService;
pub use preferences_traits::{PreferenceRepositoryTrait, PreferenceServiceTrait};
