use crate::errors::Result;
use crate::preferences::preferences_model::{PreferencesUpdate, UserPreferences};
use async_trait::async_trait;

/// Trait for preference repository operations
#[async_trait]
pub trait PreferenceRepositoryTrait: Send + Sync {
    fn get_preferences(&self, user_id: &str) -> Result<Option<UserPreferences>>;
    async fn upsert_preferences(
        &self,
        user_id: &str,
        update: PreferencesUpdate,
    ) -> Result<UserPreferences>;
}

/// Trait for preference service operations
#[async_trait]
pub trait PreferenceServiceTrait: Send + Sync {
    async fn get_preferences(&self, user_id: &str) -> Result<UserPreferences>;
    async fn update_preferences(
        &self,
        user_id: &str,
        update: PreferencesUpdate,
    ) -> Result<UserPreferences>;
}
