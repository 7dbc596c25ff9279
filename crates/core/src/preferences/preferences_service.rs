use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::Result;
use crate::preferences::preferences_model::{PreferencesUpdate, UserPreferences};
use crate::preferences::preferences_traits::{PreferenceRepositoryTrait, PreferenceServiceTrait};

pub struct PreferenceService {
    preference_repo: Arc<dyn PreferenceRepositoryTrait>,
}

impl PreferenceService {
    pub fn new(preference_repo: Arc<dyn PreferenceRepositoryTrait>) -> Self {
        PreferenceService { preference_repo }
    }
}

#[async_trait]
impl PreferenceServiceTrait for PreferenceService {
    async fn get_preferences(&self, user_id: &str) -> Result<UserPreferences> {
        Ok(self
            .preference_repo
            .get_preferences(user_id)?
            .unwrap_or_else(|| UserPreferences::empty(user_id, Utc::now().naive_utc())))
    }

    async fn update_preferences(
        &self,
        user_id: &str,
        update: PreferencesUpdate,
    ) -> Result<UserPreferences> {
        self.preference_repo
            .upsert_preferences(user_id, update)
            .await
    }
}
