//! User profile preferences collected during onboarding.
//!
//! Personality, preference and motivator answers are free-form JSON
//! documents; the advisor prompts read a handful of well-known paths out
//! of them, everything else passes through untouched.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Domain model for a user's profile preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub user_id: String,
    pub personality: Value,
    pub preferences: Value,
    pub motivators: Value,
    pub updated_at: NaiveDateTime,
}

/// Partial update; omitted documents keep their stored value.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub personality: Option<Value>,
    pub preferences: Option<Value>,
    pub motivators: Option<Value>,
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl UserPreferences {
    /// An empty profile for a user who skipped onboarding.
    pub fn empty(user_id: &str, now: NaiveDateTime) -> Self {
        UserPreferences {
            user_id: user_id.to_string(),
            personality: Value::Null,
            preferences: Value::Null,
            motivators: Value::Null,
            updated_at: now,
        }
    }

    pub fn traits(&self) -> Vec<String> {
        string_list(&self.personality, "traits")
    }

    pub fn work_style(&self) -> Option<String> {
        string_field(&self.personality, "workStyle")
    }

    pub fn learning_style(&self) -> Option<String> {
        string_field(&self.personality, "learningStyle")
    }

    pub fn focus_areas(&self) -> Vec<String> {
        string_list(&self.preferences, "focusAreas")
    }

    pub fn environment(&self) -> Vec<String> {
        string_list(&self.preferences, "environment")
    }

    pub fn rewards(&self) -> Vec<String> {
        string_list(&self.motivators, "rewards")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn reads_known_profile_paths() {
        let prefs = UserPreferences {
            user_id: "u1".to_string(),
            personality: json!({
                "traits": ["curious", "driven"],
                "workStyle": "deep-focus",
                "learningStyle": "visual",
            }),
            preferences: json!({ "focusAreas": ["health"], "environment": ["quiet"] }),
            motivators: json!({ "rewards": ["coffee"] }),
            updated_at: now(),
        };

        assert_eq!(prefs.traits(), ["curious", "driven"]);
        assert_eq!(prefs.work_style().as_deref(), Some("deep-focus"));
        assert_eq!(prefs.learning_style().as_deref(), Some("visual"));
        assert_eq!(prefs.focus_areas(), ["health"]);
        assert_eq!(prefs.environment(), ["quiet"]);
        assert_eq!(prefs.rewards(), ["coffee"]);
    }

    #[test]
    fn missing_or_malformed_paths_read_as_empty() {
        let prefs = UserPreferences::empty("u1", now());
        assert!(prefs.traits().is_empty());
        assert!(prefs.work_style().is_none());

        let prefs = UserPreferences {
            personality: json!({ "traits": "not-an-array", "workStyle": "" }),
            ..prefs
        };
        assert!(prefs.traits().is_empty());
        assert!(prefs.work_style().is_none());
    }
}
