//! Shared domain constants.

/// Accepted priority labels for goals and tasks, highest first.
pub const PRIORITIES: [&str; 3] = [PRIORITY_HIGH, PRIORITY_MEDIUM, PRIORITY_LOW];

pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_LOW: &str = "low";

/// Accepted goal time horizons.
pub const GOAL_TYPES: [&str; 3] = [GOAL_TYPE_LIFETIME, GOAL_TYPE_MEDIUM_TERM, GOAL_TYPE_DAILY];

pub const GOAL_TYPE_LIFETIME: &str = "lifetime";
pub const GOAL_TYPE_MEDIUM_TERM: &str = "medium-term";
pub const GOAL_TYPE_DAILY: &str = "daily";

/// Progress and impact scores are percentages.
pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 100;
