//! Streak domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive-day activity streak; one per user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    /// Length of the running streak, in days.
    pub current: i32,
    /// Best streak ever recorded.
    pub best: i32,
    /// Day the streak was last advanced; None before any activity.
    pub last_updated: Option<NaiveDate>,
    pub user_id: String,
}

impl Streak {
    /// An empty streak for a user with no recorded activity.
    pub fn empty(user_id: &str) -> Self {
        Streak {
            current: 0,
            best: 0,
            last_updated: None,
            user_id: user_id.to_string(),
        }
    }

    /// Record a qualifying day.
    ///
    /// Same day: no change. The day after `last_updated`: the streak grows.
    /// Anything else (first activity, a gap, or a clock moving backwards):
    /// the streak restarts at 1. `best` is raised to match `current`.
    pub fn record_day(&mut self, today: NaiveDate) {
        match self.last_updated {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                self.current += 1;
                self.last_updated = Some(today);
            }
            _ => {
                self.current = 1;
                self.last_updated = Some(today);
            }
        }
        self.best = self.best.max(self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn first_activity_starts_at_one() {
        let mut streak = Streak::empty("u1");
        streak.record_day(day(1));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.best, 1);
        assert_eq!(streak.last_updated, Some(day(1)));
    }

    #[test]
    fn same_day_is_idempotent() {
        let mut streak = Streak::empty("u1");
        streak.record_day(day(1));
        streak.record_day(day(1));
        assert_eq!(streak.current, 1);
    }

    #[test]
    fn consecutive_days_grow_the_streak() {
        let mut streak = Streak::empty("u1");
        streak.record_day(day(1));
        streak.record_day(day(2));
        streak.record_day(day(3));
        assert_eq!(streak.current, 3);
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn a_gap_resets_current_but_keeps_best() {
        let mut streak = Streak::empty("u1");
        streak.record_day(day(1));
        streak.record_day(day(2));
        streak.record_day(day(3));
        streak.record_day(day(10));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn best_tracks_a_new_high_water_mark() {
        let mut streak = Streak {
            current: 4,
            best: 4,
            last_updated: Some(day(4)),
            user_id: "u1".to_string(),
        };
        streak.record_day(day(5));
        assert_eq!(streak.current, 5);
        assert_eq!(streak.best, 5);
    }

    #[test]
    fn backwards_clock_resets_rather_than_panics() {
        let mut streak = Streak {
            current: 2,
            best: 2,
            last_updated: Some(day(10)),
            user_id: "u1".to_string(),
        };
        streak.record_day(day(8));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.best, 2);
    }
}
