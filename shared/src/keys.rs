//! Storage key scheme
//!
//! Every persisted record lives under a key derived here and nowhere else.
//! Keys are stable for the same inputs and never collide across users or
//! calendar days.

use chrono::{DateTime, NaiveDate, Utc};

use crate::dates::date_key;

/// Key of the single active profile on this device
pub const PROFILE_KEY: &str = "userProfile";

/// Key of the persisted theme preference
pub const THEME_KEY: &str = "theme";

const DAILY_LOG_PREFIX: &str = "dailyLog_";
const HABITS_PREFIX: &str = "habits_";

/// Key of a user's food log.
///
/// Keyed by user only, so the log spans every day the user has logged food.
/// The habit log below is per day; whether the food log should be too is an
/// open product question.
pub fn daily_log_key(user_id: &str) -> String {
    format!("{}{}", DAILY_LOG_PREFIX, user_id)
}

/// Key of a user's habit records for one calendar day
pub fn habit_key(user_id: &str, date: NaiveDate) -> String {
    format!("{}{}_{}", HABITS_PREFIX, user_id, date_key(date))
}

/// Key of a user's habit records for the UTC calendar day of `at`
pub fn habit_key_at(user_id: &str, at: DateTime<Utc>) -> String {
    habit_key(user_id, at.date_naive())
}
