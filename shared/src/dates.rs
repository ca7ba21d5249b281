//! Calendar date helpers

use chrono::{Duration, NaiveDate};

/// Days shown on each side of today in the weekly view
pub const WEEK_RADIUS_DAYS: i64 = 3;

/// Format a date as the `YYYY-MM-DD` key used in storage and history maps
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Seven consecutive days centred on `today`: three before, today, three after
pub fn week_range(today: NaiveDate) -> Vec<NaiveDate> {
    (-WEEK_RADIUS_DAYS..=WEEK_RADIUS_DAYS)
        .map(|offset| today + Duration::days(offset))
        .collect()
}
