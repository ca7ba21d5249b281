//! Weekly calorie adherence

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregation::total_consumed;
use crate::calorie_status::{evaluate, progress_percentage, CalorieStatus};
use crate::dates::{date_key, week_range};
use crate::models::LogEntry;

/// Display cap for a day's progress bar (%)
pub const ADHERENCE_DISPLAY_CAP: i32 = 120;

/// Food log grouped by calendar day
pub type UserHistory = BTreeMap<NaiveDate, Vec<LogEntry>>;

/// Metrics for one day of the weekly view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAdherence {
    pub date: NaiveDate,
    pub date_key: String,
    pub consumed: i32,
    /// Progress toward the goal, capped at 120
    pub percentage: i32,
    /// None for days that have not happened yet
    pub status: Option<CalorieStatus>,
    pub is_future: bool,
    pub is_today: bool,
}

/// Metrics for `date`; days after `today` report no progress
pub fn daily_metrics(
    date: NaiveDate,
    daily_goal: i32,
    history: &UserHistory,
    today: NaiveDate,
) -> DailyAdherence {
    let consumed = history.get(&date).map_or(0, |entries| total_consumed(entries));
    let is_future = date > today;
    let (percentage, status) = if is_future {
        (0, None)
    } else {
        (
            progress_percentage(daily_goal, consumed),
            Some(evaluate(daily_goal, consumed).status),
        )
    };

    DailyAdherence {
        date,
        date_key: date_key(date),
        consumed,
        percentage: percentage.min(ADHERENCE_DISPLAY_CAP),
        status,
        is_future,
        is_today: date == today,
    }
}

/// Metrics for the seven days centred on `today`
pub fn weekly_adherence(today: NaiveDate, daily_goal: i32, history: &UserHistory) -> Vec<DailyAdherence> {
    week_range(today)
        .into_iter()
        .map(|date| daily_metrics(date, daily_goal, history, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use chrono::Duration;

    fn entry(kcal: i32) -> LogEntry {
        LogEntry {
            food_id: "f1".to_string(),
            food_name: "Arroz".to_string(),
            quantity: 100.0,
            meal_type: MealType::Lunch,
            total_calories: kcal,
        }
    }

    #[test]
    fn test_weekly_adherence() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let mut history = UserHistory::new();
        history.insert(today - Duration::days(1), vec![entry(1500), entry(600)]);
        history.insert(today, vec![entry(2600)]);
        history.insert(today + Duration::days(1), vec![entry(900)]);

        let week = weekly_adherence(today, 2000, &history);
        assert_eq!(week.len(), 7);

        let empty_day = &week[0];
        assert_eq!(empty_day.consumed, 0);
        assert_eq!(empty_day.status, Some(CalorieStatus::Low));

        let yesterday = &week[2];
        assert_eq!(yesterday.consumed, 2100);
        assert_eq!(yesterday.percentage, 105);
        assert_eq!(yesterday.status, Some(CalorieStatus::High));

        let today_metrics = &week[3];
        assert!(today_metrics.is_today);
        assert!(!today_metrics.is_future);
        assert_eq!(today_metrics.percentage, ADHERENCE_DISPLAY_CAP);

        let tomorrow = &week[4];
        assert!(tomorrow.is_future);
        assert_eq!(tomorrow.consumed, 900);
        assert_eq!(tomorrow.percentage, 0);
        assert_eq!(tomorrow.status, None);
    }

    #[test]
    fn test_zero_goal_reports_zero_percent() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let mut history = UserHistory::new();
        history.insert(today, vec![entry(300)]);
        let metrics = daily_metrics(today, 0, &history, today);
        assert_eq!(metrics.percentage, 0);
        assert_eq!(metrics.date_key, "2024-05-15");
    }
}
