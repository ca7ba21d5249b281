//! View types handed to the presentation layer

use serde::Serialize;

use crate::aggregation::{MacroAnalysis, Remaining, RemainingState, RoundedMacros};
use crate::calorie_status::CalorieState;
use crate::catalog::FoodSuggestion;
use crate::habits::TrackedHabit;
use crate::models::LogEntry;

/// Everything the dashboard shows for the active user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user_name: String,
    pub daily_goal: i32,
    pub consumed: i32,
    pub remaining: Remaining,
    pub remaining_state: RemainingState,
    pub calorie_state: CalorieState,
    pub macros: RoundedMacros,
    /// Present only while the day is `low` with more than 100 kcal left
    pub suggestion: Option<FoodSuggestion>,
    pub entries: Vec<LogEntry>,
    pub habits: Vec<TrackedHabit>,
}

/// The history/analysis page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    /// `YYYY-MM-DD` of the analysed day
    pub date_key: String,
    pub analysis: MacroAnalysis,
}
