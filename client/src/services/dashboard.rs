//! Dashboard service
//!
//! Combines the profile, food log, habits and catalog into the single
//! [`DashboardSummary`] the home screen renders.

use calorie_tracker_shared::aggregation::{macro_totals, total_consumed};
use calorie_tracker_shared::habits::tracked_habits;
use calorie_tracker_shared::{
    classify, CalorieStatus, DashboardSummary, FoodCatalog, FoodSuggestion, MessagePicker, Remaining,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::SuggestionConfig;
use crate::error::TrackerResult;
use crate::services::{HabitService, ProfileService};
use crate::storage::TrackerRepository;

/// Dashboard service for business logic
pub struct DashboardService;

impl DashboardService {
    /// Build the dashboard for `today`
    pub fn summary<R, P>(
        repo: &R,
        catalog: &FoodCatalog,
        picker: &mut P,
        suggestions: &SuggestionConfig,
        today: NaiveDate,
    ) -> TrackerResult<DashboardSummary>
    where
        R: TrackerRepository + ?Sized,
        P: MessagePicker + ?Sized,
    {
        let profile = ProfileService::current(repo)?;
        let entries = repo.get_daily_log(&profile.id)?;
        let day = HabitService::load_day(repo, &profile, today)?;

        let missing = entries.iter().filter(|e| catalog.find(&e.food_id).is_none()).count();
        if missing > 0 {
            warn!(
                user_id = %profile.id,
                missing,
                "Logged foods missing from the catalog are left out of the macros"
            );
        }

        let consumed = total_consumed(&entries);
        let remaining = Remaining::new(profile.daily_goal, consumed);
        let calorie_state = classify(profile.daily_goal, consumed, picker);
        let suggestion = Self::suggestion(catalog, calorie_state.status, remaining.deficit, suggestions);

        debug!(
            user_id = %profile.id,
            consumed,
            status = ?calorie_state.status,
            "Built dashboard"
        );

        Ok(DashboardSummary {
            user_name: profile.name.clone(),
            daily_goal: profile.daily_goal,
            consumed,
            remaining_state: remaining.state(),
            remaining,
            calorie_state,
            macros: macro_totals(&entries, catalog).rounded(),
            suggestion,
            entries,
            habits: tracked_habits(&profile.selected_habit_ids, &day),
        })
    }

    /// Foods to close the gap, only while the day is low by more than the threshold
    fn suggestion(
        catalog: &FoodCatalog,
        status: CalorieStatus,
        deficit: i32,
        config: &SuggestionConfig,
    ) -> Option<FoodSuggestion> {
        if status != CalorieStatus::Low || deficit <= config.min_deficit {
            return None;
        }
        catalog.suggest_for_deficit(
            deficit,
            config.staple_keywords.as_slice(),
            config.fruit_keywords.as_slice(),
        )
    }
}
