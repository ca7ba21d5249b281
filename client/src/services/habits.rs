//! Daily habit service
//!
//! Habit records are kept per user and calendar day. Every mutation loads
//! the day, applies the change from [`HabitDay`] and writes the whole day
//! back.

use calorie_tracker_shared::habits::tracked_habits;
use calorie_tracker_shared::validation::normalize_habit_selection;
use calorie_tracker_shared::{HabitDay, TrackedHabit, UserProfile};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::TrackerResult;
use crate::services::ProfileService;
use crate::storage::TrackerRepository;

/// Habit service for business logic
pub struct HabitService;

impl HabitService {
    /// The active user's habit records for `date`; empty when none are stored
    pub fn day<R: TrackerRepository + ?Sized>(repo: &R, date: NaiveDate) -> TrackerResult<HabitDay> {
        let profile = ProfileService::current(repo)?;
        Self::load_day(repo, &profile, date)
    }

    /// Replace the habit selection and make sure `today` has a record for
    /// every selected habit
    pub fn save_selection<R: TrackerRepository + ?Sized, S: AsRef<str>>(
        repo: &mut R,
        selected: &[S],
        today: NaiveDate,
    ) -> TrackerResult<UserProfile> {
        let mut profile = ProfileService::current(repo)?;
        let selected = normalize_habit_selection(selected)?;

        profile.selected_habit_ids = selected;
        repo.save_profile(&profile)?;

        let mut day = Self::load_day(repo, &profile, today)?;
        day.initialize(&profile.selected_habit_ids);
        repo.save_habit_log(&profile.id, today, &day)?;

        info!(
            user_id = %profile.id,
            habits = profile.selected_habit_ids.len(),
            "Habit selection saved"
        );

        Ok(profile)
    }

    /// Flip one habit for `date`; returns its new completion state
    pub fn toggle<R: TrackerRepository + ?Sized>(
        repo: &mut R,
        habit_id: &str,
        date: NaiveDate,
    ) -> TrackerResult<bool> {
        let profile = ProfileService::current(repo)?;
        let mut day = Self::load_day(repo, &profile, date)?;
        let completed = day.toggle(habit_id);
        repo.save_habit_log(&profile.id, date, &day)?;

        debug!(user_id = %profile.id, habit_id = %habit_id, completed, "Habit toggled");
        Ok(completed)
    }

    /// Selected habits with their completion for `date`
    pub fn tracked<R: TrackerRepository + ?Sized>(
        repo: &R,
        date: NaiveDate,
    ) -> TrackerResult<Vec<TrackedHabit>> {
        let profile = ProfileService::current(repo)?;
        let day = Self::load_day(repo, &profile, date)?;
        Ok(tracked_habits(&profile.selected_habit_ids, &day))
    }

    pub(crate) fn load_day<R: TrackerRepository + ?Sized>(
        repo: &R,
        profile: &UserProfile,
        date: NaiveDate,
    ) -> TrackerResult<HabitDay> {
        Ok(repo.get_habit_log(&profile.id, date)?.unwrap_or_default())
    }
}
