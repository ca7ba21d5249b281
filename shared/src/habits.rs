//! Habit catalog and per-day habit state

use serde::{Deserialize, Serialize};

/// How a habit is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitUnit {
    Checked,
    Quantity,
}

/// Habit group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Nutrition,
    Movement,
    Mind,
}

/// Static habit definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HabitDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub target: &'static str,
    pub unit: HabitUnit,
    pub category: HabitCategory,
}

const fn checked(
    id: &'static str,
    name: &'static str,
    target: &'static str,
    category: HabitCategory,
) -> HabitDefinition {
    HabitDefinition {
        id,
        name,
        target,
        unit: HabitUnit::Checked,
        category,
    }
}

/// Every habit a user can choose to track
pub const PRESET_HABITS: [HabitDefinition; 16] = [
    checked("h001", "Drink Water", "2 liters", HabitCategory::Nutrition),
    checked("h002", "Eat Fruits and Vegetables", "5 servings", HabitCategory::Nutrition),
    checked("h003", "Protein Breakfast", "Complete", HabitCategory::Nutrition),
    checked("h004", "Avoid Sugary Drinks", "All day", HabitCategory::Nutrition),
    checked("h005", "Eat Slowly and Mindfully", "20 minutes", HabitCategory::Nutrition),
    checked("h006", "Daily Walk", "30 minutes", HabitCategory::Movement),
    checked("h007", "Strength Training", "Session", HabitCategory::Movement),
    checked("h008", "Stretching or Mobility", "10 minutes", HabitCategory::Movement),
    checked("h009", "Get Some Sun", "15 minutes", HabitCategory::Movement),
    checked("h010", "Meditation/Mindfulness", "10 minutes", HabitCategory::Mind),
    checked("h011", "Screens Off", "1h before bed", HabitCategory::Mind),
    checked("h012", "Reading (Not Work)", "15 minutes", HabitCategory::Mind),
    checked("h013", "Journal/Gratitude", "Write", HabitCategory::Mind),
    checked("h014", "Sleep Enough", "7-9 hours", HabitCategory::Mind),
    checked("h015", "Plan the Day", "5 minutes", HabitCategory::Mind),
    checked("h016", "Tidy the Desk", "Quick", HabitCategory::Mind),
];

/// Look up a preset habit
pub fn find_habit(id: &str) -> Option<&'static HabitDefinition> {
    PRESET_HABITS.iter().find(|h| h.id == id)
}

/// Completion record for one habit on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHabitLog {
    pub habit_id: String,
    pub is_completed: bool,
    /// Reserved for quantity habits; toggling ignores it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
}

impl DailyHabitLog {
    pub fn new(habit_id: impl Into<String>, is_completed: bool) -> Self {
        Self {
            habit_id: habit_id.into(),
            is_completed,
            current_value: None,
        }
    }
}

/// Habit records of one user for one day.
///
/// Records are only ever added or overwritten, never removed; habits dropped
/// from the selection keep their history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitDay {
    records: Vec<DailyHabitLog>,
}

impl HabitDay {
    pub fn new(records: Vec<DailyHabitLog>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DailyHabitLog] {
        &self.records
    }

    pub fn get(&self, habit_id: &str) -> Option<&DailyHabitLog> {
        self.records.iter().find(|r| r.habit_id == habit_id)
    }

    /// Whether the habit is done today; missing records count as not done
    pub fn is_completed(&self, habit_id: &str) -> bool {
        self.get(habit_id).map_or(false, |r| r.is_completed)
    }

    /// Add an incomplete record for every selected habit without one
    pub fn initialize<S: AsRef<str>>(&mut self, selected_ids: &[S]) {
        for id in selected_ids {
            let id = id.as_ref();
            if self.get(id).is_none() {
                self.records.push(DailyHabitLog::new(id, false));
            }
        }
    }

    /// Flip a habit's completion. The first toggle of a day marks it done.
    ///
    /// Returns the new completion state.
    pub fn toggle(&mut self, habit_id: &str) -> bool {
        match self.records.iter_mut().find(|r| r.habit_id == habit_id) {
            Some(record) => {
                record.is_completed = !record.is_completed;
                record.is_completed
            }
            None => {
                self.records.push(DailyHabitLog::new(habit_id, true));
                true
            }
        }
    }
}

/// A selected habit joined with today's completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedHabit {
    pub habit_id: &'static str,
    pub name: &'static str,
    pub target: &'static str,
    pub is_completed: bool,
}

/// Selected habits in catalog order with their completion for `day`
pub fn tracked_habits<S: AsRef<str>>(selected_ids: &[S], day: &HabitDay) -> Vec<TrackedHabit> {
    PRESET_HABITS
        .iter()
        .filter(|def| selected_ids.iter().any(|id| id.as_ref() == def.id))
        .map(|def| TrackedHabit {
            habit_id: def.id,
            name: def.name,
            target: def.target,
            is_completed: day.is_completed(def.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_preset_catalog() {
        assert_eq!(PRESET_HABITS.len(), 16);
        let ids: std::collections::HashSet<_> = PRESET_HABITS.iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), 16);
        assert_eq!(find_habit("h006").unwrap().category, HabitCategory::Movement);
        assert!(find_habit("h999").is_none());
    }

    #[test]
    fn test_first_toggle_marks_done() {
        let mut day = HabitDay::default();
        assert!(day.toggle("h001"));
        assert_eq!(day.records(), &[DailyHabitLog::new("h001", true)]);
    }

    #[test]
    fn test_toggle_flips_existing_record() {
        let mut day = HabitDay::new(vec![DailyHabitLog::new("h001", false)]);
        assert!(day.toggle("h001"));
        assert!(!day.toggle("h001"));
        assert_eq!(day.records().len(), 1);
    }

    #[test]
    fn test_initialize_only_adds_missing() {
        let mut day = HabitDay::new(vec![DailyHabitLog::new("h002", true)]);
        day.initialize(&["h001", "h002", "h003"]);
        assert_eq!(
            day.records(),
            &[
                DailyHabitLog::new("h002", true),
                DailyHabitLog::new("h001", false),
                DailyHabitLog::new("h003", false),
            ]
        );
    }

    #[test]
    fn test_tracked_habits_catalog_order() {
        let day = HabitDay::new(vec![DailyHabitLog::new("h010", true)]);
        let tracked = tracked_habits(&["h010", "h001"], &day);
        assert_eq!(tracked.len(), 2);
        assert_eq!(tracked[0].habit_id, "h001");
        assert!(!tracked[0].is_completed);
        assert_eq!(tracked[1].habit_id, "h010");
        assert!(tracked[1].is_completed);
    }

    #[test]
    fn test_habit_day_json_is_plain_array() {
        let day = HabitDay::new(vec![DailyHabitLog::new("h001", true)]);
        assert_eq!(
            serde_json::to_string(&day).unwrap(),
            r#"[{"habitId":"h001","isCompleted":true}]"#
        );
        let parsed: HabitDay =
            serde_json::from_str(r#"[{"habitId":"h004","isCompleted":false,"currentValue":2}]"#).unwrap();
        assert_eq!(parsed.get("h004").unwrap().current_value, Some(2.0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: toggling twice restores the original value
        #[test]
        fn prop_double_toggle_restores(
            completed in proptest::collection::vec(any::<bool>(), 1..16),
            pick in 0usize..16
        ) {
            let records: Vec<DailyHabitLog> = completed
                .iter()
                .enumerate()
                .map(|(i, c)| DailyHabitLog::new(PRESET_HABITS[i].id, *c))
                .collect();
            let target = records[pick % records.len()].habit_id.clone();
            let mut day = HabitDay::new(records);
            let before = day.clone();
            day.toggle(&target);
            day.toggle(&target);
            prop_assert_eq!(day, before);
        }

        /// Property: initializing twice is the same as once
        #[test]
        fn prop_initialize_idempotent(picks in proptest::collection::vec(0usize..16, 0..16)) {
            let ids: Vec<&str> = picks.iter().map(|i| PRESET_HABITS[*i].id).collect();
            let mut once = HabitDay::default();
            once.initialize(&ids);
            let mut twice = once.clone();
            twice.initialize(&ids);
            prop_assert_eq!(once, twice);
        }
    }
}
