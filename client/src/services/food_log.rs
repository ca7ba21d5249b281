//! Food logging service
//!
//! Provides business logic for the food log including:
//! - Logging a food with its calories frozen at write time
//! - Previewing an entry before it is logged
//! - The macro analysis of the logged day

use calorie_tracker_shared::aggregation::macro_analysis;
use calorie_tracker_shared::catalog::{preview, NutritionPreview};
use calorie_tracker_shared::dates::date_key;
use calorie_tracker_shared::validation::validate_quantity;
use calorie_tracker_shared::{AnalysisView, FoodCatalog, FoodItem, LogEntry, MealType};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};
use crate::services::ProfileService;
use crate::storage::TrackerRepository;

/// Food entry input
#[derive(Debug, Clone)]
pub struct LogFoodInput {
    pub food_id: String,
    /// grams or millilitres
    pub quantity: f64,
    pub meal_type: MealType,
}

/// Food log service for business logic
pub struct FoodLogService;

impl FoodLogService {
    /// Append a food to the active user's log
    pub fn log_food<R: TrackerRepository + ?Sized>(
        repo: &mut R,
        catalog: &FoodCatalog,
        input: LogFoodInput,
    ) -> TrackerResult<LogEntry> {
        let profile = ProfileService::current(repo)?;
        let food = Self::find_food(catalog, &input.food_id)?;
        validate_quantity(input.quantity).map_err(TrackerError::Validation)?;

        let entry = LogEntry::from_food(food, input.quantity, input.meal_type);

        let mut entries = repo.get_daily_log(&profile.id)?;
        entries.push(entry.clone());
        repo.save_daily_log(&profile.id, &entries)?;

        info!(
            user_id = %profile.id,
            food_id = %entry.food_id,
            quantity = entry.quantity,
            calories = entry.total_calories,
            "Food logged"
        );

        Ok(entry)
    }

    /// The active user's log in insertion order
    pub fn entries<R: TrackerRepository + ?Sized>(repo: &R) -> TrackerResult<Vec<LogEntry>> {
        let profile = ProfileService::current(repo)?;
        let entries = repo.get_daily_log(&profile.id)?;
        debug!(user_id = %profile.id, count = entries.len(), "Loaded food log");
        Ok(entries)
    }

    /// Calories and macros of a prospective entry
    pub fn preview(catalog: &FoodCatalog, food_id: &str, quantity: f64) -> TrackerResult<NutritionPreview> {
        let food = Self::find_food(catalog, food_id)?;
        validate_quantity(quantity).map_err(TrackerError::Validation)?;
        Ok(preview(food, quantity))
    }

    /// Macro split of the logged entries against the ideal distribution
    pub fn analysis<R: TrackerRepository + ?Sized>(
        repo: &R,
        catalog: &FoodCatalog,
        today: NaiveDate,
    ) -> TrackerResult<AnalysisView> {
        let entries = Self::entries(repo)?;
        Ok(AnalysisView {
            date_key: date_key(today),
            analysis: macro_analysis(&entries, catalog),
        })
    }

    fn find_food<'a>(catalog: &'a FoodCatalog, food_id: &str) -> TrackerResult<&'a FoodItem> {
        catalog
            .find(food_id)
            .ok_or_else(|| TrackerError::NotFound(format!("Food {}", food_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KvRepository, MemoryStore};
    use calorie_tracker_shared::{ActivityLevel, FoodCategory, Gender, UserProfile};
    use rstest::rstest;

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_items(vec![FoodItem {
            id: "f1".to_string(),
            name: "Arroz blanco cocido".to_string(),
            category: FoodCategory::Cereals,
            calories: 130.0,
            protein: 2.7,
            carbs: 28.0,
            fat: 0.3,
        }])
    }

    fn registered_repo() -> KvRepository<MemoryStore> {
        let mut repo = KvRepository::new(MemoryStore::new());
        repo.save_profile(&UserProfile {
            id: "user-1".to_string(),
            name: "Ana".to_string(),
            age: 25,
            weight: 70.0,
            height: 175.0,
            gender: Gender::Female,
            activity_level: ActivityLevel::Light,
            tmb: 1508,
            daily_goal: 2074,
            selected_habit_ids: Vec::new(),
        })
        .unwrap();
        repo
    }

    fn input(food_id: &str, quantity: f64) -> LogFoodInput {
        LogFoodInput {
            food_id: food_id.to_string(),
            quantity,
            meal_type: MealType::Dinner,
        }
    }

    #[test]
    fn test_log_food_appends_frozen_entry() {
        let mut repo = registered_repo();
        let first = FoodLogService::log_food(&mut repo, &catalog(), input("f1", 150.0)).unwrap();
        FoodLogService::log_food(&mut repo, &catalog(), input("f1", 100.0)).unwrap();

        assert_eq!(first.total_calories, 195);
        assert_eq!(first.food_name, "Arroz blanco cocido");

        let entries = FoodLogService::entries(&repo).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], first);
        assert_eq!(entries[1].total_calories, 130);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    fn test_invalid_quantity_rejected(#[case] quantity: f64) {
        let mut repo = registered_repo();
        let err = FoodLogService::log_food(&mut repo, &catalog(), input("f1", quantity)).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        assert!(FoodLogService::entries(&repo).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_food_not_found() {
        let mut repo = registered_repo();
        let err = FoodLogService::log_food(&mut repo, &catalog(), input("nope", 100.0)).unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(_)));
    }

    #[test]
    fn test_logging_requires_profile() {
        let mut repo = KvRepository::new(MemoryStore::new());
        let err = FoodLogService::log_food(&mut repo, &catalog(), input("f1", 100.0)).unwrap_err();
        assert!(err.requires_registration());
    }

    #[test]
    fn test_preview() {
        let p = FoodLogService::preview(&catalog(), "f1", 200.0).unwrap();
        assert_eq!(p.calories, 260);
        assert!(FoodLogService::preview(&catalog(), "f1", 0.5).is_err());
    }

    #[test]
    fn test_analysis_of_empty_log() {
        let repo = registered_repo();
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let view = FoodLogService::analysis(&repo, &catalog(), today).unwrap();
        assert_eq!(view.date_key, "2024-03-04");
        assert!(view.analysis.is_empty());
    }
}
