//! Persisted data models
//!
//! Field names serialize in camelCase, which is the shape stored under the
//! keys of [`crate::keys`].

use serde::{Deserialize, Serialize};

use crate::catalog::FoodItem;
use crate::health_metrics::{ActivityLevel, Biometrics, Gender};

/// The registered user. At most one profile is active on a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    /// kg
    pub weight: f64,
    /// cm
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    /// Derived at registration, never edited
    pub tmb: i32,
    /// Derived at registration, never edited
    pub daily_goal: i32,
    #[serde(default)]
    pub selected_habit_ids: Vec<String>,
}

impl UserProfile {
    pub fn biometrics(&self) -> Biometrics {
        Biometrics {
            weight_kg: self.weight,
            height_cm: self.height,
            age_years: self.age,
            gender: self.gender,
            activity_level: self.activity_level,
        }
    }
}

/// Meal a food was eaten at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

/// One logged food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub food_id: String,
    /// Copied from the catalog when the entry was written
    pub food_name: String,
    /// g or ml
    pub quantity: f64,
    pub meal_type: MealType,
    /// Frozen at entry time, never recomputed
    pub total_calories: i32,
}

impl LogEntry {
    /// Build an entry for `quantity` units of `food`, freezing its calories
    pub fn from_food(food: &FoodItem, quantity: f64, meal_type: MealType) -> Self {
        Self {
            food_id: food.id.clone(),
            food_name: food.name.clone(),
            quantity,
            meal_type,
            total_calories: food.calories_for(quantity),
        }
    }
}

/// Persisted UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::food;
    use crate::catalog::FoodCategory;
    use serde_json::json;

    #[test]
    fn test_log_entry_freezes_rounded_calories() {
        let item = food("f9", "Pan integral", FoodCategory::Cereals, 247.0);
        let entry = LogEntry::from_food(&item, 30.0, MealType::Breakfast);
        // 247 * 0.3 = 74.1
        assert_eq!(entry.total_calories, 74);
        assert_eq!(entry.food_name, "Pan integral");
    }

    #[test]
    fn test_log_entry_json_shape() {
        let entry = LogEntry {
            food_id: "f1".to_string(),
            food_name: "Arroz".to_string(),
            quantity: 150.0,
            meal_type: MealType::Dinner,
            total_calories: 195,
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "foodId": "f1",
                "foodName": "Arroz",
                "quantity": 150.0,
                "mealType": "Dinner",
                "totalCalories": 195
            })
        );
    }

    #[test]
    fn test_profile_reads_stored_shape() {
        let stored = json!({
            "id": "user-1700000000000",
            "name": "Ana",
            "age": 30,
            "weight": 60,
            "height": 165,
            "gender": "Female",
            "activityLevel": "Light",
            "tmb": 1320,
            "dailyGoal": 1815,
            "selectedHabitIds": ["h001", "h006"]
        });
        let profile: UserProfile = serde_json::from_value(stored).unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::Light);
        assert_eq!(profile.selected_habit_ids, vec!["h001", "h006"]);
        assert_eq!(profile.biometrics().weight_kg, 60.0);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
    }
}
