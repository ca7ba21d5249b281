//! Input validation functions
//!
//! Only the minimal constraints of the registration and habit forms are
//! checked here. Uses both custom validators and the `validator` crate for
//! derive macros.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::habits::find_habit;
use crate::health_metrics::{ActivityLevel, Gender};

/// Minimum age accepted at registration (years)
pub const MIN_AGE_YEARS: u32 = 18;
/// Minimum weight accepted at registration (kg)
pub const MIN_WEIGHT_KG: f64 = 30.0;
/// Minimum height accepted at registration (cm)
pub const MIN_HEIGHT_CM: f64 = 100.0;
/// Largest quantity accepted for one log entry (g or ml)
pub const MAX_QUANTITY: f64 = 10_000.0;

/// Registration form input
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 18, message = "Age must be at least 18 years"))]
    pub age: u32,
    #[validate(range(min = 30.0, message = "Weight must be at least 30 kg"))]
    pub weight: f64,
    #[validate(range(min = 100.0, message = "Height must be at least 100 cm"))]
    pub height: f64,
    pub gender: Gender,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl Default for RegistrationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 25,
            weight: 70.0,
            height: 175.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
        }
    }
}

/// Validate that a number is usable in calculations
pub fn validate_finite(value: f64, field: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", get_field_display_label(field)));
    }
    Ok(())
}

/// Validate the registration form
pub fn validate_registration(req: &RegistrationRequest) -> Result<(), AppError> {
    validate_finite(req.weight, "weight").map_err(AppError::Validation)?;
    validate_finite(req.height, "height").map_err(AppError::Validation)?;
    if req.name.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "{}: Name is required",
            get_field_display_label("name")
        )));
    }
    req.validate()?;
    Ok(())
}

/// Validate a logged quantity (g or ml)
pub fn validate_quantity(quantity: f64) -> Result<(), String> {
    if quantity.is_nan() || quantity.is_infinite() {
        return Err("Quantity must be a valid number".to_string());
    }
    if quantity < 1.0 {
        return Err("Quantity must be at least 1".to_string());
    }
    if quantity > MAX_QUANTITY {
        return Err(format!("Quantity must be at most {}", MAX_QUANTITY));
    }
    Ok(())
}

/// Validate and normalize a habit selection.
///
/// The selection must be non-empty and reference preset habits. Duplicates
/// collapse, keeping first occurrence order.
pub fn normalize_habit_selection<S: AsRef<str>>(selected: &[S]) -> Result<Vec<String>, AppError> {
    let mut normalized: Vec<String> = Vec::with_capacity(selected.len());
    for id in selected {
        let id = id.as_ref();
        if find_habit(id).is_none() {
            return Err(AppError::Validation(format!("Unknown habit: {}", id)));
        }
        if !normalized.iter().any(|existing| existing == id) {
            normalized.push(id.to_string());
        }
    }
    if normalized.is_empty() {
        return Err(AppError::Validation("Select at least one habit".to_string()));
    }
    Ok(normalized)
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "age" => "Age",
        "weight" => "Weight",
        "height" => "Height",
        "gender" => "Gender",
        "activity_level" | "activityLevel" => "Activity Level",
        "quantity" => "Quantity",
        "meal_type" | "mealType" => "Meal",
        _ => field_name,
    }
}
