//! Calorie Tracker Shared Library
//!
//! This crate contains the domain types and pure calculations used by the
//! client application and the WASM module: goal calculation, calorie status,
//! log aggregation, habit state and the storage key scheme.

pub mod adherence;
pub mod aggregation;
pub mod calorie_status;
pub mod catalog;
pub mod dates;
pub mod errors;
pub mod habits;
pub mod health_metrics;
pub mod keys;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use types::*;

pub use aggregation::{MacroAnalysis, MacroTotals, Remaining, RemainingState};
pub use calorie_status::{
    classify, evaluate, CalorieEvaluation, CalorieState, CalorieStatus, FixedPicker, MessagePicker,
    RngPicker,
};
pub use catalog::{FoodCatalog, FoodCategory, FoodItem, FoodSuggestion};
pub use habits::{DailyHabitLog, HabitDay, HabitDefinition, TrackedHabit, PRESET_HABITS};
pub use models::{LogEntry, MealType, ThemePreference, UserProfile};
pub use validation::RegistrationRequest;
