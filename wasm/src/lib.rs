//! Calorie Tracker WASM Module
//!
//! This crate provides WebAssembly bindings for the calculations the browser
//! front end runs locally. Structured results cross the boundary as JSON
//! strings in the same camelCase shape the client persists.

use calorie_tracker_shared::adherence::{weekly_adherence, UserHistory};
use calorie_tracker_shared::aggregation::{macro_analysis, Remaining};
use calorie_tracker_shared::{
    classify, ActivityLevel, FoodCatalog, Gender, LogEntry, RngPicker,
};
use chrono::NaiveDate;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn parse_activity_level(level: &str) -> Option<ActivityLevel> {
    serde_json::from_value(serde_json::Value::String(level.to_string())).ok()
}

fn to_json<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}

/// Basal metabolic rate (Mifflin-St Jeor), rounded to whole kcal
#[wasm_bindgen]
pub fn compute_tmb(weight_kg: f64, height_cm: f64, age_years: u32, is_male: bool) -> i32 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    calorie_tracker_shared::compute_tmb(weight_kg, height_cm, age_years, gender)
}

/// Daily caloric goal for an activity level name such as `"Moderate"`.
///
/// Returns `undefined` for unknown levels.
#[wasm_bindgen]
pub fn compute_daily_goal(tmb: i32, activity_level: &str) -> Option<i32> {
    parse_activity_level(activity_level)
        .map(|level| calorie_tracker_shared::compute_daily_goal(tmb, level))
}

/// Calorie status, message and progress as JSON.
///
/// `seed` drives the message choice so the caller controls randomness.
#[wasm_bindgen]
pub fn classify_calories(goal: i32, consumed: i32, seed: u32) -> Option<String> {
    let mut picker = RngPicker(SmallRng::seed_from_u64(u64::from(seed)));
    to_json(&classify(goal, consumed, &mut picker))
}

/// `{"remaining": .., "deficit": ..}` for the day
#[wasm_bindgen]
pub fn remaining_calories(goal: i32, consumed: i32) -> Option<String> {
    to_json(&Remaining::new(goal, consumed))
}

/// Macro analysis of a JSON log against a JSON catalog.
///
/// Returns `undefined` when either document does not parse.
#[wasm_bindgen]
pub fn macro_analysis_json(entries_json: &str, catalog_json: &str) -> Option<String> {
    let entries: Vec<LogEntry> = serde_json::from_str(entries_json).ok()?;
    let catalog = FoodCatalog::from_json(catalog_json).ok()?;
    to_json(&macro_analysis(&entries, &catalog))
}

/// Seven days of adherence centred on `today` (`YYYY-MM-DD`).
///
/// `history_json` maps `YYYY-MM-DD` to that day's log entries.
#[wasm_bindgen]
pub fn weekly_adherence_json(today: &str, daily_goal: i32, history_json: &str) -> Option<String> {
    let today = NaiveDate::parse_from_str(today, "%Y-%m-%d").ok()?;
    let history: UserHistory = serde_json::from_str(history_json).ok()?;
    to_json(&weekly_adherence(today, daily_goal, &history))
}
