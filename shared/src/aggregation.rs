//! Food log aggregation
//!
//! Consumed calories come from the value frozen on each [`LogEntry`], while
//! macros are recomputed from the current catalog. The two totals therefore
//! drift apart when the catalog changes after an entry was written, and an
//! entry whose food is no longer in the catalog still counts toward calories
//! but contributes no macros.

use serde::{Deserialize, Serialize};

use crate::catalog::FoodCatalog;
use crate::health_metrics::round_half_up;
use crate::models::LogEntry;

/// kcal per gram of protein
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const CARBS_KCAL_PER_G: f64 = 4.0;
/// kcal per gram of fat
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Ideal protein share of macro calories (%)
pub const IDEAL_PROTEIN_PERCENT: i32 = 35;
/// Ideal carbohydrate share of macro calories (%)
pub const IDEAL_CARBS_PERCENT: i32 = 40;
/// Ideal fat share of macro calories (%)
pub const IDEAL_FAT_PERCENT: i32 = 25;
/// Deviation from the ideal share that gets flagged (%)
pub const MACRO_DEVIATION_THRESHOLD: i32 = 5;

/// Sum of the frozen per-entry calories, saturating at the `i32` bounds
pub fn total_consumed(entries: &[LogEntry]) -> i32 {
    entries
        .iter()
        .fold(0i32, |total, e| total.saturating_add(e.total_calories))
}

/// Unrounded macro totals in grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Macro totals rounded for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundedMacros {
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
    /// Rounded sum of the unrounded grams
    pub total: i32,
}

impl MacroTotals {
    /// Round only at presentation time
    pub fn rounded(&self) -> RoundedMacros {
        RoundedMacros {
            protein: round_half_up(self.protein),
            carbs: round_half_up(self.carbs),
            fat: round_half_up(self.fat),
            total: round_half_up(self.protein + self.carbs + self.fat),
        }
    }

    /// Energy from macros: 4/4/9 kcal per gram
    pub fn calories(&self) -> MacroCalories {
        MacroCalories {
            protein: self.protein * PROTEIN_KCAL_PER_G,
            carbs: self.carbs * CARBS_KCAL_PER_G,
            fat: self.fat * FAT_KCAL_PER_G,
        }
    }
}

/// Energy contributed by each macro, in kcal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroCalories {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroCalories {
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Accumulate macros for every entry whose food is still in the catalog.
///
/// Entries referencing a missing food are skipped here only; their frozen
/// calories remain in [`total_consumed`].
pub fn macro_totals(entries: &[LogEntry], catalog: &FoodCatalog) -> MacroTotals {
    entries
        .iter()
        .filter_map(|entry| catalog.find(&entry.food_id).map(|food| (entry, food)))
        .fold(MacroTotals::default(), |acc, (entry, food)| {
            let ratio = entry.quantity / 100.0;
            MacroTotals {
                protein: acc.protein + food.protein * ratio,
                carbs: acc.carbs + food.carbs * ratio,
                fat: acc.fat + food.fat * ratio,
            }
        })
}

/// Where the day stands against the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "kcal", rename_all = "camelCase")]
pub enum RemainingState {
    /// Budget left
    Remaining(i32),
    /// Over budget
    Exceeded(i32),
    GoalReached,
}

/// Remaining budget for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remaining {
    /// goal - consumed, may be negative
    pub remaining: i32,
    /// max(0, remaining)
    pub deficit: i32,
}

impl Remaining {
    pub fn new(daily_goal: i32, consumed: i32) -> Self {
        let remaining = daily_goal.saturating_sub(consumed);
        Self {
            remaining,
            deficit: remaining.max(0),
        }
    }

    pub fn state(&self) -> RemainingState {
        match self.remaining {
            r if r > 0 => RemainingState::Remaining(r),
            r if r < 0 => RemainingState::Exceeded(r.saturating_neg()),
            _ => RemainingState::GoalReached,
        }
    }
}

/// Share of macro calories per macro; always sums to 100 when non-empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroBreakdown {
    pub protein_percent: i32,
    pub carbs_percent: i32,
    /// Derived as 100 - protein - carbs
    pub fat_percent: i32,
    /// Total kcal recomputed from macros
    pub grand_total_calories: f64,
}

/// Convert macro grams to a calorie percentage split
pub fn macro_breakdown(totals: &MacroTotals) -> MacroBreakdown {
    let calories = totals.calories();
    let grand_total = calories.total();
    if grand_total <= 0.0 {
        return MacroBreakdown::default();
    }
    let protein_percent = round_half_up(calories.protein / grand_total * 100.0);
    let carbs_percent = round_half_up(calories.carbs / grand_total * 100.0);
    MacroBreakdown {
        protein_percent,
        carbs_percent,
        fat_percent: 100i32.saturating_sub(protein_percent).saturating_sub(carbs_percent),
        grand_total_calories: grand_total,
    }
}

/// Direction of a macro's deviation from the ideal split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MacroDeviation {
    Above,
    Below,
    WithinRange,
}

impl MacroDeviation {
    pub fn of(actual: i32, ideal: i32) -> Self {
        if actual.saturating_sub(ideal).saturating_abs() <= MACRO_DEVIATION_THRESHOLD {
            MacroDeviation::WithinRange
        } else if actual > ideal {
            MacroDeviation::Above
        } else {
            MacroDeviation::Below
        }
    }
}

/// One macro row of the analysis view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroShare {
    pub percent: i32,
    pub ideal_percent: i32,
    pub grams: i32,
    pub deviation: MacroDeviation,
}

impl MacroShare {
    fn new(percent: i32, ideal_percent: i32, grams: i32) -> Self {
        Self {
            percent,
            ideal_percent,
            grams,
            deviation: MacroDeviation::of(percent, ideal_percent),
        }
    }
}

/// Macro analysis of a log compared to the ideal split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroAnalysis {
    /// Frozen calories of the log
    pub total_calories: i32,
    /// Calories recomputed from macros
    pub grand_total_calories: f64,
    pub protein: MacroShare,
    pub carbs: MacroShare,
    pub fat: MacroShare,
}

impl MacroAnalysis {
    /// Nothing to analyse until some macro calories are logged
    pub fn is_empty(&self) -> bool {
        self.grand_total_calories <= 0.0
    }
}

/// Build the macro analysis for a log
pub fn macro_analysis(entries: &[LogEntry], catalog: &FoodCatalog) -> MacroAnalysis {
    let totals = macro_totals(entries, catalog);
    let breakdown = macro_breakdown(&totals);
    let grams = totals.rounded();
    MacroAnalysis {
        total_calories: total_consumed(entries),
        grand_total_calories: breakdown.grand_total_calories,
        protein: MacroShare::new(breakdown.protein_percent, IDEAL_PROTEIN_PERCENT, grams.protein),
        carbs: MacroShare::new(breakdown.carbs_percent, IDEAL_CARBS_PERCENT, grams.carbs),
        fat: MacroShare::new(breakdown.fat_percent, IDEAL_FAT_PERCENT, grams.fat),
    }
}
