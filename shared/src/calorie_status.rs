//! Calorie status classification
//!
//! Maps a (goal, consumed) pair to a status, a capped progress percentage and
//! an encouragement message. Status and percentage are deterministic; the
//! message comes from an injected [`MessagePicker`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::health_metrics::round_half_up;

/// Tolerance band around the goal, in kcal
pub const ON_TRACK_RANGE: i32 = 50;

/// Progress status for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalorieStatus {
    /// Within ±50 kcal of the goal
    OnTrack,
    /// More than 50 kcal of budget left
    Low,
    /// More than 50 kcal over budget
    High,
}

const LOW_MESSAGES: [&str; 3] = [
    "You still have room. A small nutritious snack will help you reach your goal. You can do it!",
    "Keep going! Only a few calories left to complete your daily goal.",
    "The day isn't over yet. You deserve that last boost to finish strong.",
];

const HIGH_MESSAGES: [&str; 3] = [
    "Oops, no big deal! Consistency is what matters. Tomorrow we get back on track.",
    "Today ran high, review your portions for tomorrow. Keep learning!",
    "Remember the goal is balance. Progress is not linear!",
];

const ON_TRACK_MESSAGES: [&str; 3] = [
    "Goal reached! You're doing an excellent job with your nutrition.",
    "Consistency is key, and you've got it! Keep up the pace.",
    "Perfect day. Your body will thank you.",
];

impl CalorieStatus {
    /// The fixed message pool for this status
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            CalorieStatus::OnTrack => &ON_TRACK_MESSAGES,
            CalorieStatus::Low => &LOW_MESSAGES,
            CalorieStatus::High => &HIGH_MESSAGES,
        }
    }
}

/// Chooses which message of a pool to show
pub trait MessagePicker {
    /// Return an index in `0..pool_len`
    fn pick(&mut self, pool_len: usize) -> usize;
}

/// Picker backed by a random number generator
#[derive(Debug, Clone)]
pub struct RngPicker<R>(pub R);

impl<R: Rng> MessagePicker for RngPicker<R> {
    fn pick(&mut self, pool_len: usize) -> usize {
        self.0.gen_range(0..pool_len)
    }
}

/// Picker that always returns the same index, wrapped into range
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl MessagePicker for FixedPicker {
    fn pick(&mut self, pool_len: usize) -> usize {
        self.0 % pool_len
    }
}

/// Deterministic part of the classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieEvaluation {
    pub status: CalorieStatus,
    /// Progress toward the goal, capped at 100
    pub percentage: i32,
    /// goal - consumed
    pub difference: i32,
}

/// Full classification shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieState {
    pub status: CalorieStatus,
    pub message: String,
    pub percentage: i32,
}

/// Uncapped progress percentage, 0 when there is no goal
pub fn progress_percentage(goal: i32, consumed: i32) -> i32 {
    if goal > 0 {
        round_half_up(consumed as f64 / goal as f64 * 100.0)
    } else {
        0
    }
}

/// Status for a difference of `goal - consumed`
pub fn status_for_difference(difference: i32) -> CalorieStatus {
    if (-ON_TRACK_RANGE..=ON_TRACK_RANGE).contains(&difference) {
        CalorieStatus::OnTrack
    } else if difference > ON_TRACK_RANGE {
        CalorieStatus::Low
    } else {
        CalorieStatus::High
    }
}

/// Classify consumption against the goal without choosing a message.
///
/// The percentage is capped at 100 even when consumption exceeds the goal.
pub fn evaluate(goal: i32, consumed: i32) -> CalorieEvaluation {
    let difference = goal.saturating_sub(consumed);
    CalorieEvaluation {
        status: status_for_difference(difference),
        percentage: progress_percentage(goal, consumed).min(100),
        difference,
    }
}

/// Classify consumption against the goal and pick a message for the status
pub fn classify<P: MessagePicker + ?Sized>(goal: i32, consumed: i32, picker: &mut P) -> CalorieState {
    let evaluation = evaluate(goal, consumed);
    let pool = evaluation.status.messages();
    let index = picker.pick(pool.len()).min(pool.len() - 1);
    CalorieState {
        status: evaluation.status,
        message: pool[index].to_string(),
        percentage: evaluation.percentage,
    }
}
