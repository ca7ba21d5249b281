//! Registration and session service
//!
//! A stored profile is the whole notion of being logged in: registering
//! writes it, logging out removes it.

use calorie_tracker_shared::validation::validate_registration;
use calorie_tracker_shared::{compute_caloric_goal, Biometrics, RegistrationRequest, UserProfile};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};
use crate::storage::TrackerRepository;

/// Profile service for business logic
pub struct ProfileService;

impl ProfileService {
    /// Validate the form, derive the caloric goal and store the new profile.
    ///
    /// Replaces any profile already on the device.
    pub fn register<R: TrackerRepository + ?Sized>(
        repo: &mut R,
        req: RegistrationRequest,
        now: DateTime<Utc>,
    ) -> TrackerResult<UserProfile> {
        validate_registration(&req)?;

        let goal = compute_caloric_goal(&Biometrics {
            weight_kg: req.weight,
            height_cm: req.height,
            age_years: req.age,
            gender: req.gender,
            activity_level: req.activity_level,
        });

        let profile = UserProfile {
            id: format!("user-{}", now.timestamp_millis()),
            name: req.name.trim().to_string(),
            age: req.age,
            weight: req.weight,
            height: req.height,
            gender: req.gender,
            activity_level: req.activity_level,
            tmb: goal.tmb,
            daily_goal: goal.daily_goal,
            selected_habit_ids: Vec::new(),
        };

        repo.save_profile(&profile)?;

        info!(
            user_id = %profile.id,
            tmb = profile.tmb,
            daily_goal = profile.daily_goal,
            "User registered"
        );

        Ok(profile)
    }

    /// The active profile, or [`TrackerError::NotRegistered`]
    pub fn current<R: TrackerRepository + ?Sized>(repo: &R) -> TrackerResult<UserProfile> {
        let profile = repo.get_profile()?.ok_or(TrackerError::NotRegistered)?;
        debug!(user_id = %profile.id, "Loaded profile");
        Ok(profile)
    }

    pub fn is_registered<R: TrackerRepository + ?Sized>(repo: &R) -> TrackerResult<bool> {
        Ok(repo.get_profile()?.is_some())
    }

    /// Forget the active profile. Logs and habit records stay in storage.
    pub fn logout<R: TrackerRepository + ?Sized>(repo: &mut R) -> TrackerResult<()> {
        repo.clear_profile()?;
        info!("User logged out");
        Ok(())
    }
}
