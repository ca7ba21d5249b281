//! Theme preference service

use calorie_tracker_shared::ThemePreference;
use tracing::debug;

use crate::error::TrackerResult;
use crate::storage::TrackerRepository;

pub struct PreferencesService;

impl PreferencesService {
    /// Stored theme, light when never set
    pub fn theme<R: TrackerRepository + ?Sized>(repo: &R) -> TrackerResult<ThemePreference> {
        Ok(repo.get_theme()?.unwrap_or_default())
    }

    /// Switch between light and dark and persist the result
    pub fn toggle_theme<R: TrackerRepository + ?Sized>(repo: &mut R) -> TrackerResult<ThemePreference> {
        let theme = Self::theme(repo)?.toggled();
        repo.save_theme(theme)?;
        debug!(theme = ?theme, "Theme changed");
        Ok(theme)
    }
}
