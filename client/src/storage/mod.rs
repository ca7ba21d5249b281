//! Persistence layer
//!
//! Everything is stored as JSON text under string keys. A [`KeyValueStore`]
//! knows how to read and write raw strings; [`KvRepository`] layers the typed
//! [`TrackerRepository`] operations on top of any store, building keys only
//! through [`calorie_tracker_shared::keys`].

pub mod file;
pub mod memory;

use anyhow::Result;
use calorie_tracker_shared::keys::{daily_log_key, habit_key, PROFILE_KEY, THEME_KEY};
use calorie_tracker_shared::{HabitDay, LogEntry, ThemePreference, UserProfile};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Raw string storage keyed by name
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    /// Removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Typed access to everything the tracker persists
pub trait TrackerRepository {
    fn get_profile(&self) -> TrackerResult<Option<UserProfile>>;
    fn save_profile(&mut self, profile: &UserProfile) -> TrackerResult<()>;
    fn clear_profile(&mut self) -> TrackerResult<()>;

    /// The user's food log; empty when nothing was logged yet
    fn get_daily_log(&self, user_id: &str) -> TrackerResult<Vec<LogEntry>>;
    fn save_daily_log(&mut self, user_id: &str, entries: &[LogEntry]) -> TrackerResult<()>;

    fn get_habit_log(&self, user_id: &str, date: NaiveDate) -> TrackerResult<Option<HabitDay>>;
    fn save_habit_log(&mut self, user_id: &str, date: NaiveDate, day: &HabitDay) -> TrackerResult<()>;

    fn get_theme(&self) -> TrackerResult<Option<ThemePreference>>;
    fn save_theme(&mut self, theme: ThemePreference) -> TrackerResult<()>;
}

/// [`TrackerRepository`] over any [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct KvRepository<S> {
    store: S,
}

impl<S: KeyValueStore> KvRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> TrackerResult<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            debug!(key = %key, "No stored value");
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(source) => {
                warn!(key = %key, error = %source, "Stored value is not valid JSON for its type");
                Err(TrackerError::Corrupt {
                    key: key.to_string(),
                    source,
                })
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> TrackerResult<()> {
        let raw = serde_json::to_string(value).map_err(anyhow::Error::from)?;
        self.store.set(key, raw)?;
        debug!(key = %key, "Stored value");
        Ok(())
    }
}

impl<S: KeyValueStore> TrackerRepository for KvRepository<S> {
    fn get_profile(&self) -> TrackerResult<Option<UserProfile>> {
        self.read(PROFILE_KEY)
    }

    fn save_profile(&mut self, profile: &UserProfile) -> TrackerResult<()> {
        self.write(PROFILE_KEY, profile)
    }

    fn clear_profile(&mut self) -> TrackerResult<()> {
        self.store.remove(PROFILE_KEY)?;
        Ok(())
    }

    fn get_daily_log(&self, user_id: &str) -> TrackerResult<Vec<LogEntry>> {
        Ok(self.read(&daily_log_key(user_id))?.unwrap_or_default())
    }

    fn save_daily_log(&mut self, user_id: &str, entries: &[LogEntry]) -> TrackerResult<()> {
        self.write(&daily_log_key(user_id), entries)
    }

    fn get_habit_log(&self, user_id: &str, date: NaiveDate) -> TrackerResult<Option<HabitDay>> {
        self.read(&habit_key(user_id, date))
    }

    fn save_habit_log(&mut self, user_id: &str, date: NaiveDate, day: &HabitDay) -> TrackerResult<()> {
        self.write(&habit_key(user_id, date), day)
    }

    fn get_theme(&self) -> TrackerResult<Option<ThemePreference>> {
        self.read(THEME_KEY)
    }

    fn save_theme(&mut self, theme: ThemePreference) -> TrackerResult<()> {
        self.write(THEME_KEY, &theme)
    }
}
