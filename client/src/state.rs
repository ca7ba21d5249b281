//! Application state management
//!
//! [`AppState`] owns everything a session needs: the repository, the food
//! catalog, the configuration and the message picker. Its methods are the
//! operations the presentation layer calls; they stamp each call with the
//! current UTC date and delegate to the services.

use std::fs;

use anyhow::Context;
use calorie_tracker_shared::adherence::{weekly_adherence, DailyAdherence, UserHistory};
use calorie_tracker_shared::catalog::NutritionPreview;
use calorie_tracker_shared::{
    AnalysisView, DashboardSummary, FoodCatalog, FoodCategory, FoodItem, LogEntry, MessagePicker,
    RegistrationRequest, RngPicker, ThemePreference, TrackedHabit, UserProfile,
};
use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::{AppConfig, StorageBackend};
use crate::error::TrackerResult;
use crate::services::{
    DashboardService, FoodLogService, HabitService, LogFoodInput, PreferencesService, ProfileService,
};
use crate::storage::{FileStore, KeyValueStore, KvRepository, MemoryStore};

/// Repository over whichever store the configuration selects
pub type DynRepository = KvRepository<Box<dyn KeyValueStore>>;

/// Session state shared by every operation
pub struct AppState {
    repo: DynRepository,
    catalog: FoodCatalog,
    config: AppConfig,
    picker: Box<dyn MessagePicker>,
}

impl AppState {
    pub fn new(
        store: Box<dyn KeyValueStore>,
        catalog: FoodCatalog,
        config: AppConfig,
        picker: Box<dyn MessagePicker>,
    ) -> Self {
        Self {
            repo: KvRepository::new(store),
            catalog,
            config,
            picker,
        }
    }

    /// Open the configured store, load the catalog and seed a random picker
    pub fn from_config(config: AppConfig) -> TrackerResult<Self> {
        let store: Box<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::Memory => Box::new(MemoryStore::new()),
            StorageBackend::File => Box::new(FileStore::open(&config.storage.data_dir)?),
        };

        let json = fs::read_to_string(&config.catalog.path)
            .with_context(|| format!("Failed to read food catalog {}", config.catalog.path))?;
        let catalog = FoodCatalog::from_json(&json)?;

        info!(
            backend = ?config.storage.backend,
            foods = catalog.len(),
            "Calorie tracker ready"
        );

        let picker = Box::new(RngPicker(StdRng::from_entropy()));
        Ok(Self::new(store, catalog, config, picker))
    }

    #[inline]
    pub fn repo(&self) -> &DynRepository {
        &self.repo
    }

    #[inline]
    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current calendar day, in UTC
    pub fn today() -> NaiveDate {
        Self::now().date_naive()
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    // ========================================================================
    // Profile
    // ========================================================================

    pub fn register(&mut self, req: RegistrationRequest) -> TrackerResult<UserProfile> {
        ProfileService::register(&mut self.repo, req, Self::now())
    }

    pub fn profile(&self) -> TrackerResult<UserProfile> {
        ProfileService::current(&self.repo)
    }

    pub fn is_registered(&self) -> TrackerResult<bool> {
        ProfileService::is_registered(&self.repo)
    }

    pub fn logout(&mut self) -> TrackerResult<()> {
        ProfileService::logout(&mut self.repo)
    }

    // ========================================================================
    // Food
    // ========================================================================

    /// Foods matching the query, at most ten
    pub fn search_foods(&self, query: &str, category: Option<FoodCategory>) -> Vec<&FoodItem> {
        self.catalog.search(query, category)
    }

    pub fn food_categories(&self) -> Vec<FoodCategory> {
        self.catalog.categories()
    }

    pub fn preview_food(&self, food_id: &str, quantity: f64) -> TrackerResult<NutritionPreview> {
        FoodLogService::preview(&self.catalog, food_id, quantity)
    }

    pub fn log_food(&mut self, input: LogFoodInput) -> TrackerResult<LogEntry> {
        FoodLogService::log_food(&mut self.repo, &self.catalog, input)
    }

    pub fn entries(&self) -> TrackerResult<Vec<LogEntry>> {
        FoodLogService::entries(&self.repo)
    }

    pub fn dashboard(&mut self) -> TrackerResult<DashboardSummary> {
        DashboardService::summary(
            &self.repo,
            &self.catalog,
            self.picker.as_mut(),
            &self.config.suggestions,
            Self::today(),
        )
    }

    pub fn analysis(&self) -> TrackerResult<AnalysisView> {
        FoodLogService::analysis(&self.repo, &self.catalog, Self::today())
    }

    /// Seven-day adherence around today for a dated history
    pub fn weekly_adherence(&self, history: &UserHistory) -> TrackerResult<Vec<DailyAdherence>> {
        let profile = self.profile()?;
        Ok(weekly_adherence(Self::today(), profile.daily_goal, history))
    }

    // ========================================================================
    // Habits
    // ========================================================================

    pub fn save_habit_selection<S: AsRef<str>>(&mut self, selected: &[S]) -> TrackerResult<UserProfile> {
        HabitService::save_selection(&mut self.repo, selected, Self::today())
    }

    pub fn toggle_habit(&mut self, habit_id: &str) -> TrackerResult<bool> {
        HabitService::toggle(&mut self.repo, habit_id, Self::today())
    }

    pub fn tracked_habits(&self) -> TrackerResult<Vec<TrackedHabit>> {
        HabitService::tracked(&self.repo, Self::today())
    }

    // ========================================================================
    // Preferences
    // ========================================================================

    pub fn theme(&self) -> TrackerResult<ThemePreference> {
        PreferencesService::theme(&self.repo)
    }

    pub fn toggle_theme(&mut self) -> TrackerResult<ThemePreference> {
        PreferencesService::toggle_theme(&mut self.repo)
    }
}
