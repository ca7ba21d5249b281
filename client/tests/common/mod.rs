//! Common test utilities for integration tests
//!
//! This module provides shared setup for integration tests: a session over
//! an in-memory or file store with the bundled food catalog.

#![allow(dead_code)]

use std::path::Path;

use calorie_tracker_client::config::{AppConfig, StorageBackend};
use calorie_tracker_client::storage::{FileStore, KeyValueStore, MemoryStore};
use calorie_tracker_client::AppState;
use calorie_tracker_shared::{ActivityLevel, FixedPicker, FoodCatalog, Gender, RegistrationRequest};
use fake::faker::name::en::Name;
use fake::Fake;

/// Path of the bundled catalog
pub const CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/foodData.json");

/// Food ids from the bundled catalog
pub const RICE_ID: &str = "f001";
pub const BANANA_ID: &str = "f008";
pub const CHICKEN_ID: &str = "f011";

pub fn catalog() -> FoodCatalog {
    let json = std::fs::read_to_string(CATALOG_PATH).expect("Failed to read bundled catalog");
    FoodCatalog::from_json(&json).expect("Bundled catalog is invalid")
}

pub fn test_config(backend: StorageBackend, data_dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.backend = backend;
    config.storage.data_dir = data_dir.to_string_lossy().into_owned();
    config.catalog.path = CATALOG_PATH.to_string();
    config
}

/// Session over a fresh in-memory store with a deterministic picker
pub fn memory_app() -> AppState {
    let config = test_config(StorageBackend::Memory, Path::new("."));
    app_with_store(Box::new(MemoryStore::new()), config)
}

/// Session over a file store rooted at `dir`
pub fn file_app(dir: &Path) -> AppState {
    let store = FileStore::open(dir).expect("Failed to open file store");
    app_with_store(Box::new(store), test_config(StorageBackend::File, dir))
}

fn app_with_store(store: Box<dyn KeyValueStore>, config: AppConfig) -> AppState {
    AppState::new(store, catalog(), config, Box::new(FixedPicker(0)))
}

/// Registration for a 25 year old, 70 kg, 175 cm moderately active man:
/// TMB 1674, daily goal 2595
pub fn registration() -> RegistrationRequest {
    RegistrationRequest {
        name: Name().fake(),
        age: 25,
        weight: 70.0,
        height: 175.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
    }
}
