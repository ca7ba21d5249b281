//! Calorie Tracker Client
//!
//! Local, single-user calorie and habit tracking.
//!
//! ## Architecture
//!
//! The client follows a layered architecture:
//! - State: the session facade the presentation layer talks to
//! - Services: Business logic over the repository and the food catalog
//! - Storage: typed repository over a key-value store (memory or files)
//! - Shared: pure calculations from `calorie-tracker-shared`

pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod state;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use state::AppState;
