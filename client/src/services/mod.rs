//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the
//! repository, the food catalog and the shared calculations. Every service
//! is a unit struct whose operations take the repository explicitly.

pub mod dashboard;
pub mod food_log;
pub mod habits;
pub mod preferences;
pub mod profile;

pub use dashboard::DashboardService;
pub use food_log::{FoodLogService, LogFoodInput};
pub use habits::HabitService;
pub use preferences::PreferencesService;
pub use profile::ProfileService;
