//! Integration tests for a full session: register, pick habits, log food,
//! read the dashboard and log out

mod common;

use calorie_tracker_client::services::LogFoodInput;
use calorie_tracker_client::TrackerError;
use calorie_tracker_shared::{CalorieStatus, FoodCategory, MealType, RemainingState, ThemePreference};

fn log(food_id: &str, quantity: f64, meal_type: MealType) -> LogFoodInput {
    LogFoodInput {
        food_id: food_id.to_string(),
        quantity,
        meal_type,
    }
}

#[test]
fn test_unregistered_session_redirects() {
    let mut app = common::memory_app();

    assert!(!app.is_registered().unwrap());
    assert!(app.dashboard().unwrap_err().requires_registration());
    assert!(matches!(
        app.log_food(log(common::RICE_ID, 100.0, MealType::Lunch)),
        Err(TrackerError::NotRegistered)
    ));
    assert!(matches!(app.toggle_habit("h001"), Err(TrackerError::NotRegistered)));
}

#[test]
fn test_registration_sets_goal() {
    let mut app = common::memory_app();
    let profile = app.register(common::registration()).unwrap();

    assert_eq!(profile.tmb, 1674);
    assert_eq!(profile.daily_goal, 2595);
    assert!(profile.id.starts_with("user-"));
    assert_eq!(app.profile().unwrap(), profile);
}

#[test]
fn test_full_day() {
    let mut app = common::memory_app();
    app.register(common::registration()).unwrap();
    app.save_habit_selection(&["h001", "h006"]).unwrap();

    // 200 g chicken (330) + 300 g rice (390)
    let chicken = app.log_food(log(common::CHICKEN_ID, 200.0, MealType::Lunch)).unwrap();
    let rice = app.log_food(log(common::RICE_ID, 300.0, MealType::Dinner)).unwrap();
    assert_eq!(chicken.total_calories, 330);
    assert_eq!(rice.total_calories, 390);

    assert!(app.toggle_habit("h006").unwrap());

    let dashboard = app.dashboard().unwrap();
    assert_eq!(dashboard.consumed, 720);
    assert_eq!(dashboard.remaining_state, RemainingState::Remaining(1875));
    assert_eq!(dashboard.calorie_state.status, CalorieStatus::Low);
    assert_eq!(dashboard.calorie_state.percentage, 28);
    assert_eq!(dashboard.entries, vec![chicken, rice]);

    let suggestion = dashboard.suggestion.expect("low day should suggest foods");
    assert_eq!(suggestion.deficit, 1875);
    assert_eq!(suggestion.staple.id, common::RICE_ID);
    assert_eq!(suggestion.fruit.id, common::BANANA_ID);

    let habits: Vec<(&str, bool)> = dashboard
        .habits
        .iter()
        .map(|h| (h.habit_id, h.is_completed))
        .collect();
    assert_eq!(habits, vec![("h001", false), ("h006", true)]);

    let view = app.analysis().unwrap();
    assert!(!view.analysis.is_empty());
    let shares = &view.analysis;
    assert_eq!(shares.protein.percent + shares.carbs.percent + shares.fat.percent, 100);
}

#[test]
fn test_rejected_entry_leaves_log_untouched() {
    let mut app = common::memory_app();
    app.register(common::registration()).unwrap();

    assert!(matches!(
        app.log_food(log(common::RICE_ID, 0.0, MealType::Snack)),
        Err(TrackerError::Validation(_))
    ));
    assert!(matches!(
        app.log_food(log("f999", 100.0, MealType::Snack)),
        Err(TrackerError::NotFound(_))
    ));
    assert!(app.entries().unwrap().is_empty());
}

#[test]
fn test_oversized_quantity_rejected_and_dashboard_survives() {
    let mut app = common::memory_app();
    app.register(common::registration()).unwrap();

    for _ in 0..2 {
        assert!(matches!(
            app.log_food(log(common::RICE_ID, 1e12, MealType::Lunch)),
            Err(TrackerError::Validation(_))
        ));
    }
    assert!(app.entries().unwrap().is_empty());

    // 10 kg of rice is the largest accepted entry
    let largest = app.log_food(log(common::RICE_ID, 10_000.0, MealType::Lunch)).unwrap();
    assert_eq!(largest.total_calories, 13_000);

    let dashboard = app.dashboard().unwrap();
    assert_eq!(dashboard.consumed, 13_000);
    assert_eq!(dashboard.remaining_state, RemainingState::Exceeded(13_000 - 2595));
    assert_eq!(dashboard.calorie_state.status, CalorieStatus::High);
    assert_eq!(dashboard.calorie_state.percentage, 100);
    assert!(dashboard.suggestion.is_none());
}

#[test]
fn test_search_and_preview() {
    let app = common::memory_app();

    let fruits = app.search_foods("", Some(FoodCategory::Fruits));
    assert!(!fruits.is_empty());
    assert!(fruits.iter().all(|f| f.category == FoodCategory::Fruits));

    let matches = app.search_foods("ARROZ", None);
    assert_eq!(matches[0].id, common::RICE_ID);
    assert!(app.search_foods("a", None).len() <= 10);

    let preview = app.preview_food(common::RICE_ID, 150.0).unwrap();
    assert_eq!(preview.calories, 195);

    assert_eq!(app.food_categories()[0], FoodCategory::Cereals);
}

#[test]
fn test_logout_keeps_theme() {
    let mut app = common::memory_app();
    app.register(common::registration()).unwrap();
    assert_eq!(app.toggle_theme().unwrap(), ThemePreference::Dark);

    app.logout().unwrap();
    assert!(!app.is_registered().unwrap());
    assert_eq!(app.theme().unwrap(), ThemePreference::Dark);
}

#[test]
fn test_invalid_registration() {
    let mut app = common::memory_app();
    let mut req = common::registration();
    req.height = f64::NAN;

    assert!(matches!(app.register(req), Err(TrackerError::Validation(_))));
    assert!(!app.is_registered().unwrap());
}
