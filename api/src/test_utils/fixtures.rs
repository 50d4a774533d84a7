//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::commands::{CreateFoodEntryCommand, UpdateFoodEntryCommand};
use crate::domain::entities::{FoodEntry, FoodEntryId, MealType};

/// Staff member id used by every fixture
pub const TEST_STAFF_ID: i64 = 3;

/// Create a stored lunch entry for a resident
pub fn test_food_entry(id: i64, resident_id: i64) -> FoodEntry {
    test_food_entry_with(id, resident_id, MealType::Lunch, "2024-03-10")
}

/// Create a stored entry with a specific meal and date
pub fn test_food_entry_with(id: i64, resident_id: i64, meal: MealType, date: &str) -> FoodEntry {
    FoodEntry {
        id: FoodEntryId(id),
        meal,
        description: format!("{} for resident {}", meal, resident_id),
        date: date.to_string(),
        time: "13:00".to_string(),
        added_by: Some("Nurse Joy".to_string()),
        added_by_id: Some(TEST_STAFF_ID),
        resident_id,
        created_at: Utc::now(),
    }
}

/// A valid create command ("Soup and bread" on 2024-03-10 at 13:00)
pub fn create_command(meal: MealType, resident_id: i64) -> CreateFoodEntryCommand {
    CreateFoodEntryCommand {
        meal,
        description: "Soup and bread".to_string(),
        date: "2024-03-10".to_string(),
        time: "13:00".to_string(),
        added_by: Some("Nurse Joy".to_string()),
        added_by_id: Some(TEST_STAFF_ID),
        resident_id: Some(resident_id),
    }
}

/// An update command moving an entry to dinner on 2024-03-11 at 19:30
pub fn update_command(food_entry_id: FoodEntryId) -> UpdateFoodEntryCommand {
    UpdateFoodEntryCommand {
        food_entry_id,
        meal: MealType::Dinner,
        description: "Changed".to_string(),
        date: "2024-03-11".to_string(),
        time: "19:30".to_string(),
    }
}
