//! Write-side commands for food entries

use crate::domain::entities::{FoodEntryId, MealType};

/// Record a new meal for a resident
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFoodEntryCommand {
    pub meal: MealType,
    pub description: String,
    pub date: String,
    pub time: String,
    pub added_by: Option<String>,
    pub added_by_id: Option<i64>,
    /// Required; a missing resident is rejected before anything is stored
    pub resident_id: Option<i64>,
}

/// Replace the meal, description, date and time of an existing entry
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFoodEntryCommand {
    pub food_entry_id: FoodEntryId,
    pub meal: MealType,
    pub description: String,
    pub date: String,
    pub time: String,
}
