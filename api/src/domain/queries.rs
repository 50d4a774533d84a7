//! Read-side queries for food entries
//!
//! Each query carries only its filter criterion.

use crate::domain::entities::{FoodEntryId, MealType};
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllFoodEntriesQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetFoodEntryByIdQuery {
    pub food_entry_id: FoodEntryId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetFoodEntriesByResidentIdQuery {
    pub resident_id: i64,
}

/// Exact match on the `YYYY-MM-DD` date string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFoodEntriesByDateQuery {
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetFoodEntriesByMealTypeQuery {
    pub meal_type: MealType,
}

impl GetFoodEntriesByMealTypeQuery {
    /// Build the query from caller-supplied text, case-insensitively
    pub fn parse(meal_type: &str) -> Result<Self, DomainError> {
        let meal_type = meal_type.parse::<MealType>().map_err(DomainError::Validation)?;
        Ok(Self { meal_type })
    }
}

/// Entries recorded by one staff member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetFoodEntriesByAddedByIdQuery {
    pub added_by_id: i64,
}
