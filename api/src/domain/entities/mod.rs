//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod food_entry;

pub use food_entry::{validate_entry_fields, FoodEntry, FoodEntryId, MealType, NewFoodEntry};
