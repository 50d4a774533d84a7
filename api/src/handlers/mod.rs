//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod food_entries;

pub use food_entries::{
    create_food_entry, get_food_entry, list_food_entries, list_food_entries_by_date,
    list_food_entries_by_meal, list_food_entries_by_resident, list_food_entries_by_staff,
    update_food_entry,
};
