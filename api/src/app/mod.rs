//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod food_entry_command_service;
pub mod food_entry_query_service;

pub use food_entry_command_service::FoodEntryCommandService;
pub use food_entry_query_service::FoodEntryQueryService;
