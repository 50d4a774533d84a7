//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod notifications;
pub mod postgres;

pub use notifications::NotificationClientImpl;
pub use postgres::{ensure_schema, PostgresFoodEntryRepository};
