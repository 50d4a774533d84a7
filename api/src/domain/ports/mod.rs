//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notifications;
pub mod repositories;

pub use notifications::NotificationClient;
pub use repositories::FoodEntryRepository;
