//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod food_entry_repo;
pub mod schema;


pub use food_entry_repo::PostgresFoodEntryRepository;
pub use schema::ensure_schema;
