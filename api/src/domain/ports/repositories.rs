//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{FoodEntry, FoodEntryId, MealType, NewFoodEntry};
use crate::error::DomainError;

/// Repository for FoodEntry entities
#[async_trait]
pub trait FoodEntryRepository: Send + Sync {
    /// Persist a new entry, assigning its id and creation timestamp
    async fn create(&self, entry: &NewFoodEntry) -> Result<FoodEntry, DomainError>;

    /// Persist the mutable fields of an existing entry
    async fn update(&self, entry: &FoodEntry) -> Result<FoodEntry, DomainError>;

    /// Check whether an entry exists
    async fn exists_by_id(&self, id: FoodEntryId) -> Result<bool, DomainError>;

    /// Find an entry by ID
    async fn find_by_id(&self, id: FoodEntryId) -> Result<Option<FoodEntry>, DomainError>;

    /// List every entry
    async fn find_all(&self) -> Result<Vec<FoodEntry>, DomainError>;

    /// Find entries recorded for a resident
    async fn find_by_resident_id(&self, resident_id: i64) -> Result<Vec<FoodEntry>, DomainError>;

    /// Find entries whose date string equals `date`
    async fn find_by_date(&self, date: &str) -> Result<Vec<FoodEntry>, DomainError>;

    /// Find entries of a meal category
    async fn find_by_meal(&self, meal: MealType) -> Result<Vec<FoodEntry>, DomainError>;

    /// Find entries recorded by a staff member
    async fn find_by_added_by_id(&self, added_by_id: i64) -> Result<Vec<FoodEntry>, DomainError>;
}
