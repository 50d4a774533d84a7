//! Food entry query service
//!
//! Read-only lookups. Filtering is left entirely to the repository.

use std::sync::Arc;

use crate::domain::entities::FoodEntry;
use crate::domain::ports::FoodEntryRepository;
use crate::domain::queries::{
    GetAllFoodEntriesQuery, GetFoodEntriesByAddedByIdQuery, GetFoodEntriesByDateQuery,
    GetFoodEntriesByMealTypeQuery, GetFoodEntriesByResidentIdQuery, GetFoodEntryByIdQuery,
};
use crate::error::AppError;

/// Service for reading food entries
pub struct FoodEntryQueryService<FR>
where
    FR: FoodEntryRepository,
{
    entries: Arc<FR>,
}

impl<FR> FoodEntryQueryService<FR>
where
    FR: FoodEntryRepository,
{
    pub fn new(entries: Arc<FR>) -> Self {
        Self { entries }
    }

    pub async fn get_all(&self, _query: GetAllFoodEntriesQuery) -> Result<Vec<FoodEntry>, AppError> {
        Ok(self.entries.find_all().await?)
    }

    pub async fn get_by_id(
        &self,
        query: GetFoodEntryByIdQuery,
    ) -> Result<Option<FoodEntry>, AppError> {
        Ok(self.entries.find_by_id(query.food_entry_id).await?)
    }

    pub async fn get_by_resident_id(
        &self,
        query: GetFoodEntriesByResidentIdQuery,
    ) -> Result<Vec<FoodEntry>, AppError> {
        tracing::debug!(resident_id = query.resident_id, "Listing food entries for resident");
        Ok(self.entries.find_by_resident_id(query.resident_id).await?)
    }

    /// Exact string match on the stored date; no range semantics
    pub async fn get_by_date(
        &self,
        query: GetFoodEntriesByDateQuery,
    ) -> Result<Vec<FoodEntry>, AppError> {
        Ok(self.entries.find_by_date(&query.date).await?)
    }

    pub async fn get_by_meal(
        &self,
        query: GetFoodEntriesByMealTypeQuery,
    ) -> Result<Vec<FoodEntry>, AppError> {
        Ok(self.entries.find_by_meal(query.meal_type).await?)
    }

    pub async fn get_by_added_by_id(
        &self,
        query: GetFoodEntriesByAddedByIdQuery,
    ) -> Result<Vec<FoodEntry>, AppError> {
        Ok(self.entries.find_by_added_by_id(query.added_by_id).await?)
    }
}
