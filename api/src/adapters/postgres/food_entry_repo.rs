//! PostgreSQL adapter for FoodEntryRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{FoodEntry, FoodEntryId, MealType, NewFoodEntry};
use crate::domain::ports::FoodEntryRepository;
use crate::entity::food_entries;
use crate::error::DomainError;

/// PostgreSQL implementation of FoodEntryRepository
pub struct PostgresFoodEntryRepository {
    db: DatabaseConnection,
}

impl PostgresFoodEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_filtered<F>(&self, filter: F) -> Result<Vec<FoodEntry>, DomainError>
    where
        F: sea_orm::sea_query::IntoCondition + Send,
    {
        let results = food_entries::Entity::find()
            .filter(filter)
            .order_by_asc(food_entries::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(FoodEntry::try_from).collect()
    }
}

#[async_trait]
impl FoodEntryRepository for PostgresFoodEntryRepository {
    async fn create(&self, entry: &NewFoodEntry) -> Result<FoodEntry, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = food_entries::ActiveModel {
            id: NotSet,
            meal: Set(entry.meal.to_string()),
            description: Set(entry.description.clone()),
            date: Set(entry.date.clone()),
            time: Set(entry.time.clone()),
            added_by: Set(entry.added_by.clone()),
            added_by_id: Set(entry.added_by_id),
            resident_id: Set(entry.resident_id),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn update(&self, entry: &FoodEntry) -> Result<FoodEntry, DomainError> {
        // Only the mutable columns are written; created_at and attribution stay as stored
        let result = food_entries::ActiveModel {
            id: Set(entry.id.0),
            meal: Set(entry.meal.to_string()),
            description: Set(entry.description.clone()),
            date: Set(entry.date.clone()),
            time: Set(entry.time.clone()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Food entry {} not found", entry.id))
            }
            e => DomainError::Database(e.to_string()),
        })?;

        result.try_into()
    }

    async fn exists_by_id(&self, id: FoodEntryId) -> Result<bool, DomainError> {
        let count = food_entries::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn find_by_id(&self, id: FoodEntryId) -> Result<Option<FoodEntry>, DomainError> {
        let result = food_entries::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(FoodEntry::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<FoodEntry>, DomainError> {
        let results = food_entries::Entity::find()
            .order_by_asc(food_entries::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(FoodEntry::try_from).collect()
    }

    async fn find_by_resident_id(&self, resident_id: i64) -> Result<Vec<FoodEntry>, DomainError> {
        self.find_filtered(food_entries::Column::ResidentId.eq(resident_id))
            .await
    }

    async fn find_by_date(&self, date: &str) -> Result<Vec<FoodEntry>, DomainError> {
        self.find_filtered(food_entries::Column::Date.eq(date)).await
    }

    async fn find_by_meal(&self, meal: MealType) -> Result<Vec<FoodEntry>, DomainError> {
        self.find_filtered(food_entries::Column::Meal.eq(meal.as_str()))
            .await
    }

    async fn find_by_added_by_id(&self, added_by_id: i64) -> Result<Vec<FoodEntry>, DomainError> {
        self.find_filtered(food_entries::Column::AddedById.eq(added_by_id))
            .await
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<food_entries::Model> for FoodEntry {
    type Error = DomainError;

    fn try_from(model: food_entries::Model) -> Result<Self, Self::Error> {
        let meal = model.meal.parse::<MealType>().map_err(|e| {
            DomainError::Database(format!("Food entry {} has {}", model.id, e))
        })?;

        Ok(FoodEntry {
            id: FoodEntryId(model.id),
            meal,
            description: model.description,
            date: model.date,
            time: model.time,
            added_by: model.added_by,
            added_by_id: model.added_by_id,
            resident_id: model.resident_id,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(meal: &str) -> food_entries::Model {
        food_entries::Model {
            id: 5,
            meal: meal.to_string(),
            description: "Porridge".to_string(),
            date: "2024-03-10".to_string(),
            time: "08:15".to_string(),
            added_by: Some("Nurse Joy".to_string()),
            added_by_id: Some(3),
            resident_id: 42,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn model_converts_to_domain_entry() {
        let entry = FoodEntry::try_from(model("BREAKFAST")).unwrap();

        assert_eq!(entry.id, FoodEntryId(5));
        assert_eq!(entry.meal, MealType::Breakfast);
        assert_eq!(entry.description, "Porridge");
        assert_eq!(entry.date, "2024-03-10");
        assert_eq!(entry.time, "08:15");
        assert_eq!(entry.added_by.as_deref(), Some("Nurse Joy"));
        assert_eq!(entry.added_by_id, Some(3));
        assert_eq!(entry.resident_id, 42);
    }

    #[test]
    fn model_with_unknown_meal_is_a_database_error() {
        let err = FoodEntry::try_from(model("BRUNCH")).unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
    }
}
