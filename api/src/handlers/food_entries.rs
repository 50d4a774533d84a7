//! Food entry handlers
//!
//! Endpoints under `/api/v1/food-entries`. There is deliberately no delete route.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::commands::{CreateFoodEntryCommand, UpdateFoodEntryCommand};
use crate::domain::entities::{FoodEntry, FoodEntryId, MealType};
use crate::domain::ports::{FoodEntryRepository, NotificationClient};
use crate::domain::queries::{
    GetAllFoodEntriesQuery, GetFoodEntriesByAddedByIdQuery, GetFoodEntriesByDateQuery,
    GetFoodEntriesByMealTypeQuery, GetFoodEntriesByResidentIdQuery, GetFoodEntryByIdQuery,
};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Request body for recording a meal
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodEntryRequest {
    /// Meal category, any case (e.g. "lunch", "LUNCH")
    pub meal: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:mm`
    pub time: Option<String>,
    pub added_by: Option<String>,
    pub added_by_id: Option<i64>,
    pub resident_id: Option<i64>,
}

impl CreateFoodEntryRequest {
    pub fn into_command(self) -> Result<CreateFoodEntryCommand, DomainError> {
        Ok(CreateFoodEntryCommand {
            meal: parse_meal(self.meal.as_deref())?,
            description: self.description.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            added_by: self.added_by,
            added_by_id: self.added_by_id,
            resident_id: self.resident_id,
        })
    }
}

/// Request body for correcting a meal; all four fields must be sent again
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodEntryRequest {
    pub meal: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl UpdateFoodEntryRequest {
    pub fn into_command(self, food_entry_id: FoodEntryId) -> Result<UpdateFoodEntryCommand, DomainError> {
        Ok(UpdateFoodEntryCommand {
            food_entry_id,
            meal: parse_meal(self.meal.as_deref())?,
            description: self.description.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
        })
    }
}

fn parse_meal(meal: Option<&str>) -> Result<MealType, DomainError> {
    meal.ok_or_else(|| DomainError::Validation("meal is required".to_string()))?
        .parse()
        .map_err(DomainError::Validation)
}

/// Food entry as returned by the API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntryResponse {
    pub id: i64,
    pub meal: MealType,
    pub description: String,
    pub date: String,
    pub time: String,
    pub created_at: String,
    pub added_by: Option<String>,
    pub added_by_id: Option<i64>,
    pub resident_id: i64,
}

impl From<FoodEntry> for FoodEntryResponse {
    fn from(entry: FoodEntry) -> Self {
        Self {
            id: entry.id.0,
            meal: entry.meal,
            description: entry.description,
            date: entry.date,
            time: entry.time,
            created_at: entry.created_at.to_rfc3339(),
            added_by: entry.added_by,
            added_by_id: entry.added_by_id,
            resident_id: entry.resident_id,
        }
    }
}

fn to_responses(entries: Vec<FoodEntry>) -> Json<Vec<FoodEntryResponse>> {
    Json(entries.into_iter().map(FoodEntryResponse::from).collect())
}

/// POST /api/v1/food-entries
///
/// Record a meal. Storage failures are reported as 400 like validation failures.
pub async fn create_food_entry<FR, NC>(
    State(state): State<AppState<FR, NC>>,
    payload: Result<Json<CreateFoodEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FoodEntryResponse>), AppError>
where
    FR: FoodEntryRepository + 'static,
    NC: NotificationClient + 'static,
{
    let Json(request) = payload?;
    let command = request.into_command()?;

    let food_entry_id = state
        .command_service
        .create(command)
        .await
        .map_err(|e| match e {
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Error while saving food entry: {}", msg);
                AppError::BadRequest("Error while saving food entry".to_string())
            }
            e => e,
        })?;

    let entry = state
        .query_service
        .get_by_id(GetFoodEntryByIdQuery { food_entry_id })
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!("Food entry {} could not be read back", food_entry_id))
        })?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// GET /api/v1/food-entries
pub async fn list_food_entries<FR, NC>(
    State(state): State<AppState<FR, NC>>,
) -> Result<Json<Vec<FoodEntryResponse>>, AppError>
where
    FR: FoodEntryRepository + 'static,
    NC: NotificationClient + 'static,
{
    let entries = state.query_service.get_all(GetAllFoodEntriesQuery).await?;
    Ok(to_responses(entries))
}

/// GET /api/v1/food-entries/:food_entry_id
pub async fn get_food_entry<FR, NC>(
    State(state): State<AppState<FR, NC>>,
    Path(food_entry_id): Path<i64>,
) -> Result<Json<FoodEntryResponse>, AppError>
where
    FR: FoodEntryRepository + 'static,
    NC: NotificationClient + 'static,
{
    let entry = state
        .query_service
        .get_by_id(GetFoodEntryByIdQuery {
            food_entry_id: FoodEntryId(food_entry_id),
        })
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Food entry {} not found", food_entry_id)))?;

    Ok(Json(entry.into()))
}

/// GET /api/v1/food-entries/resident/:resident_id
pub async fn list_food_entries_by_resident<FR, NC>(
    State(state): State<AppState<FR, NC>>,
    Path(resident_id): Path<i64>,
) -> Result<Json<Vec<FoodEntryResponse>>, AppError>
where
    FR: FoodEntryRepository + 'static,
    NC: NotificationClient + 'static,
{
    let entries = state
        .query_service
        .get_by_resident_id(GetFoodEntriesByResidentIdQuery { resident_id })
        .await?;
    Ok(to_responses(entries))
}

/// GET /api/v1/food-entries/date/:date
pub async fn list_food_entries_by_date<FR, NC>(
    State(state): State<AppState<FR, NC>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<FoodEntryResponse>>, AppError>
where
    FR: FoodEntryRepository + 'static,
    NC: NotificationClient + 'static,
{
    let entries = state
        .query_service
        .get_by_date(GetFoodEntriesByDateQuery { date })
        .await?;
    Ok(to_responses(entries))
}

/// GET /api/v1/food-entries/meal/:meal_type
///
/// Unknown meal categories are a 400.
pub async fn list_food_entries_by_meal<FR, NC>(
    State(state): State<AppState<FR, NC>>,
    Path(meal_type): Path<String>,
) -> Result<Json<Vec<FoodEntryResponse>>, AppError>
where
    FR: FoodEntryRepository + 'static,
    NC: NotificationClient + 'static,
{
    let query = GetFoodEntriesByMealTypeQuery::parse(&meal_type)?;
    let entries = state.query_service.get_by_meal(query).await?;
    Ok(to_responses(entries))
}

/// GET /api/v1/food-entries/added-by/:added_by_id
pub async fn list_food_entries_by_staff<FR, NC>(
    State(state): State<AppState<FR, NC>>,
    Path(added_by_id): Path<i64>,
) -> Result<Json<Vec<FoodEntryResponse>>, AppError>
where
    FR: FoodEntryRepository + 'static,
    NC: NotificationClient + 'static,
{
    let entries = state
        .query_service
        .get_by_added_by_id(GetFoodEntriesByAddedByIdQuery { added_by_id })
        .await?;
    Ok(to_responses(entries))
}

/// PUT /api/v1/food-entries/:food_entry_id
pub async fn update_food_entry<FR, NC>(
    State(state): State<AppState<FR, NC>>,
    Path(food_entry_id): Path<i64>,
    payload: Result<Json<UpdateFoodEntryRequest>, JsonRejection>,
) -> Result<Json<FoodEntryResponse>, AppError>
where
    FR: FoodEntryRepository + 'static,
    NC: NotificationClient + 'static,
{
    let Json(request) = payload?;
    let command = request.into_command(FoodEntryId(food_entry_id))?;
    let entry = state.command_service.update(command).await?;
    Ok(Json(entry.into()))
}
