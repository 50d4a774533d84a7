//! Food entry domain entity
//!
//! A single recorded meal observation for one resident at one date and time.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Unique identifier for a food entry, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoodEntryId(pub i64);

impl From<i64> for FoodEntryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FoodEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Meal category of a food entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
            MealType::Snack => "SNACK",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BREAKFAST" => Ok(MealType::Breakfast),
            "LUNCH" => Ok(MealType::Lunch),
            "DINNER" => Ok(MealType::Dinner),
            "SNACK" => Ok(MealType::Snack),
            _ => Err(format!("Unknown meal type: {}", s)),
        }
    }
}

/// A recorded meal for a resident
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodEntry {
    pub id: FoodEntryId,
    pub meal: MealType,
    pub description: String,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    /// Time of day as `HH:mm`
    pub time: String,
    pub added_by: Option<String>,
    pub added_by_id: Option<i64>,
    pub resident_id: i64,
    pub created_at: DateTime<Utc>,
}

impl FoodEntry {
    /// Replace the four mutable fields in place.
    ///
    /// Identity, audit data and attribution stay untouched.
    pub fn update_information(
        &mut self,
        meal: MealType,
        description: String,
        date: String,
        time: String,
    ) -> &mut Self {
        self.meal = meal;
        self.description = description;
        self.date = date;
        self.time = time;
        self
    }
}

/// Data needed to persist a new food entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodEntry {
    pub meal: MealType,
    pub description: String,
    pub date: String,
    pub time: String,
    pub added_by: Option<String>,
    pub added_by_id: Option<i64>,
    pub resident_id: i64,
}

/// Check the fields every stored entry must carry.
///
/// Dates stay strings so date lookups remain exact string matches; the shape
/// is still enforced so stored values are comparable.
pub fn validate_entry_fields(description: &str, date: &str, time: &str) -> Result<(), DomainError> {
    if description.trim().is_empty() {
        return Err(DomainError::Validation(
            "description must not be empty".to_string(),
        ));
    }

    if date.trim().is_empty() {
        return Err(DomainError::Validation("date must not be empty".to_string()));
    }
    if date.len() != 10 || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(DomainError::Validation(format!(
            "date must be formatted as YYYY-MM-DD, got '{}'",
            date
        )));
    }

    if time.trim().is_empty() {
        return Err(DomainError::Validation("time must not be empty".to_string()));
    }
    if time.len() != 5 || NaiveTime::parse_from_str(time, "%H:%M").is_err() {
        return Err(DomainError::Validation(format!(
            "time must be formatted as HH:mm, got '{}'",
            time
        )));
    }

    Ok(())
}
