//! Food entry command service
//!
//! Handles creation and update of food entries. Creation additionally fires a
//! best-effort notification to the resident; its outcome never reaches the caller.

use std::sync::Arc;

use crate::domain::commands::{CreateFoodEntryCommand, UpdateFoodEntryCommand};
use crate::domain::entities::{validate_entry_fields, FoodEntry, FoodEntryId, MealType, NewFoodEntry};
use crate::domain::ports::{FoodEntryRepository, NotificationClient};
use crate::error::{AppError, DomainError};

/// Service for recording and correcting food entries
pub struct FoodEntryCommandService<FR, NC>
where
    FR: FoodEntryRepository,
    NC: NotificationClient,
{
    entries: Arc<FR>,
    notifications: Arc<NC>,
}

impl<FR, NC> FoodEntryCommandService<FR, NC>
where
    FR: FoodEntryRepository,
    NC: NotificationClient + 'static,
{
    pub fn new(entries: Arc<FR>, notifications: Arc<NC>) -> Self {
        Self {
            entries,
            notifications,
        }
    }

    /// Record a new food entry
    ///
    /// Validates the command, persists the entry, then dispatches the resident
    /// notification in the background. Returns the new entry's id once the
    /// write has committed.
    pub async fn create(&self, command: CreateFoodEntryCommand) -> Result<FoodEntryId, AppError> {
        validate_entry_fields(&command.description, &command.date, &command.time)?;
        let resident_id = command.resident_id.ok_or_else(|| {
            DomainError::Validation("residentId is required".to_string())
        })?;

        let new_entry = NewFoodEntry {
            meal: command.meal,
            description: command.description,
            date: command.date,
            time: command.time,
            added_by: command.added_by,
            added_by_id: command.added_by_id,
            resident_id,
        };

        let entry = self.entries.create(&new_entry).await?;
        tracing::info!(
            food_entry_id = %entry.id,
            resident_id = entry.resident_id,
            meal = %entry.meal,
            "Food entry created"
        );

        let message = notification_message(
            Some(entry.meal),
            Some(&entry.description),
            Some(&entry.date),
            Some(&entry.time),
        );
        self.notify_resident(entry.resident_id, message);

        Ok(entry.id)
    }

    /// Replace meal, description, date and time of an existing entry
    ///
    /// Existence is checked before the fields, so an unknown id is always
    /// `DomainError::NotFound`. Nothing is written on either failure.
    pub async fn update(&self, command: UpdateFoodEntryCommand) -> Result<FoodEntry, AppError> {
        let not_found = || {
            DomainError::NotFound(format!(
                "Food entry {} does not exist",
                command.food_entry_id
            ))
        };

        if !self.entries.exists_by_id(command.food_entry_id).await? {
            return Err(not_found().into());
        }

        validate_entry_fields(&command.description, &command.date, &command.time)?;

        let mut entry = self
            .entries
            .find_by_id(command.food_entry_id)
            .await?
            .ok_or_else(not_found)?;

        entry.update_information(command.meal, command.description, command.date, command.time);

        let updated = self.entries.update(&entry).await?;
        tracing::info!(food_entry_id = %updated.id, "Food entry updated");

        Ok(updated)
    }

    /// Fire-and-forget delivery; failures are only logged
    fn notify_resident(&self, resident_id: i64, message: String) {
        let notifications = self.notifications.clone();

        tokio::spawn(async move {
            // Inner task so a panicking client surfaces as a JoinError here.
            let delivery = tokio::spawn(async move {
                notifications.send_notification(resident_id, &message).await
            });

            match delivery.await {
                Ok(Ok(true)) => {
                    tracing::debug!(resident_id, "Food entry notification delivered");
                }
                Ok(Ok(false)) => {
                    tracing::warn!(resident_id, "Food entry notification was not delivered");
                }
                Ok(Err(e)) => {
                    tracing::warn!(
                        error = %e,
                        resident_id,
                        "Failed to send food entry notification"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        resident_id,
                        "Food entry notification task aborted"
                    );
                }
            }
        });
    }
}

/// Compose the resident-facing notification text.
///
/// Missing parts fall back to placeholders so composition itself cannot fail.
pub fn notification_message(
    meal: Option<MealType>,
    description: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
) -> String {
    format!(
        "New meal recorded: {} - {} on {} {}",
        meal.map(|m| m.as_str()).unwrap_or("UNKNOWN"),
        description.unwrap_or(""),
        date.unwrap_or(""),
        time.unwrap_or("")
    )
}
