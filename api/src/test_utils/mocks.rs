//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::{FoodEntry, FoodEntryId, MealType, NewFoodEntry};
use crate::domain::ports::{FoodEntryRepository, NotificationClient};
use crate::error::{DomainError, NotificationError};

// ============================================================================
// In-Memory Food Entry Repository
// ============================================================================

pub struct InMemoryFoodEntryRepository {
    entries: Arc<RwLock<BTreeMap<FoodEntryId, FoodEntry>>>,
    next_id: AtomicI64,
    should_fail: Arc<RwLock<bool>>,
}

impl Default for InMemoryFoodEntryRepository {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }
}

impl InMemoryFoodEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails like an unavailable database
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.set_failing(true);
        repo
    }

    pub fn set_failing(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }

    /// Pre-populate with an entry for testing
    pub fn with_entry(self, entry: FoodEntry) -> Self {
        self.next_id.fetch_max(entry.id.0 + 1, Ordering::SeqCst);
        self.entries.write().unwrap().insert(entry.id, entry);
        self
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn filtered<F>(&self, predicate: F) -> Result<Vec<FoodEntry>, DomainError>
    where
        F: Fn(&FoodEntry) -> bool,
    {
        self.check_available()?;
        let entries = self.entries.read().unwrap();
        Ok(entries.values().filter(|e| predicate(e)).cloned().collect())
    }
}

#[async_trait]
impl FoodEntryRepository for InMemoryFoodEntryRepository {
    async fn create(&self, new_entry: &NewFoodEntry) -> Result<FoodEntry, DomainError> {
        self.check_available()?;

        let entry = FoodEntry {
            id: FoodEntryId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            meal: new_entry.meal,
            description: new_entry.description.clone(),
            date: new_entry.date.clone(),
            time: new_entry.time.clone(),
            added_by: new_entry.added_by.clone(),
            added_by_id: new_entry.added_by_id,
            resident_id: new_entry.resident_id,
            created_at: Utc::now(),
        };

        self.entries
            .write()
            .unwrap()
            .insert(entry.id, entry.clone());

        Ok(entry)
    }

    async fn update(&self, entry: &FoodEntry) -> Result<FoodEntry, DomainError> {
        self.check_available()?;

        let mut entries = self.entries.write().unwrap();
        match entries.get_mut(&entry.id) {
            Some(stored) => {
                stored.meal = entry.meal;
                stored.description = entry.description.clone();
                stored.date = entry.date.clone();
                stored.time = entry.time.clone();
                Ok(stored.clone())
            }
            None => Err(DomainError::NotFound(format!(
                "Food entry {} not found",
                entry.id
            ))),
        }
    }

    async fn exists_by_id(&self, id: FoodEntryId) -> Result<bool, DomainError> {
        self.check_available()?;
        Ok(self.entries.read().unwrap().contains_key(&id))
    }

    async fn find_by_id(&self, id: FoodEntryId) -> Result<Option<FoodEntry>, DomainError> {
        self.check_available()?;
        Ok(self.entries.read().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<FoodEntry>, DomainError> {
        self.filtered(|_| true)
    }

    async fn find_by_resident_id(&self, resident_id: i64) -> Result<Vec<FoodEntry>, DomainError> {
        self.filtered(|e| e.resident_id == resident_id)
    }

    async fn find_by_date(&self, date: &str) -> Result<Vec<FoodEntry>, DomainError> {
        self.filtered(|e| e.date == date)
    }

    async fn find_by_meal(&self, meal: MealType) -> Result<Vec<FoodEntry>, DomainError> {
        self.filtered(|e| e.meal == meal)
    }

    async fn find_by_added_by_id(&self, added_by_id: i64) -> Result<Vec<FoodEntry>, DomainError> {
        self.filtered(|e| e.added_by_id == Some(added_by_id))
    }
}

// ============================================================================
// Mock Notification Client
// ============================================================================

/// How the mock answers delivery attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationBehavior {
    Deliver,
    /// Reports `Ok(false)`
    Reject,
    /// Reports a transport error
    Fail,
    /// Panics inside the delivery call
    Panic,
}

/// A mock notification client that records every attempt
pub struct MockNotificationClient {
    sent: Arc<RwLock<Vec<(i64, String)>>>,
    behavior: NotificationBehavior,
}

impl MockNotificationClient {
    pub fn new() -> Self {
        Self::with_behavior(NotificationBehavior::Deliver)
    }

    pub fn rejecting() -> Self {
        Self::with_behavior(NotificationBehavior::Reject)
    }

    pub fn failing() -> Self {
        Self::with_behavior(NotificationBehavior::Fail)
    }

    pub fn panicking() -> Self {
        Self::with_behavior(NotificationBehavior::Panic)
    }

    pub fn with_behavior(behavior: NotificationBehavior) -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            behavior,
        }
    }

    /// Attempts recorded so far as (recipient, message)
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.read().unwrap().clone()
    }
}

impl Default for MockNotificationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationClient for MockNotificationClient {
    async fn send_notification(
        &self,
        recipient_id: i64,
        message: &str,
    ) -> Result<bool, NotificationError> {
        self.sent
            .write()
            .unwrap()
            .push((recipient_id, message.to_string()));

        match self.behavior {
            NotificationBehavior::Deliver => Ok(true),
            NotificationBehavior::Reject => Ok(false),
            NotificationBehavior::Fail => Err(NotificationError::Api {
                status: 503,
                message: "notification service unavailable".to_string(),
            }),
            NotificationBehavior::Panic => panic!("notification transport blew up"),
        }
    }
}

/// Wait until the background notification task has made `expected` attempts.
///
/// Gives up after about two seconds and returns whatever was recorded.
pub async fn wait_for_notifications(
    client: &MockNotificationClient,
    expected: usize,
) -> Vec<(i64, String)> {
    for _ in 0..200 {
        let sent = client.sent();
        if sent.len() >= expected {
            return sent;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    client.sent()
}
