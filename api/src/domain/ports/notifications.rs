//! Notification port trait
//!
//! Defines the interface for informing a recipient about a new food entry.

use async_trait::async_trait;

use crate::error::NotificationError;

/// Port trait for outbound notifications
#[async_trait]
pub trait NotificationClient: Send + Sync {
    /// Attempt to deliver `message` to `recipient_id`.
    ///
    /// `Ok(false)` means the attempt was not delivered without a transport error.
    async fn send_notification(
        &self,
        recipient_id: i64,
        message: &str,
    ) -> Result<bool, NotificationError>;
}
