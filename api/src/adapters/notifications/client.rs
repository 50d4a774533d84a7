//! Notification service client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use serde::Serialize;

use crate::config::Config;
use crate::domain::ports::NotificationClient;
use crate::error::NotificationError;

/// Channel requested from the notification service
const NOTIFICATION_TYPE: &str = "EMAIL";

/// Request body accepted by `POST /api/v1/notifications`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateNotificationRequest<'a> {
    user_id: i64,
    #[serde(rename = "type")]
    notification_type: &'a str,
    message: &'a str,
    /// Local calendar date as `YYYY-MM-DD`
    sent_date: String,
}

/// HTTP client for the notification service
pub struct HttpNotificationClient {
    http: Client,
    base_url: String,
}

impl HttpNotificationClient {
    /// Build a client whose requests give up after `timeout`
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, NotificationError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }
}

#[async_trait]
impl NotificationClient for HttpNotificationClient {
    async fn send_notification(
        &self,
        recipient_id: i64,
        message: &str,
    ) -> Result<bool, NotificationError> {
        let body = CreateNotificationRequest {
            user_id: recipient_id,
            notification_type: NOTIFICATION_TYPE,
            message,
            sent_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        };

        let response = self
            .http
            .post(self.api_url("/notifications"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(recipient_id, "Notification sent");
            Ok(true)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(NotificationError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// A no-op notification client for when no notification service is configured
pub struct NoopNotificationClient;

#[async_trait]
impl NotificationClient for NoopNotificationClient {
    async fn send_notification(
        &self,
        recipient_id: i64,
        _message: &str,
    ) -> Result<bool, NotificationError> {
        tracing::debug!(recipient_id, "Notifications disabled, skipping delivery");
        Ok(false)
    }
}

/// Notification client selected from configuration
pub enum NotificationClientImpl {
    Http(HttpNotificationClient),
    Noop(NoopNotificationClient),
}

impl NotificationClientImpl {
    pub fn from_config(config: &Config) -> Result<Self, NotificationError> {
        Ok(match &config.notifications_url {
            Some(url) => Self::Http(HttpNotificationClient::new(
                url.clone(),
                config.notification_timeout,
            )?),
            None => Self::Noop(NoopNotificationClient),
        })
    }
}

#[async_trait]
impl NotificationClient for NotificationClientImpl {
    async fn send_notification(
        &self,
        recipient_id: i64,
        message: &str,
    ) -> Result<bool, NotificationError> {
        match self {
            Self::Http(client) => client.send_notification(recipient_id, message).await,
            Self::Noop(client) => client.send_notification(recipient_id, message).await,
        }
    }
}
