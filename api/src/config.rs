use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the notification service; notifications are disabled when unset
    pub notifications_url: Option<String>,
    /// Per-request timeout for the notification service
    pub notification_timeout: Duration,
    pub port: u16,
    /// Create the food_entries table on startup if it is missing
    pub auto_migrate: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let notification_timeout_secs = match env::var("NOTIFICATION_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid NOTIFICATION_TIMEOUT_SECS: {}", raw))?,
            Err(_) => 5,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            notifications_url: env::var("NOTIFICATIONS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            notification_timeout: Duration::from_secs(notification_timeout_secs),
            port,
            auto_migrate: env::var("AUTO_MIGRATE")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }

    /// Check if outbound notifications are configured
    pub fn notifications_enabled(&self) -> bool {
        self.notifications_url.is_some()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_common_truthy_values() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn notifications_enabled_follows_url() {
        let mut config = Config {
            database_url: "postgres://localhost/nutrition".to_string(),
            notifications_url: None,
            notification_timeout: Duration::from_secs(5),
            port: 8080,
            auto_migrate: true,
        };
        assert!(!config.notifications_enabled());

        config.notifications_url = Some("http://localhost:8081".to_string());
        assert!(config.notifications_enabled());
    }
}
