//! Notification service adapter
//!
//! HTTP client for the external notification service, plus a no-op client
//! used when no service URL is configured.

pub mod client;

pub use client::NotificationClientImpl;
