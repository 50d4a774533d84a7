//! AgeCare Nutrition API Server
//!
//! Records what residents of a care home eat and tells them about it.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, NotificationClientImpl, PostgresFoodEntryRepository};
use app::{FoodEntryCommandService, FoodEntryQueryService};
use config::Config;
use domain::ports::{FoodEntryRepository, NotificationClient};

/// Application state shared across all handlers
pub struct AppState<FR, NC>
where
    FR: FoodEntryRepository,
    NC: NotificationClient,
{
    pub command_service: Arc<FoodEntryCommandService<FR, NC>>,
    pub query_service: Arc<FoodEntryQueryService<FR>>,
}

impl<FR, NC> AppState<FR, NC>
where
    FR: FoodEntryRepository,
    NC: NotificationClient + 'static,
{
    pub fn new(entries: Arc<FR>, notifications: Arc<NC>) -> Self {
        Self {
            command_service: Arc::new(FoodEntryCommandService::new(
                entries.clone(),
                notifications,
            )),
            query_service: Arc::new(FoodEntryQueryService::new(entries)),
        }
    }
}

// Derive would require FR: Clone and NC: Clone.
impl<FR, NC> Clone for AppState<FR, NC>
where
    FR: FoodEntryRepository,
    NC: NotificationClient,
{
    fn clone(&self) -> Self {
        Self {
            command_service: self.command_service.clone(),
            query_service: self.query_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over any repository and notification client
pub fn router<FR, NC>(state: AppState<FR, NC>) -> Router
where
    FR: FoodEntryRepository + 'static,
    NC: NotificationClient + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Food entries
        .route(
            "/api/v1/food-entries",
            get(handlers::list_food_entries::<FR, NC>)
                .post(handlers::create_food_entry::<FR, NC>),
        )
        .route(
            "/api/v1/food-entries/:food_entry_id",
            get(handlers::get_food_entry::<FR, NC>).put(handlers::update_food_entry::<FR, NC>),
        )
        .route(
            "/api/v1/food-entries/resident/:resident_id",
            get(handlers::list_food_entries_by_resident::<FR, NC>),
        )
        .route(
            "/api/v1/food-entries/date/:date",
            get(handlers::list_food_entries_by_date::<FR, NC>),
        )
        .route(
            "/api/v1/food-entries/meal/:meal_type",
            get(handlers::list_food_entries_by_meal::<FR, NC>),
        )
        .route(
            "/api/v1/food-entries/added-by/:added_by_id",
            get(handlers::list_food_entries_by_staff::<FR, NC>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,agecare_nutrition_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AgeCare Nutrition API...");

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.auto_migrate {
        ensure_schema(&db)
            .await
            .context("Failed to create food_entries table")?;
    }

    // Create adapters
    let food_entry_repo = Arc::new(PostgresFoodEntryRepository::new(db));
    let notification_client = Arc::new(
        NotificationClientImpl::from_config(&config)
            .context("Failed to build notification client")?,
    );
    if !config.notifications_enabled() {
        tracing::warn!("NOTIFICATIONS_URL not set, resident notifications are disabled");
    }

    let state = AppState::new(food_entry_repo, notification_client);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
