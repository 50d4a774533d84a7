//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `commands` / `queries`: Inputs accepted by the application services
//! - `ports`: Trait definitions for external dependencies

pub mod commands;
pub mod entities;
pub mod ports;
pub mod queries;
