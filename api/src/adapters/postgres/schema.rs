//! Schema bootstrap
//!
//! Creates missing tables straight from the SeaORM entity definitions.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::food_entries;
use crate::error::DomainError;

/// Create the `food_entries` table if it does not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(food_entries::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::info!("food_entries schema ready");
    Ok(())
}
