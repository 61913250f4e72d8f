#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Private in-memory database per test, migrated with the real migrator.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
