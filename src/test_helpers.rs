use axum::Router;
use sea_orm::{DatabaseBackend, MockDatabase};

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    routes::app,
    state::AppState,
};

/// Full app over a mock connection, for requests that never reach the store.
pub fn mock_app() -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    app(AppState::new(AppConfig::default(), db))
}

/// Full app over a fresh in-memory SQLite database with the schema synced.
pub async fn sqlite_app() -> anyhow::Result<Router> {
    let cfg = AppConfig {
        database: DatabaseConfig::in_memory_sqlite(),
        ..AppConfig::default()
    };
    let db = connection::connect(&cfg.database).await?;
    Ok(app(AppState::new(cfg, db)))
}
