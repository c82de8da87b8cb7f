use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection};

use super::registry::{DbProvider, DbProviderId};
use crate::config::DatabaseConfig;

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct SqliteDbProvider;

impl SqliteDbProvider {
    /// Each connection to an in-memory database opens its own empty copy.
    fn is_in_memory(url: &str) -> bool {
        let url = url.to_ascii_lowercase();
        url.contains(":memory:") || url.contains("mode=memory")
    }
}

#[async_trait]
impl DbProvider for SqliteDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Sqlite
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("sqlite:")
    }

    fn connect_options(&self, cfg: &DatabaseConfig) -> ConnectOptions {
        let (max, min) = if Self::is_in_memory(&cfg.url) {
            (1, 1)
        } else {
            (cfg.max_connections, cfg.min_idle)
        };

        let mut options = ConnectOptions::new(cfg.url.clone());
        options
            .max_connections(max)
            .min_connections(min)
            .connect_timeout(CONNECT_TIMEOUT)
            .sqlx_logging(false);
        options
    }

    async fn post_connect(&self, db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<()> {
        db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
            .await?;
        Ok(())
    }
}
