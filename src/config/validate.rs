use anyhow::{Result, bail};

use super::AppConfig;
use crate::db::providers;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.general.port == 0 {
        errors.push("general.port must be > 0".to_string());
    }

    let database = &cfg.database;
    if database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    } else if !providers::is_supported_url(&database.url) {
        errors.push(
            "database.url must use a postgres://, postgresql:// or sqlite: scheme".to_string(),
        );
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::{AppConfig, DatabaseConfig};

    #[test]
    fn default_config_is_valid() {
        validate(&AppConfig::default()).expect("defaults should validate");
    }

    #[test]
    fn in_memory_sqlite_config_is_valid() {
        let cfg = AppConfig {
            database: DatabaseConfig::in_memory_sqlite(),
            ..AppConfig::default()
        };
        validate(&cfg).expect("in-memory sqlite should validate");
    }

    #[test]
    fn collects_every_problem_into_one_error() {
        let mut cfg = AppConfig::default();
        cfg.general.host = "  ".to_string();
        cfg.database.min_idle = 20;
        cfg.database.max_connections = 5;

        let err = validate(&cfg).expect_err("config should be rejected");
        let message = err.to_string();
        assert!(message.contains("general.host must not be empty"));
        assert!(message.contains("database.min_idle (20) must be <= database.max_connections (5)"));
    }

    #[test]
    fn rejects_unsupported_database_scheme() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "mysql://localhost/app".to_string();

        let err = validate(&cfg).expect_err("mysql should be rejected");
        assert!(err.to_string().contains("database.url must use"));
    }
}
