mod postgres;
mod registry;
mod sqlite;

use std::sync::Arc;

pub use registry::{DbProvider, DbProviderId, DbProviders};

use self::{postgres::PostgresDbProvider, sqlite::SqliteDbProvider};

pub fn default_registry() -> anyhow::Result<DbProviders> {
    DbProviders::new()
        .with_provider(Arc::new(PostgresDbProvider))?
        .with_provider(Arc::new(SqliteDbProvider))
}

/// Whether any built-in provider accepts `url`.
pub fn is_supported_url(url: &str) -> bool {
    PostgresDbProvider.supports_url(url) || SqliteDbProvider.supports_url(url)
}

#[cfg(test)]
mod tests {
    use super::{DbProviderId, default_registry, is_supported_url};
    use crate::config::defaults::DEFAULT_DATABASE_URL;

    #[test]
    fn default_database_url_resolves_to_sqlite() {
        let registry = default_registry().expect("built-in providers should register");
        let provider = registry
            .provider_for_url(DEFAULT_DATABASE_URL)
            .expect("default url should resolve");
        assert_eq!(provider.id(), DbProviderId::Sqlite);
    }

    #[test]
    fn recognizes_supported_schemes() {
        assert!(is_supported_url("sqlite::memory:"));
        assert!(is_supported_url("postgres://localhost/board"));
        assert!(is_supported_url("POSTGRESQL://localhost/board"));
        assert!(!is_supported_url("mysql://localhost/board"));
        assert!(!is_supported_url("sql_app.db"));
    }
}
