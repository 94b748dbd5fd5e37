//! Connection provider
//!
//! Wraps a lazily-connected sqlx `AnyPool`. Nothing touches the network
//! until the first acquire, so building a provider never fails on an
//! unreachable database. Each operation holds one `PoolConnection`, which
//! goes back to the pool when dropped on every exit path.

use std::time::Duration;

use sqlx::any::AnyPoolOptions;
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyConnection, AnyPool, Connection};

use crate::config::{Backend, DatabaseConfig};
use crate::error::{DataError, Result};

#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    pool: AnyPool,
    backend: Backend,
    target: String,
}

impl ConnectionProvider {
    /// Build a provider for the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Connection` if the URL cannot be parsed.
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy(&config.connection_url())
            .map_err(DataError::connection)?;

        Ok(Self {
            pool,
            backend: config.backend(),
            target: config.display_target(),
        })
    }

    /// Scoped acquisition of one connection.
    pub async fn acquire(&self) -> Result<PoolConnection<Any>> {
        self.pool.acquire().await.map_err(|err| {
            tracing::warn!(db = %self.target, error = %err, "could not obtain a connection");
            DataError::connection(err)
        })
    }

    /// Open a single unpooled connection.
    pub async fn connect_once(config: &DatabaseConfig) -> Result<AnyConnection> {
        sqlx::any::install_default_drivers();
        tracing::debug!(db = %config.display_target(), "opening connection");

        AnyConnection::connect(&config.connection_url())
            .await
            .map_err(DataError::connection)
    }

    /// Open a single unpooled connection and close it again.
    pub async fn check(config: &DatabaseConfig) -> Result<()> {
        let conn = Self::connect_once(config).await?;
        conn.close().await.map_err(DataError::connection)
    }

    /// Acquire a connection and run a trivial statement on it.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Credential-free description of the database, for messages
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_is_connection_error() {
        let err = ConnectionProvider::new(&DatabaseConfig::from_url("not a url")).unwrap_err();
        assert!(err.is_connection());
    }

    #[tokio::test]
    async fn unopenable_sqlite_file_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("records.db");
        let config = DatabaseConfig::from_url(format!("sqlite://{}", path.display()));

        let provider = ConnectionProvider::new(&config).unwrap();
        assert_eq!(provider.backend(), Backend::Sqlite);

        let err = provider.ping().await.unwrap_err();
        assert!(err.is_connection(), "got {err:?}");
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p medrec-core -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let provider = ConnectionProvider::new(&DatabaseConfig::from_url(url)).unwrap();
        provider.ping().await.expect("ping failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn rejected_credentials_are_connection_error() {
        let config = DatabaseConfig {
            password: "definitely-wrong".into(),
            ..DatabaseConfig::default()
        };
        let err = ConnectionProvider::connect_once(&config).await.unwrap_err();
        assert!(err.is_connection());
    }
}
