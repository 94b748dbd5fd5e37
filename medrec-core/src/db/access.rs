//! Data access functions
//!
//! `fetch_data` and `execute_query` take raw SQL with positional
//! `$1, $2, ...` placeholders and untyped [`SqlValue`] parameters. Every
//! call acquires its own connection and releases it before returning.

use sqlx::any::{AnyArguments, AnyRow};
use sqlx::query::Query;
use sqlx::{Any, Column, Connection, Row as _};

use super::ConnectionProvider;
use crate::config::DatabaseConfig;
use crate::error::{DataError, Result};
use crate::models::{Row, SqlValue};

/// Handle for issuing statements
#[derive(Debug, Clone)]
pub struct Database {
    provider: ConnectionProvider,
}

impl Database {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// Build a database handle without connecting yet
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self> {
        Ok(Self::new(ConnectionProvider::new(config)?))
    }

    pub fn provider(&self) -> &ConnectionProvider {
        &self.provider
    }

    /// Run a read query and return every row, in result order.
    ///
    /// An empty result is an empty vector, not an error.
    pub async fn fetch_data(&self, query: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        tracing::debug!(sql = first_line(query), params = params.len(), "fetch_data");

        let mut conn = self.provider.acquire().await?;
        let rows = bind_params(sqlx::query(query), params)
            .fetch_all(&mut *conn)
            .await?;

        rows.iter().map(decode_row).collect()
    }

    /// Run a write statement in its own transaction and commit.
    ///
    /// Returns the number of rows affected. On failure the transaction is
    /// rolled back when dropped and nothing is retried.
    pub async fn execute_query(&self, query: &str, params: &[SqlValue]) -> Result<u64> {
        tracing::debug!(sql = first_line(query), params = params.len(), "execute_query");

        let mut conn = self.provider.acquire().await?;
        let mut tx = Connection::begin(&mut *conn).await?;
        let result = bind_params(sqlx::query(query), params)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected())
    }
}

fn bind_params<'q>(
    mut query: Query<'q, Any, AnyArguments<'q>>,
    params: &'q [SqlValue],
) -> Query<'q, Any, AnyArguments<'q>> {
    for param in params {
        query = match param {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Float(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Bool(v) => query.bind(*v),
        };
    }
    query
}

fn decode_row(row: &AnyRow) -> Result<Row> {
    (0..row.len()).map(|idx| decode_column(row, idx)).collect()
}

/// Try each supported column type in turn; NULL decodes under any of them.
fn decode_column(row: &AnyRow, idx: usize) -> Result<SqlValue> {
    if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
        return Ok(v.into());
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
        return Ok(v.into());
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
        return Ok(v.into());
    }
    if let Ok(v) = row.try_get::<Option<bool>, _>(idx) {
        return Ok(v.into());
    }
    Err(DataError::decode(
        row.column(idx).name(),
        "integer, float, text or boolean",
    ))
}

fn first_line(query: &str) -> &str {
    query.trim().lines().next().unwrap_or_default().trim()
}
