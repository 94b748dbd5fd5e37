/// Structured error types for the medrec data access layer.
///
/// Every failure is terminal for the single operation that raised it.
/// The CLI renders these as one-line messages; library consumers can
/// match on the variant to tell connection trouble from bad input.

use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::models::ValidationError;

/// Main error type for medrec-core operations
#[derive(Error, Debug)]
pub enum DataError {
    /// Database unreachable, bad coordinates, or credentials rejected
    #[error("connection error: {source}")]
    Connection { source: sqlx::Error },

    /// Malformed SQL or a statement the database refused for non-constraint reasons
    #[error("query error: {source}")]
    Query { source: sqlx::Error },

    /// Constraint violation (not-null, check, unique, missing parent row)
    #[error("integrity error: {message}")]
    Integrity { message: String },

    /// Input rejected before any statement was issued
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Row referenced by id does not exist
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Column held a value of an unexpected type
    #[error("unexpected value in column '{column}': expected {expected}")]
    Decode {
        column: String,
        expected: &'static str,
    },
}

/// Result type alias for medrec-core operations
pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    /// Wrap an error raised while opening or acquiring a connection.
    pub fn connection(source: sqlx::Error) -> Self {
        Self::Connection { source }
    }

    /// Create an integrity error with a message
    pub fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity {
            message: message.into(),
        }
    }

    /// Create a decode error for a named column
    pub fn decode(column: impl Into<String>, expected: &'static str) -> Self {
        Self::Decode {
            column: column.into(),
            expected,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }
}

/// Classify an error raised while running a statement.
impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection { source: err },
            sqlx::Error::Database(db) => {
                if is_connection_code(db.code().as_deref()) {
                    return Self::Connection { source: err };
                }
                match db.kind() {
                    ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation => Self::Integrity {
                        message: db.message().to_owned(),
                    },
                    _ => Self::Query { source: err },
                }
            }
            _ => Self::Query { source: err },
        }
    }
}

/// Error codes that mean the database itself could not be reached or entered.
///
/// Postgres SQLSTATE classes 08 (connection exception), 28 (invalid
/// authorization) and 3D000 (unknown database); SQLite result code 14
/// (SQLITE_CANTOPEN).
pub(crate) fn is_connection_code(code: Option<&str>) -> bool {
    match code {
        Some(code) => {
            code.starts_with("08") || code.starts_with("28") || code == "3D000" || code == "14"
        }
        None => false,
    }
}
