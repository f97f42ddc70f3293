/// Failure reported by a [`ProductStore`](crate::ProductStore).
///
/// The gateway turns these into tagged outcomes; they never reach a front
/// end directly.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A primary-key or unique constraint rejected the statement.
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// The store could not be reached (pool closed, timed out, I/O).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The statement itself failed.
    #[error("Query failed: {0}")]
    Query(String),
}

/// PostgreSQL SQLSTATE for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                    StoreError::UniqueViolation {
                        constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                    }
                } else {
                    StoreError::Query(db_err.message().to_string())
                }
            }
            sqlx::Error::PoolTimedOut => StoreError::Unavailable("connection pool timed out".into()),
            sqlx::Error::PoolClosed => StoreError::Unavailable("connection pool is closed".into()),
            sqlx::Error::Io(e) => StoreError::Unavailable(e.to_string()),
            sqlx::Error::Tls(e) => StoreError::Unavailable(e.to_string()),
            other => StoreError::Query(other.to_string()),
        }
    }
}
