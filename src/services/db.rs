use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

use crate::core::exchange::TransitionError;
use crate::core::review::ReviewError;

/// Errors that can occur when operating on the store
///
/// Every failure a domain operation can produce is a distinct variant, so
/// the API surface can tell a missing row from a denied transition from an
/// unmet precondition instead of collapsing them into one generic error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    Payload(#[from] validator::ValidationErrors),

    #[error("{field} is already taken")]
    Duplicate { field: &'static str },

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Transition(#[from] TransitionError),

    #[error("{0}")]
    Review(#[from] ReviewError),
}

impl StoreError {
    /// Map a unique-constraint violation to a field-level duplicate error
    ///
    /// `constraints` pairs constraint names with the field reported to the
    /// client. Anything else stays a plain database error.
    pub(crate) fn duplicate_on(
        err: sqlx::Error,
        constraints: &[(&str, &'static str)],
    ) -> StoreError {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                if let Some(name) = db.constraint() {
                    if let Some((_, field)) = constraints.iter().find(|(c, _)| *c == name) {
                        return StoreError::Duplicate { field };
                    }
                }
            }
        }
        StoreError::Database(err)
    }

    /// Map a foreign-key violation on delete to a conflict error
    pub(crate) fn conflict_on(err: sqlx::Error, message: &str) -> StoreError {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_foreign_key_violation() {
                return StoreError::Conflict(message.to_string());
            }
        }
        StoreError::Database(err)
    }
}

/// PostgreSQL-backed store for the marketplace
///
/// One shared pool; every operation acquires a connection or transaction
/// scoped to the request and releases it on all exit paths.
pub struct Database {
    pub(crate) pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and run pending migrations
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        Self::connect(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_entity() {
        let err = StoreError::NotFound {
            entity: "exchange",
            id: 17,
        };
        assert_eq!(err.to_string(), "exchange with id 17 not found");
    }

    #[test]
    fn test_duplicate_names_the_field() {
        let err = StoreError::Duplicate { field: "username" };
        assert_eq!(err.to_string(), "username is already taken");
    }
}
