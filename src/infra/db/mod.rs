//! Database connection provider.
//!
//! One pooled handle per process invocation. `close` is separate from
//! statement execution and `scoped` guarantees it runs on every path.

use futures::future::BoxFuture;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};

use crate::config::DatabaseSettings;
use crate::errors::{AppError, AppResult};

pub mod inspector;
pub mod migrations;
pub mod runner;
pub mod seeds;
pub mod sql_file;

pub use inspector::{ColumnInfo, SchemaInspector, TableReport, TableStatus};
pub use runner::{Direction, RunState, ScriptRunner, StepMode};
pub use sql_file::SqlFile;

/// Database wrapper for connection management
// No `Clone`: sea-orm's `DatabaseConnection` is not `Clone` with the `mock` feature (tests); share via `Arc`.
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a pooled connection.
    ///
    /// # Errors
    /// `AppError::Connection` when the descriptor is malformed or the host
    /// cannot be reached.
    pub async fn connect(settings: &DatabaseSettings) -> AppResult<Self> {
        let url = settings.connection_url()?;

        let mut options = ConnectOptions::new(url);
        options
            .max_connections(settings.max_connections)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options)
            .await
            .map_err(|e| AppError::connection(e.to_string()))?;

        tracing::debug!(
            max_connections = settings.max_connections,
            tls_relaxed = settings.accept_invalid_certs,
            "Database pool opened"
        );

        Ok(Self { connection })
    }

    /// Wrap an existing connection (tests hand in a mock connection).
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Connect, run `f`, then close the pool whatever `f` returned.
    ///
    /// Nothing is closed when the connection itself fails.
    pub async fn scoped<F, T>(settings: &DatabaseSettings, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a Database) -> BoxFuture<'a, AppResult<T>>,
    {
        let db = Self::connect(settings).await?;
        let result = f(&db).await;

        if let Err(e) = db.close().await {
            tracing::warn!("Failed to close database pool: {}", e);
        }

        result
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Give back the underlying connection.
    pub fn into_connection(self) -> DatabaseConnection {
        self.connection
    }

    /// Drain and close the pool.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await?;
        tracing::debug!("Database pool closed");
        Ok(())
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
