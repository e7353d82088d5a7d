//! Execution collaborator seam.
//!
//! Adapters never talk to a driver directly. They compose SQL text and hand
//! it to a [`QueryExecutor`], which owns the connection handle and reports
//! execution failures as `DbAdminError::QueryExecution` with the engine's raw
//! error text.

use async_trait::async_trait;

use super::ConnectionConfig;
use crate::Result;
use crate::models::QueryResult;
use crate::security::Credentials;

/// Connection handle plus query execution.
///
/// # Object Safety
/// This trait is object-safe; adapters hold it as `Box<dyn QueryExecutor>`.
///
/// # Concurrency
/// Implementations are not required to serialize calls made through the
/// same handle. Callers sharing one adapter across tasks synchronize around
/// it themselves.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Opens the underlying connection and keeps it for subsequent calls.
    async fn open(&self) -> Result<()>;

    /// Releases the connection opened by [`QueryExecutor::open`].
    async fn close(&self) -> Result<()>;

    /// Runs `sql` and returns every row with column labels.
    ///
    /// Uses the open connection when there is one, otherwise opens a
    /// temporary connection and releases it before returning.
    async fn query(&self, sql: &str) -> Result<QueryResult>;

    /// Runs `sql` on the open connection and fetches at most `max_rows` rows.
    async fn query_block(&self, sql: &str, max_rows: usize) -> Result<QueryResult>;

    /// Runs `sql` and returns the first column of the first row.
    ///
    /// SQL NULL and an empty result are both `Value::Null`.
    async fn execute_scalar(&self, sql: &str) -> Result<serde_json::Value>;

    /// Best-effort cancellation of the statement in flight.
    async fn cancel(&self) -> Result<()>;
}

/// Builds (but does not open) execution handles.
pub trait Connector: Send + Sync {
    /// Creates a handle for an already normalized descriptor.
    ///
    /// # Errors
    /// Returns error if the driver cannot represent the descriptor. No I/O
    /// happens here.
    fn connect(
        &self,
        config: &ConnectionConfig,
        credentials: &Credentials,
    ) -> Result<Box<dyn QueryExecutor>>;
}

impl<F> Connector for F
where
    F: Fn(&ConnectionConfig, &Credentials) -> Result<Box<dyn QueryExecutor>> + Send + Sync,
{
    fn connect(
        &self,
        config: &ConnectionConfig,
        credentials: &Credentials,
    ) -> Result<Box<dyn QueryExecutor>> {
        self(config, credentials)
    }
}
