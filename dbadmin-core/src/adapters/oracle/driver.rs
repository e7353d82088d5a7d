//! Execution collaborator backed by the `oracle` crate (ODPI-C).
//!
//! The driver is blocking; every call runs on `tokio::task::spawn_blocking`.
//! Oracle Client libraries are loaded when the first connection is made, so
//! building with this feature does not require them.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use oracle::sql_type::OracleType;
use zeroize::Zeroizing;

use crate::adapters::{ConnectionConfig, Connector, QueryExecutor};
use super::type_mapping::{NUMERIC_TYPE, reported_data_type};
use crate::models::{ColumnMeta, QueryResult};
use crate::security::Credentials;
use crate::{DbAdminError, Result};

/// Builds [`OracleExecutor`] handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleConnector;

impl Connector for OracleConnector {
    fn connect(
        &self,
        config: &ConnectionConfig,
        credentials: &Credentials,
    ) -> Result<Box<dyn QueryExecutor>> {
        Ok(Box::new(OracleExecutor::new(config, credentials)))
    }
}

#[derive(Clone)]
struct ConnectParams {
    username: Zeroizing<String>,
    password: Zeroizing<String>,
    connect_string: String,
    call_timeout: Duration,
}

impl ConnectParams {
    fn connect(&self) -> Result<oracle::Connection> {
        let conn = oracle::Connection::connect(
            self.username.as_str(),
            self.password.as_str(),
            &self.connect_string,
        )
        .map_err(|e| DbAdminError::connection_failed_with(e.to_string(), e))?;

        conn.set_call_timeout(Some(self.call_timeout))
            .map_err(|e| DbAdminError::connection_failed_with(e.to_string(), e))?;

        Ok(conn)
    }
}

/// Connection handle over one Easy Connect string (`host:port/service`).
pub struct OracleExecutor {
    params: ConnectParams,
    conn: Mutex<Option<Arc<oracle::Connection>>>,
}

impl std::fmt::Debug for OracleExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleExecutor")
            .field("connect_string", &self.params.connect_string)
            .field("username", &self.params.username.as_str())
            .field("open", &self.current().is_some())
            .finish_non_exhaustive()
    }
}

impl OracleExecutor {
    /// Creates an unopened handle.
    pub fn new(config: &ConnectionConfig, credentials: &Credentials) -> Self {
        let connect_string = format!(
            "{}:{}/{}",
            config.host,
            config.port.as_deref().unwrap_or(super::DEFAULT_PORT),
            config.service.as_deref().unwrap_or(super::DEFAULT_SERVICE)
        );

        Self {
            params: ConnectParams {
                username: Zeroizing::new(credentials.username().to_string()),
                password: Zeroizing::new(
                    credentials.expose_password().unwrap_or_default().to_string(),
                ),
                connect_string,
                call_timeout: config.query_timeout,
            },
            conn: Mutex::new(None),
        }
    }

    fn current(&self) -> Option<Arc<oracle::Connection>> {
        self.conn
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Runs `work` on the open connection, or on a temporary one that is
    /// closed afterwards.
    async fn with_connection<T, F>(&self, work: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&oracle::Connection) -> Result<T> + Send + 'static,
    {
        match self.current() {
            Some(conn) => run_blocking(move || work(&conn)).await,
            None => {
                let params = self.params.clone();
                run_blocking(move || {
                    let conn = params.connect()?;
                    let outcome = work(&conn);
                    if let Err(e) = conn.close() {
                        tracing::warn!("Closing temporary Oracle connection failed: {}", e);
                    }
                    outcome
                })
                .await
            }
        }
    }
}

async fn run_blocking<T, F>(work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| DbAdminError::connection_failed_with("Oracle driver task failed", e))?
}

fn execution_error(error: oracle::Error) -> DbAdminError {
    DbAdminError::query_failed(error.to_string())
}

fn fetch(conn: &oracle::Connection, sql: &str, max_rows: Option<usize>) -> Result<QueryResult> {
    let rows = conn.query(sql, &[]).map_err(execution_error)?;

    let mut result = QueryResult {
        columns: rows
            .column_info()
            .iter()
            .map(|info| ColumnMeta::new(info.name()).with_type_name(column_type_name(info.oracle_type())))
            .collect(),
        rows: Vec::new(),
    };

    if max_rows == Some(0) {
        return Ok(result);
    }

    for row_result in rows {
        let row = row_result.map_err(execution_error)?;
        let values = (0..result.columns.len())
            .map(|idx| cell_value(&row, idx))
            .collect();
        result.push_row(values);

        if max_rows.is_some_and(|max| result.len() >= max) {
            break;
        }
    }

    Ok(result)
}

/// Type label for result metadata; zero-scale numerics are reported as
/// `INTEGER`, like the column listing does.
fn column_type_name(oracle_type: &OracleType) -> String {
    match oracle_type {
        OracleType::Number(_, scale) => {
            let label = reported_data_type(NUMERIC_TYPE, Some(i64::from(*scale)));
            if label == NUMERIC_TYPE {
                oracle_type.to_string()
            } else {
                label.to_string()
            }
        }
        other => other.to_string(),
    }
}

/// Text rendering of one cell; numbers stay strings so precision survives.
fn cell_value(row: &oracle::Row, idx: usize) -> serde_json::Value {
    let binary = row.column_info().get(idx).is_some_and(|info| {
        matches!(
            info.oracle_type(),
            OracleType::BLOB | OracleType::Raw(_) | OracleType::LongRaw
        )
    });
    if binary {
        return serde_json::Value::String("[BINARY DATA]".to_string());
    }

    match row.get::<usize, Option<String>>(idx) {
        Ok(Some(text)) => serde_json::Value::String(text),
        Ok(None) | Err(_) => serde_json::Value::Null,
    }
}

#[async_trait]
impl QueryExecutor for OracleExecutor {
    async fn open(&self) -> Result<()> {
        if self.current().is_some() {
            return Ok(());
        }

        let params = self.params.clone();
        let conn = run_blocking(move || params.connect()).await?;
        tracing::debug!("Opened Oracle connection to {}", self.params.connect_string);

        *self.conn.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(conn));
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let taken = self
            .conn
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match taken {
            Some(conn) => {
                run_blocking(move || {
                    conn.close()
                        .map_err(|e| DbAdminError::connection_failed_with(e.to_string(), e))
                })
                .await
            }
            None => Ok(()),
        }
    }

    async fn query(&self, sql: &str) -> Result<QueryResult> {
        let sql = sql.to_string();
        self.with_connection(move |conn| fetch(conn, &sql, None))
            .await
    }

    async fn query_block(&self, sql: &str, max_rows: usize) -> Result<QueryResult> {
        let sql = sql.to_string();
        self.with_connection(move |conn| fetch(conn, &sql, Some(max_rows)))
            .await
    }

    async fn execute_scalar(&self, sql: &str) -> Result<serde_json::Value> {
        let sql = sql.to_string();
        let result = self
            .with_connection(move |conn| fetch(conn, &sql, Some(1)))
            .await?;

        Ok(result
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .unwrap_or(serde_json::Value::Null))
    }

    async fn cancel(&self) -> Result<()> {
        match self.current() {
            Some(conn) => {
                run_blocking(move || conn.break_execution().map_err(execution_error)).await
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_builds_easy_connect_string() {
        let config = ConnectionConfig::new("db.example.com".to_string())
            .with_port("1522".to_string())
            .with_service("ORCLPDB1".to_string())
            .with_username("HR".to_string());
        let creds = Credentials::new("HR".to_string(), Some("secret".to_string()));

        let executor = OracleExecutor::new(&config, &creds);
        assert_eq!(executor.params.connect_string, "db.example.com:1522/ORCLPDB1");
        assert!(executor.current().is_none());

        let debug = format!("{:?}", executor);
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_column_type_names_follow_number_rule() {
        assert_eq!(column_type_name(&OracleType::Number(10, 0)), "INTEGER");
        assert_eq!(
            column_type_name(&OracleType::Number(10, 2)),
            OracleType::Number(10, 2).to_string()
        );
        assert_eq!(
            column_type_name(&OracleType::Number(0, -127)),
            OracleType::Number(0, -127).to_string()
        );
        assert_eq!(
            column_type_name(&OracleType::Varchar2(20)),
            OracleType::Varchar2(20).to_string()
        );
    }

    #[tokio::test]
    async fn test_close_and_cancel_without_open_are_noops() {
        let config = ConnectionConfig::new("localhost".to_string());
        let creds = Credentials::new("SCOTT".to_string(), None);
        let executor = OracleExecutor::new(&config, &creds);

        assert!(executor.close().await.is_ok());
        assert!(executor.cancel().await.is_ok());
    }
}
