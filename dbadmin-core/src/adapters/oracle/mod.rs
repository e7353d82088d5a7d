//! Oracle database adapter.
//!
//! # Module Structure
//! - `connection`: Descriptor defaults and case folding
//! - `capabilities`: Capability flags, DDL fragments, rule clause
//! - `queries`: Catalog SQL builders
//! - `type_mapping`: `NUMBER` scale-0 to `INTEGER` reporting rule
//! - `templates`: DDL skeletons
//! - `error_position`: Syntax error location extraction
//! - `driver`: `oracle` crate backed executor (feature `oracle`)
//!
//! # Trust Boundary
//! Identifiers are interpolated into catalog SQL without escaping. They are
//! typed [`SanitizedIdent`] so callers decide explicitly how they were
//! vetted. `query_data_limited` and the record filter take raw SQL.

mod capabilities;
mod connection;
mod error_position;
mod queries;
mod templates;
mod type_mapping;

#[cfg(feature = "oracle")]
mod driver;


use async_trait::async_trait;

use super::{
    Capabilities, CommandTemplates, ConnectionConfig, Connector, DatabaseAdapter,
    IntrospectionFilter, QueryExecutor, SchemaOperation, Template,
};
use crate::models::{DatabaseType, ErrorPosition, QueryResult, RowLimit};
use crate::security::{Credentials, SanitizedIdent};
use crate::{DbAdminError, Result};
use queries::RoutineKind;

pub use capabilities::{ORACLE_CAPABILITIES, ORACLE_COMMANDS, update_delete_rules_clause};
pub use connection::{DEFAULT_PORT, DEFAULT_SERVICE, normalize_for_oracle};
pub use error_position::error_position;
pub use templates::template_for;
pub use type_mapping::{INTEGER_TYPE, NUMERIC_TYPE, reported_data_type};

#[cfg(feature = "oracle")]
pub use driver::{OracleConnector, OracleExecutor};

/// Text returned by `test_connection` when open and close both succeed.
pub const CONNECTION_OK: &str = "Connection successful.";

/// Oracle adapter over an injected execution handle.
///
/// The descriptor is normalized once at construction and is read-only
/// afterwards. Listings without an explicit schema use the upper-cased login
/// user as schema.
pub struct OracleAdapter {
    config: ConnectionConfig,
    schema: String,
    connection: Box<dyn QueryExecutor>,
}

impl std::fmt::Debug for OracleAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleAdapter")
            .field("config", &self.config)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl OracleAdapter {
    /// Normalizes `config` and builds (does not open) the execution handle.
    ///
    /// The user is taken from `config.username`, falling back to the
    /// credentials' user name. No I/O happens here.
    ///
    /// # Errors
    /// Returns a configuration error for an invalid descriptor, or whatever
    /// the connector reports.
    pub fn new(
        config: ConnectionConfig,
        credentials: Credentials,
        connector: &dyn Connector,
    ) -> Result<Self> {
        let mut config = config;
        if config.username.is_none() && !credentials.username().is_empty() {
            config.username = Some(credentials.username().to_string());
        }
        config.validate()?;

        let config = normalize_for_oracle(&config);
        let user = config
            .username
            .clone()
            .ok_or_else(|| DbAdminError::configuration("username cannot be empty"))?;
        let credentials = credentials.with_username(user.clone());

        let connection = connector.connect(&config, &credentials)?;

        tracing::info!(
            "Created Oracle adapter for {} (conn_id={}, alias='{}')",
            config,
            config.conn_id,
            config.alias
        );

        Ok(Self {
            config,
            schema: user,
            connection,
        })
    }

    fn service(&self) -> &str {
        self.config.service.as_deref().unwrap_or(DEFAULT_SERVICE)
    }

    fn port(&self) -> &str {
        self.config.port.as_deref().unwrap_or(DEFAULT_PORT)
    }

    fn user(&self) -> &str {
        &self.schema
    }

    async fn catalog_query(&self, what: &str, sql: String) -> Result<QueryResult> {
        tracing::debug!("Querying {}: {}", what, sql.trim());
        let result = self.connection.query(&sql).await?;
        tracing::debug!("Fetched {} {} rows", result.len(), what);
        Ok(result)
    }

    fn owner_or_default<'a>(&'a self, schema: Option<&'a SanitizedIdent>) -> &'a str {
        schema
            .map(SanitizedIdent::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.schema)
    }

    async fn routine_definition(&self, kind: RoutineKind, name: &SanitizedIdent) -> Result<String> {
        let sql = queries::definition_sql(kind, name.as_str());
        tracing::debug!("Fetching {} definition: {}", kind.keyword(), sql);

        let mut body = queries::definition_header(kind, name.as_str());
        match self.connection.execute_scalar(&sql).await? {
            serde_json::Value::Null => {
                tracing::warn!("No DDL returned for {} {}", kind.keyword(), name);
            }
            serde_json::Value::String(ddl) => body.push_str(&ddl),
            other => body.push_str(&other.to_string()),
        }
        Ok(body)
    }
}

#[async_trait]
impl DatabaseAdapter for OracleAdapter {
    fn database_type(&self) -> DatabaseType {
        DatabaseType::Oracle
    }

    fn connection_config(&self) -> ConnectionConfig {
        self.config.clone()
    }

    fn capabilities(&self) -> &'static Capabilities {
        &ORACLE_CAPABILITIES
    }

    fn command_templates(&self) -> &'static CommandTemplates {
        &ORACLE_COMMANDS
    }

    fn name(&self) -> String {
        self.service().to_string()
    }

    fn user_name(&self) -> String {
        self.user().to_string()
    }

    fn default_schema(&self) -> String {
        self.schema.clone()
    }

    fn print_database_info(&self) -> String {
        format!("{}@{}", self.user(), self.service())
    }

    fn print_database_details(&self) -> String {
        format!("{}:{}", self.config.host, self.port())
    }

    async fn version(&self) -> Result<serde_json::Value> {
        tracing::debug!("Fetching server version");
        self.connection.execute_scalar(queries::VERSION_SQL).await
    }

    async fn is_express(&self) -> Result<bool> {
        let products = self
            .catalog_query("express products", queries::EXPRESS_SQL.to_string())
            .await?;
        Ok(!products.is_empty())
    }

    async fn is_superuser(&self) -> bool {
        match self.connection.query(queries::SUPERUSER_PROBE_SQL).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Privileged view probe failed, treating user as unprivileged: {}", e);
                false
            }
        }
    }

    async fn test_connection(&self) -> String {
        tracing::info!("Testing connection to {}", self.config);

        let outcome = async {
            self.connection.open().await?;
            self.connection.close().await
        }
        .await;

        match outcome {
            Ok(()) => {
                tracing::info!("Connection test succeeded");
                CONNECTION_OK.to_string()
            }
            Err(e) => {
                tracing::error!("Connection test failed: {}", e);
                e.to_string()
            }
        }
    }

    fn error_position(&self, message: &str) -> Option<ErrorPosition> {
        error_position(message)
    }

    fn handle_update_delete_rules(&self, update_rule: &str, delete_rule: &str) -> String {
        update_delete_rules_clause(update_rule, delete_rule)
    }

    async fn query_roles(&self) -> Result<QueryResult> {
        self.catalog_query("roles", queries::ROLES_SQL.to_string()).await
    }

    async fn query_tablespaces(&self) -> Result<QueryResult> {
        self.catalog_query("tablespaces", queries::TABLESPACES_SQL.to_string())
            .await
    }

    async fn query_databases(&self) -> Result<QueryResult> {
        self.catalog_query("databases", queries::DATABASES_SQL.to_string())
            .await
    }

    async fn query_tables(&self, filter: &IntrospectionFilter) -> Result<QueryResult> {
        let sql = queries::tables_sql(filter.scope(&self.schema));
        self.catalog_query("tables", sql).await
    }

    async fn query_table_fields(&self, filter: &IntrospectionFilter) -> Result<QueryResult> {
        let sql = queries::table_fields_sql(filter.scope(&self.schema));
        self.catalog_query("columns", sql).await
    }

    async fn query_foreign_keys(&self, filter: &IntrospectionFilter) -> Result<QueryResult> {
        let sql = queries::foreign_keys_sql(filter.scope(&self.schema));
        self.catalog_query("foreign keys", sql).await
    }

    async fn query_primary_keys(&self, filter: &IntrospectionFilter) -> Result<QueryResult> {
        let sql = queries::primary_keys_sql(filter.scope(&self.schema));
        self.catalog_query("primary keys", sql).await
    }

    async fn query_uniques(&self, filter: &IntrospectionFilter) -> Result<QueryResult> {
        let sql = queries::uniques_sql(filter.scope(&self.schema));
        self.catalog_query("unique constraints", sql).await
    }

    async fn query_indexes(&self, filter: &IntrospectionFilter) -> Result<QueryResult> {
        let sql = queries::indexes_sql(filter.scope(&self.schema));
        self.catalog_query("indexes", sql).await
    }

    async fn query_data_limited(&self, sql: &str, limit: RowLimit) -> Result<QueryResult> {
        let count = match limit {
            RowLimit::Unlimited => {
                tracing::debug!("Running unbounded query");
                return self.connection.query(sql).await;
            }
            RowLimit::Rows(count) => count,
        };

        let bounded = queries::limited_sql(sql, count);
        tracing::debug!("Running query capped at {} rows", count);

        let fetched = async {
            self.connection.open().await?;
            let data = self
                .connection
                .query_block(&bounded, usize::try_from(count).unwrap_or(0))
                .await?;
            self.connection.close().await?;
            Ok::<_, DbAdminError>(data)
        }
        .await;

        match fetched {
            Ok(data) => Ok(data),
            Err(e) => {
                if let Err(cancel_error) = self.connection.cancel().await {
                    tracing::warn!("Cancelling failed statement also failed: {}", cancel_error);
                }
                Err(e)
            }
        }
    }

    async fn query_table_records(
        &self,
        column_list: &str,
        table: &SanitizedIdent,
        filter: &str,
        limit: RowLimit,
    ) -> Result<QueryResult> {
        let limit = match limit {
            RowLimit::Unlimited => None,
            RowLimit::Rows(count) => Some(count),
        };
        let sql = queries::table_records_sql(column_list, table.as_str(), filter, limit);
        self.catalog_query("table records", sql).await
    }

    async fn query_functions(&self, filter: &IntrospectionFilter) -> Result<QueryResult> {
        let sql = queries::routines_sql(RoutineKind::Function, filter.scope(&self.schema));
        self.catalog_query("functions", sql).await
    }

    async fn query_function_fields(
        &self,
        function: &SanitizedIdent,
        schema: Option<&SanitizedIdent>,
    ) -> Result<QueryResult> {
        let sql = queries::routine_fields_sql(
            RoutineKind::Function,
            self.owner_or_default(schema),
            function.as_str(),
        );
        self.catalog_query("function arguments", sql).await
    }

    async fn function_definition(&self, function: &SanitizedIdent) -> Result<String> {
        self.routine_definition(RoutineKind::Function, function)
            .await
    }

    async fn query_procedures(&self, filter: &IntrospectionFilter) -> Result<QueryResult> {
        let sql = queries::routines_sql(RoutineKind::Procedure, filter.scope(&self.schema));
        self.catalog_query("procedures", sql).await
    }

    async fn query_procedure_fields(
        &self,
        procedure: &SanitizedIdent,
        schema: Option<&SanitizedIdent>,
    ) -> Result<QueryResult> {
        let sql = queries::routine_fields_sql(
            RoutineKind::Procedure,
            self.owner_or_default(schema),
            procedure.as_str(),
        );
        self.catalog_query("procedure arguments", sql).await
    }

    async fn procedure_definition(&self, procedure: &SanitizedIdent) -> Result<String> {
        self.routine_definition(RoutineKind::Procedure, procedure)
            .await
    }

    fn template(&self, operation: SchemaOperation) -> Option<Template> {
        template_for(operation)
    }
}
