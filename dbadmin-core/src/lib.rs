//! Core adapters and utilities for dbadmin.
//!
//! This crate turns generic metadata and DDL requests from an administration
//! front end into engine-specific catalog SQL. The SQL is handed to an
//! injected execution collaborator ([`adapters::QueryExecutor`]) and results
//! are returned unchanged as [`models::QueryResult`] values.
//!
//! # Security Guarantees
//! - Passwords live only in [`security::Credentials`] and are zeroized on drop
//! - Connection strings are redacted before they reach any log line
//! - Identifiers interpolated into catalog SQL are typed
//!   [`security::SanitizedIdent`]
//!
//! # Architecture
//! - Factory pattern for adapter instantiation ([`adapters::create_adapter`])
//! - Execution injected through the [`adapters::Connector`] trait, with an
//!   ODPI-C backed implementation behind the `oracle` feature
//! - Error handling through [`DbAdminError`] with credential sanitization

pub mod adapters;
pub mod error;
pub mod logging;
pub mod models;
pub mod security;

// Re-export commonly used types
pub use adapters::{
    AdapterFeature, Capabilities, CommandTemplates, ConnectionConfig, Connector, DatabaseAdapter,
    IntrospectionFilter, QueryExecutor, SchemaOperation, Template, TemplateKind, create_adapter,
};
pub use error::{DbAdminError, Result};
pub use logging::init_logging;
pub use models::{ColumnMeta, DatabaseType, ErrorPosition, QueryResult, RowLimit};
pub use security::{Credentials, SanitizedIdent};
