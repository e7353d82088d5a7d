//! Database connection configuration.
//!
//! Holds the connection descriptor as the UI supplies it. Engine-specific
//! defaults (Oracle's port 1521 and service XE, for instance) are applied by
//! the adapter constructor, so the raw values survive until then.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::DbAdminError;

/// Configuration for database connections.
///
/// # Security
/// This struct intentionally does NOT store passwords or credentials.
/// Credentials must be handled separately and never logged or serialized.
///
/// # Example
/// ```rust
/// use dbadmin_core::adapters::ConnectionConfig;
///
/// let config = ConnectionConfig::new("localhost".to_string())
///     .with_port("1521".to_string())
///     .with_service("xe".to_string())
///     .with_username("scott".to_string());
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Database host address
    pub host: String,
    /// Listener port as entered; empty or missing means engine default
    pub port: Option<String>,
    /// Service or database name; empty or missing means engine default
    pub service: Option<String>,
    /// Login user (password handled separately)
    pub username: Option<String>,
    /// Numeric connection identifier assigned by the UI
    pub conn_id: i64,
    /// Display alias shown by the UI
    pub alias: String,
    /// Upper bound for a single driver call
    pub query_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: None,
            service: None,
            username: None,
            conn_id: 0,
            alias: String::new(),
            query_timeout: Duration::from_secs(30),
        }
    }
}

impl std::fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ConnectionConfig({}{}{})",
            self.host,
            self.port
                .as_deref()
                .filter(|p| !p.is_empty())
                .map_or_else(String::new, |p| format!(":{}", p)),
            self.service
                .as_deref()
                .filter(|s| !s.is_empty())
                .map_or_else(String::new, |s| format!("/{}", s))
        )
        // Intentionally omit username and never include credentials
    }
}

impl ConnectionConfig {
    /// Validates connection configuration parameters.
    ///
    /// An empty or missing port is accepted and left for the adapter to
    /// default.
    ///
    /// # Errors
    /// Returns error if configuration values are invalid or unsafe
    pub fn validate(&self) -> crate::Result<()> {
        if self.host.trim().is_empty() {
            return Err(DbAdminError::configuration("host cannot be empty"));
        }

        if self.username.as_deref().is_none_or(|u| u.trim().is_empty()) {
            return Err(DbAdminError::configuration("username cannot be empty"));
        }

        if let Some(port) = self.port.as_deref().filter(|p| !p.is_empty()) {
            match port.parse::<u16>() {
                Ok(0) | Err(_) => {
                    return Err(DbAdminError::configuration(format!(
                        "port must be an integer between 1 and 65535, got '{}'",
                        port
                    )));
                }
                Ok(_) => {}
            }
        }

        if self.query_timeout.is_zero() {
            return Err(DbAdminError::configuration(
                "query_timeout must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Creates a new connection config with safe defaults.
    pub fn new(host: String) -> Self {
        Self {
            host,
            ..Default::default()
        }
    }

    /// Builder method to set port.
    pub fn with_port(mut self, port: String) -> Self {
        self.port = Some(port);
        self
    }

    /// Builder method to set the service name.
    pub fn with_service(mut self, service: String) -> Self {
        self.service = Some(service);
        self
    }

    /// Builder method to set username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Builder method to set the connection identifier.
    pub fn with_conn_id(mut self, conn_id: i64) -> Self {
        self.conn_id = conn_id;
        self
    }

    /// Builder method to set the display alias.
    pub fn with_alias(mut self, alias: String) -> Self {
        self.alias = alias;
        self
    }

    /// Builder method to set the per-call timeout.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ConnectionConfig {
        ConnectionConfig::new("localhost".to_string()).with_username("scott".to_string())
    }

    #[test]
    fn test_connection_config_default() {
        let config = ConnectionConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, None);
        assert_eq!(config.service, None);
        assert_eq!(config.conn_id, 0);
        assert_eq!(config.alias, "");
        assert_eq!(config.query_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_connection_config_validation() {
        assert!(valid().validate().is_ok());
        assert!(valid().with_port(String::new()).validate().is_ok());
        assert!(valid().with_port("1522".to_string()).validate().is_ok());

        let config = ConnectionConfig {
            host: String::new(),
            ..valid()
        };
        assert!(config.validate().is_err());

        let config = ConnectionConfig::new("localhost".to_string());
        assert!(config.validate().is_err());

        assert!(valid().with_port("0".to_string()).validate().is_err());
        assert!(valid().with_port("abc".to_string()).validate().is_err());
        assert!(valid().with_port("70000".to_string()).validate().is_err());

        let config = valid().with_query_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_connection_config_builder() {
        let config = ConnectionConfig::new("db.example.com".to_string())
            .with_port("1522".to_string())
            .with_service("orclpdb1".to_string())
            .with_username("hr".to_string())
            .with_conn_id(7)
            .with_alias("staging".to_string())
            .with_query_timeout(Duration::from_secs(5));

        assert_eq!(config.host, "db.example.com");
        assert_eq!(config.port.as_deref(), Some("1522"));
        assert_eq!(config.service.as_deref(), Some("orclpdb1"));
        assert_eq!(config.username.as_deref(), Some("hr"));
        assert_eq!(config.conn_id, 7);
        assert_eq!(config.alias, "staging");
        assert_eq!(config.query_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_connection_config_display_no_credentials() {
        let config = ConnectionConfig::new("example.com".to_string())
            .with_port("1521".to_string())
            .with_service("XE".to_string())
            .with_username("testuser".to_string());

        let display = format!("{}", config);

        assert_eq!(display, "ConnectionConfig(example.com:1521/XE)");
        assert!(!display.contains("testuser"));
    }

    #[test]
    fn test_connection_config_serde_roundtrip_has_no_password_field() {
        let json = serde_json::to_value(valid()).unwrap();
        assert!(json.get("password").is_none());

        let back: ConnectionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, valid());
    }
}
