//! Oracle defaults and case folding for the connection descriptor.

use crate::adapters::ConnectionConfig;

/// Listener port used when none is given.
pub const DEFAULT_PORT: &str = "1521";

/// Service name used when none is given.
pub const DEFAULT_SERVICE: &str = "XE";

/// Applies Oracle's descriptor conventions.
///
/// Empty or missing port becomes [`DEFAULT_PORT`], empty or missing service
/// becomes [`DEFAULT_SERVICE`]. Service and user are upper-cased, matching
/// how Oracle stores unquoted identifiers. The port is kept verbatim.
///
/// # Example
/// ```rust
/// use dbadmin_core::adapters::ConnectionConfig;
/// use dbadmin_core::adapters::oracle::normalize_for_oracle;
///
/// let config = ConnectionConfig::new("db".to_string())
///     .with_service("orclpdb1".to_string())
///     .with_username("hr".to_string());
/// let normalized = normalize_for_oracle(&config);
///
/// assert_eq!(normalized.port.as_deref(), Some("1521"));
/// assert_eq!(normalized.service.as_deref(), Some("ORCLPDB1"));
/// assert_eq!(normalized.username.as_deref(), Some("HR"));
/// ```
pub fn normalize_for_oracle(config: &ConnectionConfig) -> ConnectionConfig {
    let port = match config.port.as_deref() {
        None | Some("") => DEFAULT_PORT.to_string(),
        Some(port) => port.to_string(),
    };

    let service = match config.service.as_deref() {
        None | Some("") => DEFAULT_SERVICE.to_string(),
        Some(service) => service.to_uppercase(),
    };

    ConnectionConfig {
        port: Some(port),
        service: Some(service),
        username: config.username.as_deref().map(str::to_uppercase),
        ..config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(port: Option<&str>, service: Option<&str>) -> ConnectionConfig {
        ConnectionConfig {
            port: port.map(str::to_string),
            service: service.map(str::to_string),
            username: Some("scott".to_string()),
            ..ConnectionConfig::new("localhost".to_string())
        }
    }

    #[test]
    fn test_defaults_table() {
        let cases = [
            ((None, None), ("1521", "XE")),
            ((Some(""), Some("")), ("1521", "XE")),
            ((Some("1522"), None), ("1522", "XE")),
            ((None, Some("orcl")), ("1521", "ORCL")),
            ((Some("1600"), Some("OrclPdb1")), ("1600", "ORCLPDB1")),
            ((Some(" "), Some("xe")), (" ", "XE")),
        ];

        for ((port, service), (expected_port, expected_service)) in cases {
            let normalized = normalize_for_oracle(&config(port, service));
            assert_eq!(
                normalized.port.as_deref(),
                Some(expected_port),
                "port for {:?}",
                (port, service)
            );
            assert_eq!(
                normalized.service.as_deref(),
                Some(expected_service),
                "service for {:?}",
                (port, service)
            );
        }
    }

    #[test]
    fn test_user_is_upper_cased_and_rest_kept() {
        let original = config(None, None)
            .with_alias("prod".to_string())
            .with_conn_id(9);
        let normalized = normalize_for_oracle(&original);

        assert_eq!(normalized.username.as_deref(), Some("SCOTT"));
        assert_eq!(normalized.host, "localhost");
        assert_eq!(normalized.alias, "prod");
        assert_eq!(normalized.conn_id, 9);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_for_oracle(&config(Some(""), Some("xe")));
        let twice = normalize_for_oracle(&once);
        assert_eq!(once, twice);
    }
}
