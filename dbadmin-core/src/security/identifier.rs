//! Caller-sanitized identifiers.
//!
//! Catalog queries interpolate schema and table names directly into SQL
//! text. `SanitizedIdent` marks the values that have crossed that trust
//! boundary: either checked by [`SanitizedIdent::parse`] or explicitly
//! vouched for by the caller with [`SanitizedIdent::assume_sanitized`].

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::DbAdminError;

/// Longest identifier accepted by `parse` (Oracle 12.2+ limit).
pub const MAX_IDENTIFIER_LEN: usize = 128;

fn identifier_pattern() -> &'static regex::Regex {
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        regex::Regex::new(r"^[A-Za-z0-9_$#]+(\.[A-Za-z0-9_$#]+)?$")
            .expect("Invalid identifier pattern")
    })
}

/// Identifier that may be interpolated into catalog SQL.
///
/// # Example
/// ```rust
/// use dbadmin_core::security::SanitizedIdent;
///
/// let table = SanitizedIdent::parse("EMP")?;
/// assert_eq!(table.as_str(), "EMP");
/// assert!(SanitizedIdent::parse("EMP' or '1'='1").is_err());
/// # Ok::<(), dbadmin_core::DbAdminError>(())
/// ```
///
/// Deserialization runs the same checks as [`SanitizedIdent::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SanitizedIdent(String);

impl SanitizedIdent {
    /// Wraps `value` without any checks.
    ///
    /// The caller takes responsibility for the value being safe to embed in
    /// a single-quoted SQL literal.
    pub fn assume_sanitized(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Validates `value` as a plain or schema-qualified identifier.
    ///
    /// Accepts letters, digits, `_`, `$` and `#`, with at most one `.`
    /// separating two non-empty parts. Case is preserved.
    ///
    /// # Errors
    /// Returns `DbAdminError::InvalidIdentifier` for empty, over-long or
    /// malformed input.
    pub fn parse(value: &str) -> crate::Result<Self> {
        if value.is_empty() {
            return Err(DbAdminError::invalid_identifier(
                "identifier cannot be empty",
            ));
        }

        if value.chars().count() > MAX_IDENTIFIER_LEN {
            return Err(DbAdminError::invalid_identifier(format!(
                "identifier exceeds {} characters",
                MAX_IDENTIFIER_LEN
            )));
        }

        if !identifier_pattern().is_match(value) {
            return Err(DbAdminError::invalid_identifier(format!(
                "'{}' contains characters outside [A-Za-z0-9_$#.]",
                value.escape_debug()
            )));
        }

        Ok(Self(value.to_string()))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SanitizedIdent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SanitizedIdent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for SanitizedIdent {
    type Err = DbAdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SanitizedIdent {
    type Error = DbAdminError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SanitizedIdent> for String {
    fn from(ident: SanitizedIdent) -> Self {
        ident.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accepts_oracle_names() {
        for name in ["EMP", "emp", "SYS$USERS", "T#1", "_X", "HR.EMPLOYEES", "A1"] {
            let ident = SanitizedIdent::parse(name).unwrap();
            assert_eq!(ident.as_str(), name);
        }
    }

    #[test]
    fn test_identifier_rejects_injection_attempts() {
        let hostile = [
            "EMP' or '1'='1",
            "EMP; drop table x",
            "EMP --",
            "\"EMP\"",
            "A.B.C",
            ".EMP",
            "EMP.",
            "E MP",
            "EMP\n",
        ];

        for value in hostile {
            let err = SanitizedIdent::parse(value).unwrap_err();
            assert!(
                matches!(err, DbAdminError::InvalidIdentifier { .. }),
                "expected rejection for {:?}",
                value
            );
        }
    }

    #[test]
    fn test_identifier_length_limit() {
        let max = "A".repeat(MAX_IDENTIFIER_LEN);
        assert!(SanitizedIdent::parse(&max).is_ok());

        let too_long = "A".repeat(MAX_IDENTIFIER_LEN + 1);
        assert!(SanitizedIdent::parse(&too_long).is_err());
        assert!(SanitizedIdent::parse("").is_err());
    }

    #[test]
    fn test_identifier_assume_sanitized_skips_checks() {
        let ident = SanitizedIdent::assume_sanitized("anything goes'");
        assert_eq!(ident.to_string(), "anything goes'");
        assert_eq!(ident.into_inner(), "anything goes'");
    }

    #[test]
    fn test_identifier_from_str() {
        let ident: SanitizedIdent = "SCOTT".parse().unwrap();
        assert_eq!(ident.as_ref(), "SCOTT");
        assert!("bad name".parse::<SanitizedIdent>().is_err());
    }

    #[test]
    fn test_identifier_deserialize_validates() {
        let ident: SanitizedIdent = serde_json::from_str("\"HR.EMPLOYEES\"").unwrap();
        assert_eq!(ident.as_str(), "HR.EMPLOYEES");
        assert_eq!(serde_json::to_string(&ident).unwrap(), "\"HR.EMPLOYEES\"");

        for hostile in ["\"EMP' or '1'='1\"", "\"\"", "\"EMP; drop table x\""] {
            let err = serde_json::from_str::<SanitizedIdent>(hostile).unwrap_err();
            assert!(
                err.to_string().contains("Invalid identifier"),
                "{}: {}",
                hostile,
                err
            );
        }
    }
}
