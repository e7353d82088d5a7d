//! Schema/table filters for catalog listings.
//!
//! Precedence, applied identically by every filtered listing:
//!
//! | all_schemas | schema | table | scope                               |
//! |-------------|--------|-------|-------------------------------------|
//! | false       | yes    | yes   | owner = schema, table = table       |
//! | false       | no     | yes   | owner = adapter schema, table = table |
//! | false       | yes    | no    | owner = schema                      |
//! | false       | no     | no    | owner = adapter schema              |
//! | true        | any    | yes   | table = table                       |
//! | true        | any    | no    | unfiltered                          |

use serde::{Deserialize, Serialize};

use crate::security::SanitizedIdent;

/// Optional table and schema filter plus the all-schemas switch.
///
/// # Example
/// ```rust
/// use dbadmin_core::adapters::{FilterScope, IntrospectionFilter};
/// use dbadmin_core::security::SanitizedIdent;
///
/// let filter = IntrospectionFilter::new().with_table(SanitizedIdent::parse("EMP")?);
/// assert_eq!(
///     filter.scope("SCOTT"),
///     FilterScope::Owner { schema: "SCOTT", table: Some("EMP") }
/// );
/// # Ok::<(), dbadmin_core::DbAdminError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionFilter {
    pub table: Option<SanitizedIdent>,
    pub schema: Option<SanitizedIdent>,
    pub all_schemas: bool,
}

impl IntrospectionFilter {
    /// No explicit table or schema; restricted to the adapter's schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the table filter.
    pub fn with_table(mut self, table: SanitizedIdent) -> Self {
        self.table = Some(table);
        self
    }

    /// Builder method to set the schema filter.
    pub fn with_schema(mut self, schema: SanitizedIdent) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Builder method to scan every visible schema.
    pub fn all_schemas(mut self) -> Self {
        self.all_schemas = true;
        self
    }

    /// Resolves the precedence table against the adapter's own schema.
    ///
    /// Empty identifiers count as absent.
    pub fn scope<'a>(&'a self, default_schema: &'a str) -> FilterScope<'a> {
        let table = non_empty(self.table.as_ref());
        let schema = non_empty(self.schema.as_ref());

        if self.all_schemas {
            return match table {
                Some(table) => FilterScope::Table(table),
                None => FilterScope::Unfiltered,
            };
        }

        FilterScope::Owner {
            schema: schema.unwrap_or(default_schema),
            table,
        }
    }
}

fn non_empty(ident: Option<&SanitizedIdent>) -> Option<&str> {
    ident.map(SanitizedIdent::as_str).filter(|s| !s.is_empty())
}

/// Resolved filter, ready to render against a catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterScope<'a> {
    /// Restricted to one owner, optionally one table
    Owner {
        schema: &'a str,
        table: Option<&'a str>,
    },
    /// All schemas, one table name
    Table(&'a str),
    /// All schemas, all tables
    Unfiltered,
}

impl FilterScope<'_> {
    /// Renders `and ... ` predicates for a `where 1 = 1` query.
    ///
    /// `table_column` is `None` for views with no table dimension (routine
    /// listings); the table part of the scope is then dropped.
    pub fn render(&self, owner_column: &str, table_column: Option<&str>) -> String {
        match (*self, table_column) {
            (FilterScope::Owner { schema, table: Some(table) }, Some(table_column)) => format!(
                "and {} = '{}' and {} = '{}' ",
                owner_column, schema, table_column, table
            ),
            (FilterScope::Owner { schema, .. }, _) => {
                format!("and {} = '{}' ", owner_column, schema)
            }
            (FilterScope::Table(table), Some(table_column)) => {
                format!("and {} = '{}' ", table_column, table)
            }
            (FilterScope::Table(_), None) | (FilterScope::Unfiltered, _) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> SanitizedIdent {
        SanitizedIdent::parse(s).unwrap()
    }

    #[test]
    fn test_scope_precedence_table() {
        let cases = [
            (
                IntrospectionFilter::new()
                    .with_schema(ident("HR"))
                    .with_table(ident("EMP")),
                FilterScope::Owner {
                    schema: "HR",
                    table: Some("EMP"),
                },
            ),
            (
                IntrospectionFilter::new().with_table(ident("EMP")),
                FilterScope::Owner {
                    schema: "SCOTT",
                    table: Some("EMP"),
                },
            ),
            (
                IntrospectionFilter::new().with_schema(ident("HR")),
                FilterScope::Owner {
                    schema: "HR",
                    table: None,
                },
            ),
            (
                IntrospectionFilter::new(),
                FilterScope::Owner {
                    schema: "SCOTT",
                    table: None,
                },
            ),
            (
                IntrospectionFilter::new()
                    .all_schemas()
                    .with_schema(ident("HR"))
                    .with_table(ident("EMP")),
                FilterScope::Table("EMP"),
            ),
            (
                IntrospectionFilter::new().all_schemas().with_schema(ident("HR")),
                FilterScope::Unfiltered,
            ),
        ];

        for (filter, expected) in cases {
            assert_eq!(filter.scope("SCOTT"), expected, "filter {:?}", filter);
        }
    }

    #[test]
    fn test_empty_identifiers_count_as_absent() {
        let filter = IntrospectionFilter::new()
            .with_schema(SanitizedIdent::assume_sanitized(""))
            .with_table(SanitizedIdent::assume_sanitized(""));

        assert_eq!(
            filter.scope("SCOTT"),
            FilterScope::Owner {
                schema: "SCOTT",
                table: None
            }
        );
    }

    #[test]
    fn test_render_fragments() {
        let owner_table = FilterScope::Owner {
            schema: "HR",
            table: Some("EMP"),
        };
        assert_eq!(
            owner_table.render("t.owner", Some("t.table_name")),
            "and t.owner = 'HR' and t.table_name = 'EMP' "
        );
        assert_eq!(owner_table.render("t.owner", None), "and t.owner = 'HR' ");

        let owner = FilterScope::Owner {
            schema: "HR",
            table: None,
        };
        assert_eq!(owner.render("owner", Some("table_name")), "and owner = 'HR' ");

        let table = FilterScope::Table("EMP");
        assert_eq!(
            table.render("owner", Some("table_name")),
            "and table_name = 'EMP' "
        );
        assert_eq!(table.render("owner", None), "");

        assert_eq!(
            FilterScope::Unfiltered.render("owner", Some("table_name")),
            ""
        );
    }

    #[test]
    fn test_deserialized_filter_rejects_unsafe_identifiers() {
        let filter: IntrospectionFilter = serde_json::from_str(
            r#"{"table":"EMP","schema":null,"all_schemas":false}"#,
        )
        .unwrap();
        assert_eq!(filter, IntrospectionFilter::new().with_table(ident("EMP")));

        let hostile = r#"{"table":"x' or '1'='1","schema":null,"all_schemas":false}"#;
        assert!(serde_json::from_str::<IntrospectionFilter>(hostile).is_err());

        let hostile = r#"{"table":null,"schema":"HR' --","all_schemas":true}"#;
        assert!(serde_json::from_str::<IntrospectionFilter>(hostile).is_err());
    }
}
