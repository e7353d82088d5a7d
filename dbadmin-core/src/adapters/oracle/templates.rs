//! DDL skeletons offered by the Oracle adapter.
//!
//! The texts list optional clauses as `--` comments for the user to enable.
//! Placeholders such as `#table_name#` are filled in by the UI. Table
//! creation and alteration are edited through dedicated forms and have no
//! skeleton.

use crate::adapters::{SchemaOperation, Template};

const CREATE_ROLE: &str = r#"CREATE ROLE name
--[ ENCRYPTED | UNENCRYPTED ] PASSWORD 'password'
--SUPERUSER | NOSUPERUSER
--CREATEDB | NOCREATEDB
--CREATEROLE | NOCREATEROLE
--INHERIT | NOINHERIT
--LOGIN | NOLOGIN
--REPLICATION | NOREPLICATION
--BYPASSRLS | NOBYPASSRLS
--CONNECTION LIMIT connlimit
--VALID UNTIL 'timestamp'
--IN ROLE role_name [, ...]
--IN GROUP role_name [, ...]
--ROLE role_name [, ...]
--ADMIN role_name [, ...]
--USER role_name [, ...]
--SYSID uid
"#;

const ALTER_ROLE: &str = r#"ALTER ROLE #role_name#
--SUPERUSER | NOSUPERUSER
--CREATEDB | NOCREATEDB
--CREATEROLE | NOCREATEROLE
--INHERIT | NOINHERIT
--LOGIN | NOLOGIN
--REPLICATION | NOREPLICATION
--BYPASSRLS | NOBYPASSRLS
--CONNECTION LIMIT connlimit
--[ ENCRYPTED | UNENCRYPTED ] PASSWORD 'password'
--VALID UNTIL 'timestamp'
--RENAME TO new_name
--[ IN DATABASE database_name ] SET configuration_parameter TO { value | DEFAULT }
--[ IN DATABASE database_name ] SET configuration_parameter FROM CURRENT
--[ IN DATABASE database_name ] RESET configuration_parameter
--[ IN DATABASE database_name ] RESET ALL
"#;

const DROP_ROLE: &str = r#"DROP ROLE #role_name#"#;

const CREATE_TABLESPACE: &str = r#"CREATE TABLESPACE name
LOCATION 'directory'
--OWNER new_owner | CURRENT_USER | SESSION_USER
--WITH ( tablespace_option = value [, ... ] )
"#;

const ALTER_TABLESPACE: &str = r#"ALTER TABLESPACE #tablespace_name#
--RENAME TO new_name
--OWNER TO { new_owner | CURRENT_USER | SESSION_USER }
--SET seq_page_cost = value
--RESET seq_page_cost
--SET random_page_cost = value
--RESET random_page_cost
--SET effective_io_concurrency = value
--RESET effective_io_concurrency
"#;

const DROP_TABLESPACE: &str = r#"DROP TABLESPACE #tablespace_name#"#;

const CREATE_DATABASE: &str = r#"CREATE DATABASE name
--OWNER user_name
--TEMPLATE template
--ENCODING encoding
--LC_COLLATE lc_collate
--LC_CTYPE lc_ctype
--TABLESPACE tablespace
--CONNECTION LIMIT connlimit
"#;

const ALTER_DATABASE: &str = r#"ALTER DATABASE #database_name#
--ALLOW_CONNECTIONS allowconn
--CONNECTION LIMIT connlimit
--IS_TEMPLATE istemplate
--RENAME TO new_name
--OWNER TO { new_owner | CURRENT_USER | SESSION_USER }
--SET TABLESPACE new_tablespace
--SET configuration_parameter TO { value | DEFAULT }
--SET configuration_parameter FROM CURRENT
--RESET configuration_parameter
--RESET ALL
"#;

const DROP_DATABASE: &str = r#"DROP DATABASE #database_name#"#;

const CREATE_FUNCTION: &str = r#"CREATE OR REPLACE FUNCTION #schema_name#.name
--(
--    [ argmode ] [ argname ] argtype [ { DEFAULT | = } default_expr ]
--)
--RETURNS rettype
--RETURNS TABLE ( column_name column_type )
LANGUAGE plpgsql
--IMMUTABLE | STABLE | VOLATILE
--STRICT
--SECURITY DEFINER
--COST execution_cost
--ROWS result_rows
AS
$function$
--DECLARE
-- variables
BEGIN
-- definition
END;
$function$
"#;

const DROP_FUNCTION: &str = r#"DROP FUNCTION #function_name#
--CASCADE
"#;

const CREATE_PROCEDURE: &str = r#"CREATE OR REPLACE FUNCTION #schema_name#.name
--(
--    [ argmode ] [ argname ] argtype [ { DEFAULT | = } default_expr ]
--)
--RETURNS rettype
--RETURNS TABLE ( column_name column_type )
LANGUAGE plpgsql
--IMMUTABLE | STABLE | VOLATILE
--STRICT
--SECURITY DEFINER
--COST execution_cost
--ROWS result_rows
AS
$function$
--DECLARE
-- variables
BEGIN
-- definition
END;
$function$
"#;

const DROP_PROCEDURE: &str = r#"DROP FUNCTION #function_name#
--CASCADE
"#;

const DROP_TABLE: &str = r#"DROP TABLE #table_name#
--CASCADE
"#;

const CREATE_COLUMN: &str = r#"ALTER TABLE #table_name#
ADD COLUMN name data_type
--COLLATE collation
--column_constraint [ ... ] ]
"#;

const ALTER_COLUMN: &str = r#"ALTER TABLE #table_name#
--ALTER COLUMN #column_name#
--RENAME COLUMN #column_name# TO new_column
--TYPE data_type [ COLLATE collation ] [ USING expression ]
--SET DEFAULT expression
--DROP DEFAULT
--SET NOT NULL
--DROP NOT NULL
--SET STATISTICS integer
--SET ( attribute_option = value [, ... ] )
--RESET ( attribute_option [, ... ] )
--SET STORAGE { PLAIN | EXTERNAL | EXTENDED | MAIN }
"#;

const DROP_COLUMN: &str = r#"ALTER TABLE #table_name#
DROP COLUMN #column_name#
--CASCADE
"#;

const CREATE_PRIMARY_KEY: &str = r#"ALTER TABLE #table_name#
ADD CONSTRAINT name
PRIMARY KEY ( column_name [, ... ] )
--WITH ( storage_parameter [= value] [, ... ] )
--WITH OIDS
--WITHOUT OIDS
--USING INDEX TABLESPACE tablespace_name
"#;

const DROP_PRIMARY_KEY: &str = r#"ALTER TABLE #table_name#
DROP CONSTRAINT #constraint_name#
--CASCADE
"#;

const CREATE_UNIQUE: &str = r#"ALTER TABLE #table_name#
ADD CONSTRAINT name
UNIQUE ( column_name [, ... ] )
--WITH ( storage_parameter [= value] [, ... ] )
--WITH OIDS
--WITHOUT OIDS
--USING INDEX TABLESPACE tablespace_name
"#;

const DROP_UNIQUE: &str = r#"ALTER TABLE #table_name#
DROP CONSTRAINT #constraint_name#
--CASCADE
"#;

const CREATE_FOREIGN_KEY: &str = r#"ALTER TABLE #table_name#
ADD CONSTRAINT name
FOREIGN KEY ( column_name [, ... ] )
REFERENCES reftable [ ( refcolumn [, ... ] ) ]
--MATCH { FULL | PARTIAL | SIMPLE }
--ON DELETE { NO ACTION | RESTRICT | CASCADE | SET NULL | SET DEFAULT }
--ON UPDATE { NO ACTION | RESTRICT | CASCADE | SET NULL | SET DEFAULT }
--NOT VALID
"#;

const DROP_FOREIGN_KEY: &str = r#"ALTER TABLE #table_name#
DROP CONSTRAINT #constraint_name#
--CASCADE
"#;

const CREATE_INDEX: &str = r#"CREATE [ UNIQUE ] INDEX [ CONCURRENTLY ] name
ON #table_name#
--USING method
( { column_name | ( expression ) } [ COLLATE collation ] [ opclass ] [ ASC | DESC ] [ NULLS { FIRST | LAST } ] [, ...] )
--WITH ( storage_parameter = value [, ... ] )
--WHERE predicate
"#;

const ALTER_INDEX: &str = r#"ALTER INDEX #index_name#
--RENAME to new_name
--SET TABLESPACE tablespace_name
--SET ( storage_parameter = value [, ... ] )
--RESET ( storage_parameter [, ... ] )
"#;

const DROP_INDEX: &str = r#"DROP INDEX [ CONCURRENTLY ] #index_name#
--CASCADE
"#;

/// Skeleton for `operation`, or `None` for table creation and alteration.
pub fn template_for(operation: SchemaOperation) -> Option<Template> {
    let text = match operation {
        SchemaOperation::CreateRole => CREATE_ROLE,
        SchemaOperation::AlterRole => ALTER_ROLE,
        SchemaOperation::DropRole => DROP_ROLE,
        SchemaOperation::CreateTablespace => CREATE_TABLESPACE,
        SchemaOperation::AlterTablespace => ALTER_TABLESPACE,
        SchemaOperation::DropTablespace => DROP_TABLESPACE,
        SchemaOperation::CreateDatabase => CREATE_DATABASE,
        SchemaOperation::AlterDatabase => ALTER_DATABASE,
        SchemaOperation::DropDatabase => DROP_DATABASE,
        SchemaOperation::CreateFunction => CREATE_FUNCTION,
        SchemaOperation::DropFunction => DROP_FUNCTION,
        SchemaOperation::CreateProcedure => CREATE_PROCEDURE,
        SchemaOperation::DropProcedure => DROP_PROCEDURE,
        SchemaOperation::DropTable => DROP_TABLE,
        SchemaOperation::CreateColumn => CREATE_COLUMN,
        SchemaOperation::AlterColumn => ALTER_COLUMN,
        SchemaOperation::DropColumn => DROP_COLUMN,
        SchemaOperation::CreatePrimaryKey => CREATE_PRIMARY_KEY,
        SchemaOperation::DropPrimaryKey => DROP_PRIMARY_KEY,
        SchemaOperation::CreateUnique => CREATE_UNIQUE,
        SchemaOperation::DropUnique => DROP_UNIQUE,
        SchemaOperation::CreateForeignKey => CREATE_FOREIGN_KEY,
        SchemaOperation::DropForeignKey => DROP_FOREIGN_KEY,
        SchemaOperation::CreateIndex => CREATE_INDEX,
        SchemaOperation::AlterIndex => ALTER_INDEX,
        SchemaOperation::DropIndex => DROP_INDEX,
        SchemaOperation::CreateTable | SchemaOperation::AlterTable => return None,
    };

    Some(Template::execute(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TemplateKind;

    #[test]
    fn test_table_creation_and_alteration_have_no_template() {
        assert!(template_for(SchemaOperation::CreateTable).is_none());
        assert!(template_for(SchemaOperation::AlterTable).is_none());
    }

    #[test]
    fn test_every_other_operation_has_an_executable_template() {
        for op in SchemaOperation::ALL {
            if matches!(op, SchemaOperation::CreateTable | SchemaOperation::AlterTable) {
                continue;
            }
            let template = template_for(*op).unwrap_or_else(|| panic!("missing {}", op));
            assert_eq!(template.kind, TemplateKind::Execute, "{}", op);
            assert!(!template.text.trim().is_empty(), "{}", op);
        }
    }

    #[test]
    fn test_template_texts() {
        assert_eq!(
            template_for(SchemaOperation::DropRole).unwrap().text,
            "DROP ROLE #role_name#"
        );
        assert_eq!(
            template_for(SchemaOperation::DropTable).unwrap().text,
            "DROP TABLE #table_name#\n--CASCADE\n"
        );

        let fk = template_for(SchemaOperation::CreateForeignKey).unwrap().text;
        assert!(fk.starts_with("ALTER TABLE #table_name#\nADD CONSTRAINT name\n"));
        assert!(fk.contains("--ON DELETE { NO ACTION | RESTRICT | CASCADE | SET NULL | SET DEFAULT }"));

        let column = template_for(SchemaOperation::AlterColumn).unwrap().text;
        assert!(column.contains("--ALTER COLUMN #column_name#"));
    }
}
