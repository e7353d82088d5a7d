//! Catalog SQL for the Oracle adapter.
//!
//! Every builder returns plain text; filter values arrive already resolved
//! into a [`FilterScope`] and are interpolated without escaping. Column
//! aliases are double-quoted so the labels keep their lower-case spelling.

use super::type_mapping::data_type_projection;
use crate::adapters::FilterScope;

pub(crate) const ROLES_SQL: &str = r#"
            select username as "role_name"
            from all_users
            order by 1
        "#;

pub(crate) const TABLESPACES_SQL: &str = r#"
            select tablespace_name as "tablespace_name"
            from dba_tablespaces
            order by 1
        "#;

pub(crate) const DATABASES_SQL: &str = r#"
            select name as "database_name"
            from v$database
            order by 1
        "#;

pub(crate) const VERSION_SQL: &str = r#"
            select (case when product like '%Express%'
                         then 'Oracle XE '
                         else 'Oracle '
                    end) || version
            from product_component_version
            where product like 'Oracle%'
        "#;

/// Readable only with elevated privileges.
pub(crate) const SUPERUSER_PROBE_SQL: &str = "select * from v$session where rownum <= 1";

pub(crate) const EXPRESS_SQL: &str =
    "select * from product_component_version where product like '%Express%'";

/// Stored program unit kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoutineKind {
    Function,
    Procedure,
}

impl RoutineKind {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            RoutineKind::Function => "FUNCTION",
            RoutineKind::Procedure => "PROCEDURE",
        }
    }
}

pub(crate) fn tables_sql(scope: FilterScope<'_>) -> String {
    format!(
        r#"
            select table_name as "table_name",
                   owner as "table_schema"
            from all_tables
            where 1 = 1
            {filter}
            order by 2, 1
        "#,
        filter = scope.render("owner", Some("table_name"))
    )
}

pub(crate) fn table_fields_sql(scope: FilterScope<'_>) -> String {
    format!(
        r#"
            select table_name as "table_name",
                   column_name as "column_name",
                   {data_type} as "data_type",
                   case nullable when 'Y' then 'YES' else 'NO' end as "nullable",
                   data_length as "data_length",
                   data_precision as "data_precision",
                   data_scale as "data_scale"
            from all_tab_columns
            where 1 = 1
            {filter}
            order by table_name, column_id
        "#,
        data_type = data_type_projection("data_type", "data_scale"),
        filter = scope.render("owner", Some("table_name"))
    )
}

pub(crate) fn foreign_keys_sql(scope: FilterScope<'_>) -> String {
    format!(
        r#"
            select master_table.table_name as "r_table_name",
                   master_table.owner as "r_table_schema",
                   master_table.column_name as "r_column_name",
                   detail_table.table_name as "table_name",
                   detail_table.column_name as "column_name",
                   detail_table.owner as "table_schema",
                   constraint_info.constraint_name as "constraint_name",
                   constraint_info.delete_rule as "delete_rule",
                   'NO ACTION' as "update_rule",
                   constraint_info.r_constraint_name as "r_constraint_name",
                   detail_table.position as "ordinal_position"
            from user_constraints constraint_info,
                 user_cons_columns detail_table,
                 user_cons_columns master_table
            where constraint_info.constraint_name = detail_table.constraint_name
              and constraint_info.r_constraint_name = master_table.constraint_name
              and detail_table.position = master_table.position
              and constraint_info.constraint_type = 'R'
            {filter}
            order by constraint_info.constraint_name,
                     detail_table.table_name,
                     detail_table.position
        "#,
        filter = scope.render("constraint_info.owner", Some("detail_table.table_name"))
    )
}

/// Shared shape of the primary key (`P`) and unique (`U`) listings.
///
/// The filter applies to the aliased columns of the inner query, so the
/// ordering inside it is kept.
fn key_constraints_sql(constraint_type: char, scope: FilterScope<'_>) -> String {
    format!(
        r#"
            select distinct *
            from (
                select cons.constraint_name as "constraint_name",
                       cols.column_name as "column_name",
                       cols.table_name as "table_name",
                       cons.owner as "table_schema"
                from all_constraints cons,
                     all_cons_columns cols,
                     all_tables t
                where cons.constraint_type = '{constraint_type}'
                  and t.table_name = cols.table_name
                  and cons.constraint_name = cols.constraint_name
                  and cons.owner = cols.owner
                order by cons.owner,
                         cols.table_name,
                         cons.constraint_name,
                         cols.position
            )
            where 1 = 1
            {filter}
        "#,
        filter = scope.render(r#""table_schema""#, Some(r#""table_name""#))
    )
}

pub(crate) fn primary_keys_sql(scope: FilterScope<'_>) -> String {
    key_constraints_sql('P', scope)
}

pub(crate) fn uniques_sql(scope: FilterScope<'_>) -> String {
    key_constraints_sql('U', scope)
}

pub(crate) fn indexes_sql(scope: FilterScope<'_>) -> String {
    format!(
        r#"
            select t.owner as "schema_name",
                   t.table_name as "table_name",
                   t.index_name as "index_name",
                   c.column_name as "column_name",
                   case when t.uniqueness = 'UNIQUE' then 'Unique' else 'Non Unique' end as "uniqueness"
            from all_indexes t,
                 all_ind_columns c
            where t.table_name = c.table_name
              and t.index_name = c.index_name
              and t.owner = c.index_owner
            {filter}
            order by t.owner,
                     t.table_name,
                     t.index_name
        "#,
        filter = scope.render("t.owner", Some("t.table_name"))
    )
}

/// Routine listings have no table dimension; only the owner part of the
/// scope is rendered.
pub(crate) fn routines_sql(kind: RoutineKind, scope: FilterScope<'_>) -> String {
    format!(
        r#"
            select t.owner as "schema_name",
                   t.object_name as "id",
                   t.object_name as "name"
            from all_procedures t
            where t.object_type = '{keyword}'
            {filter}
            order by 2
        "#,
        keyword = kind.keyword(),
        filter = scope.render("t.owner", None)
    )
}

/// Argument listing; position 0 of a function is its return value.
pub(crate) fn routine_fields_sql(kind: RoutineKind, schema: &str, name: &str) -> String {
    let name_column = match kind {
        RoutineKind::Function => {
            r#"(case when t.position = 0
                             then 'return ' || t.data_type
                             else t.argument_name || ' ' || t.data_type
                        end)"#
        }
        RoutineKind::Procedure => "t.argument_name || ' ' || t.data_type",
    };

    format!(
        r#"
            select (case t.in_out
                      when 'IN' then 'I'
                      when 'OUT' then 'O'
                      else 'R'
                    end) as "type",
                   {name_column} as "name",
                   t.position+1 as "seq"
            from all_arguments t
            where t.owner = '{schema}'
              and t.object_name = '{name}'
            order by 3
        "#
    )
}

pub(crate) fn definition_header(kind: RoutineKind, name: &str) -> String {
    format!("-- DROP {} {};\n", kind.keyword(), name)
}

pub(crate) fn definition_sql(kind: RoutineKind, name: &str) -> String {
    format!(
        "select dbms_metadata.get_ddl('{}', '{}') from dual",
        kind.keyword(),
        name
    )
}

/// Caps `sql` at `count` rows with `rownum`.
pub(crate) fn limited_sql(sql: &str, count: i64) -> String {
    format!("select * from ( {} ) t where rownum <= {}", sql, count)
}

pub(crate) fn table_records_sql(
    column_list: &str,
    table: &str,
    filter: &str,
    limit: Option<i64>,
) -> String {
    let limit = limit.map_or_else(String::new, |count| format!(" where rownum <= {}", count));

    format!(
        r#"
            select *
            from (
            select {column_list}
            from {table} t
            {filter}
            )
            {limit}
        "#
    )
}
