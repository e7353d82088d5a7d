//! Oracle capability flags and DDL command fragments.

use crate::adapters::{Capabilities, CommandTemplates, ReferentialRule};

/// Object categories the Oracle editor exposes. `ON UPDATE` actions are
/// not offered.
pub static ORACLE_CAPABILITIES: Capabilities = Capabilities {
    has_schema: true,
    has_functions: true,
    has_procedures: true,
    has_sequences: true,
    has_primary_keys: true,
    has_foreign_keys: true,
    has_uniques: true,
    has_indexes: true,
    has_checks: false,
    has_excludes: false,
    has_rules: false,
    has_triggers: false,
    has_partitions: false,
    has_update_rule: false,
    can_rename_table: true,
    can_alter_type: true,
    can_alter_nullable: true,
    can_rename_column: true,
    can_add_column: true,
    can_drop_column: true,
    can_add_constraint: true,
    can_drop_constraint: true,
};

pub static ORACLE_COMMANDS: CommandTemplates = CommandTemplates {
    rename_table: "alter table #p_table_name# rename to #p_new_table_name#",
    create_pk: "constraint #p_constraint_name# primary key (#p_columns#)",
    create_fk: "constraint #p_constraint_name# foreign key (#p_columns#) references #p_r_table_name# (#p_r_columns#) #p_delete_update_rules#",
    create_unique: "constraint #p_constraint_name# unique (#p_columns#)",
    alter_type: "alter table #p_table_name# modify #p_column_name# #p_new_data_type#",
    set_nullable: "alter table #p_table_name# modify #p_column_name# null",
    drop_nullable: "alter table #p_table_name# modify #p_column_name# not null",
    rename_column: "alter table #p_table_name# rename column #p_column_name# to #p_new_column_name#",
    add_column: "alter table #p_table_name# add #p_column_name# #p_data_type# #p_nullable#",
    drop_column: "alter table #p_table_name# drop column #p_column_name#",
    add_pk: "alter table #p_table_name# add constraint #p_constraint_name# primary key (#p_columns#)",
    add_fk: "alter table #p_table_name# add constraint #p_constraint_name# foreign key (#p_columns#) references #p_r_table_name# (#p_r_columns#) #p_delete_update_rules#",
    add_unique: "alter table #p_table_name# add constraint #p_constraint_name# unique (#p_columns#)",
    drop_pk: "alter table #p_table_name# drop constraint #p_constraint_name#",
    drop_fk: "alter table #p_table_name# drop constraint #p_constraint_name#",
    drop_unique: "alter table #p_table_name# drop constraint #p_constraint_name#",
    create_index: "create index #p_index_name# on #p_table_name# (#p_columns#)",
    create_unique_index: "create unique index #p_index_name# on #p_table_name# (#p_columns#)",
    drop_index: "drop index #p_schema_name#.#p_index_name#",
    update_rules: &[ReferentialRule::NoAction],
    delete_rules: &[
        ReferentialRule::NoAction,
        ReferentialRule::SetNull,
        ReferentialRule::Cascade,
    ],
};

/// Clause appended to a foreign key fragment for `#p_delete_update_rules#`.
///
/// Oracle has no `ON UPDATE` actions, so `_update_rule` is accepted and
/// discarded. A blank delete rule yields an empty clause.
pub fn update_delete_rules_clause(_update_rule: &str, delete_rule: &str) -> String {
    if delete_rule.trim().is_empty() {
        String::new()
    } else {
        format!(" on delete {} ", delete_rule)
    }
}
