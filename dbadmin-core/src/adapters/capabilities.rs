//! Per-engine capability flags and DDL command templates.
//!
//! Each engine contributes one `static` [`Capabilities`] and one `static`
//! [`CommandTemplates`]. The UI reads them to hide operations the engine
//! cannot perform and to build DDL by substituting the `#p_...#`
//! placeholders itself.

use serde::Serialize;

/// Schema-object categories and DDL operations an engine may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterFeature {
    Schema,
    Functions,
    Procedures,
    Sequences,
    PrimaryKeys,
    ForeignKeys,
    Uniques,
    Indexes,
    Checks,
    Excludes,
    Rules,
    Triggers,
    Partitions,
    /// `ON UPDATE` actions on foreign keys
    UpdateRule,
    RenameTable,
    AlterType,
    AlterNullable,
    RenameColumn,
    AddColumn,
    DropColumn,
    AddConstraint,
    DropConstraint,
}

impl AdapterFeature {
    /// Every feature, in declaration order.
    pub const ALL: [AdapterFeature; 22] = [
        AdapterFeature::Schema,
        AdapterFeature::Functions,
        AdapterFeature::Procedures,
        AdapterFeature::Sequences,
        AdapterFeature::PrimaryKeys,
        AdapterFeature::ForeignKeys,
        AdapterFeature::Uniques,
        AdapterFeature::Indexes,
        AdapterFeature::Checks,
        AdapterFeature::Excludes,
        AdapterFeature::Rules,
        AdapterFeature::Triggers,
        AdapterFeature::Partitions,
        AdapterFeature::UpdateRule,
        AdapterFeature::RenameTable,
        AdapterFeature::AlterType,
        AdapterFeature::AlterNullable,
        AdapterFeature::RenameColumn,
        AdapterFeature::AddColumn,
        AdapterFeature::DropColumn,
        AdapterFeature::AddConstraint,
        AdapterFeature::DropConstraint,
    ];
}

/// Capability flags, fixed per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub has_schema: bool,
    pub has_functions: bool,
    pub has_procedures: bool,
    pub has_sequences: bool,
    pub has_primary_keys: bool,
    pub has_foreign_keys: bool,
    pub has_uniques: bool,
    pub has_indexes: bool,
    pub has_checks: bool,
    pub has_excludes: bool,
    pub has_rules: bool,
    pub has_triggers: bool,
    pub has_partitions: bool,
    pub has_update_rule: bool,
    pub can_rename_table: bool,
    pub can_alter_type: bool,
    pub can_alter_nullable: bool,
    pub can_rename_column: bool,
    pub can_add_column: bool,
    pub can_drop_column: bool,
    pub can_add_constraint: bool,
    pub can_drop_constraint: bool,
}

impl Capabilities {
    /// Looks up the flag backing `feature`.
    pub fn supports(&self, feature: AdapterFeature) -> bool {
        match feature {
            AdapterFeature::Schema => self.has_schema,
            AdapterFeature::Functions => self.has_functions,
            AdapterFeature::Procedures => self.has_procedures,
            AdapterFeature::Sequences => self.has_sequences,
            AdapterFeature::PrimaryKeys => self.has_primary_keys,
            AdapterFeature::ForeignKeys => self.has_foreign_keys,
            AdapterFeature::Uniques => self.has_uniques,
            AdapterFeature::Indexes => self.has_indexes,
            AdapterFeature::Checks => self.has_checks,
            AdapterFeature::Excludes => self.has_excludes,
            AdapterFeature::Rules => self.has_rules,
            AdapterFeature::Triggers => self.has_triggers,
            AdapterFeature::Partitions => self.has_partitions,
            AdapterFeature::UpdateRule => self.has_update_rule,
            AdapterFeature::RenameTable => self.can_rename_table,
            AdapterFeature::AlterType => self.can_alter_type,
            AdapterFeature::AlterNullable => self.can_alter_nullable,
            AdapterFeature::RenameColumn => self.can_rename_column,
            AdapterFeature::AddColumn => self.can_add_column,
            AdapterFeature::DropColumn => self.can_drop_column,
            AdapterFeature::AddConstraint => self.can_add_constraint,
            AdapterFeature::DropConstraint => self.can_drop_constraint,
        }
    }

    /// Features whose flag is set.
    pub fn supported_features(&self) -> Vec<AdapterFeature> {
        AdapterFeature::ALL
            .into_iter()
            .filter(|feature| self.supports(*feature))
            .collect()
    }
}

/// Referential action offered for foreign keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReferentialRule {
    #[serde(rename = "NO ACTION")]
    NoAction,
    #[serde(rename = "RESTRICT")]
    Restrict,
    #[serde(rename = "CASCADE")]
    Cascade,
    #[serde(rename = "SET NULL")]
    SetNull,
    #[serde(rename = "SET DEFAULT")]
    SetDefault,
}

impl ReferentialRule {
    /// SQL spelling of the rule.
    pub fn as_sql(self) -> &'static str {
        match self {
            ReferentialRule::NoAction => "NO ACTION",
            ReferentialRule::Restrict => "RESTRICT",
            ReferentialRule::Cascade => "CASCADE",
            ReferentialRule::SetNull => "SET NULL",
            ReferentialRule::SetDefault => "SET DEFAULT",
        }
    }
}

impl std::fmt::Display for ReferentialRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// DDL fragments with `#p_...#` placeholders, substituted by the caller.
///
/// Placeholders in use: `#p_table_name#`, `#p_new_table_name#`,
/// `#p_column_name#`, `#p_new_column_name#`, `#p_data_type#`,
/// `#p_new_data_type#`, `#p_nullable#`, `#p_constraint_name#`,
/// `#p_columns#`, `#p_r_table_name#`, `#p_r_columns#`,
/// `#p_delete_update_rules#`, `#p_index_name#`, `#p_schema_name#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandTemplates {
    pub rename_table: &'static str,
    pub create_pk: &'static str,
    pub create_fk: &'static str,
    pub create_unique: &'static str,
    pub alter_type: &'static str,
    pub set_nullable: &'static str,
    pub drop_nullable: &'static str,
    pub rename_column: &'static str,
    pub add_column: &'static str,
    pub drop_column: &'static str,
    pub add_pk: &'static str,
    pub add_fk: &'static str,
    pub add_unique: &'static str,
    pub drop_pk: &'static str,
    pub drop_fk: &'static str,
    pub drop_unique: &'static str,
    pub create_index: &'static str,
    pub create_unique_index: &'static str,
    pub drop_index: &'static str,
    /// Update rules the UI may offer
    pub update_rules: &'static [ReferentialRule],
    /// Delete rules the UI may offer
    pub delete_rules: &'static [ReferentialRule],
}

impl CommandTemplates {
    /// Every template with its field name, for listing.
    pub fn entries(&self) -> [(&'static str, &'static str); 19] {
        [
            ("rename_table", self.rename_table),
            ("create_pk", self.create_pk),
            ("create_fk", self.create_fk),
            ("create_unique", self.create_unique),
            ("alter_type", self.alter_type),
            ("set_nullable", self.set_nullable),
            ("drop_nullable", self.drop_nullable),
            ("rename_column", self.rename_column),
            ("add_column", self.add_column),
            ("drop_column", self.drop_column),
            ("add_pk", self.add_pk),
            ("add_fk", self.add_fk),
            ("add_unique", self.add_unique),
            ("drop_pk", self.drop_pk),
            ("drop_fk", self.drop_fk),
            ("drop_unique", self.drop_unique),
            ("create_index", self.create_index),
            ("create_unique_index", self.create_unique_index),
            ("drop_index", self.drop_index),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_OFF: Capabilities = Capabilities {
        has_schema: false,
        has_functions: false,
        has_procedures: false,
        has_sequences: false,
        has_primary_keys: false,
        has_foreign_keys: false,
        has_uniques: false,
        has_indexes: false,
        has_checks: false,
        has_excludes: false,
        has_rules: false,
        has_triggers: false,
        has_partitions: false,
        has_update_rule: false,
        can_rename_table: false,
        can_alter_type: false,
        can_alter_nullable: false,
        can_rename_column: false,
        can_add_column: false,
        can_drop_column: false,
        can_add_constraint: false,
        can_drop_constraint: false,
    };

    #[test]
    fn test_supports_reads_matching_flag() {
        let caps = Capabilities {
            has_indexes: true,
            can_drop_column: true,
            ..ALL_OFF
        };

        assert!(caps.supports(AdapterFeature::Indexes));
        assert!(caps.supports(AdapterFeature::DropColumn));
        assert!(!caps.supports(AdapterFeature::Triggers));
        assert_eq!(
            caps.supported_features(),
            vec![AdapterFeature::Indexes, AdapterFeature::DropColumn]
        );
    }

    #[test]
    fn test_every_feature_maps_to_a_distinct_flag() {
        for feature in AdapterFeature::ALL {
            let only = AdapterFeature::ALL
                .into_iter()
                .filter(|other| {
                    let mut caps = ALL_OFF;
                    set_flag(&mut caps, *other);
                    caps.supports(feature)
                })
                .collect::<Vec<_>>();
            assert_eq!(only, vec![feature], "feature {:?}", feature);
        }
    }

    fn set_flag(caps: &mut Capabilities, feature: AdapterFeature) {
        let flag = match feature {
            AdapterFeature::Schema => &mut caps.has_schema,
            AdapterFeature::Functions => &mut caps.has_functions,
            AdapterFeature::Procedures => &mut caps.has_procedures,
            AdapterFeature::Sequences => &mut caps.has_sequences,
            AdapterFeature::PrimaryKeys => &mut caps.has_primary_keys,
            AdapterFeature::ForeignKeys => &mut caps.has_foreign_keys,
            AdapterFeature::Uniques => &mut caps.has_uniques,
            AdapterFeature::Indexes => &mut caps.has_indexes,
            AdapterFeature::Checks => &mut caps.has_checks,
            AdapterFeature::Excludes => &mut caps.has_excludes,
            AdapterFeature::Rules => &mut caps.has_rules,
            AdapterFeature::Triggers => &mut caps.has_triggers,
            AdapterFeature::Partitions => &mut caps.has_partitions,
            AdapterFeature::UpdateRule => &mut caps.has_update_rule,
            AdapterFeature::RenameTable => &mut caps.can_rename_table,
            AdapterFeature::AlterType => &mut caps.can_alter_type,
            AdapterFeature::AlterNullable => &mut caps.can_alter_nullable,
            AdapterFeature::RenameColumn => &mut caps.can_rename_column,
            AdapterFeature::AddColumn => &mut caps.can_add_column,
            AdapterFeature::DropColumn => &mut caps.can_drop_column,
            AdapterFeature::AddConstraint => &mut caps.can_add_constraint,
            AdapterFeature::DropConstraint => &mut caps.can_drop_constraint,
        };
        *flag = true;
    }

    #[test]
    fn test_referential_rule_spelling() {
        assert_eq!(ReferentialRule::NoAction.as_sql(), "NO ACTION");
        assert_eq!(ReferentialRule::SetNull.to_string(), "SET NULL");
        assert_eq!(
            serde_json::to_value(ReferentialRule::Cascade).unwrap(),
            serde_json::json!("CASCADE")
        );
    }
}
