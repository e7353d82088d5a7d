//! DDL skeletons shown to the user for editing.

use serde::{Deserialize, Serialize};

use crate::error::DbAdminError;

/// How the UI should run a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// A single executable statement
    #[default]
    Execute,
    /// A multi-statement script
    Script,
}

/// Human-editable DDL text plus its presentation kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub text: String,
    pub kind: TemplateKind,
}

impl Template {
    /// Executable-statement template.
    pub fn execute(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TemplateKind::Execute,
        }
    }
}

macro_rules! schema_operations {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Schema change for which an adapter may offer a DDL skeleton.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum SchemaOperation {
            $($variant),+
        }

        impl SchemaOperation {
            /// Every operation, in declaration order.
            pub const ALL: &'static [SchemaOperation] = &[$(SchemaOperation::$variant),+];

            /// Kebab-case name, as accepted by `FromStr`.
            pub fn name(self) -> &'static str {
                match self {
                    $(SchemaOperation::$variant => $name),+
                }
            }
        }

        impl std::str::FromStr for SchemaOperation {
            type Err = DbAdminError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(SchemaOperation::$variant),)+
                    other => Err(DbAdminError::configuration(format!(
                        "unknown schema operation '{}'",
                        other
                    ))),
                }
            }
        }
    };
}

schema_operations! {
    CreateRole => "create-role",
    AlterRole => "alter-role",
    DropRole => "drop-role",
    CreateTablespace => "create-tablespace",
    AlterTablespace => "alter-tablespace",
    DropTablespace => "drop-tablespace",
    CreateDatabase => "create-database",
    AlterDatabase => "alter-database",
    DropDatabase => "drop-database",
    CreateFunction => "create-function",
    DropFunction => "drop-function",
    CreateProcedure => "create-procedure",
    DropProcedure => "drop-procedure",
    CreateTable => "create-table",
    AlterTable => "alter-table",
    DropTable => "drop-table",
    CreateColumn => "create-column",
    AlterColumn => "alter-column",
    DropColumn => "drop-column",
    CreatePrimaryKey => "create-primary-key",
    DropPrimaryKey => "drop-primary-key",
    CreateUnique => "create-unique",
    DropUnique => "drop-unique",
    CreateForeignKey => "create-foreign-key",
    DropForeignKey => "drop-foreign-key",
    CreateIndex => "create-index",
    AlterIndex => "alter-index",
    DropIndex => "drop-index",
}

impl std::fmt::Display for SchemaOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
