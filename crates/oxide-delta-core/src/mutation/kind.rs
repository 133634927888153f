//! Mutation kinds and the entity types they affect.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Coarse classification of what a mutation affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// A table column.
    Column,
    /// A domain.
    Domain,
    /// An enum type.
    Enum,
    /// A function or procedure.
    Function,
    /// A table.
    Table,
    /// A trigger.
    Trigger,
    /// Rows of a table.
    Data,
    /// An index.
    Index,
    /// A type.
    Type,
    /// A view or materialized view.
    View,
    /// A table constraint.
    Constraint,
    /// Unrecognized statement.
    Unknown,
}

impl EntityType {
    /// Returns the snake_case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Domain => "domain",
            Self::Enum => "enum",
            Self::Function => "function",
            Self::Table => "table",
            Self::Trigger => "trigger",
            Self::Data => "data",
            Self::Index => "index",
            Self::Type => "type",
            Self::View => "view",
            Self::Constraint => "constraint",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every mutation shape the classifier produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    // Column mutations
    AlterTableAddColumn,
    AlterTableSetColumnDefault,
    AlterTableDropColumnDefault,
    AlterTableDropColumn,
    AlterTableDropNotNull,
    AlterTableSetNotNull,
    AlterTableRenameColumn,
    AlterTableAlterColumnType,
    // Domain mutations
    AlterDomain,
    CreateDomain,
    DropDomain,
    // Enum mutations
    AlterEnum,
    CreateEnum,
    // Function mutations
    CreateFunction,
    DropFunction,
    RenameFunction,
    // Table mutations
    CreateTable,
    CreateTableAs,
    DropTable,
    RenameTable,
    TruncateTable,
    // Trigger mutations
    CreateTrigger,
    DropTrigger,
    DisableTrigger,
    EnableTrigger,
    RenameTrigger,
    // Data mutations
    DeleteData,
    InsertData,
    UpdateData,
    // Index mutations
    CreateIndex,
    DropIndex,
    RenameIndex,
    // Type mutations
    DropType,
    RenameType,
    // View mutations
    CreateView,
    DropView,
    DropMaterializedView,
    // Constraint mutations
    AlterTableAddConstraint,
    AlterTableDropConstraint,
    AlterTableValidateConstraint,
    AlterTableRenameConstraint,
    /// Fallback for statements without a dedicated kind.
    Unknown,
}

impl MutationKind {
    /// Returns the entity type this kind of mutation affects.
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        match self {
            Self::AlterTableAddColumn
            | Self::AlterTableSetColumnDefault
            | Self::AlterTableDropColumnDefault
            | Self::AlterTableDropColumn
            | Self::AlterTableDropNotNull
            | Self::AlterTableSetNotNull
            | Self::AlterTableRenameColumn
            | Self::AlterTableAlterColumnType => EntityType::Column,
            Self::AlterDomain | Self::CreateDomain | Self::DropDomain => EntityType::Domain,
            Self::AlterEnum | Self::CreateEnum => EntityType::Enum,
            Self::CreateFunction | Self::DropFunction | Self::RenameFunction => {
                EntityType::Function
            }
            Self::CreateTable
            | Self::CreateTableAs
            | Self::DropTable
            | Self::RenameTable
            | Self::TruncateTable => EntityType::Table,
            Self::CreateTrigger
            | Self::DropTrigger
            | Self::DisableTrigger
            | Self::EnableTrigger
            | Self::RenameTrigger => EntityType::Trigger,
            Self::DeleteData | Self::InsertData | Self::UpdateData => EntityType::Data,
            Self::CreateIndex | Self::DropIndex | Self::RenameIndex => EntityType::Index,
            Self::DropType | Self::RenameType => EntityType::Type,
            Self::CreateView | Self::DropView | Self::DropMaterializedView => EntityType::View,
            Self::AlterTableAddConstraint
            | Self::AlterTableDropConstraint
            | Self::AlterTableValidateConstraint
            | Self::AlterTableRenameConstraint => EntityType::Constraint,
            Self::Unknown => EntityType::Unknown,
        }
    }

    /// Returns the snake_case name used in audit output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlterTableAddColumn => "alter_table_add_column",
            Self::AlterTableSetColumnDefault => "alter_table_set_column_default",
            Self::AlterTableDropColumnDefault => "alter_table_drop_column_default",
            Self::AlterTableDropColumn => "alter_table_drop_column",
            Self::AlterTableDropNotNull => "alter_table_drop_not_null",
            Self::AlterTableSetNotNull => "alter_table_set_not_null",
            Self::AlterTableRenameColumn => "alter_table_rename_column",
            Self::AlterTableAlterColumnType => "alter_table_alter_column_type",
            Self::AlterDomain => "alter_domain",
            Self::CreateDomain => "create_domain",
            Self::DropDomain => "drop_domain",
            Self::AlterEnum => "alter_enum",
            Self::CreateEnum => "create_enum",
            Self::CreateFunction => "create_function",
            Self::DropFunction => "drop_function",
            Self::RenameFunction => "rename_function",
            Self::CreateTable => "create_table",
            Self::CreateTableAs => "create_table_as",
            Self::DropTable => "drop_table",
            Self::RenameTable => "rename_table",
            Self::TruncateTable => "truncate_table",
            Self::CreateTrigger => "create_trigger",
            Self::DropTrigger => "drop_trigger",
            Self::DisableTrigger => "disable_trigger",
            Self::EnableTrigger => "enable_trigger",
            Self::RenameTrigger => "rename_trigger",
            Self::DeleteData => "delete_data",
            Self::InsertData => "insert_data",
            Self::UpdateData => "update_data",
            Self::CreateIndex => "create_index",
            Self::DropIndex => "drop_index",
            Self::RenameIndex => "rename_index",
            Self::DropType => "drop_type",
            Self::RenameType => "rename_type",
            Self::CreateView => "create_view",
            Self::DropView => "drop_view",
            Self::DropMaterializedView => "drop_materialized_view",
            Self::AlterTableAddConstraint => "alter_table_add_constraint",
            Self::AlterTableDropConstraint => "alter_table_drop_constraint",
            Self::AlterTableValidateConstraint => "alter_table_validate_constraint",
            Self::AlterTableRenameConstraint => "alter_table_rename_constraint",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_kinds_share_entity() {
        assert_eq!(
            MutationKind::AlterTableAddColumn.entity_type(),
            EntityType::Column
        );
        assert_eq!(
            MutationKind::AlterTableDropColumn.entity_type(),
            EntityType::Column
        );
        assert_eq!(
            MutationKind::AlterTableAlterColumnType.entity_type(),
            EntityType::Column
        );
    }

    #[test]
    fn materialized_views_are_views() {
        assert_eq!(
            MutationKind::DropMaterializedView.entity_type(),
            EntityType::View
        );
    }

    #[test]
    fn as_str_matches_serde_name() {
        let kinds = [
            MutationKind::AlterTableAddColumn,
            MutationKind::CreateTableAs,
            MutationKind::DropMaterializedView,
            MutationKind::AlterTableRenameConstraint,
            MutationKind::Unknown,
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
        assert_eq!(
            serde_json::to_string(&EntityType::Constraint).unwrap(),
            "\"constraint\""
        );
    }
}
