//! Mutation records.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::details::Details;
use super::kind::{EntityType, MutationKind};

/// A classified schema or data mutation.
///
/// Each variant carries exactly the detail fields of its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    // =========================================================================
    // Column mutations
    // =========================================================================
    /// `ALTER TABLE ... ADD COLUMN`.
    AlterTableAddColumn {
        /// Table name.
        table_name: String,
        /// Added column.
        column_name: String,
        /// Last component of the column's type name.
        column_type: String,
    },
    /// `ALTER TABLE ... ALTER COLUMN ... SET DEFAULT`.
    AlterTableSetColumnDefault {
        /// Table name.
        table_name: String,
        /// Column name.
        column_name: String,
    },
    /// `ALTER TABLE ... ALTER COLUMN ... DROP DEFAULT`.
    AlterTableDropColumnDefault {
        /// Table name.
        table_name: String,
        /// Column name.
        column_name: String,
    },
    /// `ALTER TABLE ... DROP COLUMN`.
    AlterTableDropColumn {
        /// Table name.
        table_name: String,
        /// Column name.
        column_name: String,
    },
    /// `ALTER TABLE ... ALTER COLUMN ... DROP NOT NULL`.
    AlterTableDropNotNull {
        /// Table name.
        table_name: String,
        /// Column name.
        column_name: String,
    },
    /// `ALTER TABLE ... ALTER COLUMN ... SET NOT NULL`.
    AlterTableSetNotNull {
        /// Table name.
        table_name: String,
        /// Column name.
        column_name: String,
    },
    /// `ALTER TABLE ... RENAME COLUMN`.
    AlterTableRenameColumn {
        /// Table name.
        table_name: String,
        /// Column name before the rename.
        old_column_name: String,
        /// Column name after the rename.
        new_column_name: String,
    },
    /// `ALTER TABLE ... ALTER COLUMN ... TYPE`.
    AlterTableAlterColumnType {
        /// Table name.
        table_name: String,
        /// Column name.
        column_name: String,
        /// Last component of the new type name.
        new_type_name: String,
    },

    // =========================================================================
    // Domain mutations
    // =========================================================================
    /// `ALTER DOMAIN`.
    AlterDomain {
        /// Domain name.
        domain_name: String,
    },
    /// `CREATE DOMAIN`.
    CreateDomain {
        /// Domain name.
        domain_name: String,
    },
    /// `DROP DOMAIN`.
    DropDomain {
        /// Domain name.
        domain_name: String,
    },

    // =========================================================================
    // Enum mutations
    // =========================================================================
    /// `ALTER TYPE` on an enum.
    AlterEnum {
        /// Enum name.
        enum_name: String,
    },
    /// `CREATE TYPE ... AS ENUM`.
    CreateEnum {
        /// Enum name.
        enum_name: String,
    },

    // =========================================================================
    // Function mutations
    // =========================================================================
    /// `CREATE FUNCTION`.
    CreateFunction {
        /// Function name.
        function_name: String,
    },
    /// `DROP FUNCTION`.
    DropFunction {
        /// Function name.
        function_name: String,
    },
    /// `ALTER FUNCTION ... RENAME TO`.
    RenameFunction {
        /// Name before the rename.
        old_function_name: String,
        /// Name after the rename.
        new_function_name: String,
    },

    // =========================================================================
    // Table mutations
    // =========================================================================
    /// `CREATE TABLE`.
    CreateTable {
        /// Table name.
        table_name: String,
    },
    /// `CREATE TABLE ... AS`.
    CreateTableAs {
        /// Table name.
        table_name: String,
    },
    /// `DROP TABLE`.
    DropTable {
        /// Table name.
        table_name: String,
    },
    /// `ALTER TABLE ... RENAME TO`.
    RenameTable {
        /// Name before the rename.
        old_table_name: String,
        /// Name after the rename.
        new_table_name: String,
    },
    /// `TRUNCATE`.
    TruncateTable {
        /// Truncated tables in source order.
        table_names: Vec<String>,
    },

    // =========================================================================
    // Trigger mutations
    // =========================================================================
    /// `CREATE TRIGGER`.
    CreateTrigger {
        /// Trigger name.
        trigger_name: String,
        /// Table the trigger is attached to.
        table_name: String,
    },
    /// `DROP TRIGGER`.
    DropTrigger {
        /// Trigger name.
        trigger_name: String,
        /// Table the trigger is attached to.
        table_name: String,
    },
    /// `ALTER TABLE ... DISABLE TRIGGER`.
    DisableTrigger {
        /// Table name.
        table_name: String,
        /// Trigger name.
        trigger_name: String,
    },
    /// `ALTER TABLE ... ENABLE TRIGGER`.
    EnableTrigger {
        /// Table name.
        table_name: String,
        /// Trigger name.
        trigger_name: String,
    },
    /// `ALTER TRIGGER ... RENAME TO`.
    RenameTrigger {
        /// Table the trigger is attached to.
        table_name: String,
        /// Name before the rename.
        old_trigger_name: String,
        /// Name after the rename.
        new_trigger_name: String,
    },

    // =========================================================================
    // Data mutations
    // =========================================================================
    /// `DELETE`.
    DeleteData {
        /// Table name.
        table_name: String,
    },
    /// `INSERT`.
    InsertData {
        /// Table name.
        table_name: String,
    },
    /// `UPDATE`.
    UpdateData {
        /// Table name.
        table_name: String,
        /// Assigned columns in source order.
        column_names: Vec<String>,
    },

    // =========================================================================
    // Index mutations
    // =========================================================================
    /// `CREATE INDEX`.
    CreateIndex {
        /// Indexed table.
        table_name: String,
        /// Indexed columns in source order.
        column_names: Vec<String>,
    },
    /// `DROP INDEX`.
    DropIndex {
        /// Index name.
        index_name: String,
    },
    /// `ALTER INDEX ... RENAME TO`.
    RenameIndex {
        /// Name before the rename.
        old_index_name: String,
        /// Name after the rename.
        new_index_name: String,
    },

    // =========================================================================
    // Type mutations
    // =========================================================================
    /// `DROP TYPE`.
    DropType {
        /// Type name.
        type_name: String,
    },
    /// `ALTER TYPE ... RENAME TO`.
    RenameType {
        /// Name before the rename.
        old_type_name: String,
        /// Name after the rename.
        new_type_name: String,
    },

    // =========================================================================
    // View mutations
    // =========================================================================
    /// `CREATE VIEW`.
    CreateView {
        /// View name.
        view_name: String,
    },
    /// `DROP VIEW`.
    DropView {
        /// View name.
        view_name: String,
    },
    /// `DROP MATERIALIZED VIEW`.
    DropMaterializedView {
        /// View name.
        view_name: String,
    },

    // =========================================================================
    // Constraint mutations
    // =========================================================================
    /// `ALTER TABLE ... ADD CONSTRAINT`.
    AlterTableAddConstraint {
        /// Table name.
        table_name: String,
        /// Constraint name.
        constraint_name: String,
    },
    /// `ALTER TABLE ... DROP CONSTRAINT`.
    AlterTableDropConstraint {
        /// Table name.
        table_name: String,
        /// Constraint name.
        constraint_name: String,
    },
    /// `ALTER TABLE ... VALIDATE CONSTRAINT`.
    AlterTableValidateConstraint {
        /// Table name.
        table_name: String,
        /// Constraint name.
        constraint_name: String,
    },
    /// `ALTER TABLE ... RENAME CONSTRAINT`.
    AlterTableRenameConstraint {
        /// Table name.
        table_name: String,
        /// Name before the rename.
        old_constraint_name: String,
        /// Name after the rename.
        new_constraint_name: String,
    },

    /// A statement without a dedicated classification.
    Unknown {
        /// Textual rendering of the whole statement.
        statement: String,
    },
}

impl Mutation {
    /// Returns the kind of this mutation.
    #[must_use]
    pub const fn kind(&self) -> MutationKind {
        match self {
            Self::AlterTableAddColumn { .. } => MutationKind::AlterTableAddColumn,
            Self::AlterTableSetColumnDefault { .. } => MutationKind::AlterTableSetColumnDefault,
            Self::AlterTableDropColumnDefault { .. } => MutationKind::AlterTableDropColumnDefault,
            Self::AlterTableDropColumn { .. } => MutationKind::AlterTableDropColumn,
            Self::AlterTableDropNotNull { .. } => MutationKind::AlterTableDropNotNull,
            Self::AlterTableSetNotNull { .. } => MutationKind::AlterTableSetNotNull,
            Self::AlterTableRenameColumn { .. } => MutationKind::AlterTableRenameColumn,
            Self::AlterTableAlterColumnType { .. } => MutationKind::AlterTableAlterColumnType,
            Self::AlterDomain { .. } => MutationKind::AlterDomain,
            Self::CreateDomain { .. } => MutationKind::CreateDomain,
            Self::DropDomain { .. } => MutationKind::DropDomain,
            Self::AlterEnum { .. } => MutationKind::AlterEnum,
            Self::CreateEnum { .. } => MutationKind::CreateEnum,
            Self::CreateFunction { .. } => MutationKind::CreateFunction,
            Self::DropFunction { .. } => MutationKind::DropFunction,
            Self::RenameFunction { .. } => MutationKind::RenameFunction,
            Self::CreateTable { .. } => MutationKind::CreateTable,
            Self::CreateTableAs { .. } => MutationKind::CreateTableAs,
            Self::DropTable { .. } => MutationKind::DropTable,
            Self::RenameTable { .. } => MutationKind::RenameTable,
            Self::TruncateTable { .. } => MutationKind::TruncateTable,
            Self::CreateTrigger { .. } => MutationKind::CreateTrigger,
            Self::DropTrigger { .. } => MutationKind::DropTrigger,
            Self::DisableTrigger { .. } => MutationKind::DisableTrigger,
            Self::EnableTrigger { .. } => MutationKind::EnableTrigger,
            Self::RenameTrigger { .. } => MutationKind::RenameTrigger,
            Self::DeleteData { .. } => MutationKind::DeleteData,
            Self::InsertData { .. } => MutationKind::InsertData,
            Self::UpdateData { .. } => MutationKind::UpdateData,
            Self::CreateIndex { .. } => MutationKind::CreateIndex,
            Self::DropIndex { .. } => MutationKind::DropIndex,
            Self::RenameIndex { .. } => MutationKind::RenameIndex,
            Self::DropType { .. } => MutationKind::DropType,
            Self::RenameType { .. } => MutationKind::RenameType,
            Self::CreateView { .. } => MutationKind::CreateView,
            Self::DropView { .. } => MutationKind::DropView,
            Self::DropMaterializedView { .. } => MutationKind::DropMaterializedView,
            Self::AlterTableAddConstraint { .. } => MutationKind::AlterTableAddConstraint,
            Self::AlterTableDropConstraint { .. } => MutationKind::AlterTableDropConstraint,
            Self::AlterTableValidateConstraint { .. } => {
                MutationKind::AlterTableValidateConstraint
            }
            Self::AlterTableRenameConstraint { .. } => MutationKind::AlterTableRenameConstraint,
            Self::Unknown { .. } => MutationKind::Unknown,
        }
    }

    /// Returns the entity type this mutation affects.
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        self.kind().entity_type()
    }

    /// Returns the detail fields in their fixed order.
    #[must_use]
    pub fn details(&self) -> Details {
        let details = Details::new();
        match self {
            Self::AlterTableAddColumn {
                table_name,
                column_name,
                column_type,
            } => details
                .with("table_name", table_name.as_str())
                .with("column_name", column_name.as_str())
                .with("column_type", column_type.as_str()),
            Self::AlterTableSetColumnDefault {
                table_name,
                column_name,
            }
            | Self::AlterTableDropColumnDefault {
                table_name,
                column_name,
            }
            | Self::AlterTableDropColumn {
                table_name,
                column_name,
            }
            | Self::AlterTableDropNotNull {
                table_name,
                column_name,
            }
            | Self::AlterTableSetNotNull {
                table_name,
                column_name,
            } => details
                .with("table_name", table_name.as_str())
                .with("column_name", column_name.as_str()),
            Self::AlterTableRenameColumn {
                table_name,
                old_column_name,
                new_column_name,
            } => details
                .with("table_name", table_name.as_str())
                .with("old_column_name", old_column_name.as_str())
                .with("new_column_name", new_column_name.as_str()),
            Self::AlterTableAlterColumnType {
                table_name,
                column_name,
                new_type_name,
            } => details
                .with("table_name", table_name.as_str())
                .with("column_name", column_name.as_str())
                .with("new_type_name", new_type_name.as_str()),
            Self::AlterDomain { domain_name }
            | Self::CreateDomain { domain_name }
            | Self::DropDomain { domain_name } => {
                details.with("domain_name", domain_name.as_str())
            }
            Self::AlterEnum { enum_name } | Self::CreateEnum { enum_name } => {
                details.with("enum_name", enum_name.as_str())
            }
            Self::CreateFunction { function_name } | Self::DropFunction { function_name } => {
                details.with("function_name", function_name.as_str())
            }
            Self::RenameFunction {
                old_function_name,
                new_function_name,
            } => details
                .with("old_function_name", old_function_name.as_str())
                .with("new_function_name", new_function_name.as_str()),
            Self::CreateTable { table_name }
            | Self::CreateTableAs { table_name }
            | Self::DropTable { table_name }
            | Self::DeleteData { table_name }
            | Self::InsertData { table_name } => details.with("table_name", table_name.as_str()),
            Self::RenameTable {
                old_table_name,
                new_table_name,
            } => details
                .with("old_table_name", old_table_name.as_str())
                .with("new_table_name", new_table_name.as_str()),
            Self::TruncateTable { table_names } => details.with("table_names", table_names.clone()),
            Self::CreateTrigger {
                trigger_name,
                table_name,
            }
            | Self::DropTrigger {
                trigger_name,
                table_name,
            } => details
                .with("trigger_name", trigger_name.as_str())
                .with("table_name", table_name.as_str()),
            Self::DisableTrigger {
                table_name,
                trigger_name,
            }
            | Self::EnableTrigger {
                table_name,
                trigger_name,
            } => details
                .with("table_name", table_name.as_str())
                .with("trigger_name", trigger_name.as_str()),
            Self::RenameTrigger {
                table_name,
                old_trigger_name,
                new_trigger_name,
            } => details
                .with("table_name", table_name.as_str())
                .with("old_trigger_name", old_trigger_name.as_str())
                .with("new_trigger_name", new_trigger_name.as_str()),
            Self::UpdateData {
                table_name,
                column_names,
            }
            | Self::CreateIndex {
                table_name,
                column_names,
            } => details
                .with("table_name", table_name.as_str())
                .with("column_names", column_names.clone()),
            Self::DropIndex { index_name } => details.with("index_name", index_name.as_str()),
            Self::RenameIndex {
                old_index_name,
                new_index_name,
            } => details
                .with("old_index_name", old_index_name.as_str())
                .with("new_index_name", new_index_name.as_str()),
            Self::DropType { type_name } => details.with("type_name", type_name.as_str()),
            Self::RenameType {
                old_type_name,
                new_type_name,
            } => details
                .with("old_type_name", old_type_name.as_str())
                .with("new_type_name", new_type_name.as_str()),
            Self::CreateView { view_name }
            | Self::DropView { view_name }
            | Self::DropMaterializedView { view_name } => {
                details.with("view_name", view_name.as_str())
            }
            Self::AlterTableAddConstraint {
                table_name,
                constraint_name,
            }
            | Self::AlterTableDropConstraint {
                table_name,
                constraint_name,
            }
            | Self::AlterTableValidateConstraint {
                table_name,
                constraint_name,
            } => details
                .with("table_name", table_name.as_str())
                .with("constraint_name", constraint_name.as_str()),
            Self::AlterTableRenameConstraint {
                table_name,
                old_constraint_name,
                new_constraint_name,
            } => details
                .with("table_name", table_name.as_str())
                .with("old_constraint_name", old_constraint_name.as_str())
                .with("new_constraint_name", new_constraint_name.as_str()),
            Self::Unknown { statement } => details.with("statement", statement.as_str()),
        }
    }
}

/// The outcome of classifying one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRecord {
    /// A recognized statement that carries no mutation, such as `BEGIN`,
    /// `COMMENT ON` or a bare `SELECT`.
    NoOp,
    /// A classified mutation, possibly [`Mutation::Unknown`].
    Mutation(Mutation),
}

impl MutationRecord {
    /// Returns the mutation kind, `None` for no-op records.
    #[must_use]
    pub const fn kind(&self) -> Option<MutationKind> {
        match self {
            Self::NoOp => None,
            Self::Mutation(m) => Some(m.kind()),
        }
    }

    /// Returns the affected entity type, `None` for no-op records.
    #[must_use]
    pub const fn entity_type(&self) -> Option<EntityType> {
        match self {
            Self::NoOp => None,
            Self::Mutation(m) => Some(m.entity_type()),
        }
    }

    /// Returns the detail fields; empty for no-op records.
    #[must_use]
    pub fn details(&self) -> Details {
        match self {
            Self::NoOp => Details::new(),
            Self::Mutation(m) => m.details(),
        }
    }

    /// Returns the mutation, `None` for no-op records.
    #[must_use]
    pub const fn mutation(&self) -> Option<&Mutation> {
        match self {
            Self::NoOp => None,
            Self::Mutation(m) => Some(m),
        }
    }

    /// Returns true for the no-op record.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Returns true for the unknown-statement fallback.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Mutation(Mutation::Unknown { .. }))
    }
}

impl From<Mutation> for MutationRecord {
    fn from(mutation: Mutation) -> Self {
        Self::Mutation(mutation)
    }
}

impl Serialize for MutationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NoOp => serializer.serialize_map(Some(0))?.end(),
            Self::Mutation(m) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("mutation", &m.kind())?;
                map.serialize_entry("type", &m.entity_type())?;
                map.serialize_entry("details", &m.details())?;
                map.end()
            }
        }
    }
}
