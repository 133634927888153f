//! Leaf extractors, one per mutation kind.
//!
//! Each extractor reads identifiers from fixed positions in the statement
//! payload. A `None` return means the payload did not have the expected
//! shape. Qualified names contribute their last component.

use crate::ast::{
    AlterDomainStmt, AlterEnumStmt, AlterTableCmd, AlterTableStmt, CreateDomainStmt,
    CreateEnumStmt, CreateFunctionStmt, CreateStmt, CreateTableAsStmt, CreateTrigStmt,
    DeleteStmt, DropStmt, IndexStmt, InsertStmt, Node, RangeVar, RenameStmt, TruncateStmt,
    TypeName, UpdateStmt, ViewStmt,
};
use crate::mutation::Mutation;

fn relname(relation: Option<&RangeVar>) -> Option<String> {
    relation.map(|rel| rel.relname.clone())
}

fn last_name(names: &[Node]) -> Option<String> {
    names.last()?.as_str().map(str::to_string)
}

fn type_name(type_name: Option<&TypeName>) -> Option<String> {
    last_name(&type_name?.names)
}

/// Last name component of the first dropped object when it is a plain name
/// list (`DROP TABLE`, `DROP INDEX`, `DROP VIEW`).
fn first_list_name(stmt: &DropStmt) -> Option<String> {
    last_name(stmt.objects.first()?.as_list()?)
}

/// Last name component of the first dropped object when it is a type
/// reference (`DROP TYPE`, `DROP DOMAIN`).
fn first_type_name(stmt: &DropStmt) -> Option<String> {
    match stmt.objects.first()? {
        Node::TypeName(t) => type_name(Some(t)),
        _ => None,
    }
}

fn table_name(stmt: &AlterTableStmt) -> Option<String> {
    relname(stmt.relation.as_ref())
}

// =============================================================================
// Column mutations
// =============================================================================

pub(super) fn add_column(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    let Some(Node::ColumnDef(def)) = &cmd.def else {
        return None;
    };
    Some(Mutation::AlterTableAddColumn {
        table_name: table_name(stmt)?,
        column_name: def.colname.clone(),
        column_type: type_name(def.type_name.as_ref())?,
    })
}

/// The grammar uses one node for `SET DEFAULT` and `DROP DEFAULT`; only the
/// presence of a default expression tells them apart.
pub(super) fn column_default(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    let table_name = table_name(stmt)?;
    let column_name = cmd.name.clone();
    Some(if cmd.def.is_some() {
        Mutation::AlterTableSetColumnDefault {
            table_name,
            column_name,
        }
    } else {
        Mutation::AlterTableDropColumnDefault {
            table_name,
            column_name,
        }
    })
}

pub(super) fn drop_column(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    Some(Mutation::AlterTableDropColumn {
        table_name: table_name(stmt)?,
        column_name: cmd.name.clone(),
    })
}

pub(super) fn drop_not_null(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    Some(Mutation::AlterTableDropNotNull {
        table_name: table_name(stmt)?,
        column_name: cmd.name.clone(),
    })
}

pub(super) fn set_not_null(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    Some(Mutation::AlterTableSetNotNull {
        table_name: table_name(stmt)?,
        column_name: cmd.name.clone(),
    })
}

pub(super) fn rename_column(stmt: &RenameStmt) -> Option<Mutation> {
    Some(Mutation::AlterTableRenameColumn {
        table_name: relname(stmt.relation.as_ref())?,
        old_column_name: stmt.subname.clone(),
        new_column_name: stmt.newname.clone(),
    })
}

pub(super) fn alter_column_type(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    let Some(Node::ColumnDef(def)) = &cmd.def else {
        return None;
    };
    Some(Mutation::AlterTableAlterColumnType {
        table_name: table_name(stmt)?,
        column_name: cmd.name.clone(),
        new_type_name: type_name(def.type_name.as_ref())?,
    })
}

// =============================================================================
// Domain mutations
// =============================================================================

pub(super) fn alter_domain(stmt: &AlterDomainStmt) -> Option<Mutation> {
    Some(Mutation::AlterDomain {
        domain_name: last_name(&stmt.type_name)?,
    })
}

pub(super) fn create_domain(stmt: &CreateDomainStmt) -> Option<Mutation> {
    Some(Mutation::CreateDomain {
        domain_name: last_name(&stmt.domainname)?,
    })
}

pub(super) fn drop_domain(stmt: &DropStmt) -> Option<Mutation> {
    Some(Mutation::DropDomain {
        domain_name: first_type_name(stmt)?,
    })
}

// =============================================================================
// Enum mutations
// =============================================================================

pub(super) fn alter_enum(stmt: &AlterEnumStmt) -> Option<Mutation> {
    Some(Mutation::AlterEnum {
        enum_name: last_name(&stmt.type_name)?,
    })
}

pub(super) fn create_enum(stmt: &CreateEnumStmt) -> Option<Mutation> {
    Some(Mutation::CreateEnum {
        enum_name: last_name(&stmt.type_name)?,
    })
}

// =============================================================================
// Function mutations
// =============================================================================

pub(super) fn create_function(stmt: &CreateFunctionStmt) -> Option<Mutation> {
    Some(Mutation::CreateFunction {
        function_name: last_name(&stmt.funcname)?,
    })
}

pub(super) fn drop_function(stmt: &DropStmt) -> Option<Mutation> {
    let Node::ObjectWithArgs(func) = stmt.objects.first()? else {
        return None;
    };
    Some(Mutation::DropFunction {
        function_name: last_name(&func.objname)?,
    })
}

pub(super) fn rename_function(stmt: &RenameStmt) -> Option<Mutation> {
    let Some(Node::ObjectWithArgs(func)) = &stmt.object else {
        return None;
    };
    Some(Mutation::RenameFunction {
        old_function_name: last_name(&func.objname)?,
        new_function_name: stmt.newname.clone(),
    })
}

// =============================================================================
// Table mutations
// =============================================================================

pub(super) fn create_table(stmt: &CreateStmt) -> Option<Mutation> {
    Some(Mutation::CreateTable {
        table_name: relname(stmt.relation.as_ref())?,
    })
}

pub(super) fn create_table_as(stmt: &CreateTableAsStmt) -> Option<Mutation> {
    Some(Mutation::CreateTableAs {
        table_name: relname(stmt.into.as_ref())?,
    })
}

pub(super) fn drop_table(stmt: &DropStmt) -> Option<Mutation> {
    Some(Mutation::DropTable {
        table_name: first_list_name(stmt)?,
    })
}

pub(super) fn rename_table(stmt: &RenameStmt) -> Option<Mutation> {
    Some(Mutation::RenameTable {
        old_table_name: relname(stmt.relation.as_ref())?,
        new_table_name: stmt.newname.clone(),
    })
}

pub(super) fn truncate(stmt: &TruncateStmt) -> Option<Mutation> {
    if stmt.relations.is_empty() {
        return None;
    }
    Some(Mutation::TruncateTable {
        table_names: stmt
            .relations
            .iter()
            .map(|rel| rel.relname.clone())
            .collect(),
    })
}

// =============================================================================
// Trigger mutations
// =============================================================================

pub(super) fn create_trigger(stmt: &CreateTrigStmt) -> Option<Mutation> {
    Some(Mutation::CreateTrigger {
        trigger_name: stmt.trigname.clone(),
        table_name: relname(stmt.relation.as_ref())?,
    })
}

/// `DROP TRIGGER t ON [schema.]table` carries `[schema, table, t]`.
pub(super) fn drop_trigger(stmt: &DropStmt) -> Option<Mutation> {
    let items = stmt.objects.first()?.as_list()?;
    let [.., table, trigger] = items else {
        return None;
    };
    Some(Mutation::DropTrigger {
        trigger_name: trigger.as_str()?.to_string(),
        table_name: table.as_str()?.to_string(),
    })
}

pub(super) fn disable_trigger(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    Some(Mutation::DisableTrigger {
        table_name: table_name(stmt)?,
        trigger_name: cmd.name.clone(),
    })
}

pub(super) fn enable_trigger(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    Some(Mutation::EnableTrigger {
        table_name: table_name(stmt)?,
        trigger_name: cmd.name.clone(),
    })
}

pub(super) fn rename_trigger(stmt: &RenameStmt) -> Option<Mutation> {
    Some(Mutation::RenameTrigger {
        table_name: relname(stmt.relation.as_ref())?,
        old_trigger_name: stmt.subname.clone(),
        new_trigger_name: stmt.newname.clone(),
    })
}

// =============================================================================
// Data mutations
// =============================================================================

pub(super) fn delete(stmt: &DeleteStmt) -> Option<Mutation> {
    Some(Mutation::DeleteData {
        table_name: relname(stmt.relation.as_ref())?,
    })
}

pub(super) fn insert(stmt: &InsertStmt) -> Option<Mutation> {
    Some(Mutation::InsertData {
        table_name: relname(stmt.relation.as_ref())?,
    })
}

pub(super) fn update(stmt: &UpdateStmt) -> Option<Mutation> {
    Some(Mutation::UpdateData {
        table_name: relname(stmt.relation.as_ref())?,
        column_names: stmt
            .target_list
            .iter()
            .map(|target| target.name.clone())
            .collect(),
    })
}

// =============================================================================
// Index mutations
// =============================================================================

pub(super) fn create_index(stmt: &IndexStmt) -> Option<Mutation> {
    Some(Mutation::CreateIndex {
        table_name: relname(stmt.relation.as_ref())?,
        column_names: stmt
            .index_params
            .iter()
            .filter_map(|elem| elem.name.clone())
            .collect(),
    })
}

pub(super) fn drop_index(stmt: &DropStmt) -> Option<Mutation> {
    Some(Mutation::DropIndex {
        index_name: first_list_name(stmt)?,
    })
}

pub(super) fn rename_index(stmt: &RenameStmt) -> Option<Mutation> {
    Some(Mutation::RenameIndex {
        old_index_name: relname(stmt.relation.as_ref())?,
        new_index_name: stmt.newname.clone(),
    })
}

// =============================================================================
// Type mutations
// =============================================================================

pub(super) fn drop_type(stmt: &DropStmt) -> Option<Mutation> {
    Some(Mutation::DropType {
        type_name: first_type_name(stmt)?,
    })
}

pub(super) fn rename_type(stmt: &RenameStmt) -> Option<Mutation> {
    Some(Mutation::RenameType {
        old_type_name: last_name(stmt.object.as_ref()?.as_list()?)?,
        new_type_name: stmt.newname.clone(),
    })
}

// =============================================================================
// View mutations
// =============================================================================

pub(super) fn view(stmt: &ViewStmt) -> Option<Mutation> {
    Some(Mutation::CreateView {
        view_name: relname(stmt.view.as_ref())?,
    })
}

pub(super) fn drop_view(stmt: &DropStmt) -> Option<Mutation> {
    Some(Mutation::DropView {
        view_name: first_list_name(stmt)?,
    })
}

pub(super) fn drop_materialized_view(stmt: &DropStmt) -> Option<Mutation> {
    Some(Mutation::DropMaterializedView {
        view_name: first_list_name(stmt)?,
    })
}

// =============================================================================
// Constraint mutations
// =============================================================================

pub(super) fn add_constraint(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    let Some(Node::Constraint(constraint)) = &cmd.def else {
        return None;
    };
    Some(Mutation::AlterTableAddConstraint {
        table_name: table_name(stmt)?,
        constraint_name: constraint.conname.clone(),
    })
}

pub(super) fn drop_constraint(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    Some(Mutation::AlterTableDropConstraint {
        table_name: table_name(stmt)?,
        constraint_name: cmd.name.clone(),
    })
}

pub(super) fn validate_constraint(stmt: &AlterTableStmt, cmd: &AlterTableCmd) -> Option<Mutation> {
    Some(Mutation::AlterTableValidateConstraint {
        table_name: table_name(stmt)?,
        constraint_name: cmd.name.clone(),
    })
}

pub(super) fn rename_constraint(stmt: &RenameStmt) -> Option<Mutation> {
    Some(Mutation::AlterTableRenameConstraint {
        table_name: relname(stmt.relation.as_ref())?,
        old_constraint_name: stmt.subname.clone(),
        new_constraint_name: stmt.newname.clone(),
    })
}
