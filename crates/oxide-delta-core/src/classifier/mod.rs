//! Statement-to-mutation classification.
//!
//! [`classify`] is a total function: every [`StatementNode`] maps to exactly
//! one [`MutationRecord`]. Dispatch happens on the statement tag first, then
//! on the `ALTER TABLE` sub-command or the `DROP`/`RENAME` object kind. Leaf
//! extractors return `None` when the payload does not have the expected
//! shape, which routes that statement to [`Mutation::Unknown`].

mod alter_table;
mod extract;

use crate::ast::{DropStmt, ObjectType, RenameStmt, StatementNode, Stmt};
use crate::mutation::{Mutation, MutationRecord};

/// Classifies one statement.
#[must_use]
pub fn classify(node: &StatementNode) -> MutationRecord {
    let mutation = match &node.stmt {
        Stmt::AlterDomain(s) => extract::alter_domain(s),
        Stmt::AlterEnum(s) => extract::alter_enum(s),
        Stmt::AlterTable(s) => return alter_table::classify(s, node),
        Stmt::CreateDomain(s) => extract::create_domain(s),
        Stmt::CreateEnum(s) => extract::create_enum(s),
        Stmt::CreateFunction(s) => extract::create_function(s),
        Stmt::Create(s) => extract::create_table(s),
        Stmt::CreateTableAs(s) => extract::create_table_as(s),
        Stmt::CreateTrig(s) => extract::create_trigger(s),
        Stmt::Delete(s) => extract::delete(s),
        Stmt::Drop(s) => drop_object(s),
        Stmt::Index(s) => extract::create_index(s),
        Stmt::Insert(s) => extract::insert(s),
        Stmt::Rename(s) => rename_object(s),
        Stmt::Truncate(s) => extract::truncate(s),
        Stmt::Update(s) => extract::update(s),
        Stmt::View(s) => extract::view(s),
        // Invoked functions may alter the schema, but inferring that is out
        // of reach here.
        Stmt::Select => return MutationRecord::NoOp,
        Stmt::CreateExtension
        | Stmt::CreateSeq
        | Stmt::CreateStats
        | Stmt::Define
        | Stmt::AlterSeq
        | Stmt::Comment
        | Stmt::Lock
        | Stmt::VariableSet
        | Stmt::Transaction
        | Stmt::Do => return MutationRecord::NoOp,
        Stmt::Other { .. } => None,
    };

    mutation.map_or_else(|| unknown(node), MutationRecord::Mutation)
}

fn drop_object(stmt: &DropStmt) -> Option<Mutation> {
    match stmt.remove_type {
        ObjectType::Index => extract::drop_index(stmt),
        ObjectType::Table => extract::drop_table(stmt),
        ObjectType::Type => extract::drop_type(stmt),
        ObjectType::Trigger => extract::drop_trigger(stmt),
        ObjectType::Function => extract::drop_function(stmt),
        ObjectType::View => extract::drop_view(stmt),
        ObjectType::Domain => extract::drop_domain(stmt),
        ObjectType::MatView => extract::drop_materialized_view(stmt),
        ObjectType::Column | ObjectType::TabConstraint | ObjectType::Other => None,
    }
}

fn rename_object(stmt: &RenameStmt) -> Option<Mutation> {
    match stmt.rename_type {
        ObjectType::TabConstraint => extract::rename_constraint(stmt),
        ObjectType::Table => extract::rename_table(stmt),
        ObjectType::Column => extract::rename_column(stmt),
        ObjectType::Function => extract::rename_function(stmt),
        ObjectType::Trigger => extract::rename_trigger(stmt),
        ObjectType::Index => extract::rename_index(stmt),
        ObjectType::Type => extract::rename_type(stmt),
        ObjectType::Domain | ObjectType::MatView | ObjectType::View | ObjectType::Other => None,
    }
}

fn unknown(node: &StatementNode) -> MutationRecord {
    MutationRecord::Mutation(Mutation::Unknown {
        statement: node.text.clone(),
    })
}
