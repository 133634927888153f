//! Native statement tree consumed by the classifier.
//!
//! These types mirror the PostgreSQL parse-tree nodes the classifier reads.
//! They are produced by a [`Grammar`](crate::dialect::Grammar)
//! implementation and never mutated afterwards.

mod node;
mod statement;

pub use node::{
    ColumnDef, Constraint, IndexElem, Node, ObjectWithArgs, RangeVar, ResTarget, TypeName,
};
pub use statement::{
    AlterDomainStmt, AlterEnumStmt, AlterTableCmd, AlterTableStmt, AlterTableType,
    CreateDomainStmt, CreateEnumStmt, CreateFunctionStmt, CreateStmt, CreateTableAsStmt,
    CreateTrigStmt, DeleteStmt, DropStmt, IndexStmt, InsertStmt, ObjectType, RenameStmt,
    StatementNode, Stmt, TruncateStmt, UpdateStmt, ViewStmt,
};
