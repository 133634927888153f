//! Statement node types.

use super::node::{IndexElem, Node, RangeVar, ResTarget};

/// One parsed statement together with its textual rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementNode {
    /// The statement tree.
    pub stmt: Stmt,
    /// Textual rendering of the statement, reported for unknown statements.
    pub text: String,
    /// Byte offset of the statement in the source text.
    pub location: usize,
}

impl StatementNode {
    /// Creates a statement node.
    #[must_use]
    pub fn new(stmt: Stmt, text: impl Into<String>) -> Self {
        Self {
            stmt,
            text: text.into(),
            location: 0,
        }
    }

    /// Sets the source location.
    #[must_use]
    pub const fn at(mut self, location: usize) -> Self {
        self.location = location;
        self
    }
}

/// A top-level statement, one variant per grammar tag the classifier knows.
///
/// Unit variants are statements whose payload is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `ALTER DOMAIN`.
    AlterDomain(AlterDomainStmt),
    /// `ALTER TYPE ... ADD VALUE` and friends.
    AlterEnum(AlterEnumStmt),
    /// `ALTER TABLE`.
    AlterTable(AlterTableStmt),
    /// `CREATE DOMAIN`.
    CreateDomain(CreateDomainStmt),
    /// `CREATE TYPE ... AS ENUM`.
    CreateEnum(CreateEnumStmt),
    /// `CREATE EXTENSION`.
    CreateExtension,
    /// `CREATE FUNCTION` / `CREATE PROCEDURE`.
    CreateFunction(CreateFunctionStmt),
    /// `CREATE TABLE`.
    Create(CreateStmt),
    /// `CREATE TABLE ... AS` / `SELECT ... INTO`.
    CreateTableAs(CreateTableAsStmt),
    /// `CREATE TRIGGER`.
    CreateTrig(CreateTrigStmt),
    /// `DELETE`.
    Delete(DeleteStmt),
    /// Any `DROP <object>`.
    Drop(DropStmt),
    /// `CREATE INDEX`.
    Index(IndexStmt),
    /// `INSERT`.
    Insert(InsertStmt),
    /// Any `ALTER <object> RENAME`.
    Rename(RenameStmt),
    /// `TRUNCATE`.
    Truncate(TruncateStmt),
    /// `UPDATE`.
    Update(UpdateStmt),
    /// `CREATE VIEW`.
    View(ViewStmt),
    /// `SELECT`.
    Select,
    /// `CREATE SEQUENCE`.
    CreateSeq,
    /// `CREATE STATISTICS`.
    CreateStats,
    /// `CREATE AGGREGATE`, `CREATE OPERATOR`, `CREATE TYPE ... AS (...)`.
    Define,
    /// `ALTER SEQUENCE`.
    AlterSeq,
    /// `COMMENT ON`.
    Comment,
    /// `LOCK`.
    Lock,
    /// `SET` / `RESET`.
    VariableSet,
    /// `BEGIN`, `COMMIT`, `ROLLBACK`, savepoints.
    Transaction,
    /// `DO $$ ... $$`.
    Do,
    /// Any other statement.
    Other {
        /// Grammar tag, e.g. `"GrantStmt"`.
        tag: String,
    },
}

impl Stmt {
    /// Returns the grammar tag of the statement.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::AlterDomain(_) => "AlterDomainStmt",
            Self::AlterEnum(_) => "AlterEnumStmt",
            Self::AlterTable(_) => "AlterTableStmt",
            Self::CreateDomain(_) => "CreateDomainStmt",
            Self::CreateEnum(_) => "CreateEnumStmt",
            Self::CreateExtension => "CreateExtensionStmt",
            Self::CreateFunction(_) => "CreateFunctionStmt",
            Self::Create(_) => "CreateStmt",
            Self::CreateTableAs(_) => "CreateTableAsStmt",
            Self::CreateTrig(_) => "CreateTrigStmt",
            Self::Delete(_) => "DeleteStmt",
            Self::Drop(_) => "DropStmt",
            Self::Index(_) => "IndexStmt",
            Self::Insert(_) => "InsertStmt",
            Self::Rename(_) => "RenameStmt",
            Self::Truncate(_) => "TruncateStmt",
            Self::Update(_) => "UpdateStmt",
            Self::View(_) => "ViewStmt",
            Self::Select => "SelectStmt",
            Self::CreateSeq => "CreateSeqStmt",
            Self::CreateStats => "CreateStatsStmt",
            Self::Define => "DefineStmt",
            Self::AlterSeq => "AlterSeqStmt",
            Self::Comment => "CommentStmt",
            Self::Lock => "LockStmt",
            Self::VariableSet => "VariableSetStmt",
            Self::Transaction => "TransactionStmt",
            Self::Do => "DoStmt",
            Self::Other { tag } => tag,
        }
    }
}

/// `ALTER DOMAIN` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlterDomainStmt {
    /// Qualified domain name.
    pub type_name: Vec<Node>,
}

/// `ALTER TYPE` payload for enum types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlterEnumStmt {
    /// Qualified enum name.
    pub type_name: Vec<Node>,
}

/// `ALTER TABLE` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlterTableStmt {
    /// Target relation.
    pub relation: Option<RangeVar>,
    /// Sub-commands in source order.
    pub cmds: Vec<AlterTableCmd>,
}

/// One `ALTER TABLE` sub-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTableCmd {
    /// Sub-command kind.
    pub subtype: AlterTableType,
    /// Column, constraint or trigger name, depending on the subtype.
    pub name: String,
    /// Definition payload: a column definition, a constraint, or a default
    /// expression.
    pub def: Option<Node>,
}

impl AlterTableCmd {
    /// Creates a sub-command without a definition.
    #[must_use]
    pub fn new(subtype: AlterTableType, name: impl Into<String>) -> Self {
        Self {
            subtype,
            name: name.into(),
            def: None,
        }
    }

    /// Sets the definition payload.
    #[must_use]
    pub fn with_def(mut self, def: Node) -> Self {
        self.def = Some(def);
        self
    }
}

/// `ALTER TABLE` sub-command kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlterTableType {
    /// `ADD COLUMN`.
    AddColumn,
    /// `ALTER COLUMN ... SET DEFAULT` and `DROP DEFAULT`.
    ColumnDefault,
    /// `ALTER COLUMN ... DROP NOT NULL`.
    DropNotNull,
    /// `ALTER COLUMN ... SET NOT NULL`.
    SetNotNull,
    /// `DROP COLUMN`.
    DropColumn,
    /// `ADD CONSTRAINT`.
    AddConstraint,
    /// `VALIDATE CONSTRAINT`.
    ValidateConstraint,
    /// `DROP CONSTRAINT`.
    DropConstraint,
    /// `ALTER COLUMN ... TYPE`.
    AlterColumnType,
    /// `SET (storage_parameter = ...)`.
    SetRelOptions,
    /// `ENABLE TRIGGER`.
    EnableTrig,
    /// `DISABLE TRIGGER`.
    DisableTrig,
    /// Any other sub-command.
    Other,
}

/// Object kinds targeted by `DROP` and `RENAME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// Table column.
    Column,
    /// Domain.
    Domain,
    /// Function.
    Function,
    /// Index.
    Index,
    /// Materialized view.
    MatView,
    /// Table constraint.
    TabConstraint,
    /// Table.
    Table,
    /// Trigger.
    Trigger,
    /// Type.
    Type,
    /// View.
    View,
    /// Any other object kind.
    Other,
}

/// `CREATE DOMAIN` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateDomainStmt {
    /// Qualified domain name.
    pub domainname: Vec<Node>,
}

/// `CREATE TYPE ... AS ENUM` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateEnumStmt {
    /// Qualified enum name.
    pub type_name: Vec<Node>,
}

/// `CREATE FUNCTION` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateFunctionStmt {
    /// Qualified function name.
    pub funcname: Vec<Node>,
}

/// `CREATE TABLE` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateStmt {
    /// Created relation.
    pub relation: Option<RangeVar>,
}

/// `CREATE TABLE ... AS` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateTableAsStmt {
    /// Target relation of the `INTO` clause.
    pub into: Option<RangeVar>,
}

/// `CREATE TRIGGER` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateTrigStmt {
    /// Trigger name.
    pub trigname: String,
    /// Table the trigger is attached to.
    pub relation: Option<RangeVar>,
}

/// `DELETE` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteStmt {
    /// Target relation.
    pub relation: Option<RangeVar>,
}

/// `DROP` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropStmt {
    /// Kind of the dropped objects.
    pub remove_type: ObjectType,
    /// Dropped objects: name lists, type names or function signatures.
    pub objects: Vec<Node>,
}

/// `CREATE INDEX` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexStmt {
    /// Index name, empty when generated.
    pub idxname: String,
    /// Indexed relation.
    pub relation: Option<RangeVar>,
    /// Indexed columns and expressions.
    pub index_params: Vec<IndexElem>,
}

/// `INSERT` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InsertStmt {
    /// Target relation.
    pub relation: Option<RangeVar>,
}

/// `RENAME` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStmt {
    /// Kind of the renamed object.
    pub rename_type: ObjectType,
    /// Owning relation for relation-scoped objects.
    pub relation: Option<RangeVar>,
    /// Renamed object for non-relation objects (functions, types).
    pub object: Option<Node>,
    /// Old name of a sub-object (column, constraint, trigger).
    pub subname: String,
    /// New name.
    pub newname: String,
}

/// `TRUNCATE` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TruncateStmt {
    /// Truncated relations in source order.
    pub relations: Vec<RangeVar>,
}

/// `UPDATE` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateStmt {
    /// Target relation.
    pub relation: Option<RangeVar>,
    /// Assignments in source order.
    pub target_list: Vec<ResTarget>,
}

/// `CREATE VIEW` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewStmt {
    /// Created view.
    pub view: Option<RangeVar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_follow_grammar_names() {
        assert_eq!(Stmt::Select.tag(), "SelectStmt");
        assert_eq!(Stmt::Create(CreateStmt::default()).tag(), "CreateStmt");
        let other = Stmt::Other {
            tag: "GrantStmt".into(),
        };
        assert_eq!(other.tag(), "GrantStmt");
    }

    #[test]
    fn alter_table_cmd_builder() {
        let cmd = AlterTableCmd::new(AlterTableType::ColumnDefault, "bar")
            .with_def(Node::Other);
        assert_eq!(cmd.name, "bar");
        assert!(cmd.def.is_some());
    }
}
