//! Conversion from the PostgreSQL protobuf parse tree to the native
//! statement tree.
//!
//! Only the fields the classifier reads are carried over. Anything the
//! native tree does not model becomes `Other` with its grammar tag, which the
//! classifier reports as unknown.

use oxide_delta_core::ast::{
    AlterDomainStmt, AlterEnumStmt, AlterTableCmd, AlterTableStmt, AlterTableType, ColumnDef,
    Constraint, CreateDomainStmt, CreateEnumStmt, CreateFunctionStmt, CreateStmt,
    CreateTableAsStmt, CreateTrigStmt, DeleteStmt, DropStmt, IndexElem, IndexStmt, InsertStmt,
    Node, ObjectType, ObjectWithArgs, RangeVar, RenameStmt, ResTarget, Stmt, TruncateStmt,
    TypeName, UpdateStmt, ViewStmt,
};
use pg_query::protobuf;
use pg_query::NodeEnum;

// ============================================================================
// Statements
// ============================================================================

/// Converts a top-level statement node.
pub fn statement(stmt: &NodeEnum) -> Stmt {
    match stmt {
        NodeEnum::AlterDomainStmt(s) => Stmt::AlterDomain(AlterDomainStmt {
            type_name: nodes(&s.type_name),
        }),
        NodeEnum::AlterEnumStmt(s) => Stmt::AlterEnum(AlterEnumStmt {
            type_name: nodes(&s.type_name),
        }),
        NodeEnum::AlterTableStmt(s) => Stmt::AlterTable(AlterTableStmt {
            relation: s.relation.as_ref().map(range_var),
            cmds: s
                .cmds
                .iter()
                .filter_map(|cmd| match cmd.node.as_ref() {
                    Some(NodeEnum::AlterTableCmd(cmd)) => Some(alter_table_cmd(cmd)),
                    _ => None,
                })
                .collect(),
        }),
        NodeEnum::CreateDomainStmt(s) => Stmt::CreateDomain(CreateDomainStmt {
            domainname: nodes(&s.domainname),
        }),
        NodeEnum::CreateEnumStmt(s) => Stmt::CreateEnum(CreateEnumStmt {
            type_name: nodes(&s.type_name),
        }),
        NodeEnum::CreateExtensionStmt(_) => Stmt::CreateExtension,
        NodeEnum::CreateFunctionStmt(s) => Stmt::CreateFunction(CreateFunctionStmt {
            funcname: nodes(&s.funcname),
        }),
        NodeEnum::CreateStmt(s) => Stmt::Create(CreateStmt {
            relation: s.relation.as_ref().map(range_var),
        }),
        NodeEnum::CreateTableAsStmt(s) => Stmt::CreateTableAs(CreateTableAsStmt {
            into: s
                .into
                .as_ref()
                .and_then(|into| into.rel.as_ref())
                .map(range_var),
        }),
        NodeEnum::CreateTrigStmt(s) => Stmt::CreateTrig(CreateTrigStmt {
            trigname: s.trigname.clone(),
            relation: s.relation.as_ref().map(range_var),
        }),
        NodeEnum::DeleteStmt(s) => Stmt::Delete(DeleteStmt {
            relation: s.relation.as_ref().map(range_var),
        }),
        NodeEnum::DropStmt(s) => Stmt::Drop(DropStmt {
            remove_type: object_type(s.remove_type()),
            objects: nodes(&s.objects),
        }),
        NodeEnum::IndexStmt(s) => Stmt::Index(IndexStmt {
            idxname: s.idxname.clone(),
            relation: s.relation.as_ref().map(range_var),
            index_params: s
                .index_params
                .iter()
                .filter_map(|param| match param.node.as_ref() {
                    Some(NodeEnum::IndexElem(elem)) => Some(index_elem(elem)),
                    _ => None,
                })
                .collect(),
        }),
        NodeEnum::InsertStmt(s) => Stmt::Insert(InsertStmt {
            relation: s.relation.as_ref().map(range_var),
        }),
        NodeEnum::RenameStmt(s) => Stmt::Rename(RenameStmt {
            rename_type: object_type(s.rename_type()),
            relation: s.relation.as_ref().map(range_var),
            object: s.object.as_ref().map(|obj| node(obj)),
            subname: s.subname.clone(),
            newname: s.newname.clone(),
        }),
        NodeEnum::TruncateStmt(s) => Stmt::Truncate(TruncateStmt {
            relations: s
                .relations
                .iter()
                .filter_map(|rel| match rel.node.as_ref() {
                    Some(NodeEnum::RangeVar(rel)) => Some(range_var(rel)),
                    _ => None,
                })
                .collect(),
        }),
        NodeEnum::UpdateStmt(s) => Stmt::Update(UpdateStmt {
            relation: s.relation.as_ref().map(range_var),
            target_list: s
                .target_list
                .iter()
                .filter_map(|target| match target.node.as_ref() {
                    Some(NodeEnum::ResTarget(target)) => Some(ResTarget {
                        name: target.name.clone(),
                    }),
                    _ => None,
                })
                .collect(),
        }),
        NodeEnum::ViewStmt(s) => Stmt::View(ViewStmt {
            view: s.view.as_ref().map(range_var),
        }),
        NodeEnum::SelectStmt(_) => Stmt::Select,
        NodeEnum::CreateSeqStmt(_) => Stmt::CreateSeq,
        NodeEnum::CreateStatsStmt(_) => Stmt::CreateStats,
        NodeEnum::DefineStmt(_) => Stmt::Define,
        NodeEnum::AlterSeqStmt(_) => Stmt::AlterSeq,
        NodeEnum::CommentStmt(_) => Stmt::Comment,
        NodeEnum::LockStmt(_) => Stmt::Lock,
        NodeEnum::VariableSetStmt(_) => Stmt::VariableSet,
        NodeEnum::TransactionStmt(_) => Stmt::Transaction,
        NodeEnum::DoStmt(_) => Stmt::Do,
        other => Stmt::Other { tag: tag(other) },
    }
}

fn alter_table_cmd(cmd: &protobuf::AlterTableCmd) -> AlterTableCmd {
    let converted = AlterTableCmd::new(alter_table_type(cmd.subtype()), cmd.name.clone());
    match cmd.def.as_ref() {
        Some(def) => converted.with_def(node(def)),
        None => converted,
    }
}

const fn alter_table_type(subtype: protobuf::AlterTableType) -> AlterTableType {
    use protobuf::AlterTableType as Pg;

    match subtype {
        Pg::AtAddColumn => AlterTableType::AddColumn,
        Pg::AtColumnDefault => AlterTableType::ColumnDefault,
        Pg::AtDropNotNull => AlterTableType::DropNotNull,
        Pg::AtSetNotNull => AlterTableType::SetNotNull,
        Pg::AtDropColumn => AlterTableType::DropColumn,
        Pg::AtAddConstraint => AlterTableType::AddConstraint,
        Pg::AtValidateConstraint => AlterTableType::ValidateConstraint,
        Pg::AtDropConstraint => AlterTableType::DropConstraint,
        Pg::AtAlterColumnType => AlterTableType::AlterColumnType,
        Pg::AtSetRelOptions => AlterTableType::SetRelOptions,
        Pg::AtEnableTrig => AlterTableType::EnableTrig,
        Pg::AtDisableTrig => AlterTableType::DisableTrig,
        _ => AlterTableType::Other,
    }
}

const fn object_type(object: protobuf::ObjectType) -> ObjectType {
    use protobuf::ObjectType as Pg;

    match object {
        Pg::ObjectColumn => ObjectType::Column,
        Pg::ObjectDomain => ObjectType::Domain,
        Pg::ObjectFunction => ObjectType::Function,
        Pg::ObjectIndex => ObjectType::Index,
        Pg::ObjectMatview => ObjectType::MatView,
        Pg::ObjectTabconstraint => ObjectType::TabConstraint,
        Pg::ObjectTable => ObjectType::Table,
        Pg::ObjectTrigger => ObjectType::Trigger,
        Pg::ObjectType => ObjectType::Type,
        Pg::ObjectView => ObjectType::View,
        _ => ObjectType::Other,
    }
}

// ============================================================================
// Nodes
// ============================================================================

fn nodes(items: &[protobuf::Node]) -> Vec<Node> {
    items.iter().map(node).collect()
}

/// Unmodelled payload nodes carry no tag; only statements need one.
fn node(value: &protobuf::Node) -> Node {
    match value.node.as_ref() {
        Some(NodeEnum::String(s)) => Node::String(s.sval.clone()),
        Some(NodeEnum::List(list)) => Node::List(nodes(&list.items)),
        Some(NodeEnum::RangeVar(rel)) => Node::RangeVar(range_var(rel)),
        Some(NodeEnum::TypeName(name)) => Node::TypeName(type_name(name)),
        Some(NodeEnum::ObjectWithArgs(obj)) => Node::ObjectWithArgs(ObjectWithArgs {
            objname: nodes(&obj.objname),
            objargs: nodes(&obj.objargs),
        }),
        Some(NodeEnum::ColumnDef(col)) => Node::ColumnDef(ColumnDef {
            colname: col.colname.clone(),
            type_name: col.type_name.as_ref().map(type_name),
        }),
        Some(NodeEnum::Constraint(con)) => Node::Constraint(Constraint {
            conname: con.conname.clone(),
        }),
        Some(NodeEnum::ResTarget(target)) => Node::ResTarget(ResTarget {
            name: target.name.clone(),
        }),
        Some(NodeEnum::IndexElem(elem)) => Node::IndexElem(index_elem(elem)),
        Some(_) | None => Node::Other,
    }
}

fn range_var(rel: &protobuf::RangeVar) -> RangeVar {
    RangeVar {
        schemaname: rel.schemaname.clone(),
        relname: rel.relname.clone(),
    }
}

fn type_name(name: &protobuf::TypeName) -> TypeName {
    TypeName {
        names: nodes(&name.names),
    }
}

/// Expression elements have no column name.
fn index_elem(elem: &protobuf::IndexElem) -> IndexElem {
    IndexElem {
        name: (!elem.name.is_empty()).then(|| elem.name.clone()),
    }
}

/// Grammar tag of a statement, taken from its variant name.
fn tag(stmt: &NodeEnum) -> String {
    let rendered = format!("{stmt:?}");
    rendered
        .split(['(', ' ', '{'])
        .next()
        .unwrap_or_default()
        .to_string()
}
