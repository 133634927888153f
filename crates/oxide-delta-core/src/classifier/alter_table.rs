//! `ALTER TABLE` sub-command dispatch.
//!
//! Only the first sub-command is classified. `ALTER TABLE t ADD COLUMN a
//! int, ADD COLUMN b int` reports the `a` column alone; the remaining
//! sub-commands are not inspected.

use super::{extract, unknown};
use crate::ast::{AlterTableStmt, AlterTableType, StatementNode};
use crate::mutation::MutationRecord;

pub(super) fn classify(stmt: &AlterTableStmt, node: &StatementNode) -> MutationRecord {
    let Some(cmd) = stmt.cmds.first() else {
        return unknown(node);
    };

    let mutation = match cmd.subtype {
        AlterTableType::SetNotNull => extract::set_not_null(stmt, cmd),
        AlterTableType::AddColumn => extract::add_column(stmt, cmd),
        AlterTableType::DropColumn => extract::drop_column(stmt, cmd),
        AlterTableType::AddConstraint => extract::add_constraint(stmt, cmd),
        AlterTableType::DropConstraint => extract::drop_constraint(stmt, cmd),
        AlterTableType::ValidateConstraint => extract::validate_constraint(stmt, cmd),
        AlterTableType::DropNotNull => extract::drop_not_null(stmt, cmd),
        AlterTableType::ColumnDefault => extract::column_default(stmt, cmd),
        AlterTableType::AlterColumnType => extract::alter_column_type(stmt, cmd),
        AlterTableType::DisableTrig => extract::disable_trigger(stmt, cmd),
        AlterTableType::EnableTrig => extract::enable_trigger(stmt, cmd),
        AlterTableType::SetRelOptions => return MutationRecord::NoOp,
        AlterTableType::Other => None,
    };

    mutation.map_or_else(|| unknown(node), MutationRecord::Mutation)
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        AlterTableCmd, AlterTableStmt, AlterTableType, ColumnDef, Node, RangeVar, StatementNode,
        Stmt, TypeName,
    };
    use crate::classifier::classify;
    use crate::mutation::{Mutation, MutationRecord};

    fn alter(cmds: Vec<AlterTableCmd>) -> StatementNode {
        StatementNode::new(
            Stmt::AlterTable(AlterTableStmt {
                relation: Some(RangeVar::new("t")),
                cmds,
            }),
            "ALTER TABLE t ...",
        )
    }

    fn add_column(name: &str) -> AlterTableCmd {
        AlterTableCmd::new(AlterTableType::AddColumn, "").with_def(Node::ColumnDef(ColumnDef {
            colname: name.into(),
            type_name: Some(TypeName::new(["pg_catalog", "int4"])),
        }))
    }

    #[test]
    fn only_first_sub_command_is_classified() {
        let record = classify(&alter(vec![add_column("a"), add_column("b")]));
        assert_eq!(
            record,
            MutationRecord::Mutation(Mutation::AlterTableAddColumn {
                table_name: "t".into(),
                column_name: "a".into(),
                column_type: "int4".into(),
            })
        );
    }

    #[test]
    fn first_sub_command_decides_even_when_later_ones_differ() {
        let record = classify(&alter(vec![
            AlterTableCmd::new(AlterTableType::SetRelOptions, ""),
            add_column("a"),
        ]));
        assert!(record.is_noop());
    }

    #[test]
    fn set_and_drop_default_share_a_node() {
        let set = classify(&alter(vec![AlterTableCmd::new(
            AlterTableType::ColumnDefault,
            "c",
        )
        .with_def(Node::Other)]));
        let dropped = classify(&alter(vec![AlterTableCmd::new(
            AlterTableType::ColumnDefault,
            "c",
        )]));

        assert_eq!(
            set,
            MutationRecord::Mutation(Mutation::AlterTableSetColumnDefault {
                table_name: "t".into(),
                column_name: "c".into(),
            })
        );
        assert_eq!(
            dropped,
            MutationRecord::Mutation(Mutation::AlterTableDropColumnDefault {
                table_name: "t".into(),
                column_name: "c".into(),
            })
        );
    }

    #[test]
    fn no_sub_commands_is_unknown() {
        assert!(classify(&alter(vec![])).is_unknown());
    }

    #[test]
    fn unlisted_sub_command_is_unknown() {
        let record = classify(&alter(vec![AlterTableCmd::new(AlterTableType::Other, "")]));
        assert!(record.is_unknown());
    }

    #[test]
    fn add_column_without_definition_is_unknown() {
        let record = classify(&alter(vec![AlterTableCmd::new(
            AlterTableType::AddColumn,
            "",
        )]));
        assert!(record.is_unknown());
    }
}
