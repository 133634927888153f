//! Tests for domains, enums, functions, indexes, types, views and
//! constraints.

mod common;
use common::*;

use oxide_delta_core::{EntityType, Mutation};

// ===================================================================
// Domains
// ===================================================================

#[test]
fn alter_domain() {
    assert_eq!(
        mutation("alter domain foo drop constraint foo_check;"),
        Mutation::AlterDomain {
            domain_name: "foo".into(),
        }
    );
}

#[test]
fn create_domain() {
    assert_eq!(
        mutation("create domain foo as numeric(10, 5);"),
        Mutation::CreateDomain {
            domain_name: "foo".into(),
        }
    );
}

#[test]
fn drop_domain() {
    assert_eq!(
        mutation("drop domain foo;"),
        Mutation::DropDomain {
            domain_name: "foo".into(),
        }
    );
}

// ===================================================================
// Enums
// ===================================================================

#[test]
fn alter_enum() {
    assert_eq!(
        mutation("alter type foo add value 'bar' after 'baz';"),
        Mutation::AlterEnum {
            enum_name: "foo".into(),
        }
    );
}

#[test]
fn create_enum() {
    let m = mutation("create type foo as enum ('a', 'b', 'c')");
    assert_eq!(m.entity_type(), EntityType::Enum);
    assert_eq!(
        m,
        Mutation::CreateEnum {
            enum_name: "foo".into(),
        }
    );
}

// ===================================================================
// Functions
// ===================================================================

#[test]
fn create_function() {
    assert_eq!(
        mutation(
            "create function do_something()
            returns trigger
            language 'plpgsql'
            as $$
            declare
              x;
            begin
              select foo
              into strict x
              from bar
              where id = NEW.z_id.;

              return null;
            end;
            $$;"
        ),
        Mutation::CreateFunction {
            function_name: "do_something".into(),
        }
    );
}

#[test]
fn drop_function() {
    assert_eq!(
        mutation("DROP FUNCTION foo_bar();"),
        Mutation::DropFunction {
            function_name: "foo_bar".into(),
        }
    );
    assert_eq!(
        mutation("drop function foo_bar;"),
        Mutation::DropFunction {
            function_name: "foo_bar".into(),
        }
    );
}

#[test]
fn drop_qualified_function() {
    assert_eq!(
        mutation("drop function app.foo_bar_args(int, text);"),
        Mutation::DropFunction {
            function_name: "foo_bar_args".into(),
        }
    );
}

#[test]
fn rename_function() {
    assert_eq!(
        mutation("alter function foo() rename to bar;"),
        Mutation::RenameFunction {
            old_function_name: "foo".into(),
            new_function_name: "bar".into(),
        }
    );
}

// ===================================================================
// Indexes
// ===================================================================

#[test]
fn create_index() {
    assert_eq!(
        mutation("create index on foo (bar);"),
        Mutation::CreateIndex {
            table_name: "foo".into(),
            column_names: strings(&["bar"]),
        }
    );
    assert_eq!(
        mutation("create index on foo (bar, baz, quux);"),
        Mutation::CreateIndex {
            table_name: "foo".into(),
            column_names: strings(&["bar", "baz", "quux"]),
        }
    );
}

#[test]
fn create_index_skips_expressions() {
    assert_eq!(
        mutation("create unique index foo_lower_idx on foo (lower(bar), baz);"),
        Mutation::CreateIndex {
            table_name: "foo".into(),
            column_names: strings(&["baz"]),
        }
    );
}

#[test]
fn drop_index() {
    assert_eq!(
        mutation("drop index if exists foo_bar_idx;"),
        Mutation::DropIndex {
            index_name: "foo_bar_idx".into(),
        }
    );
    assert_eq!(
        mutation("drop index bar_baz_idx;"),
        Mutation::DropIndex {
            index_name: "bar_baz_idx".into(),
        }
    );
}

#[test]
fn rename_index() {
    assert_eq!(
        mutation("alter index foo rename to bar;"),
        Mutation::RenameIndex {
            old_index_name: "foo".into(),
            new_index_name: "bar".into(),
        }
    );
}

// ===================================================================
// Types
// ===================================================================

#[test]
fn drop_type() {
    assert_eq!(
        mutation("drop type if exists foo;"),
        Mutation::DropType {
            type_name: "foo".into(),
        }
    );
}

#[test]
fn rename_type() {
    assert_eq!(
        mutation("alter type foo rename to bar;"),
        Mutation::RenameType {
            old_type_name: "foo".into(),
            new_type_name: "bar".into(),
        }
    );
}

// ===================================================================
// Views
// ===================================================================

#[test]
fn create_view() {
    assert_eq!(
        mutation("create view foo as select 1;"),
        Mutation::CreateView {
            view_name: "foo".into(),
        }
    );
}

#[test]
fn drop_view() {
    assert_eq!(
        mutation("drop view foo;"),
        Mutation::DropView {
            view_name: "foo".into(),
        }
    );
}

#[test]
fn drop_materialized_view() {
    let m = mutation("drop materialized view if exists foo;");
    assert_eq!(m.entity_type(), EntityType::View);
    assert_eq!(
        m,
        Mutation::DropMaterializedView {
            view_name: "foo".into(),
        }
    );
}

// ===================================================================
// Constraints
// ===================================================================

#[test]
fn add_constraint() {
    assert_eq!(
        mutation(
            r#"alter table foo
                add constraint bar_matches
                foreign key("baz_id")
                references "baz" ("id")
                on delete restrict on update restrict;"#
        ),
        Mutation::AlterTableAddConstraint {
            table_name: "foo".into(),
            constraint_name: "bar_matches".into(),
        }
    );
}

#[test]
fn drop_constraint() {
    assert_eq!(
        mutation("alter table foo drop constraint if exists bar;"),
        Mutation::AlterTableDropConstraint {
            table_name: "foo".into(),
            constraint_name: "bar".into(),
        }
    );
}

#[test]
fn validate_constraint() {
    assert_eq!(
        mutation("alter table foo validate constraint bar;"),
        Mutation::AlterTableValidateConstraint {
            table_name: "foo".into(),
            constraint_name: "bar".into(),
        }
    );
}

#[test]
fn rename_constraint() {
    assert_eq!(
        mutation("alter table foo rename constraint bar to baz;"),
        Mutation::AlterTableRenameConstraint {
            table_name: "foo".into(),
            old_constraint_name: "bar".into(),
            new_constraint_name: "baz".into(),
        }
    );
}

// ===================================================================
// Unlisted object kinds
// ===================================================================

#[test]
fn drop_of_unlisted_object_is_unknown() {
    for sql in ["drop sequence foo;", "drop schema app;", "drop extension hstore;"] {
        let record = classify(sql);
        assert!(record.is_unknown(), "expected Unknown for: {sql}");
        assert_eq!(
            record.details().text("statement"),
            Some(sql.trim_end_matches(';'))
        );
    }
}

#[test]
fn rename_of_unlisted_object_is_unknown() {
    for sql in [
        "alter view v rename to w;",
        "alter domain foo rename to bar;",
        "alter materialized view mv rename to mv2;",
    ] {
        assert!(classify(sql).is_unknown(), "expected Unknown for: {sql}");
    }
}
