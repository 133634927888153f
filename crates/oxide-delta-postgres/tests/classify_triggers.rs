//! Tests for trigger statements.

mod common;
use common::*;

use oxide_delta_core::{EntityType, Mutation};

#[test]
fn create_trigger() {
    let m = mutation(
        "create trigger quux_codes_trigger
            before insert on quux_codes
            for each row execute procedure do_something();",
    );
    assert_eq!(m.entity_type(), EntityType::Trigger);
    assert_eq!(
        m,
        Mutation::CreateTrigger {
            trigger_name: "quux_codes_trigger".into(),
            table_name: "quux_codes".into(),
        }
    );
}

#[test]
fn drop_trigger() {
    assert_eq!(
        mutation("drop trigger foo_trigger on foo_table;"),
        Mutation::DropTrigger {
            trigger_name: "foo_trigger".into(),
            table_name: "foo_table".into(),
        }
    );
}

#[test]
fn drop_trigger_on_qualified_table() {
    assert_eq!(
        mutation("drop trigger if exists foo_trigger on app.foo_table;"),
        Mutation::DropTrigger {
            trigger_name: "foo_trigger".into(),
            table_name: "foo_table".into(),
        }
    );
}

#[test]
fn disable_trigger() {
    assert_eq!(
        mutation("alter table foo disable trigger bar;"),
        Mutation::DisableTrigger {
            table_name: "foo".into(),
            trigger_name: "bar".into(),
        }
    );
}

#[test]
fn enable_trigger() {
    assert_eq!(
        mutation("alter table foo enable trigger bar;"),
        Mutation::EnableTrigger {
            table_name: "foo".into(),
            trigger_name: "bar".into(),
        }
    );
}

#[test]
fn rename_trigger() {
    let m = mutation("alter trigger foo on bar_table rename to quux;");
    let names: Vec<_> = m.details().names().collect();
    assert_eq!(
        names,
        ["table_name", "old_trigger_name", "new_trigger_name"]
    );
    assert_eq!(
        m,
        Mutation::RenameTrigger {
            table_name: "bar_table".into(),
            old_trigger_name: "foo".into(),
            new_trigger_name: "quux".into(),
        }
    );
}
