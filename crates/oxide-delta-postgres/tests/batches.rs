//! Tests for multi-statement input, fallbacks and the audit-log shape.

mod common;
use common::*;

use oxide_delta_core::{MutationKind, MutationRecord};
use oxide_delta_postgres::{PostgresGrammar, PostgresOptions, UnknownRendering};
use serde_json::json;

// ===================================================================
// Splitting
// ===================================================================

#[test]
fn classifies_every_statement_in_order() {
    let records = oxide_delta_postgres::classify_all(
        "CREATE TABLE quux (id int);
         ALTER TABLE quux ADD COLUMN name text;
         CREATE EXTENSION foo;
         DROP TABLE quux;",
    );
    let kinds: Vec<_> = records.iter().map(MutationRecord::kind).collect();
    assert_eq!(
        kinds,
        [
            Some(MutationKind::CreateTable),
            Some(MutationKind::AlterTableAddColumn),
            None,
            Some(MutationKind::DropTable),
        ]
    );
}

#[test]
fn split_exposes_statement_text() {
    let nodes = oxide_delta_postgres::split_statements("select 1;\n\nselect 2;");
    let texts: Vec<_> = nodes.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, ["select 1", "select 2"]);
    assert_eq!(nodes[1].location, 11);
}

#[test]
fn annotated_statements() {
    let classified =
        oxide_delta_postgres::classify_annotated("truncate foo; grant select on foo to bar");
    assert_eq!(classified.len(), 2);

    assert_eq!(classified[0].ordinal, 1);
    assert_eq!(classified[0].sql, "truncate foo");
    assert_eq!(classified[0].record.kind(), Some(MutationKind::TruncateTable));

    assert_eq!(classified[1].ordinal, 2);
    assert_eq!(classified[1].location, 14);
    assert!(classified[1].record.is_unknown());
}

// ===================================================================
// Fallbacks
// ===================================================================

#[test]
fn unparsable_text() {
    assert!(classify("not sql at all").is_noop());
    assert!(oxide_delta_postgres::classify_all("not sql at all").is_empty());
    assert!(oxide_delta_postgres::classify_all("create table ok (id int); nope nope").is_empty());
}

#[test]
fn empty_text() {
    assert!(classify("").is_noop());
    assert!(oxide_delta_postgres::classify_all("  ").is_empty());
}

#[test]
fn inert_statements_are_noop() {
    for sql in [
        "CREATE EXTENSION foo;",
        "create sequence foo_seq;",
        "alter sequence foo_seq restart;",
        "comment on table foo is 'bar';",
        "lock table foo;",
        "set search_path to app;",
        "begin;",
        "do $$ begin perform 1; end $$;",
        "create aggregate my_sum (int) (sfunc = int4pl, stype = int);",
        "create statistics foo_stats on a, b from foo;",
    ] {
        assert!(classify(sql).is_noop(), "expected NoOp for: {sql}");
    }
}

#[test]
fn unknown_keeps_statement_text() {
    let record = classify("grant select on foo to bar;");
    assert!(record.is_unknown());
    assert_eq!(
        record.details().text("statement"),
        Some("grant select on foo to bar")
    );
}

#[test]
fn classification_is_deterministic() {
    let sql = "alter table foo alter column bar set default 1; drop view v;";
    assert_eq!(
        oxide_delta_postgres::classify_all(sql),
        oxide_delta_postgres::classify_all(sql)
    );
}

// ===================================================================
// Rendering options
// ===================================================================

#[test]
fn deparsed_unknown_text() {
    let grammar = PostgresGrammar::with_options(
        PostgresOptions::new().rendering(UnknownRendering::Deparse),
    );
    let record = oxide_delta_core::classify_first(&grammar, "grant   select on   foo to bar");
    let text = record.details().text("statement").unwrap().to_string();
    assert!(text.starts_with("GRANT"), "got: {text}");
    assert!(!text.contains("  "), "got: {text}");
}

#[test]
fn rendering_does_not_change_classification() {
    let grammar =
        PostgresGrammar::with_options(PostgresOptions::new().rendering(UnknownRendering::Debug));
    let record = oxide_delta_core::classify_first(&grammar, "drop table foo");
    assert_eq!(record.kind(), Some(MutationKind::DropTable));
    assert_eq!(record.details().text("table_name"), Some("foo"));
}

// ===================================================================
// Audit-log shape
// ===================================================================

#[test]
fn serialized_mutation() {
    assert_eq!(
        audit_json("alter table foo add column bar boolean not null default false;"),
        json!({
            "mutation": "alter_table_add_column",
            "type": "column",
            "details": {
                "table_name": "foo",
                "column_name": "bar",
                "column_type": "bool"
            }
        })
    );
}

#[test]
fn serialized_list_details() {
    assert_eq!(
        audit_json("truncate table foo, bar restart identity;"),
        json!({
            "mutation": "truncate_table",
            "type": "table",
            "details": { "table_names": ["foo", "bar"] }
        })
    );
}

#[test]
fn serialized_field_order() {
    let rendered = serde_json::to_string(&classify("alter table foo rename column bar to quux"))
        .unwrap();
    assert_eq!(
        rendered,
        r#"{"mutation":"alter_table_rename_column","type":"column","details":{"table_name":"foo","old_column_name":"bar","new_column_name":"quux"}}"#
    );
}

#[test]
fn serialized_noop_and_unknown() {
    assert_eq!(audit_json("create extension foo"), json!({}));
    assert_eq!(
        audit_json("grant select on foo to bar"),
        json!({
            "mutation": "unknown",
            "type": "unknown",
            "details": { "statement": "grant select on foo to bar" }
        })
    );
}
