#![allow(dead_code)]

use oxide_delta_core::ast::{StatementNode, Stmt};
use oxide_delta_core::{classify, MutationRecord};

pub const TEXT: &str = "-- hand-built statement";

pub fn node(stmt: Stmt) -> StatementNode {
    StatementNode::new(stmt, TEXT)
}

pub fn classify_stmt(stmt: Stmt) -> MutationRecord {
    classify(&node(stmt))
}

pub fn assert_unknown(stmt: Stmt) {
    let record = classify_stmt(stmt.clone());
    assert!(
        record.is_unknown(),
        "Expected Unknown for: {stmt:?}\nGot: {record:?}"
    );
    assert_eq!(record.details().text("statement"), Some(TEXT));
}

