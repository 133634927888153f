//! # oxide-delta-core
//!
//! Classifies parsed SQL statements into normalized schema mutations for
//! change tracking, auditing and migration diffing.
//!
//! This crate provides:
//! - A native statement tree ([`ast`]) filled in by a [`Grammar`]
//! - A total classifier ([`classify`]) from statements to [`MutationRecord`]s
//! - Batch entry points that never fail ([`classify_all`], [`classify_first`])
//!
//! SQL parsing itself lives behind the [`Grammar`] trait; see
//! `oxide-delta-postgres` for the PostgreSQL implementation.
//!
//! ## Classifying a statement
//!
//! ```rust
//! use oxide_delta_core::ast::{CreateStmt, RangeVar, StatementNode, Stmt};
//! use oxide_delta_core::{classify, EntityType, MutationKind};
//!
//! let node = StatementNode::new(
//!     Stmt::Create(CreateStmt {
//!         relation: Some(RangeVar::new("quux")),
//!     }),
//!     "CREATE TABLE quux (id int)",
//! );
//!
//! let record = classify(&node);
//! assert_eq!(record.kind(), Some(MutationKind::CreateTable));
//! assert_eq!(record.entity_type(), Some(EntityType::Table));
//! assert_eq!(record.details().text("table_name"), Some("quux"));
//! ```

pub mod ast;
pub mod classifier;
pub mod dialect;
pub mod mutation;
pub mod splitter;

pub use ast::{StatementNode, Stmt};
pub use classifier::classify;
pub use dialect::Grammar;
pub use mutation::{DetailValue, Details, EntityType, Mutation, MutationKind, MutationRecord};
pub use splitter::{
    classify_all, classify_annotated, classify_first, split_statements, ClassifiedStatement,
};
