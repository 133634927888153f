//! # oxide-delta-postgres
//!
//! PostgreSQL grammar for `oxide-delta-core`.
//!
//! Query text is parsed by the PostgreSQL parser (through `pg_query`) and
//! each top-level statement is converted to a
//! [`StatementNode`](oxide_delta_core::StatementNode), which the core
//! classifier turns into a [`MutationRecord`].
//!
//! ## Example
//!
//! ```rust
//! use oxide_delta_core::{EntityType, MutationKind};
//!
//! let records = oxide_delta_postgres::classify_all(
//!     "ALTER TABLE foo RENAME COLUMN bar TO quux; CREATE EXTENSION hstore;",
//! );
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].kind(), Some(MutationKind::AlterTableRenameColumn));
//! assert_eq!(records[0].entity_type(), Some(EntityType::Column));
//! assert_eq!(records[0].details().text("new_column_name"), Some("quux"));
//! assert!(records[1].is_noop());
//! ```
//!
//! Unparsable text never produces an error from these entry points:
//!
//! ```rust
//! assert!(oxide_delta_postgres::classify_all("not sql at all").is_empty());
//! assert!(oxide_delta_postgres::classify_first("not sql at all").is_noop());
//! ```

mod convert;
mod dialect;
pub mod error;
pub mod options;

pub use dialect::PostgresGrammar;
pub use error::{DeltaError, Result};
pub use options::{PostgresOptions, UnknownRendering};

use oxide_delta_core::{ClassifiedStatement, MutationRecord, StatementNode};

/// Splits query text into statement nodes with the default grammar.
#[must_use]
pub fn split_statements(sql: &str) -> Vec<StatementNode> {
    oxide_delta_core::split_statements(&PostgresGrammar::new(), sql)
}

/// Classifies every statement of the query text with the default grammar.
#[must_use]
pub fn classify_all(sql: &str) -> Vec<MutationRecord> {
    oxide_delta_core::classify_all(&PostgresGrammar::new(), sql)
}

/// Classifies the first statement of the query text with the default
/// grammar.
#[must_use]
pub fn classify_first(sql: &str) -> MutationRecord {
    oxide_delta_core::classify_first(&PostgresGrammar::new(), sql)
}

/// Classifies every statement with its position and text, using the default
/// grammar.
#[must_use]
pub fn classify_annotated(sql: &str) -> Vec<ClassifiedStatement> {
    oxide_delta_core::classify_annotated(&PostgresGrammar::new(), sql)
}
