//! Statement splitting and batch classification.
//!
//! Parse failures never reach the caller: a batch that cannot be parsed is
//! reported as empty, and the single-statement entry point returns
//! [`MutationRecord::NoOp`].

use tracing::{debug, trace};

use crate::ast::StatementNode;
use crate::classifier::classify;
use crate::dialect::Grammar;
use crate::mutation::MutationRecord;

/// Splits query text into statement nodes.
///
/// Returns an empty vector when the grammar rejects the text; there are no
/// partial results.
#[must_use]
pub fn split_statements<G: Grammar>(grammar: &G, sql: &str) -> Vec<StatementNode> {
    match grammar.parse(sql) {
        Ok(nodes) => {
            trace!(
                grammar = grammar.name(),
                statements = nodes.len(),
                "Split query text"
            );
            nodes
        }
        Err(err) => {
            debug!(grammar = grammar.name(), error = %err, "Query text did not parse");
            Vec::new()
        }
    }
}

/// Splits query text and classifies every statement in source order.
#[must_use]
pub fn classify_all<G: Grammar>(grammar: &G, sql: &str) -> Vec<MutationRecord> {
    split_statements(grammar, sql)
        .iter()
        .map(classify_logged)
        .collect()
}

/// Classifies the first statement of the query text.
///
/// Empty input and unparsable text yield [`MutationRecord::NoOp`].
#[must_use]
pub fn classify_first<G: Grammar>(grammar: &G, sql: &str) -> MutationRecord {
    split_statements(grammar, sql)
        .first()
        .map_or(MutationRecord::NoOp, classify_logged)
}

/// A classified statement together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedStatement {
    /// 1-based position of the statement in the query text.
    pub ordinal: usize,
    /// Byte offset of the statement in the query text.
    pub location: usize,
    /// Textual rendering of the statement.
    pub sql: String,
    /// The classification.
    pub record: MutationRecord,
}

/// Splits query text and classifies every statement, keeping each
/// statement's position and text alongside its record.
#[must_use]
pub fn classify_annotated<G: Grammar>(grammar: &G, sql: &str) -> Vec<ClassifiedStatement> {
    split_statements(grammar, sql)
        .into_iter()
        .enumerate()
        .map(|(idx, node)| ClassifiedStatement {
            ordinal: idx + 1,
            location: node.location,
            record: classify_logged(&node),
            sql: node.text,
        })
        .collect()
}

fn classify_logged(node: &StatementNode) -> MutationRecord {
    let record = classify(node);
    if record.is_unknown() {
        debug!(
            tag = node.stmt.tag(),
            location = node.location,
            "No classification for statement"
        );
    }
    record
}
