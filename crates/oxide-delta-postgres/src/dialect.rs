//! PostgreSQL grammar backed by `pg_query`.

use oxide_delta_core::ast::{StatementNode, Stmt};
use oxide_delta_core::Grammar;
use pg_query::protobuf;
use tracing::debug;

use crate::convert;
use crate::error::{sql_snippet, DeltaError, Result};
use crate::options::{PostgresOptions, UnknownRendering};

/// PostgreSQL grammar.
///
/// Parses with the PostgreSQL parser and converts each top-level statement
/// to a [`StatementNode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostgresGrammar {
    options: PostgresOptions,
}

impl PostgresGrammar {
    /// Creates a grammar with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: PostgresOptions::new(),
        }
    }

    /// Creates a grammar with the given options.
    #[must_use]
    pub const fn with_options(options: PostgresOptions) -> Self {
        Self { options }
    }

    /// Returns the grammar options.
    #[must_use]
    pub const fn options(&self) -> &PostgresOptions {
        &self.options
    }

    /// Parses query text into statement nodes.
    ///
    /// # Errors
    ///
    /// Returns [`DeltaError::Parse`] when PostgreSQL rejects the text, and
    /// [`DeltaError::InvalidStatementLocation`] when a reported statement
    /// span does not fit the text.
    pub fn parse_statements(&self, sql: &str) -> Result<Vec<StatementNode>> {
        let parsed = pg_query::parse(sql).map_err(|source| DeltaError::Parse {
            source,
            sql_snippet: sql_snippet(sql),
        })?;
        let raw_stmts = &parsed.protobuf.stmts;

        let mut nodes = Vec::with_capacity(raw_stmts.len());
        for (idx, raw) in raw_stmts.iter().enumerate() {
            let next_location = raw_stmts.get(idx + 1).map(|next| next.stmt_location);
            let (location, source) = statement_source(sql, idx, raw, next_location)?;

            let stmt = raw
                .stmt
                .as_ref()
                .and_then(|node| node.node.as_ref())
                .map_or_else(
                    || Stmt::Other {
                        tag: String::new(),
                    },
                    convert::statement,
                );

            let text = self.render(idx, raw, parsed.protobuf.version, source);
            nodes.push(StatementNode::new(stmt, text).at(location));
        }

        Ok(nodes)
    }

    fn render(&self, idx: usize, raw: &protobuf::RawStmt, version: i32, source: &str) -> String {
        match self.options.rendering {
            UnknownRendering::Source => source.to_string(),
            UnknownRendering::Deparse => match deparse(idx, raw, version) {
                Ok(text) => text,
                Err(err) => {
                    debug!(error = %err, "Falling back to source text");
                    source.to_string()
                }
            },
            UnknownRendering::Debug => raw
                .stmt
                .as_ref()
                .map_or_else(|| source.to_string(), |node| format!("{node:?}")),
        }
    }
}

impl Grammar for PostgresGrammar {
    type Error = DeltaError;

    fn name(&self) -> &'static str {
        "postgres"
    }

    fn parse(&self, sql: &str) -> Result<Vec<StatementNode>> {
        self.parse_statements(sql)
    }
}

fn deparse(idx: usize, raw: &protobuf::RawStmt, version: i32) -> Result<String> {
    let single = protobuf::ParseResult {
        version,
        stmts: vec![raw.clone()],
    };
    pg_query::deparse(&single).map_err(|source| DeltaError::Deparse {
        statement_index: idx,
        source,
    })
}

/// Locates a statement in the source text.
///
/// A zero length means the statement runs up to the next statement, or to
/// the end of the text for the last one. The returned slice is trimmed of
/// whitespace and a trailing `;`, and the offset points at its first byte.
fn statement_source<'a>(
    sql: &'a str,
    idx: usize,
    raw: &protobuf::RawStmt,
    next_location: Option<i32>,
) -> Result<(usize, &'a str)> {
    let invalid = || DeltaError::InvalidStatementLocation {
        statement_index: idx,
        stmt_location: raw.stmt_location,
        stmt_len: raw.stmt_len,
        sql_len: sql.len(),
    };

    let start = usize::try_from(raw.stmt_location).map_err(|_| invalid())?;
    let end = if raw.stmt_len > 0 {
        let len = usize::try_from(raw.stmt_len).map_err(|_| invalid())?;
        start.saturating_add(len)
    } else {
        next_location
            .and_then(|next| usize::try_from(next).ok())
            .unwrap_or(sql.len())
    };

    if start > end || end > sql.len() {
        return Err(invalid());
    }
    let slice = sql.get(start..end).ok_or_else(invalid)?;

    let leading = slice.len() - slice.trim_start().len();
    let text = slice.trim().trim_end_matches(';').trim_end();
    Ok((start + leading, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_with_source_locations() {
        let sql = "CREATE TABLE a (id int);\n  DROP TABLE b;";
        let nodes = PostgresGrammar::new().parse_statements(sql).unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text, "CREATE TABLE a (id int)");
        assert_eq!(nodes[0].location, 0);
        assert_eq!(nodes[1].text, "DROP TABLE b");
        assert_eq!(nodes[1].location, sql.find("DROP").unwrap());
    }

    #[test]
    fn last_statement_without_semicolon() {
        let nodes = PostgresGrammar::new()
            .parse_statements("select 1; select 2")
            .unwrap();
        assert_eq!(nodes[1].text, "select 2");
        assert_eq!(nodes[1].stmt, Stmt::Select);
    }

    #[test]
    fn rejects_invalid_sql() {
        let err = PostgresGrammar::new()
            .parse_statements("not sql at all")
            .unwrap_err();
        assert!(matches!(err, DeltaError::Parse { .. }));
        assert!(err.to_string().contains("sql=not sql at all"));
    }

    #[test]
    fn empty_text_has_no_statements() {
        assert!(PostgresGrammar::new().parse_statements("").unwrap().is_empty());
        assert!(PostgresGrammar::new()
            .parse_statements("  -- comment only\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn deparse_rendering_normalizes_text() {
        let grammar = PostgresGrammar::with_options(
            PostgresOptions::new().rendering(UnknownRendering::Deparse),
        );
        let nodes = grammar.parse_statements("grant   select on foo to bar").unwrap();
        assert!(nodes[0].text.starts_with("GRANT"));
        assert!(!nodes[0].text.contains("  "));
    }

    #[test]
    fn debug_rendering_dumps_tree() {
        let grammar =
            PostgresGrammar::with_options(PostgresOptions::new().rendering(UnknownRendering::Debug));
        let nodes = grammar.parse_statements("grant select on foo to bar").unwrap();
        assert!(nodes[0].text.contains("GrantStmt"));
    }

    #[test]
    fn out_of_range_location_is_rejected() {
        let raw = protobuf::RawStmt {
            stmt: None,
            stmt_location: 10,
            stmt_len: 5,
        };
        let err = statement_source("select 1", 0, &raw, None).unwrap_err();
        assert!(matches!(
            err,
            DeltaError::InvalidStatementLocation {
                stmt_location: 10,
                sql_len: 8,
                ..
            }
        ));
    }
}
