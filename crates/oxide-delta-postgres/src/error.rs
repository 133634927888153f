//! Error types for the PostgreSQL grammar.

/// Errors raised while turning query text into statement nodes.
#[derive(Debug, thiserror::Error)]
pub enum DeltaError {
    /// The PostgreSQL parser rejected the text.
    #[error("sql parse failed: {source}; sql={sql_snippet}")]
    Parse {
        /// Parser error.
        #[source]
        source: pg_query::Error,
        /// Shortened, single-line copy of the rejected text.
        sql_snippet: String,
    },

    /// The parser reported a statement span outside the source text.
    #[error(
        "invalid statement location at index {statement_index} \
         (location={stmt_location}, len={stmt_len}, sql_len={sql_len})"
    )]
    InvalidStatementLocation {
        /// Zero-based statement index.
        statement_index: usize,
        /// Reported byte offset.
        stmt_location: i32,
        /// Reported length, 0 meaning "up to the next statement".
        stmt_len: i32,
        /// Length of the source text.
        sql_len: usize,
    },

    /// Deparsing a statement back to SQL failed.
    #[error("deparse failed at index {statement_index}: {source}")]
    Deparse {
        /// Zero-based statement index.
        statement_index: usize,
        /// Deparser error.
        #[source]
        source: pg_query::Error,
    },
}

/// Result type for grammar operations.
pub type Result<T> = std::result::Result<T, DeltaError>;

/// Shortens query text to one line for error messages.
pub(crate) fn sql_snippet(sql: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = sql.trim();

    let mut out = String::with_capacity(trimmed.len().min(MAX_CHARS) + 3);
    for (i, ch) in trimmed.chars().enumerate() {
        if i >= MAX_CHARS {
            out.push_str("...");
            break;
        }

        match ch {
            '\n' | '\r' | '\t' => out.push(' '),
            _ => out.push(ch),
        }
    }

    out
}
