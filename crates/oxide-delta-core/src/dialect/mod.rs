//! Grammar engine support.
//!
//! The classifier does not parse SQL. A [`Grammar`] turns query text into
//! [`StatementNode`]s; dialect crates such as `oxide-delta-postgres`
//! provide the implementations.

use core::fmt;

use crate::ast::StatementNode;

/// Trait for the external SQL grammar engine.
pub trait Grammar {
    /// Error returned when the text cannot be parsed.
    type Error: fmt::Display;

    /// Returns the name of the grammar (e.g., `"postgres"`).
    fn name(&self) -> &'static str;

    /// Parses query text into its top-level statements, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not valid in this grammar.
    fn parse(&self, sql: &str) -> Result<Vec<StatementNode>, Self::Error>;
}
