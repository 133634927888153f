//! Grammar configuration.

use serde::{Deserialize, Serialize};

/// How a statement's text is rendered on its [`StatementNode`].
///
/// The rendering is what an unknown statement reports in its `statement`
/// detail field.
///
/// [`StatementNode`]: oxide_delta_core::StatementNode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRendering {
    /// The statement's slice of the source text, trimmed.
    #[default]
    Source,
    /// Normalized SQL produced by the PostgreSQL deparser. Falls back to the
    /// source slice when deparsing fails.
    Deparse,
    /// Debug dump of the parse-tree node.
    Debug,
}

/// Options for [`PostgresGrammar`](crate::PostgresGrammar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresOptions {
    /// Statement text rendering.
    pub rendering: UnknownRendering,
}

impl PostgresOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rendering: UnknownRendering::Source,
        }
    }

    /// Sets the statement text rendering.
    #[must_use]
    pub const fn rendering(mut self, rendering: UnknownRendering) -> Self {
        self.rendering = rendering;
        self
    }
}
