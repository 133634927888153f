//! Payload nodes shared between statements.

/// A payload node inside a statement.
///
/// Only the node kinds the classifier inspects get a dedicated variant;
/// everything else (expressions, literals, options) collapses to
/// [`Node::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A bare identifier or string value.
    String(String),
    /// A list of nodes (qualified names, drop targets).
    List(Vec<Node>),
    /// A relation reference.
    RangeVar(RangeVar),
    /// A type reference.
    TypeName(TypeName),
    /// A function or operator signature.
    ObjectWithArgs(ObjectWithArgs),
    /// A column definition.
    ColumnDef(ColumnDef),
    /// A table or column constraint.
    Constraint(Constraint),
    /// A target of `SET` or `RETURNING`.
    ResTarget(ResTarget),
    /// One element of an index definition.
    IndexElem(IndexElem),
    /// Any other node.
    Other,
}

impl Node {
    /// Creates a string node.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates a list of string nodes.
    #[must_use]
    pub fn name_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(names.into_iter().map(Self::string).collect())
    }

    /// Returns the string value if this is a string node.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items if this is a list node.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A relation reference (`schema.table`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeVar {
    /// Schema name, empty when unqualified.
    pub schemaname: String,
    /// Relation name.
    pub relname: String,
}

impl RangeVar {
    /// Creates an unqualified relation reference.
    #[must_use]
    pub fn new(relname: impl Into<String>) -> Self {
        Self {
            schemaname: String::new(),
            relname: relname.into(),
        }
    }

    /// Sets the schema.
    #[must_use]
    pub fn schema(mut self, schemaname: impl Into<String>) -> Self {
        self.schemaname = schemaname.into();
        self
    }
}

/// A type reference such as `pg_catalog.int4`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeName {
    /// Qualified name components.
    pub names: Vec<Node>,
}

impl TypeName {
    /// Creates a type reference from name components.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Node::string).collect(),
        }
    }
}

/// A function signature as used by `DROP FUNCTION` and `ALTER FUNCTION`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectWithArgs {
    /// Qualified name components.
    pub objname: Vec<Node>,
    /// Argument types.
    pub objargs: Vec<Node>,
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnDef {
    /// Column name.
    pub colname: String,
    /// Declared type, absent for some `ALTER COLUMN` forms.
    pub type_name: Option<TypeName>,
}

/// A constraint definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraint {
    /// Constraint name, empty when the grammar generates one.
    pub conname: String,
}

/// A result target, e.g. one `col = expr` assignment of an `UPDATE`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResTarget {
    /// Target column name.
    pub name: String,
}

/// One element of an index definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexElem {
    /// Column name, `None` for expression elements.
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_list_builds_string_nodes() {
        let node = Node::name_list(["public", "foo"]);
        let items = node.as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].as_str(), Some("foo"));
    }

    #[test]
    fn as_str_rejects_other_nodes() {
        let node = Node::Other;
        assert_eq!(node.as_str(), None);
        assert!(node.as_list().is_none());
    }
}
