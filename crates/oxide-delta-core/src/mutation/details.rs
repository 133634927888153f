//! Ordered detail fields attached to a mutation.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// The value of one detail field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DetailValue {
    /// A single identifier, or the statement text for unknown statements.
    Text(String),
    /// An ordered list of identifiers.
    List(Vec<String>),
}

impl DetailValue {
    /// Returns the text if this is a single value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Returns the items if this is a list value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for DetailValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Detail fields in their fixed per-kind order.
///
/// Serializes as a map that keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Details {
    fields: Vec<(&'static str, DetailValue)>,
}

impl Details {
    /// Creates an empty field set.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<DetailValue>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DetailValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Looks up a single-valued field by name.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(DetailValue::as_text)
    }

    /// Looks up a list-valued field by name.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(DetailValue::as_list)
    }

    /// Returns the field names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Iterates over the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &DetailValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
