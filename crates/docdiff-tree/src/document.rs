//! The per-node payload of a document tree.
//!
//! A [`Document`] holds the attribute lines (`key: value`) and the free-form
//! content lines of one indented block. Structural links live in the arena
//! (see [`DocumentTree`](crate::DocumentTree)), not here.

use std::collections::BTreeMap;

/// Attribute key that names a node's identity by default.
pub const ID_ATTRIBUTE: &str = "id";

/// One nested block of a parsed document.
///
/// Attribute keys are unique; a repeated key overwrites the earlier value.
/// Content lines keep their source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    attributes: BTreeMap<String, String>,
    content: Vec<String>,
}

impl Document {
    /// Create an empty document node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder-style variant of [`add_content`](Self::add_content).
    pub fn with_content(mut self, line: impl Into<String>) -> Self {
        self.add_content(line);
        self
    }

    /// Set or overwrite one attribute. Returns `self` for chaining.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The value of `key`, or `None` if it was never set.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// All attributes, sorted by key.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes set on this node.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Append one free-form content line.
    pub fn add_content(&mut self, line: impl Into<String>) {
        self.content.push(line.into());
    }

    /// Content lines in source order.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Attributes of `other` whose value differs from this node's.
    ///
    /// Keys missing here but present in `other` are reported. Keys present
    /// here but missing in `other` are not: attribute removal is invisible
    /// to this comparison.
    pub fn changed_attributes<'a>(
        &'a self,
        other: &'a Document,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        other
            .attributes()
            .filter(move |(key, value)| self.attribute(key) != Some(*value))
    }

    /// A short human-readable name: the `id` attribute, else the first
    /// non-empty content line.
    pub fn label(&self) -> Option<&str> {
        self.attribute(ID_ATTRIBUTE).or_else(|| {
            self.content
                .iter()
                .map(|line| line.trim())
                .find(|line| !line.is_empty())
        })
    }
}
