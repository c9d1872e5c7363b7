//! Diff configuration.

use serde::{Deserialize, Serialize};

use docdiff_tree::ID_ATTRIBUTE;

use crate::error::{DiffError, DiffResult};
use crate::identity::SameAttribute;

/// Settings for a diff run.
///
/// Loadable from TOML; any omitted field keeps its default.
///
/// ```toml
/// id_attribute = "key"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Attribute whose value identifies a node across versions.
    pub id_attribute: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            id_attribute: ID_ATTRIBUTE.to_string(),
        }
    }
}

impl DiffConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> DiffResult<Self> {
        toml::from_str(text).map_err(|e| DiffError::Config(e.to_string()))
    }

    /// Replace the identity attribute.
    pub fn with_id_attribute(mut self, key: impl Into<String>) -> Self {
        self.id_attribute = key.into();
        self
    }

    /// The identity predicate this configuration describes.
    pub fn identity(&self) -> SameAttribute {
        SameAttribute::new(self.id_attribute.clone())
    }
}
