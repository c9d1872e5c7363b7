//! Identity predicates: when is an old node "the same" as a new one?
//!
//! A predicate must be deterministic. The differ assumes repeated calls with
//! the same pair give the same answer; anything else yields arbitrary
//! matches.

use docdiff_tree::ID_ATTRIBUTE;
use docdiff_tree::NodeRef;

/// Decides whether an old-tree node and a new-tree node represent the same
/// logical entity across versions.
pub trait Identity {
    /// Returns `true` if `old` and `new` are the same entity.
    fn same(&self, old: NodeRef<'_>, new: NodeRef<'_>) -> bool;
}

impl<F> Identity for F
where
    F: Fn(NodeRef<'_>, NodeRef<'_>) -> bool,
{
    fn same(&self, old: NodeRef<'_>, new: NodeRef<'_>) -> bool {
        self(old, new)
    }
}

/// Nodes are the same when one attribute has equal values on both.
///
/// Two nodes that both lack the attribute also count as the same.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SameAttribute {
    key: String,
}

impl SameAttribute {
    /// Compare nodes by the attribute `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The compared attribute.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Identity for SameAttribute {
    fn same(&self, old: NodeRef<'_>, new: NodeRef<'_>) -> bool {
        old.attribute(&self.key) == new.attribute(&self.key)
    }
}

/// The default predicate: equal `id` attributes.
pub fn same_ids() -> SameAttribute {
    SameAttribute::new(ID_ATTRIBUTE)
}
