//! Identity-based tree diff.
//!
//! Walks the old tree breadth-first. Each old node at level `L` is matched
//! against the new tree's nodes at the same level `L`, in sibling order;
//! the first candidate the [`Identity`] predicate accepts wins. Matched
//! pairs may yield a move and attribute modifications; unmatched old nodes
//! are deleted. A second breadth-first pass over the new tree reports every
//! node no old node matched as created.
//!
//! Matching never crosses levels: a node that changed depth is reported as
//! a delete plus a create, not as a move.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use docdiff_parse::parse_document;
use docdiff_tree::{DocumentTree, NodeId};

use crate::config::DiffConfig;
use crate::edit::{EditOp, EditScript};
use crate::error::{DiffError, DiffResult};
use crate::identity::{same_ids, Identity};

/// New-tree nodes already accounted for during one diff run.
#[derive(Debug, Default)]
struct FlagSet(HashSet<NodeId>);

impl FlagSet {
    fn flag(&mut self, id: NodeId) {
        self.0.insert(id);
    }

    fn is_flagged(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }
}

/// Diff two trees using the default `id` attribute identity.
pub fn diff_documents(old: &DocumentTree, new: &DocumentTree) -> EditScript {
    diff_documents_with(old, new, &same_ids())
}

/// Diff two trees with a caller-supplied identity predicate.
///
/// Neither tree is modified, so several diffs may share the same trees.
pub fn diff_documents_with<I>(old: &DocumentTree, new: &DocumentTree, are_same: &I) -> EditScript
where
    I: Identity + ?Sized,
{
    let mut ops = Vec::new();
    let mut flags = FlagSet::default();
    // old node -> matched new node
    let mut matched: HashMap<NodeId, NodeId> = HashMap::new();

    for (level, old_id) in old.breadth_first(old.root()) {
        let Some(old_node) = old.node(old_id) else {
            continue;
        };

        let candidate = new
            .at_level(new.root(), level)
            .filter_map(|id| new.node(id))
            .find(|candidate| are_same.same(old_node, *candidate));

        let Some(new_node) = candidate else {
            trace!(level, node = %old_id, "no counterpart, deleting");
            ops.push(EditOp::Delete {
                node: old_id,
                level,
            });
            continue;
        };

        let new_id = new_node.id();
        matched.insert(old_id, new_id);
        flags.flag(new_id);

        if let Some(new_parent) = new.parent(new_id) {
            let old_parent_counterpart = old
                .parent(old_id)
                .and_then(|parent| matched.get(&parent).copied());
            if old_parent_counterpart != Some(new_parent) {
                trace!(level, node = %old_id, parent = %new_parent, "moved");
                ops.push(EditOp::Move {
                    node: old_id,
                    new_parent,
                    level,
                });
            }
        }

        for (attribute, new_value) in old_node.document().changed_attributes(new_node.document()) {
            ops.push(EditOp::Modify {
                node: old_id,
                attribute: attribute.to_string(),
                new_value: new_value.to_string(),
                level,
            });
        }
    }

    for (level, new_id) in new.breadth_first(new.root()) {
        if !flags.is_flagged(new_id) {
            ops.push(EditOp::Create {
                node: new_id,
                level,
            });
        }
    }

    let script = EditScript { ops };
    debug!(
        old_nodes = old.node_count(),
        new_nodes = new.node_count(),
        matched = matched.len(),
        moves = script.moves(),
        modifications = script.modifications(),
        deletions = script.deletions(),
        creations = script.creations(),
        "diffed documents"
    );
    script
}

/// Two parsed documents and the edit script between them.
///
/// The script's node ids index into `old` and `new`, which is why they are
/// kept together.
#[derive(Clone, Debug)]
pub struct DocumentDiff {
    pub old: DocumentTree,
    pub new: DocumentTree,
    pub script: EditScript,
}

/// Parse two texts and diff them using `config`'s identity attribute.
pub fn diff_texts(old_text: &str, new_text: &str, config: &DiffConfig) -> DiffResult<DocumentDiff> {
    let old = parse_document(old_text).map_err(|source| DiffError::Parse { side: "old", source })?;
    let new = parse_document(new_text).map_err(|source| DiffError::Parse { side: "new", source })?;
    let script = diff_documents_with(&old, &new, &config.identity());
    Ok(DocumentDiff { old, new, script })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::EditKind;
    use docdiff_tree::{Document, NodeRef};
    use proptest::prelude::*;

    fn parse(text: &str) -> DocumentTree {
        parse_document(text).unwrap()
    }

    fn label(tree: &DocumentTree, id: NodeId) -> String {
        tree.get(id)
            .and_then(Document::label)
            .unwrap_or("<root>")
            .to_string()
    }

    /// Render ops as readable tuples: (kind, node label, detail, level).
    fn describe(diff: &DocumentDiff) -> Vec<(EditKind, String, String, usize)> {
        diff.script
            .iter()
            .map(|op| {
                let (tree, detail) = match op {
                    EditOp::Move { new_parent, .. } => (&diff.old, label(&diff.new, *new_parent)),
                    EditOp::Modify { attribute, new_value, .. } => {
                        (&diff.old, format!("{attribute}={new_value}"))
                    }
                    EditOp::Delete { .. } => (&diff.old, String::new()),
                    EditOp::Create { .. } => (&diff.new, String::new()),
                };
                (op.kind(), label(tree, op.node()), detail, op.level())
            })
            .collect()
    }

    fn diff(old: &str, new: &str) -> DocumentDiff {
        diff_texts(old, new, &DiffConfig::default()).unwrap()
    }

    // Sibling blocks need a line at their parent's width between them
    // (`--` at the top level, `  --` one level down).
    const SAMPLE: &str = "\
id: root
title: Handbook
  id: intro
  title: Introduction
  Welcome aboard.
    id: intro-1
    First steps
--
  id: body
    id: body-1
  --
    id: body-2
      id: body-2a
";

    #[test]
    fn identical_documents_produce_no_ops() {
        let d = diff(SAMPLE, SAMPLE);
        assert!(d.script.is_empty(), "{:?}", describe(&d));
    }

    #[test]
    fn diffing_a_tree_against_its_clone_is_empty() {
        let tree = parse(SAMPLE);
        let copy = tree.clone();
        assert!(diff_documents(&tree, &copy).is_empty());
    }

    #[test]
    fn content_changes_are_not_reported() {
        let new = SAMPLE.replace("Welcome aboard.", "Welcome back.");
        assert!(diff(SAMPLE, &new).script.is_empty());
    }

    #[test]
    fn attribute_change_yields_single_modify() {
        let d = diff("  id: 1\n  title: A\n", "  id: 1\n  title: B\n");
        assert_eq!(
            describe(&d),
            vec![(EditKind::Modify, "1".to_string(), "title=B".to_string(), 1)]
        );
    }

    #[test]
    fn added_attribute_is_a_modify_but_removed_one_is_invisible() {
        let added = diff("  id: 1\n", "  id: 1\n  owner: ops\n");
        assert_eq!(
            describe(&added),
            vec![(EditKind::Modify, "1".to_string(), "owner=ops".to_string(), 1)]
        );

        let removed = diff("  id: 1\n  owner: ops\n", "  id: 1\n");
        assert!(removed.script.is_empty());
    }

    #[test]
    fn root_attribute_changes_are_level_zero() {
        let d = diff("id: r\nversion: 1\n", "id: r\nversion: 2\n");
        assert_eq!(
            describe(&d),
            vec![(EditKind::Modify, "r".to_string(), "version=2".to_string(), 0)]
        );
    }

    #[test]
    fn reparenting_at_same_level_is_a_move() {
        let old = "\
  id: p
    id: x
--
  id: q
";
        let new = "\
  id: p
--
  id: q
    id: x
";
        let d = diff(old, new);
        assert_eq!(
            describe(&d),
            vec![(EditKind::Move, "x".to_string(), "q".to_string(), 2)]
        );
        match &d.script.ops[0] {
            EditOp::Move { new_parent, .. } => {
                assert_eq!(d.new.get(*new_parent).unwrap().attribute("id"), Some("q"));
            }
            other => panic!("expected Move, got {:?}", other),
        }
    }

    #[test]
    fn move_precedes_modifies_of_the_same_node() {
        let old = "\
  id: p
    id: x
    title: old
    tag: a
--
  id: q
";
        let new = "\
  id: p
--
  id: q
    id: x
    title: new
    tag: b
";
        let d = diff(old, new);
        assert_eq!(
            describe(&d),
            vec![
                (EditKind::Move, "x".to_string(), "q".to_string(), 2),
                (EditKind::Modify, "x".to_string(), "tag=b".to_string(), 2),
                (EditKind::Modify, "x".to_string(), "title=new".to_string(), 2),
            ]
        );
    }

    #[test]
    fn sibling_reordering_is_not_a_move() {
        let d = diff("  id: a\n--\n  id: b\n", "  id: b\n--\n  id: a\n");
        assert!(d.script.is_empty(), "{:?}", describe(&d));
    }

    #[test]
    fn child_of_deleted_parent_moves_to_new_parent() {
        let old = "\
  id: a
    id: x
";
        let new = "\
  id: b
    id: x
";
        let d = diff(old, new);
        assert_eq!(
            describe(&d),
            vec![
                (EditKind::Delete, "a".to_string(), String::new(), 1),
                (EditKind::Move, "x".to_string(), "b".to_string(), 2),
                (EditKind::Create, "b".to_string(), String::new(), 1),
            ]
        );
    }

    #[test]
    fn depth_change_is_delete_plus_create() {
        let old = "\
  id: p
--
  id: x
";
        let new = "\
  id: p
    id: x
";
        let d = diff(old, new);
        assert_eq!(
            describe(&d),
            vec![
                (EditKind::Delete, "x".to_string(), String::new(), 1),
                (EditKind::Create, "x".to_string(), String::new(), 2),
            ]
        );
    }

    #[test]
    fn creates_follow_old_tree_ops_in_breadth_first_order() {
        let old = "\
  id: keep
--
  id: gone
";
        let new = "\
  id: keep
    id: deep-new
--
  id: fresh
";
        let d = diff(old, new);
        assert_eq!(
            describe(&d),
            vec![
                (EditKind::Delete, "gone".to_string(), String::new(), 1),
                (EditKind::Create, "fresh".to_string(), String::new(), 1),
                (EditKind::Create, "deep-new".to_string(), String::new(), 2),
            ]
        );
    }

    #[test]
    fn every_node_is_accounted_for_exactly_once() {
        let old = "\
  id: a
    id: a1
  -
    id: a2
--
  id: b
--
  id: c
    id: c1
";
        let new = "\
  id: a
    id: a2
  -
    id: a3
--
  id: c
    id: c1
  -
    id: c2
--
  id: d
";
        let d = diff(old, new);
        let matched_pairs = 5; // root, a, a2, c, c1

        assert_eq!(d.script.deletions(), 2); // a1, b
        assert_eq!(d.script.creations(), 3); // a3, c2, d
        assert_eq!(d.script.moves(), 0);
        assert_eq!(d.script.deletions() + matched_pairs, d.old.node_count());
        assert_eq!(d.script.creations() + matched_pairs, d.new.node_count());
    }

    #[test]
    fn nodes_without_ids_match_each_other() {
        // Both roots and both children lack ids, so they pair up under the
        // default predicate even though their content differs.
        let d = diff("  first\n", "  second\n");
        assert!(d.script.is_empty(), "{:?}", describe(&d));
    }

    #[test]
    fn duplicate_ids_match_the_first_candidate() {
        let old = "\
  id: dup
--
  id: dup
";
        let new = "\
  id: dup
  title: first
--
  id: dup
  title: second
";
        let d = diff(old, new);
        // Both old nodes pair with the first new one; the second is created.
        assert_eq!(
            describe(&d),
            vec![
                (EditKind::Modify, "dup".to_string(), "title=first".to_string(), 1),
                (EditKind::Modify, "dup".to_string(), "title=first".to_string(), 1),
                (EditKind::Create, "dup".to_string(), String::new(), 1),
            ]
        );
    }

    #[test]
    fn custom_predicate_matches_by_content() {
        let by_first_line = |old: NodeRef<'_>, new: NodeRef<'_>| old.content().first() == new.content().first();
        let old = parse("  Chapter one\n--\n  Chapter two\n");
        let new = parse("  Chapter two\n  id: 2\n--\n  Chapter three\n");

        let script = diff_documents_with(&old, &new, &by_first_line);
        let kinds: Vec<_> = script.iter().map(EditOp::kind).collect();
        // "Chapter one" is gone, "Chapter two" gained an id, "Chapter three"
        // is new.
        assert_eq!(
            kinds,
            [EditKind::Delete, EditKind::Modify, EditKind::Create]
        );
    }

    #[test]
    fn configured_id_attribute_drives_matching() {
        let old = "  key: a\n  id: 1\n";
        let new = "  key: a\n  id: 2\n";

        let by_key = diff_texts(old, new, &DiffConfig::default().with_id_attribute("key")).unwrap();
        assert_eq!(
            describe(&by_key),
            vec![(EditKind::Modify, "1".to_string(), "id=2".to_string(), 1)]
        );

        let by_id = diff(old, new);
        assert_eq!(by_id.script.deletions(), 1);
        assert_eq!(by_id.script.creations(), 1);
    }

    #[test]
    fn parse_failures_name_the_side() {
        let err = diff_texts("ok\n", "a\n    b\n   c\n", &DiffConfig::default()).unwrap_err();
        assert!(matches!(err, DiffError::Parse { side: "new", .. }));
        assert!(err.to_string().starts_with("failed to parse new document"));
    }

    #[test]
    fn diff_does_not_mutate_inputs() {
        let old = parse(SAMPLE);
        let new = parse(&SAMPLE.replace("id: body-2a", "id: body-2b"));
        let first = diff_documents(&old, &new);
        let second = diff_documents(&old, &new);
        assert_eq!(first, second);
        assert_eq!(first.deletions(), 1);
        assert_eq!(first.creations(), 1);
    }

    /// Trees of up to 30 uniquely-identified nodes: entry `i` names the
    /// parent of node `i + 1` among the nodes created before it.
    fn unique_tree() -> impl Strategy<Value = DocumentTree> {
        prop::collection::vec(any::<prop::sample::Index>(), 0..30).prop_map(|parents| {
            let mut tree = DocumentTree::with_root(Document::new().with_attribute("id", "n0"));
            let mut nodes = vec![tree.root()];
            for (i, parent) in parents.iter().enumerate() {
                let parent = nodes[parent.index(nodes.len())];
                let doc = Document::new().with_attribute("id", format!("n{}", i + 1));
                let id = tree.append_child(parent, doc).unwrap();
                nodes.push(id);
            }
            tree
        })
    }

    proptest! {
        #[test]
        fn self_diff_is_empty(tree in unique_tree()) {
            let copy = tree.clone();
            prop_assert!(diff_documents(&tree, &copy).is_empty());
        }

        #[test]
        fn diff_against_empty_deletes_everything_but_the_root(tree in unique_tree()) {
            let empty = DocumentTree::with_root(Document::new().with_attribute("id", "n0"));
            let script = diff_documents(&tree, &empty);
            prop_assert_eq!(script.deletions(), tree.node_count() - 1);
            prop_assert_eq!(script.creations(), 0);

            let reverse = diff_documents(&empty, &tree);
            prop_assert_eq!(reverse.creations(), tree.node_count() - 1);
            prop_assert_eq!(reverse.deletions(), 0);
        }
    }
}
