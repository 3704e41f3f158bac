//! Property-based tests for cause tree editing using proptest.
//!
//! These tests drive random operation sequences against a tree and check
//! the structural guarantees every editing surface relies on:
//!
//! - Failed operations leave the tree exactly as it was
//! - The root is never deleted, re-parented, or categorized
//! - Every non-root node keeps exactly one parent and stays reachable
//! - `candidate_parents` offers only targets `reparent` will accept

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::HashSet;

    use crate::error::Error;
    use crate::tree::cause_tree::CauseTree;
    use crate::tree::types::{Category, NodeId};

    /// A tree edit that names nodes by index. Indices are resolved against
    /// the live node list at apply time (modulo its length), so every
    /// generated operation targets an id that exists in the tree.
    #[derive(Debug, Clone)]
    enum Op {
        Add {
            parent: usize,
            label: String,
            category: Option<Category>,
        },
        Rename {
            node: usize,
            label: String,
        },
        SetCategory {
            node: usize,
            category: Option<Category>,
        },
        Reparent {
            node: usize,
            new_parent: usize,
        },
        Delete {
            node: usize,
        },
    }

    // Strategy for generating an optional category
    fn category_strategy() -> impl Strategy<Value = Option<Category>> {
        prop_oneof![
            Just(None),
            Just(Some(Category::Organizational)),
            Just(Some(Category::Human)),
            Just(Some(Category::Technical)),
        ]
    }

    // Strategy for generating a single tree edit
    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..64, "[a-z ]{0,12}", category_strategy()).prop_map(
                |(parent, label, category)| Op::Add {
                    parent,
                    label,
                    category,
                }
            ),
            (0usize..64, "[a-z ]{0,12}")
                .prop_map(|(node, label)| Op::Rename { node, label }),
            (0usize..64, category_strategy())
                .prop_map(|(node, category)| Op::SetCategory { node, category }),
            (0usize..64, 0usize..64)
                .prop_map(|(node, new_parent)| Op::Reparent { node, new_parent }),
            (0usize..64).prop_map(|node| Op::Delete { node }),
        ]
    }

    /// Apply one operation, resolving indices to live ids.
    ///
    /// Returns `true` when the operation failed. The node list is never
    /// empty because the root cannot be deleted.
    fn apply(tree: &mut CauseTree, op: &Op) -> bool {
        let ids: Vec<NodeId> = tree.list_nodes().iter().map(|n| n.id.clone()).collect();
        let pick = |index: usize| ids[index % ids.len()].clone();

        let result = match op {
            Op::Add {
                parent,
                label,
                category,
            } => {
                let parent_id = pick(*parent);
                tree.add_node(label.clone(), &parent_id, *category).map(|_| ())
            }
            Op::Rename { node, label } => {
                let node_id = pick(*node);
                tree.rename(&node_id, label.clone())
            }
            Op::SetCategory { node, category } => {
                let node_id = pick(*node);
                tree.set_category(&node_id, *category)
            }
            Op::Reparent { node, new_parent } => {
                let node_id = pick(*node);
                let new_parent_id = pick(*new_parent);
                tree.reparent(&node_id, &new_parent_id)
            }
            Op::Delete { node } => {
                let node_id = pick(*node);
                tree.delete(&node_id)
            }
        };
        result.is_err()
    }

    /// Collect every violated structural invariant, empty when healthy.
    fn invariant_violations(tree: &CauseTree) -> Vec<String> {
        let mut violations = Vec::new();
        let root = tree.root_id().clone();

        // Node ids are unique.
        let mut seen: HashSet<&NodeId> = HashSet::new();
        for node in tree.list_nodes() {
            if !seen.insert(&node.id) {
                violations.push(format!("duplicate node id {}", node.id));
            }
        }

        // The root exists and carries no category.
        match tree.root() {
            None => violations.push("root node missing".to_string()),
            Some(node) if node.category.is_some() => {
                violations.push("root node carries a category".to_string())
            }
            Some(_) => {}
        }

        // Every edge endpoint names a live node.
        for edge in tree.list_edges() {
            if !tree.contains(&edge.parent) {
                violations.push(format!("edge parent {} not in tree", edge.parent));
            }
            if !tree.contains(&edge.child) {
                violations.push(format!("edge child {} not in tree", edge.child));
            }
        }

        // The root has no parent; every other node has exactly one.
        for node in tree.list_nodes() {
            let incoming = tree
                .list_edges()
                .iter()
                .filter(|e| e.child == node.id)
                .count();
            let expected = if node.id == root { 0 } else { 1 };
            if incoming != expected {
                violations.push(format!(
                    "node {} has {} incoming edges, expected {}",
                    node.id, incoming, expected
                ));
            }
        }

        // Every node is reachable from the root.
        for node in tree.list_nodes() {
            if !tree.is_descendant(&root, &node.id) {
                violations.push(format!("node {} unreachable from root", node.id));
            }
        }

        violations
    }

    // =========================================================================
    // Structural Invariants
    // =========================================================================

    proptest! {
        /// Random edit sequences never break the tree shape. Failed
        /// operations leave the tree untouched, and after every operation
        /// the structural invariants still hold.
        #[test]
        fn prop_random_ops_preserve_invariants(
            ops in prop::collection::vec(op_strategy(), 0..40)
        ) {
            let mut tree = CauseTree::new("incident");

            for op in &ops {
                let before = tree.clone();
                let failed = apply(&mut tree, op);

                if failed {
                    prop_assert_eq!(
                        &tree,
                        &before,
                        "failed op {:?} changed the tree",
                        op
                    );
                }

                let violations = invariant_violations(&tree);
                prop_assert!(
                    violations.is_empty(),
                    "op {:?} broke invariants: {:?}",
                    op,
                    violations
                );
            }
        }

        /// `subtree_ids` and `is_descendant` agree on every node pair, and
        /// moving a node under one of its own strict descendants always
        /// fails with a cycle error.
        #[test]
        fn prop_subtree_agrees_with_is_descendant(
            ops in prop::collection::vec(op_strategy(), 0..25)
        ) {
            let mut tree = CauseTree::new("incident");
            for op in &ops {
                apply(&mut tree, op);
            }

            let root = tree.root_id().clone();
            let ids: Vec<NodeId> = tree.list_nodes().iter().map(|n| n.id.clone()).collect();
            for a in &ids {
                let subtree = tree.subtree_ids(a);
                for b in &ids {
                    prop_assert_eq!(
                        subtree.contains(b),
                        tree.is_descendant(a, b),
                        "subtree_ids and is_descendant disagree for {} -> {}",
                        a,
                        b
                    );

                    if subtree.contains(b) && a != &root {
                        let mut scratch = tree.clone();
                        let result = scratch.reparent(a, b);
                        prop_assert!(
                            matches!(result, Err(Error::Cycle { .. })),
                            "reparent {} under descendant {} gave {:?}",
                            a,
                            b,
                            result
                        );
                    }
                }
            }
        }
    }

    // =========================================================================
    // Re-parenting Candidates
    // =========================================================================

    proptest! {
        /// Every id offered by `candidate_parents` is accepted by
        /// `reparent`, and the root is offered none at all.
        #[test]
        fn prop_candidate_parents_accept_reparent(
            ops in prop::collection::vec(op_strategy(), 0..25),
            pick in 0usize..64,
        ) {
            let mut tree = CauseTree::new("incident");
            for op in &ops {
                apply(&mut tree, op);
            }

            let ids: Vec<NodeId> = tree.list_nodes().iter().map(|n| n.id.clone()).collect();
            let node_id = ids[pick % ids.len()].clone();
            let candidates = tree.candidate_parents(&node_id).unwrap();

            if &node_id == tree.root_id() {
                prop_assert!(
                    candidates.is_empty(),
                    "root must have no candidate parents, got {}",
                    candidates.len()
                );
            }

            for candidate in &candidates {
                let mut scratch = tree.clone();
                let result = scratch.reparent(&node_id, candidate);
                prop_assert!(
                    result.is_ok(),
                    "candidate {} rejected for node {}: {:?}",
                    candidate,
                    node_id,
                    result
                );
            }
        }
    }
}
