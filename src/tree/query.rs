//! Depth, path, and summary queries over cause trees.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::tree::cause_tree::CauseTree;
use crate::tree::types::{Category, NodeId};

/// Statistics about a cause tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    /// Total number of nodes.
    pub total_nodes: usize,

    /// Total number of edges.
    pub total_edges: usize,

    /// Count of categorized nodes, by category.
    pub category_counts: HashMap<Category, usize>,

    /// Number of uncategorized nodes (the root always counts here).
    pub uncategorized_count: usize,

    /// Number of leaf nodes.
    pub leaf_count: usize,

    /// Maximum depth below the root (a lone root is depth 0).
    pub max_depth: usize,
}

impl CauseTree {
    /// Compute summary statistics for the tree.
    pub fn stats(&self) -> TreeStats {
        let mut category_counts: HashMap<Category, usize> = HashMap::new();
        let mut uncategorized_count = 0;
        for node in self.list_nodes() {
            match node.category {
                Some(category) => *category_counts.entry(category).or_default() += 1,
                None => uncategorized_count += 1,
            }
        }

        let leaf_count = self
            .list_nodes()
            .iter()
            .filter(|n| self.children(&n.id).is_empty())
            .count();

        TreeStats {
            total_nodes: self.node_count(),
            total_edges: self.edge_count(),
            category_counts,
            uncategorized_count,
            leaf_count,
            max_depth: self.calculate_depth(self.root_id(), 0),
        }
    }

    fn calculate_depth(&self, node_id: &NodeId, current: usize) -> usize {
        let children = self.children(node_id);
        if children.is_empty() {
            current
        } else {
            children
                .iter()
                .map(|c| self.calculate_depth(c, current + 1))
                .max()
                .unwrap_or(current)
        }
    }

    /// Depth of a node below the root (the root itself is depth 0).
    pub fn depth_of(&self, node_id: &NodeId) -> Result<usize> {
        Ok(self.path_from_root(node_id)?.len().saturating_sub(1))
    }

    /// The why-chain from the root down to a node, both ends included.
    pub fn path_from_root(&self, node_id: &NodeId) -> Result<Vec<NodeId>> {
        if !self.contains(node_id) {
            return Err(Error::NodeNotFound(node_id.clone()));
        }
        let mut path = Vec::new();
        self.find_path(self.root_id(), node_id, &mut path);
        Ok(path)
    }

    fn find_path(&self, current: &NodeId, target: &NodeId, path: &mut Vec<NodeId>) -> bool {
        path.push(current.clone());
        if current == target {
            return true;
        }
        for child in self.children(current) {
            if self.find_path(&child, target, path) {
                return true;
            }
        }
        path.pop();
        false
    }
}
