//! CauseTree implementation for structural tree operations.
//!
//! Provides the main interface for building and editing cause trees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::types::{Category, CauseEdge, CauseNode, NodeId};

/// A mutable rooted cause tree.
///
/// Nodes and edges are stored in insertion order, and enumeration returns
/// them in that order. Every fallible operation validates before it
/// mutates: when an error comes back, the tree is exactly as it was.
///
/// The root is permanent. It cannot be deleted or re-parented and never
/// carries a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseTree {
    /// The root node ID.
    root: NodeId,

    /// When this tree was created.
    created_at: DateTime<Utc>,

    /// When this tree was last modified.
    updated_at: DateTime<Utc>,

    /// All nodes, in insertion order.
    nodes: Vec<CauseNode>,

    /// All parent-to-child edges, in insertion order.
    edges: Vec<CauseEdge>,
}

impl CauseTree {
    /// Create a new tree containing only the root node.
    ///
    /// The root starts uncategorized and stays that way for its lifetime.
    pub fn new(root_label: impl Into<String>) -> Self {
        let root_node = CauseNode::new(root_label);
        let root_id = root_node.id.clone();
        let now = Utc::now();

        Self {
            root: root_id,
            created_at: now,
            updated_at: now,
            nodes: vec![root_node],
            edges: Vec::new(),
        }
    }

    // ==================== Lookup ====================

    /// Get the root node's ID.
    pub fn root_id(&self) -> &NodeId {
        &self.root
    }

    /// Get the root node.
    pub fn root(&self) -> Option<&CauseNode> {
        self.get_node(&self.root)
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: &NodeId) -> Option<&CauseNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    fn get_node_mut(&mut self, id: &NodeId) -> Option<&mut CauseNode> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    /// Whether the tree contains a node with this ID.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the tree.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// When the tree was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the tree last changed.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // ==================== Enumeration ====================

    /// All nodes, in insertion order.
    pub fn list_nodes(&self) -> &[CauseNode] {
        &self.nodes
    }

    /// All parent-to-child edges, in insertion order.
    pub fn list_edges(&self) -> &[CauseEdge] {
        &self.edges
    }

    /// Get the children of a node, in edge insertion order.
    pub fn children(&self, node_id: &NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|e| &e.parent == node_id)
            .map(|e| e.child.clone())
            .collect()
    }

    /// Get the parent of a node.
    ///
    /// Returns `Ok(None)` for the root. The answer always reflects the
    /// current edge set, including after re-parenting.
    pub fn get_parent(&self, node_id: &NodeId) -> Result<Option<NodeId>> {
        if !self.contains(node_id) {
            return Err(Error::NodeNotFound(node_id.clone()));
        }
        Ok(self
            .edges
            .iter()
            .find(|e| &e.child == node_id)
            .map(|e| e.parent.clone()))
    }

    // ==================== Mutation ====================

    /// Add a node under an existing parent and return its fresh ID.
    pub fn add_node(
        &mut self,
        label: impl Into<String>,
        parent_id: &NodeId,
        category: Option<Category>,
    ) -> Result<NodeId> {
        if !self.contains(parent_id) {
            return Err(Error::NodeNotFound(parent_id.clone()));
        }

        let mut node = CauseNode::new(label);
        node.category = category;
        let id = node.id.clone();
        self.nodes.push(node);
        self.edges.push(CauseEdge::new(parent_id.clone(), id.clone()));
        self.updated_at = Utc::now();
        debug!(node = %id, parent = %parent_id, "added cause node");
        Ok(id)
    }

    /// Rename a node.
    ///
    /// A blank label (empty or whitespace-only) keeps the previous one
    /// and still succeeds.
    pub fn rename(&mut self, node_id: &NodeId, new_label: impl Into<String>) -> Result<()> {
        let node = self
            .get_node_mut(node_id)
            .ok_or_else(|| Error::NodeNotFound(node_id.clone()))?;

        let new_label = new_label.into();
        if new_label.trim().is_empty() {
            return Ok(());
        }
        node.label = new_label;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Set or clear a node's category.
    ///
    /// The root never carries a category: setting one there fails with
    /// [`Error::RootCategory`], while clearing it is an accepted no-op.
    pub fn set_category(&mut self, node_id: &NodeId, category: Option<Category>) -> Result<()> {
        if !self.contains(node_id) {
            return Err(Error::NodeNotFound(node_id.clone()));
        }
        if node_id == &self.root {
            return match category {
                Some(_) => Err(Error::RootCategory),
                None => Ok(()),
            };
        }

        if let Some(node) = self.get_node_mut(node_id) {
            node.category = category;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    // ==================== Reachability ====================

    /// Whether `candidate_id` lies in the subtree rooted at `ancestor_id`.
    ///
    /// Reflexive: every node is a descendant of itself. The walk is
    /// breadth-first over the child adjacency and visits each node at
    /// most once, so a duplicated edge cannot loop it.
    pub fn is_descendant(&self, ancestor_id: &NodeId, candidate_id: &NodeId) -> bool {
        if ancestor_id == candidate_id {
            return true;
        }

        let mut adjacency: HashMap<&NodeId, Vec<&NodeId>> = HashMap::new();
        for edge in &self.edges {
            adjacency.entry(&edge.parent).or_default().push(&edge.child);
        }

        let mut visited: HashSet<&NodeId> = HashSet::new();
        let mut queue: VecDeque<&NodeId> = VecDeque::new();
        visited.insert(ancestor_id);
        queue.push_back(ancestor_id);

        while let Some(current) = queue.pop_front() {
            if let Some(children) = adjacency.get(current) {
                for child in children {
                    if *child == candidate_id {
                        return true;
                    }
                    if visited.insert(child) {
                        queue.push_back(child);
                    }
                }
            }
        }
        false
    }

    /// IDs of the subtree rooted at `node_id`, including the node itself.
    pub fn subtree_ids(&self, node_id: &NodeId) -> HashSet<NodeId> {
        let mut adjacency: HashMap<&NodeId, Vec<&NodeId>> = HashMap::new();
        for edge in &self.edges {
            adjacency.entry(&edge.parent).or_default().push(&edge.child);
        }

        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<&NodeId> = VecDeque::new();
        visited.insert(node_id.clone());
        queue.push_back(node_id);

        while let Some(current) = queue.pop_front() {
            if let Some(children) = adjacency.get(current) {
                for child in children {
                    if visited.insert((*child).clone()) {
                        queue.push_back(child);
                    }
                }
            }
        }
        visited
    }

    /// Valid re-parent targets for a node: every node except the node
    /// itself and its descendants, in insertion order.
    ///
    /// This is a pre-filter for selection surfaces. [`CauseTree::reparent`]
    /// re-validates on its own and never trusts a caller-held snapshot.
    pub fn candidate_parents(&self, node_id: &NodeId) -> Result<Vec<NodeId>> {
        if !self.contains(node_id) {
            return Err(Error::NodeNotFound(node_id.clone()));
        }

        let excluded = self.subtree_ids(node_id);
        Ok(self
            .nodes
            .iter()
            .filter(|n| !excluded.contains(&n.id))
            .map(|n| n.id.clone())
            .collect())
    }

    // ==================== Re-parenting and deletion ====================

    /// Move a node under a new parent.
    ///
    /// Fails with [`Error::RootReparent`] for the root and with
    /// [`Error::Cycle`] when the new parent sits inside the node's own
    /// subtree (self-parenting included). Re-parenting to the current
    /// parent succeeds and changes nothing.
    pub fn reparent(&mut self, node_id: &NodeId, new_parent_id: &NodeId) -> Result<()> {
        if !self.contains(node_id) {
            return Err(Error::NodeNotFound(node_id.clone()));
        }
        if !self.contains(new_parent_id) {
            return Err(Error::NodeNotFound(new_parent_id.clone()));
        }
        if node_id == &self.root {
            return Err(Error::RootReparent);
        }
        if self.is_descendant(node_id, new_parent_id) {
            return Err(Error::cycle(node_id.clone(), new_parent_id.clone()));
        }

        // Rewrite the incoming edge in place; the node is never parentless.
        if let Some(edge) = self.edges.iter_mut().find(|e| &e.child == node_id) {
            edge.parent = new_parent_id.clone();
        }
        self.updated_at = Utc::now();
        debug!(node = %node_id, new_parent = %new_parent_id, "re-parented cause node");
        Ok(())
    }

    /// Delete a node.
    ///
    /// The node's children are re-attached to its own parent, so nothing
    /// cascades and no surviving node is left parentless. The deleted ID
    /// is never reused.
    pub fn delete(&mut self, node_id: &NodeId) -> Result<()> {
        if !self.contains(node_id) {
            return Err(Error::NodeNotFound(node_id.clone()));
        }
        if node_id == &self.root {
            return Err(Error::RootDeletion);
        }

        let parent = self
            .edges
            .iter()
            .find(|e| &e.child == node_id)
            .map(|e| e.parent.clone());

        // Splice children up before the node's own edge goes away.
        if let Some(parent_id) = parent {
            for edge in self.edges.iter_mut().filter(|e| &e.parent == node_id) {
                edge.parent = parent_id.clone();
            }
        }
        self.edges.retain(|e| &e.child != node_id);
        self.nodes.retain(|n| &n.id != node_id);
        self.updated_at = Utc::now();
        debug!(node = %node_id, "deleted cause node");
        Ok(())
    }
}
