//! Type definitions for cause trees.
//!
//! This module defines the node and edge types that make up a cause tree:
//! opaque node identifiers, the closed cause-category enum, and the node
//! and edge records themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

/// Unique identifier for a node in a cause tree.
///
/// Ids are random UUIDs: stable for the life of the tree and never
/// reused, including after the node they named is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Generate a new random node ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a contributing cause.
///
/// The classic cause-tree taxonomy: every categorized node is exactly one
/// of these three. A node may also carry no category at all (`None` at
/// the node level); the root never carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Organizational cause.
    /// Process, planning, staffing, or management factors.
    Organizational,

    /// Human cause.
    /// Individual actions, omissions, or judgment at the sharp end.
    Human,

    /// Technical cause.
    /// Equipment, material, software, or environmental factors.
    Technical,
}

impl Category {
    /// All categories, in presentation order.
    pub const ALL: [Category; 3] = [Self::Organizational, Self::Human, Self::Technical];

    /// Get a human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Organizational => "Process, planning, or management factor",
            Self::Human => "Individual action or judgment",
            Self::Technical => "Equipment, material, or environment factor",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Organizational => write!(f, "organizational"),
            Self::Human => write!(f, "human"),
            Self::Technical => write!(f, "technical"),
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "organizational" => Ok(Self::Organizational),
            "human" => Ok(Self::Human),
            "technical" => Ok(Self::Technical),
            other => Err(Error::invalid_category(other)),
        }
    }
}

/// A node in a cause tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseNode {
    /// Unique identifier for this node.
    pub id: NodeId,

    /// Human-readable label. Renaming to a blank label is a no-op, so a
    /// label set at creation time is never blanked later.
    pub label: String,

    /// Cause category, or `None` while the node is uncategorized.
    /// Always `None` on the root.
    pub category: Option<Category>,

    /// When this node was created.
    pub created_at: DateTime<Utc>,
}

impl CauseNode {
    /// Create a new uncategorized node with a fresh id.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            label: label.into(),
            category: None,
            created_at: Utc::now(),
        }
    }

    /// Set the category (builder style).
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// A parent-to-child edge in a cause tree.
///
/// Edges carry no identity of their own; the (parent, child) pair is the
/// edge. Every non-root node has exactly one incoming edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CauseEdge {
    /// Parent node id (closer to the root).
    pub parent: NodeId,

    /// Child node id.
    pub child: NodeId,
}

impl CauseEdge {
    /// Create a new edge.
    pub fn new(parent: NodeId, child: NodeId) -> Self {
        Self { parent, child }
    }
}
