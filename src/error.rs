//! Error types for rca-core.

use thiserror::Error;

use crate::tree::NodeId;

/// Result type alias using rca-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during cause-tree operations.
///
/// Every fallible operation validates before it mutates, so receiving one
/// of these means the tree (and session) state is exactly as it was.
#[derive(Error, Debug)]
pub enum Error {
    /// Referenced node ID is not in the tree
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Re-parenting would make a node its own ancestor
    #[error("Re-parenting {node} under {new_parent} would create a cycle")]
    Cycle { node: NodeId, new_parent: NodeId },

    /// Re-parenting attempted on the root
    #[error("The root node cannot be re-parented")]
    RootReparent,

    /// Deletion attempted on the root
    #[error("The root node cannot be deleted")]
    RootDeletion,

    /// Category assignment attempted on the root
    #[error("The root node cannot carry a category")]
    RootCategory,

    /// Category tag outside the closed three-value set
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Candidate index outside the session's candidate list
    #[error("Candidate index {0} is out of range")]
    CandidateOutOfRange(usize),

    /// External text generation failed
    #[error("Text generation error: {0}")]
    Generation(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a cycle error.
    pub fn cycle(node: NodeId, new_parent: NodeId) -> Self {
        Self::Cycle { node, new_parent }
    }

    /// Create an invalid-category error.
    pub fn invalid_category(tag: impl Into<String>) -> Self {
        Self::InvalidCategory(tag.into())
    }

    /// Create a generation error.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }
}
