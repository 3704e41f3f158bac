//! Mutable rooted cause trees for incident analysis.
//!
//! This module provides the core data structure for root cause analysis:
//! a tree whose root is the incident under investigation and whose other
//! nodes are contributing causes, reshaped freely as understanding of the
//! incident improves.
//!
//! ## Core Concepts
//!
//! - **CauseTree**: A rooted tree of contributing causes, edited in place
//! - **CauseNode**: A single cause with a label and an optional category
//! - **Category**: The closed organizational / human / technical taxonomy
//!
//! ## Example
//!
//! ```rust,ignore
//! use rca_core::tree::{CauseTree, Category};
//!
//! // Start a tree at the observed incident
//! let mut tree = CauseTree::new("Conveyor line stopped");
//! let root = tree.root_id().clone();
//!
//! // Add contributing causes underneath
//! let jam = tree.add_node("Belt jammed at roller 3", &root, Some(Category::Technical))?;
//! let missed = tree.add_node(
//!     "Weekly inspection skipped",
//!     &jam,
//!     Some(Category::Organizational),
//! )?;
//!
//! // Reshape as understanding improves
//! tree.reparent(&missed, &root)?;
//!
//! // Render for review
//! println!("{}", tree.to_report());
//! ```

mod cause_tree;
mod query;
mod types;
mod visualize;

#[cfg(test)]
mod proptest;

// Re-export main types
pub use cause_tree::CauseTree;
pub use query::TreeStats;
pub use types::{Category, CauseEdge, CauseNode, NodeId};
pub use visualize::DotConfig;
